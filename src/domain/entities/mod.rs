//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **ArchiveArtifact**: アップロード待ちのローカルアーカイブ
//! - **RemoteEndpoint**: 接続先サーバーのバリューオブジェクト

pub mod archive;
pub mod endpoint;
