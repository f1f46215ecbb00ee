//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - フレームワークに依存しない
//! - 7-ZipやSSHについて何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（ArchiveArtifact, RemoteEndpointなど）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **errors**: エラー分類（BackupError）

pub mod entities;
pub mod errors;
pub mod repositories;
