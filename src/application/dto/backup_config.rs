//! # Backup Configuration DTO
//!
//! CLI引数から構築するバックアップ設定
//!
//! 起動時に1度だけ構築され、以後は不変。

use std::path::PathBuf;

use crate::domain::entities::endpoint::RemoteEndpoint;

/// バックアップ設定
#[derive(Debug, Clone)]
pub struct BackupConfig {
    /// アーカイバの実行コマンド（名前またはフルパス）
    pub archiver_command: String,
    /// アーカイブの暗号化パスワード（Noneなら暗号化なし）
    pub archive_password: Option<String>,
    /// 接続先サーバー
    pub endpoint: RemoteEndpoint,
    /// アーカイブを置くリモートディレクトリ
    pub remote_path: String,
    /// バックアップ対象のローカルディレクトリ（順序どおりに処理される）
    pub directories: Vec<PathBuf>,
}

impl BackupConfig {
    /// 新しいバックアップ設定を作成
    ///
    /// # Arguments
    ///
    /// * `archiver_command` - アーカイバの実行コマンド
    /// * `archive_password` - アーカイブパスワード（省略可）
    /// * `endpoint` - 接続先サーバー
    /// * `remote_path` - アップロード先ディレクトリ
    /// * `directories` - バックアップ対象ディレクトリ
    pub fn new(
        archiver_command: String,
        archive_password: Option<String>,
        endpoint: RemoteEndpoint,
        remote_path: String,
        directories: Vec<PathBuf>,
    ) -> Self {
        Self {
            archiver_command,
            archive_password,
            endpoint,
            remote_path,
            directories,
        }
    }
}
