//! # Backup Errors
//!
//! バックアップ実行時のエラー分類
//!
//! 認証・トランスポート・アーカイバ・アップロードの各失敗を区別し、
//! ワークフローとテストが失敗の種類を判定できるようにする。

use thiserror::Error;

/// バックアップ実行時のエラー
#[derive(Debug, Error)]
pub enum BackupError {
    /// 接続時の認証失敗。実行全体が中断され、アップロードは一切行われない
    #[error("could not log in to {host}:{port} as \"{username}\": {message}")]
    Authentication {
        host: String,
        port: u16,
        username: String,
        message: String,
    },

    /// TCP接続・ハンドシェイク・SFTPサブシステムの失敗
    #[error("could not establish session with {host}:{port}: {message}")]
    Transport {
        host: String,
        port: u16,
        message: String,
    },

    /// アーカイバが0/1以外の終了コードで終了した（シグナル終了時は-1）
    #[error("archiver exited with code {code}: {stderr}")]
    ArchiverFailed { code: i32, stderr: String },

    /// セッション確立後のアップロード失敗
    #[error("upload of \"{path}\" failed: {message}")]
    Upload { path: String, message: String },
}
