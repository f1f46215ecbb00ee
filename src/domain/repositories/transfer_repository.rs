//! # Transfer Repository Traits
//!
//! リモート転送セッションの抽象化
//!
//! `connect` / `upload` / `close` の狭いインターフェースのみを公開し、
//! SFTP実装をテストダブルに差し替えられるようにする。

use std::path::Path;

use crate::domain::entities::endpoint::RemoteEndpoint;
use crate::domain::errors::BackupError;

/// 転送セッション
///
/// 1回の実行で1つだけ開かれる認証済みの接続。
/// すべてのアップロードで再利用され、最後に1回だけ閉じられる。
#[cfg_attr(test, mockall::automock)]
pub trait TransferSession: Send {
    /// ローカルファイルをリモートディレクトリへアップロードする
    ///
    /// ファイル名は保持される。再開もチャンク化も行わない。
    ///
    /// # Errors
    ///
    /// 転送に失敗した場合は `BackupError::Upload` を返す（実行全体が中断される）
    fn upload(&mut self, local_path: &Path, remote_dir: &str) -> Result<(), BackupError>;

    /// セッションを閉じる
    ///
    /// 冪等であること。2回目以降の呼び出しは何もしない。
    fn close(&mut self) -> Result<(), BackupError>;
}

/// 転送コネクタ
///
/// エンドポイントへの認証済みセッションを確立するファクトリ
#[cfg_attr(test, mockall::automock)]
pub trait TransferConnector: Send + Sync {
    /// 認証済みセッションを開く
    ///
    /// # Errors
    ///
    /// 認証拒否は `BackupError::Authentication`、
    /// TCP・ハンドシェイク・サブシステムの失敗は `BackupError::Transport` を返す。
    /// どちらも実行全体にとって致命的（リトライしない）。
    fn connect(&self, endpoint: &RemoteEndpoint) -> Result<Box<dyn TransferSession>, BackupError>;
}
