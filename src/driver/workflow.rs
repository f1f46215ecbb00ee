//! # Workflow Orchestration
//!
//! バックアップ全体のオーケストレーション
//!
//! 接続は1回、ディレクトリは厳密に順次処理（圧縮→アップロード→ローカル削除）。
//! 致命的エラーで残りのディレクトリはスキップされるが、
//! セッションはどの経路でも必ず1回クローズされる。

use std::fs;
use std::sync::Arc;

use anyhow::Result;
use log::{info, warn};

use crate::application::dto::backup_config::BackupConfig;
use crate::application::use_cases::compress_directory::CompressDirectoryUseCase;
use crate::domain::repositories::archiver_repository::ArchiverRunner;
use crate::domain::repositories::transfer_repository::{TransferConnector, TransferSession};

/// バックアップワークフロー
pub struct BackupWorkflow<R: ArchiverRunner, C: TransferConnector> {
    config: BackupConfig,
    compress_use_case: CompressDirectoryUseCase<R>,
    connector: C,
}

impl<R: ArchiverRunner, C: TransferConnector> BackupWorkflow<R, C> {
    /// 依存を注入して新しいワークフローを作成
    pub fn new(config: BackupConfig, runner: R, connector: C) -> Self {
        let compress_use_case = CompressDirectoryUseCase::new(
            Arc::new(runner),
            config.archiver_command.clone(),
            config.archive_password.clone(),
        );

        Self {
            config,
            compress_use_case,
            connector,
        }
    }

    /// バックアップを実行する
    ///
    /// # Errors
    ///
    /// 接続失敗、致命的なアーカイバエラー、アップロード失敗でエラーを返す。
    /// いずれの経路でもセッションのクローズは試みられる。
    pub fn execute(&self) -> Result<()> {
        println!(
            "Connecting to {}:{} as \"{}\".",
            self.config.endpoint.host,
            self.config.endpoint.port,
            self.config.endpoint.username_or_default()
        );

        let mut session = self.connector.connect(&self.config.endpoint)?;

        let result = self.process_directories(session.as_mut());

        // クローズは冪等。失敗しても本来のエラーを隠さない
        if let Err(close_err) = session.close() {
            warn!("Failed to close transfer session: {}", close_err);
        }

        result
    }

    /// 全ディレクトリを順次処理する
    fn process_directories(&self, session: &mut dyn TransferSession) -> Result<()> {
        for directory in &self.config.directories {
            let artifact = self.compress_use_case.execute(directory)?;
            println!("✓ Created archive {}", artifact.file_name);

            println!(
                "Uploading \"{}\" to remote dir \"{}\".",
                artifact.local_path.display(),
                self.config.remote_path
            );
            let uploaded = session.upload(&artifact.local_path, &self.config.remote_path);

            // アップロードの成否に関わらず、同一イテレーション内でローカルを削除する
            if let Err(remove_err) = fs::remove_file(&artifact.local_path) {
                warn!(
                    "Failed to remove local archive \"{}\": {}",
                    artifact.local_path.display(),
                    remove_err
                );
            }

            uploaded?;
            println!("✓ Uploaded {}", artifact.file_name);
            info!("Removed local archive {}", artifact.local_path.display());
        }

        println!("✓ Backup complete!");
        Ok(())
    }
}
