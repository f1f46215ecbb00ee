//! # Compress Directory Use Case
//!
//! ディレクトリ圧縮ユースケース
//!
//! 1つのディレクトリにつき1つの暗号化アーカイブを一時領域に作成する。

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use chrono::Local;
use log::{debug, info, warn};

use crate::domain::entities::archive::{archive_file_name, ArchiveArtifact};
use crate::domain::errors::BackupError;
use crate::domain::repositories::archiver_repository::{ArchiverInvocation, ArchiverRunner};

/// 警告付き成功を表すアーカイバの終了コード
const ARCHIVER_WARNING_CODE: i32 = 1;

/// ディレクトリ圧縮ユースケース
///
/// 注入されたランナー経由で外部アーカイバを起動し、
/// 終了コードポリシー（0=成功、1=警告、それ以外=致命的）を適用する
pub struct CompressDirectoryUseCase<R: ArchiverRunner> {
    runner: Arc<R>,
    archiver_command: String,
    archive_password: Option<String>,
}

impl<R: ArchiverRunner> CompressDirectoryUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `runner` - アーカイバランナー
    /// * `archiver_command` - アーカイバの実行コマンド
    /// * `archive_password` - アーカイブパスワード（Noneなら暗号化なし）
    pub fn new(runner: Arc<R>, archiver_command: String, archive_password: Option<String>) -> Self {
        Self {
            runner,
            archiver_command,
            archive_password,
        }
    }

    /// ディレクトリを圧縮してアーカイブ成果物を返す
    ///
    /// アーカイブはシステムの一時ディレクトリに置かれる。
    /// 削除は呼び出し側（ワークフロー）の責任。
    ///
    /// # Errors
    ///
    /// ランナーの起動失敗、またはアーカイバが0/1以外の終了コードで
    /// 終了した場合にエラーを返す
    pub fn execute(&self, directory: &Path) -> Result<ArchiveArtifact> {
        let file_name = archive_file_name(directory, Local::now());
        info!("Archive filename: {}", file_name);

        let temp_dir = std::env::temp_dir();
        info!("Using temporary directory: {}", temp_dir.display());

        let archive_path = temp_dir.join(&file_name);
        let invocation = self.build_invocation(&archive_path, directory);

        let exit = self.runner.run(&invocation)?;
        debug!("Archiver stdout:\n{}", exit.stdout);

        match exit.code {
            0 => {}
            ARCHIVER_WARNING_CODE => {
                warn!("Archiver exited with warnings, but will continue anyway");
            }
            code => {
                return Err(BackupError::ArchiverFailed {
                    code,
                    stderr: exit.stderr,
                }
                .into());
            }
        }

        Ok(ArchiveArtifact::new(archive_path, file_name))
    }

    /// アーカイバの起動コマンドを組み立てる
    ///
    /// `-mhe` でヘッダーも暗号化し、アーカイブ内のファイル名を隠す。
    /// `-p` はパスワードが指定された場合のみ付与する。
    fn build_invocation(&self, archive_path: &Path, directory: &Path) -> ArchiverInvocation {
        let mut args = vec![
            "a".to_string(),
            "-t7z".to_string(),
            archive_path.to_string_lossy().into_owned(),
            directory.to_string_lossy().into_owned(),
            "-mhe".to_string(),
            "-mx9".to_string(),
        ];

        if let Some(password) = &self.archive_password {
            args.push(format!("-p{}", password));
        }

        ArchiverInvocation::new(self.archiver_command.clone(), args)
    }
}
