//! Workflow Integration Tests
//!
//! BackupWorkflow の統合テスト
//!
//! 実際の`SevenZipRunner`をフェイクのアーカイバスクリプトと組み合わせ、
//! 転送だけをテストダブルに差し替えてエンドツーエンドで検証する。

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use arcsync::adapter::archiver::seven_zip::SevenZipRunner;
use arcsync::application::dto::backup_config::BackupConfig;
use arcsync::domain::entities::endpoint::RemoteEndpoint;
use arcsync::domain::errors::BackupError;
use arcsync::domain::repositories::transfer_repository::{TransferConnector, TransferSession};
use arcsync::driver::BackupWorkflow;

/// テスト用のフェイクアーカイバスクリプトを作成
///
/// 本物の7zと同じ引数順（`a -t7z <archive> <dir> ...`）を前提に、
/// 3番目の引数の位置へアーカイブを書き出して指定コードで終了する。
fn create_fake_archiver(dir: &Path, exit_code: i32) -> String {
    let script_path = dir.join("fake-7z.sh");
    let script = format!(
        "#!/bin/sh\nif [ {code} -eq 0 ] || [ {code} -eq 1 ]; then\n  echo fake > \"$3\"\nfi\nexit {code}\n",
        code = exit_code
    );
    fs::write(&script_path, script).unwrap();

    let mut permissions = fs::metadata(&script_path).unwrap().permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&script_path, permissions).unwrap();

    script_path.to_string_lossy().into_owned()
}

/// 呼び出し記録を共有するインメモリの転送ダブル
#[derive(Default)]
struct TransferLog {
    uploads: Mutex<Vec<(String, String)>>,
    connects: Mutex<u32>,
    closes: Mutex<u32>,
}

struct InMemorySession {
    log: Arc<TransferLog>,
}

impl TransferSession for InMemorySession {
    fn upload(&mut self, local_path: &Path, remote_dir: &str) -> Result<(), BackupError> {
        // アップロード時点でローカルアーカイブが実在することを検証する
        assert!(local_path.exists(), "archive should exist during upload");

        let file_name = local_path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        self.log
            .uploads
            .lock()
            .unwrap()
            .push((file_name, remote_dir.to_string()));
        Ok(())
    }

    fn close(&mut self) -> Result<(), BackupError> {
        *self.log.closes.lock().unwrap() += 1;
        Ok(())
    }
}

struct InMemoryConnector {
    log: Arc<TransferLog>,
    reject_auth: bool,
}

impl TransferConnector for InMemoryConnector {
    fn connect(&self, endpoint: &RemoteEndpoint) -> Result<Box<dyn TransferSession>, BackupError> {
        if self.reject_auth {
            return Err(BackupError::Authentication {
                host: endpoint.host.clone(),
                port: endpoint.port,
                username: endpoint.username_or_default().to_string(),
                message: "access denied".to_string(),
            });
        }
        *self.log.connects.lock().unwrap() += 1;
        Ok(Box::new(InMemorySession {
            log: self.log.clone(),
        }))
    }
}

fn build_config(archiver_command: String, directories: Vec<PathBuf>) -> BackupConfig {
    BackupConfig::new(
        archiver_command,
        None,
        RemoteEndpoint::new(
            "backup.example.com".to_string(),
            22,
            Some("test".to_string()),
            "test".to_string(),
        ),
        "/backups".to_string(),
        directories,
    )
}

#[test]
fn test_workflow_uploads_every_directory_and_removes_archives() {
    let scratch = TempDir::new().unwrap();
    let archiver = create_fake_archiver(scratch.path(), 0);

    let dir_a = scratch.path().join("music");
    let dir_b = scratch.path().join("photos");
    fs::create_dir(&dir_a).unwrap();
    fs::create_dir(&dir_b).unwrap();

    let log = Arc::new(TransferLog::default());
    let config = build_config(archiver, vec![dir_a, dir_b]);
    let workflow = BackupWorkflow::new(
        config,
        SevenZipRunner::new(),
        InMemoryConnector {
            log: log.clone(),
            reject_auth: false,
        },
    );

    workflow.execute().unwrap();

    assert_eq!(*log.connects.lock().unwrap(), 1);
    assert_eq!(*log.closes.lock().unwrap(), 1);

    let uploads = log.uploads.lock().unwrap();
    assert_eq!(uploads.len(), 2);
    assert!(uploads[0].0.starts_with("music_"));
    assert!(uploads[1].0.starts_with("photos_"));

    for (file_name, remote_dir) in uploads.iter() {
        assert_eq!(remote_dir, "/backups");
        assert!(
            !std::env::temp_dir().join(file_name).exists(),
            "local archive should be removed after upload"
        );
    }
}

#[test]
fn test_workflow_archiver_warning_exit_still_uploads() {
    let scratch = TempDir::new().unwrap();
    let archiver = create_fake_archiver(scratch.path(), 1);

    let dir = scratch.path().join("docs");
    fs::create_dir(&dir).unwrap();

    let log = Arc::new(TransferLog::default());
    let workflow = BackupWorkflow::new(
        build_config(archiver, vec![dir]),
        SevenZipRunner::new(),
        InMemoryConnector {
            log: log.clone(),
            reject_auth: false,
        },
    );

    workflow.execute().unwrap();
    assert_eq!(log.uploads.lock().unwrap().len(), 1);
}

#[test]
fn test_workflow_fatal_archiver_exit_uploads_nothing() {
    let scratch = TempDir::new().unwrap();
    let archiver = create_fake_archiver(scratch.path(), 2);

    let dir_a = scratch.path().join("first");
    let dir_b = scratch.path().join("second");
    fs::create_dir(&dir_a).unwrap();
    fs::create_dir(&dir_b).unwrap();

    let log = Arc::new(TransferLog::default());
    let workflow = BackupWorkflow::new(
        build_config(archiver, vec![dir_a, dir_b]),
        SevenZipRunner::new(),
        InMemoryConnector {
            log: log.clone(),
            reject_auth: false,
        },
    );

    let err = workflow.execute().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<BackupError>(),
        Some(BackupError::ArchiverFailed { code: 2, .. })
    ));

    assert!(log.uploads.lock().unwrap().is_empty());
    assert_eq!(*log.closes.lock().unwrap(), 1);
}

#[test]
fn test_workflow_auth_failure_creates_no_archives() {
    let scratch = TempDir::new().unwrap();
    let archiver = create_fake_archiver(scratch.path(), 0);

    let dir = scratch.path().join("never-compressed");
    fs::create_dir(&dir).unwrap();

    let log = Arc::new(TransferLog::default());
    let workflow = BackupWorkflow::new(
        build_config(archiver, vec![dir]),
        SevenZipRunner::new(),
        InMemoryConnector {
            log: log.clone(),
            reject_auth: true,
        },
    );

    let err = workflow.execute().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<BackupError>(),
        Some(BackupError::Authentication { .. })
    ));

    assert!(log.uploads.lock().unwrap().is_empty());
    assert_eq!(*log.connects.lock().unwrap(), 0);

    // 接続失敗時はアーカイブが1つも作られない
    let leftover: Vec<_> = fs::read_dir(std::env::temp_dir())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .starts_with("never-compressed_")
        })
        .collect();
    assert!(leftover.is_empty());
}
