//! Arcsync - Encrypted Backup Uploader
//!
//! ローカルディレクトリを暗号化アーカイブに圧縮してSFTPサーバーへアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use arcsync::adapter::archiver::seven_zip::SevenZipRunner;
use arcsync::adapter::transfer::sftp::SftpConnector;
use arcsync::driver::{Args, BackupWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = args.into_config();

    // Create workflow with injected dependencies
    let workflow = BackupWorkflow::new(config, SevenZipRunner::new(), SftpConnector::new());

    workflow.execute()
}
