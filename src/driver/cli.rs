//! # CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::backup_config::BackupConfig;
use crate::domain::entities::endpoint::RemoteEndpoint;

/// ローカルディレクトリを暗号化アーカイブに圧縮してSFTPサーバーへアップロードするCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "arcsync")]
#[command(about = "Compress local directories into encrypted archives and upload them over SFTP", long_about = None)]
pub struct Args {
    /// Archiver command name or full path to the executable (e.g. 7z)
    #[arg(long = "archiver-command", value_name = "path")]
    pub archiver_command: String,

    /// Archive password (omit for an unencrypted archive)
    #[arg(long = "archive-password", value_name = "password")]
    pub archive_password: Option<String>,

    /// Server IP address or hostname
    #[arg(long = "hostname", value_name = "host")]
    pub hostname: String,

    /// Server port
    #[arg(long, value_name = "port", default_value_t = 22)]
    pub port: u16,

    /// Server username
    #[arg(long, value_name = "username")]
    pub username: Option<String>,

    /// Server password
    #[arg(long = "server-password", value_name = "password", default_value = "")]
    pub server_password: String,

    /// Directory on the server to put the archives in
    #[arg(long = "remote-path", value_name = "dir", default_value = "/")]
    pub remote_path: String,

    /// Full path to the local director(ies) to backup
    #[arg(value_name = "directory", required = true)]
    pub directories: Vec<String>,
}

impl Args {
    /// 引数からバックアップ設定を構築する
    ///
    /// アーカイバコマンドと各ディレクトリはチルダ展開される
    pub fn into_config(self) -> BackupConfig {
        let archiver_command = shellexpand::tilde(&self.archiver_command).into_owned();

        let directories: Vec<PathBuf> = self
            .directories
            .iter()
            .map(|dir| PathBuf::from(shellexpand::tilde(dir).as_ref()))
            .collect();

        let endpoint = RemoteEndpoint::new(
            self.hostname,
            self.port,
            self.username,
            self.server_password,
        );

        BackupConfig::new(
            archiver_command,
            self.archive_password,
            endpoint,
            self.remote_path,
            directories,
        )
    }
}
