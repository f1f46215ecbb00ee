//! # SFTP Transfer Implementation
//!
//! TransferConnector / TransferSessionのlibssh2実装
//!
//! パスワード認証のみ。ホスト鍵の検証は行わない（既知の制限）。

use std::fs::File;
use std::io;
use std::net::TcpStream;
use std::path::Path;

use log::info;
use ssh2::{DisconnectCode, Session, Sftp};

use crate::domain::entities::endpoint::RemoteEndpoint;
use crate::domain::errors::BackupError;
use crate::domain::repositories::transfer_repository::{TransferConnector, TransferSession};

/// SFTPコネクタ
///
/// TCP接続、SSHハンドシェイク、パスワード認証、SFTPサブシステムの起動を行う
pub struct SftpConnector;

impl SftpConnector {
    /// 新しいコネクタを作成
    pub fn new() -> Self {
        Self
    }
}

impl Default for SftpConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferConnector for SftpConnector {
    fn connect(&self, endpoint: &RemoteEndpoint) -> Result<Box<dyn TransferSession>, BackupError> {
        let addr = format!("{}:{}", endpoint.host, endpoint.port);

        let transport_error = |message: String| BackupError::Transport {
            host: endpoint.host.clone(),
            port: endpoint.port,
            message,
        };

        let tcp = TcpStream::connect(&addr).map_err(|e| transport_error(e.to_string()))?;

        let mut session = Session::new().map_err(|e| transport_error(e.to_string()))?;
        session.set_tcp_stream(tcp);
        session
            .handshake()
            .map_err(|e| transport_error(e.to_string()))?;

        let username = endpoint.username_or_default();
        session
            .userauth_password(username, &endpoint.password)
            .map_err(|e| BackupError::Authentication {
                host: endpoint.host.clone(),
                port: endpoint.port,
                username: username.to_string(),
                message: e.to_string(),
            })?;

        let sftp = session.sftp().map_err(|e| transport_error(e.to_string()))?;

        info!("SFTP session established with {}", addr);

        Ok(Box::new(SftpSession {
            session,
            sftp,
            host: endpoint.host.clone(),
            port: endpoint.port,
            closed: false,
        }))
    }
}

/// 認証済みSFTPセッション
pub struct SftpSession {
    session: Session,
    sftp: Sftp,
    host: String,
    port: u16,
    closed: bool,
}

impl TransferSession for SftpSession {
    fn upload(&mut self, local_path: &Path, remote_dir: &str) -> Result<(), BackupError> {
        let upload_error = |message: String| BackupError::Upload {
            path: local_path.display().to_string(),
            message,
        };

        let file_name = local_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| upload_error("local path has no file name".to_string()))?;

        let remote_path = format!("{}/{}", remote_dir.trim_end_matches('/'), file_name);

        let mut local_file = File::open(local_path).map_err(|e| upload_error(e.to_string()))?;
        let mut remote_file = self
            .sftp
            .create(Path::new(&remote_path))
            .map_err(|e| upload_error(e.to_string()))?;

        io::copy(&mut local_file, &mut remote_file).map_err(|e| upload_error(e.to_string()))?;

        info!(
            "Uploaded \"{}\" to remote path \"{}\"",
            local_path.display(),
            remote_path
        );

        Ok(())
    }

    fn close(&mut self) -> Result<(), BackupError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        self.session
            .disconnect(Some(DisconnectCode::ByApplication), "backup finished", None)
            .map_err(|e| BackupError::Transport {
                host: self.host.clone(),
                port: self.port,
                message: e.to_string(),
            })
    }
}
