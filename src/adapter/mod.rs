//! Adapter Layer
//!
//! 外部システム（7-Zipプロセス, SSH/SFTP）との統合

pub mod archiver;
pub mod transfer;
