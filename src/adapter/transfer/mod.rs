//! # Transfer Adapters
//!
//! TransferConnector / TransferSessionのSFTP実装

pub mod sftp;
