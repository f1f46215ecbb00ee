//! # Archiver Adapters
//!
//! ArchiverRunnerの外部プロセス実装

pub mod seven_zip;
