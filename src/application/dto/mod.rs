//! # Application DTOs
//!
//! Driver層からユースケースへ渡す設定オブジェクト

pub mod backup_config;
