//! # Use Cases
//!
//! アプリケーションのユースケース
//!
//! - **compress_directory**: ディレクトリを暗号化アーカイブへ圧縮

pub mod compress_directory;
