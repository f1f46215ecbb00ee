//! # ArchiveArtifact Entity
//!
//! アップロード待ちのローカルアーカイブを表すエンティティ

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// ディレクトリのベース名が取れない場合のフォールバック名
const FALLBACK_BASE_NAME: &str = "backup";

/// アーカイブファイル名を導出する
///
/// `<ベース名>_<タイムスタンプ>.7z` の形式。タイムスタンプは秒精度なので、
/// 同じベース名のディレクトリを同一秒内に処理すると名前が衝突する（既知の制限）。
///
/// # Arguments
///
/// * `directory` - 圧縮対象のディレクトリ
/// * `at` - ファイル名に埋め込む時刻
pub fn archive_file_name(directory: &Path, at: DateTime<Local>) -> String {
    let base = directory
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(FALLBACK_BASE_NAME);

    format!("{}_{}.7z", base, at.format("%Y.%m.%d_%H.%M.%S"))
}

/// アーカイブ成果物
///
/// 圧縮ユースケースが作成し、転送セッションが消費し、
/// ワークフローが同一イテレーション内で削除するローカルファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveArtifact {
    /// ローカルの一時領域に置かれたアーカイブのフルパス
    pub local_path: PathBuf,
    /// 導出されたアーカイブファイル名
    pub file_name: String,
}

impl ArchiveArtifact {
    /// 新しいアーカイブ成果物を作成
    pub fn new(local_path: PathBuf, file_name: String) -> Self {
        Self {
            local_path,
            file_name,
        }
    }
}
