//! # Archiver Runner Trait
//!
//! 外部アーカイバの実行を抽象化

use anyhow::Result;

/// アーカイバの起動コマンド
///
/// プログラム名と引数列。引数の組み立てはApplication層が行い、
/// 実装は渡されたものをそのまま実行する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiverInvocation {
    program: String,
    args: Vec<String>,
}

impl ArchiverInvocation {
    /// 新しい起動コマンドを作成
    pub fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }

    /// プログラム名を返す
    pub fn program(&self) -> &str {
        &self.program
    }

    /// 引数列への参照を返す
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// アーカイバの実行結果
///
/// 終了コードとキャプチャした出力
#[derive(Debug, Clone)]
pub struct ArchiverExit {
    /// プロセスの終了コード（シグナル終了時は-1）
    pub code: i32,
    /// 標準出力
    pub stdout: String,
    /// 標準エラー出力
    pub stderr: String,
}

impl ArchiverExit {
    /// 新しい実行結果を作成
    pub fn new(code: i32, stdout: String, stderr: String) -> Self {
        Self {
            code,
            stdout,
            stderr,
        }
    }
}

/// アーカイバランナー
///
/// 外部アーカイバプロセスを同期的に実行するリポジトリ
///
/// # Errors
///
/// プロセスの起動自体に失敗した場合にエラーを返す。
/// アーカイバが起動して非0で終了したケースは `ArchiverExit` で表現する。
#[cfg_attr(test, mockall::automock)]
pub trait ArchiverRunner: Send + Sync {
    /// 起動コマンドを実行し、終了コードと出力を返す
    fn run(&self, invocation: &ArchiverInvocation) -> Result<ArchiverExit>;
}
