//! # 7-Zip Runner Implementation
//!
//! ArchiverRunnerのサブプロセス実装
//!
//! 渡された起動コマンドを同期的に実行し、完了までブロックする。
//! タイムアウトは設けない。

use std::process::Command;

use anyhow::{Context, Result};
use log::info;

use crate::domain::repositories::archiver_repository::{
    ArchiverExit, ArchiverInvocation, ArchiverRunner,
};

/// 外部アーカイバプロセスのランナー
pub struct SevenZipRunner;

impl SevenZipRunner {
    /// 新しいランナーを作成
    pub fn new() -> Self {
        Self
    }
}

impl Default for SevenZipRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiverRunner for SevenZipRunner {
    fn run(&self, invocation: &ArchiverInvocation) -> Result<ArchiverExit> {
        info!(
            "Running archiver command: {} {}",
            invocation.program(),
            invocation.args().join(" ")
        );

        let output = Command::new(invocation.program())
            .args(invocation.args())
            .output()
            .with_context(|| {
                format!("failed to launch archiver \"{}\"", invocation.program())
            })?;

        // シグナル終了にはコードがないため-1で表す（致命的として扱われる）
        let code = output.status.code().unwrap_or(-1);

        Ok(ArchiverExit::new(
            code,
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_captures_exit_code_and_output() {
        let runner = SevenZipRunner::new();
        let invocation = ArchiverInvocation::new(
            "sh".to_string(),
            vec!["-c".to_string(), "echo compressed; exit 0".to_string()],
        );

        let exit = runner.run(&invocation).unwrap();
        assert_eq!(exit.code, 0);
        assert!(exit.stdout.contains("compressed"));
    }

    #[test]
    fn test_run_reports_nonzero_exit_code() {
        let runner = SevenZipRunner::new();
        let invocation = ArchiverInvocation::new(
            "sh".to_string(),
            vec!["-c".to_string(), "echo broken >&2; exit 2".to_string()],
        );

        let exit = runner.run(&invocation).unwrap();
        assert_eq!(exit.code, 2);
        assert!(exit.stderr.contains("broken"));
    }

    #[test]
    fn test_run_missing_program_is_a_launch_error() {
        let runner = SevenZipRunner::new();
        let invocation = ArchiverInvocation::new(
            "arcsync-no-such-archiver".to_string(),
            vec!["a".to_string()],
        );

        assert!(runner.run(&invocation).is_err());
    }
}
