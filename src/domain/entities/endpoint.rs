//! # RemoteEndpoint Value Object
//!
//! 接続先サーバーのバリューオブジェクト

/// リモートエンドポイント
///
/// 1回の実行で1つの認証済みセッションを張る接続先
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEndpoint {
    /// サーバーのホスト名またはIPアドレス
    pub host: String,
    /// サーバーのポート番号
    pub port: u16,
    /// ログインユーザー名（省略可）
    pub username: Option<String>,
    /// ログインパスワード（デフォルトは空文字列）
    pub password: String,
}

impl RemoteEndpoint {
    /// 新しいリモートエンドポイントを作成
    pub fn new(host: String, port: u16, username: Option<String>, password: String) -> Self {
        Self {
            host,
            port,
            username,
            password,
        }
    }

    /// エラーメッセージ用のユーザー名を返す
    pub fn username_or_default(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }
}
