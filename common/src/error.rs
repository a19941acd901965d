//! エラー型定義

use thiserror::Error;

/// 解析サービスとの通信エラー
///
/// 通信断・非成功ステータス・ボディのパース失敗は操作ごとに
/// 1種類へ畳み込む。原因の内訳は詳細文字列にのみ残す。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// 画像送信の失敗（次のファイル選択まで結果表示をブロックする）
    #[error("submission failed: {0}")]
    SubmissionFailed(String),

    /// 履歴取得の失敗（ベストエフォート。既存の一覧は維持される）
    #[error("history unavailable: {0}")]
    HistoryUnavailable(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, ServiceError>;
