//! 解析結果の型定義
//!
//! 解析サービスのレスポンスをそのまま写した型:
//! - AnalysisResult: POST /analyze のレスポンスボディ
//! - HistoryEntry: GET /history の配列要素（= 過去スキャンの永続記録）

use serde::{Deserialize, Serialize};

/// サーバが確定した最終判定
///
/// risk_scoreから導出されるがサーバ側が権威を持つ。
/// クライアントは再計算しない。未知の値はデシリアライズエラーになる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Approve,
    Review,
    Reject,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Approve => "APPROVE",
            Verdict::Review => "REVIEW",
            Verdict::Reject => "REJECT",
        }
    }
}

/// 画像1件の解析結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// サーバに保存された画像のファイル名（/uploads/配下で参照可能）
    pub filename: String,

    /// 不正リスクスコア（0〜100）
    pub risk_score: u8,

    pub verdict: Verdict,

    /// 検出フラグ。空なら疑わしいパターンなし
    #[serde(default)]
    pub reasons: Vec<String>,
}

/// 過去スキャンの記録
///
/// サーバ側で提出時に作成される。クライアントは一覧スナップショットを
/// 読むだけで、個別の変更・削除は行わない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub filename: String,
    pub risk_score: u8,
    pub verdict: Verdict,
    #[serde(default)]
    pub reasons: Vec<String>,

    /// 記録日時。表示整形にのみ使う（並び順はサーバが決める）
    pub timestamp: String,
}
