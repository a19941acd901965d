//! 表示ポリシー
//!
//! 提出状態と履歴から表示判定を導く純粋関数群。副作用なし。
//! CSSクラス名を返すだけで、スタイル自体は持たない。

use crate::types::Verdict;

/// 判定バッジのCSSクラス
pub fn verdict_badge_class(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Approve => "badge-positive",
        Verdict::Review => "badge-caution",
        Verdict::Reject => "badge-negative",
    }
}

/// リスクバーの色クラス
///
/// しきい値: 30未満 positive / 70未満 caution / それ以上 negative
pub fn risk_bar_class(risk_score: u8) -> &'static str {
    if risk_score < 30 {
        "bar-positive"
    } else if risk_score < 70 {
        "bar-caution"
    } else {
        "bar-negative"
    }
}

/// リスクバーの幅（%）。スコアに比例し、100を上限にクランプする。
pub fn risk_bar_width(risk_score: u8) -> u8 {
    risk_score.min(100)
}
