//! 提出状態マシン
//!
//! 進行中の画像解析1件のライフサイクルを管理する:
//! Idle → Pending → Succeeded / Failed →（次のファイル選択で再びPending）
//!
//! 新しい選択が常に勝つ。追い越された提出の完了は
//! シーケンス番号の照合で破棄し、状態には反映しない。

use crate::error::ServiceError;
use crate::types::AnalysisResult;

/// 現在の提出状態
///
/// 表示できる結果またはエラーは常に高々1件。
/// 終端状態は次のファイル選択まで保持される。
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    /// まだ何も解析していない
    #[default]
    Idle,
    /// 送信済みで応答待ち
    Pending { file_name: String },
    /// 最新の提出が成功した
    Succeeded(AnalysisResult),
    /// 最新の提出が失敗した
    Failed(ServiceError),
}

/// 提出1件を識別するシーケンス番号
///
/// `SubmissionFlow::select`が発行する。発行順に単調増加。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionSeq(u64);

/// 提出完了の反映結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// 最新の提出として状態に反映した
    Applied,
    /// より新しい選択に追い越されていたため破棄した
    Superseded,
}

/// 提出状態とシーケンスカウンタの所有者
///
/// 単一の制御スレッド上でのみ更新される前提。ロックは不要で、
/// 競合はシーケンス番号の破棄規則だけで解決する。
#[derive(Debug, Clone, Default)]
pub struct SubmissionFlow {
    state: SubmissionState,
    latest_seq: u64,
}

impl SubmissionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, SubmissionState::Pending { .. })
    }

    /// ファイル選択。どの状態からでも呼べる。
    ///
    /// 以前の結果・エラーを破棄してPendingへ遷移し、この提出の
    /// シーケンス番号を発行する。Pending中の再選択はキューイングせず、
    /// 前の提出の行方を追うのをやめるだけ（ネットワーク呼び出し自体は
    /// 中断しない）。
    pub fn select(&mut self, file_name: impl Into<String>) -> SubmissionSeq {
        self.latest_seq += 1;
        self.state = SubmissionState::Pending {
            file_name: file_name.into(),
        };
        SubmissionSeq(self.latest_seq)
    }

    /// 提出完了を反映する。
    ///
    /// `seq`が最新発行分でなければ状態には触れず`Superseded`を返す。
    /// 最新なら成功はSucceeded、失敗はFailedへ遷移して`Applied`を返す。
    pub fn resolve(
        &mut self,
        seq: SubmissionSeq,
        outcome: Result<AnalysisResult, ServiceError>,
    ) -> Resolution {
        if seq.0 != self.latest_seq {
            return Resolution::Superseded;
        }
        self.state = match outcome {
            Ok(result) => SubmissionState::Succeeded(result),
            Err(err) => SubmissionState::Failed(err),
        };
        Resolution::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Verdict;

    fn result_for(filename: &str, risk_score: u8, verdict: Verdict) -> AnalysisResult {
        AnalysisResult {
            filename: filename.to_string(),
            risk_score,
            verdict,
            reasons: vec![],
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let flow = SubmissionFlow::new();
        assert_eq!(*flow.state(), SubmissionState::Idle);
        assert!(!flow.is_pending());
    }

    #[test]
    fn test_select_enters_pending() {
        let mut flow = SubmissionFlow::new();
        flow.select("a.jpg");

        assert!(flow.is_pending());
        assert_eq!(
            *flow.state(),
            SubmissionState::Pending {
                file_name: "a.jpg".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_success() {
        let mut flow = SubmissionFlow::new();
        let seq = flow.select("a.jpg");

        let resolution = flow.resolve(seq, Ok(result_for("a.jpg", 12, Verdict::Approve)));
        assert_eq!(resolution, Resolution::Applied);
        assert!(matches!(flow.state(), SubmissionState::Succeeded(r) if r.risk_score == 12));
    }

    #[test]
    fn test_resolve_failure() {
        let mut flow = SubmissionFlow::new();
        let seq = flow.select("a.jpg");

        let err = ServiceError::SubmissionFailed("API error: 500".to_string());
        let resolution = flow.resolve(seq, Err(err.clone()));
        assert_eq!(resolution, Resolution::Applied);
        assert_eq!(*flow.state(), SubmissionState::Failed(err));
    }

    #[test]
    fn test_select_clears_previous_result() {
        let mut flow = SubmissionFlow::new();
        let seq = flow.select("a.jpg");
        flow.resolve(seq, Ok(result_for("a.jpg", 12, Verdict::Approve)));

        flow.select("b.jpg");
        // 前の結果は表示対象から消え、Pendingだけが見える
        assert_eq!(
            *flow.state(),
            SubmissionState::Pending {
                file_name: "b.jpg".to_string()
            }
        );
    }

    #[test]
    fn test_select_clears_previous_failure() {
        let mut flow = SubmissionFlow::new();
        let seq = flow.select("a.jpg");
        flow.resolve(
            seq,
            Err(ServiceError::SubmissionFailed("timeout".to_string())),
        );

        flow.select("b.jpg");
        assert!(flow.is_pending());
    }

    #[test]
    fn test_stale_resolve_is_discarded() {
        let mut flow = SubmissionFlow::new();
        let seq_a = flow.select("a.jpg");
        let seq_b = flow.select("b.jpg");

        // Aの完了が遅れて届いても状態は変わらない
        let resolution = flow.resolve(seq_a, Ok(result_for("a.jpg", 90, Verdict::Reject)));
        assert_eq!(resolution, Resolution::Superseded);
        assert_eq!(
            *flow.state(),
            SubmissionState::Pending {
                file_name: "b.jpg".to_string()
            }
        );

        // Bの完了は反映される
        let resolution = flow.resolve(seq_b, Ok(result_for("b.jpg", 8, Verdict::Approve)));
        assert_eq!(resolution, Resolution::Applied);
        assert!(matches!(flow.state(), SubmissionState::Succeeded(r) if r.filename == "b.jpg"));
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut flow = SubmissionFlow::new();
        let seq_a = flow.select("a.jpg");
        let seq_b = flow.select("b.jpg");
        flow.resolve(seq_b, Ok(result_for("b.jpg", 8, Verdict::Approve)));

        // 追い越された提出の失敗が、確定済みの新しい結果を壊さない
        let resolution = flow.resolve(
            seq_a,
            Err(ServiceError::SubmissionFailed("timeout".to_string())),
        );
        assert_eq!(resolution, Resolution::Superseded);
        assert!(matches!(flow.state(), SubmissionState::Succeeded(_)));
    }

    #[test]
    fn test_seq_is_monotonic() {
        let mut flow = SubmissionFlow::new();
        let seq_a = flow.select("a.jpg");
        let seq_b = flow.select("b.jpg");
        assert_ne!(seq_a, seq_b);
    }
}
