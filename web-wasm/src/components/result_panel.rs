//! 解析結果パネルコンポーネント
//!
//! 提出状態の4パターンをそのまま表示に写す:
//! Idle（未解析の案内）/ Pending（ビジー表示。前の結果は出さない）/
//! Failed（未解析とは区別される失敗通知）/ Succeeded（レポートカード）

use leptos::prelude::*;

use crate::api::client;
use fraud_review_common::{render, AnalysisResult, SubmissionFlow, SubmissionState};

#[component]
pub fn ResultPanel(submission: ReadSignal<SubmissionFlow>) -> impl IntoView {
    view! {
        <div class="result-panel">
            {move || match submission.get().state().clone() {
                SubmissionState::Idle => {
                    view! {
                        <p class="text-muted">
                            "画像をアップロードすると解析結果がここに表示されます"
                        </p>
                    }
                        .into_any()
                }
                SubmissionState::Pending { file_name } => {
                    view! {
                        <div class="analysis-loading">
                            <div class="spinner"></div>
                            <p>{format!("{} を解析中...", file_name)}</p>
                        </div>
                    }
                        .into_any()
                }
                SubmissionState::Failed(err) => {
                    view! {
                        <div class="analysis-error">
                            <p>"解析に失敗しました。別の画像で再試行してください。"</p>
                            <p class="text-muted">{err.to_string()}</p>
                        </div>
                    }
                        .into_any()
                }
                SubmissionState::Succeeded(result) => {
                    view! { <ReportCard result=result /> }.into_any()
                }
            }}
        </div>
    }
}

/// 解析レポートカード
#[component]
fn ReportCard(result: AnalysisResult) -> impl IntoView {
    let badge_class = render::verdict_badge_class(result.verdict);
    let bar_class = render::risk_bar_class(result.risk_score);
    let bar_width = render::risk_bar_width(result.risk_score);

    view! {
        <div class="report-card">
            <div class="report-header">
                <h2>"解析レポート"</h2>
                <span class=format!("badge {}", badge_class)>{result.verdict.as_str()}</span>
            </div>

            <div class="report-body">
                <div class="report-image">
                    <img src=client::upload_url(&result.filename) alt=result.filename.clone() />
                    <p class="text-muted">{result.filename.clone()}</p>
                </div>

                <div class="report-details">
                    <div class="risk-score">
                        <span class="risk-label">"リスクスコア"</span>
                        <span class="risk-value">{format!("{}/100", result.risk_score)}</span>
                    </div>
                    <div class="risk-bar">
                        <div
                            class=format!("risk-bar-fill {}", bar_class)
                            style=format!("width: {}%", bar_width)
                        ></div>
                    </div>

                    <h4>"検出フラグ"</h4>
                    {if result.reasons.is_empty() {
                        view! {
                            <p class="flag-clean">"疑わしいパターンは検出されませんでした。"</p>
                        }
                            .into_any()
                    } else {
                        view! {
                            <ul class="flag-list">
                                {result
                                    .reasons
                                    .iter()
                                    .map(|reason| view! { <li class="flag-item">{reason.clone()}</li> })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    }}
                </div>
            </div>
        </div>
    }
}
