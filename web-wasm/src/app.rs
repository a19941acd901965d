//! メインアプリケーションコンポーネント
//!
//! 状態コンテナは2つ: SubmissionFlow（進行中の提出）とHistoryLog（履歴）。
//! どちらも制御スレッド上のシグナル更新でのみ書き換わる。

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api::client;
use crate::components::{
    header::Header, history_panel::HistoryPanel, result_panel::ResultPanel,
    upload_area::UploadArea,
};
use fraud_review_common::{HistoryLog, Resolution, SubmissionFlow};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (submission, set_submission) = signal(SubmissionFlow::new());
    let (history, set_history) = signal(HistoryLog::new());

    // 起動時に履歴を1回読み込む
    spawn_local(async move {
        refresh_history(set_history).await;
    });

    // ファイル選択ハンドラ
    //
    // Pendingへ遷移してから送信タスクを起動する。完了時は発行済みの
    // シーケンス番号で照合し、追い越された応答は状態に反映しない。
    let on_file_selected = move |file: File| {
        let mut issued = None;
        set_submission.update(|flow| {
            issued = Some(flow.select(file.name()));
        });
        let Some(seq) = issued else {
            return;
        };

        spawn_local(async move {
            let outcome = client::submit(&file).await;
            let succeeded = outcome.is_ok();

            let mut resolution = Resolution::Superseded;
            set_submission.update(|flow| {
                resolution = flow.resolve(seq, outcome);
            });

            // 最新の提出として成功が確定したときだけ履歴を更新する。
            // 結果は提出状態には影響しない（fire-and-forget）。
            if resolution == Resolution::Applied && succeeded {
                refresh_history(set_history).await;
            }
        });
    };

    view! {
        <div class="container">
            <Header />

            <div class="dashboard-grid">
                <div class="main-column">
                    <UploadArea on_file_selected=on_file_selected />
                    <ResultPanel submission=submission />
                </div>

                <HistoryPanel history=history />
            </div>
        </div>
    }
}

/// 履歴一覧を取り直して丸ごと置き換える
///
/// 失敗しても既存の一覧は維持し、コンソール警告だけ残す。
async fn refresh_history(set_history: WriteSignal<HistoryLog>) {
    let fetched = client::fetch_history().await;
    set_history.update(|log| {
        if let Err(err) = log.apply(fetched) {
            gloo::console::warn!(format!("履歴の取得に失敗: {}", err));
        }
    });
}
