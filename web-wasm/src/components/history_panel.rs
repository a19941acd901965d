//! スキャン履歴パネルコンポーネント
//!
//! 履歴スナップショットをサーバの並び順のまま一覧表示する。

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::api::client;
use fraud_review_common::{render, HistoryEntry, HistoryLog};

#[component]
pub fn HistoryPanel(history: ReadSignal<HistoryLog>) -> impl IntoView {
    view! {
        <div class="history-panel">
            <h3>"最近のスキャン"</h3>

            <Show
                when=move || !history.get().is_empty()
                fallback=|| view! { <p class="text-muted">"スキャン履歴はまだありません"</p> }
            >
                <div class="history-list">
                    <For
                        each=move || history.get().entries().to_vec()
                        key=|entry| entry.id
                        children=move |entry| {
                            view! { <HistoryRow entry=entry /> }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn HistoryRow(entry: HistoryEntry) -> impl IntoView {
    let badge_class = render::verdict_badge_class(entry.verdict);

    view! {
        <div class="history-row">
            <img
                class="history-thumb"
                src=client::upload_url(&entry.filename)
                alt=entry.filename.clone()
            />
            <div class="history-info">
                <div class="history-meta">
                    <span class=format!("badge badge-small {}", badge_class)>
                        {entry.verdict.as_str()}
                    </span>
                    <span class="text-muted">{format_time(&entry.timestamp)}</span>
                </div>
                <p class="history-filename">{entry.filename.clone()}</p>
                <span class="text-muted">{format!("スコア: {}", entry.risk_score)}</span>
            </div>
        </div>
    }
}

/// サーバの記録日時を現地時刻の時刻表記へ整形する
///
/// パースできない値はそのまま表示する（並びはサーバ順のため影響なし）。
fn format_time(timestamp: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(timestamp));
    if date.get_time().is_nan() {
        return timestamp.to_string();
    }
    date.to_locale_time_string("ja-JP").into()
}
