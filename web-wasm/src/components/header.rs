//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"不正検知ダッシュボード"</h1>
            <p class="text-muted">"配達画像のAI生成・改ざんを解析します"</p>
        </header>
    }
}
