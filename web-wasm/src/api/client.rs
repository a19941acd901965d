//! 解析サービスAPIクライアント
//!
//! リモート操作は2つだけ:
//! - `submit`: POST /analyze に画像1件をmultipartで送信
//! - `fetch_history`: GET /history で過去スキャン一覧を取得
//!
//! 通信断・非成功ステータス・パース失敗は操作ごとのServiceError
//! 1種類へ畳み込み、状態遷移側にトランスポートの詳細を漏らさない。

use fraud_review_common::{AnalysisResult, HistoryEntry, ServiceError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// 解析サービスのベースURL（デプロイ時の固定構成ポイント）
const API_BASE_URL: &str = "http://localhost:8000";

/// アップロード済み画像の表示用URL
///
/// サーバが保存したファイル名から静的パスを組み立てるだけで、
/// 取得や検証はしない（<img>のsrcに渡す用途）。
pub fn upload_url(filename: &str) -> String {
    format!("{}/uploads/{}", API_BASE_URL, filename)
}

/// 画像を解析エンドポイントへ送信する
pub async fn submit(file: &File) -> Result<AnalysisResult, ServiceError> {
    submit_inner(file)
        .await
        .map_err(ServiceError::SubmissionFailed)
}

async fn submit_inner(file: &File) -> Result<AnalysisResult, String> {
    // ファイルフィールド1件だけのmultipartボディ。
    // Content-Typeはブラウザがboundary付きで設定するため指定しない。
    let form = FormData::new().map_err(js_detail)?;
    form.append_with_blob("file", file).map_err(js_detail)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    let url = format!("{}/analyze", API_BASE_URL);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_detail)?;

    let json = send(&request).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| format!("JSON parse error: {}", e))
}

/// 過去スキャン一覧を取得する
///
/// ベストエフォート。失敗しても呼び出し側の処理を止めてはならない。
pub async fn fetch_history() -> Result<Vec<HistoryEntry>, ServiceError> {
    fetch_history_inner()
        .await
        .map_err(ServiceError::HistoryUnavailable)
}

async fn fetch_history_inner() -> Result<Vec<HistoryEntry>, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/history", API_BASE_URL);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_detail)?;

    let json = send(&request).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| format!("JSON parse error: {}", e))
}

/// fetch実行の共通処理。成功ステータスのJSONボディだけを通す。
async fn send(request: &Request) -> Result<JsValue, String> {
    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(js_detail)?;
    let resp: Response = resp_value.dyn_into().map_err(js_detail)?;

    if !resp.ok() {
        return Err(format!("API error: {}", resp.status()));
    }

    JsFuture::from(resp.json().map_err(js_detail)?)
        .await
        .map_err(js_detail)
}

fn js_detail(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
