//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップとクリック選択の2系統を、単一の
//! `on_file_selected`コールバックへ正規化する。対象は常に先頭の1件で、
//! 空の選択（ファイルなしのドロップ、ダイアログのキャンセル）は何もしない。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File, FileList, HtmlInputElement};

#[component]
pub fn UploadArea<F>(on_file_selected: F) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    // ドラッグ中のハイライト。状態マシンには影響しない表示用フラグ。
    let (is_dragover, set_is_dragover) = signal(false);

    let handle_files = {
        let on_file_selected = on_file_selected.clone();
        move |files: FileList| {
            if let Some(file) = files.get(0) {
                on_file_selected(file);
            }
        }
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    handle_files(files);
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let handle_files = handle_files.clone();
        move |_| {
            // ファイル選択ダイアログを開く
            let document = web_sys::window().unwrap().document().unwrap();
            let input: HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept("image/*");

            let handle_files = handle_files.clone();
            let picker = input.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(files) = picker.files() {
                    handle_files(files);
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                if is_dragover.get() {
                    "upload-area dragover"
                } else {
                    "upload-area"
                }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📤"</div>
            <p>"画像をドラッグ&ドロップ または クリックして選択"</p>
            <p class="text-muted">"対応形式: JPG, PNG, WEBP"</p>
        </div>
    }
}
