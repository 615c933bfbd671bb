//! 艺术作品上传组件
//!
//! 本地上传 / 网络链接两个页签，产出同一种 ResolvedImage。
//! 任一路径失败都只内联提示并保持当前图片状态可重试。

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileList, FileReader, HtmlInputElement};

use crate::image_source::{self, ResolvedImage};

/// 上传页签
#[derive(Clone, Copy, PartialEq, Eq)]
enum UploadTab {
    Local,
    Url,
}

#[component]
pub fn UploadArea(image: RwSignal<Option<ResolvedImage>>) -> impl IntoView {
    let (tab, set_tab) = signal(UploadTab::Local);
    let (is_dragover, set_is_dragover) = signal(false);
    let (url, set_url) = signal(String::new());
    let (is_fetching, set_is_fetching) = signal(false);
    let (input_error, set_input_error) = signal(None::<String>);

    let handle_file = move |file: File| {
        read_file_bytes(file, move |bytes| {
            match image_source::resolve_from_bytes(&bytes) {
                Ok(resolved) => {
                    set_input_error.set(None);
                    image.set(Some(resolved));
                }
                Err(e) => set_input_error.set(Some(e.to_string())),
            }
        });
    };

    let handle_files = move |files: FileList| {
        if let Some(file) = files.get(0) {
            handle_file(file);
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        if let Some(dt) = ev.data_transfer() {
            if let Some(files) = dt.files() {
                handle_files(files);
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

    let on_click = move |_| {
        // 打开文件选择对话框
        let document = web_sys::window().unwrap().document().unwrap();
        let input: HtmlInputElement = document
            .create_element("input")
            .unwrap()
            .dyn_into()
            .unwrap();
        input.set_type("file");
        input.set_accept(".jpg,.jpeg,.png");

        let closure = Closure::wrap(Box::new(move |ev: web_sys::Event| {
            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            if let Some(files) = input.files() {
                handle_files(files);
            }
        }) as Box<dyn FnMut(_)>);

        input.set_onchange(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
        input.click();
    };

    // URL 拉取：失败时清空当前图片并内联展示原因
    let on_load_url = move |_| {
        let target = url.get().trim().to_string();
        if target.is_empty() || is_fetching.get() {
            return;
        }
        set_is_fetching.set(true);
        spawn_local(async move {
            match image_source::resolve_from_url(&target).await {
                Ok(resolved) => {
                    set_input_error.set(None);
                    image.set(Some(resolved));
                }
                Err(e) => {
                    image.set(None);
                    set_input_error.set(Some(e.to_string()));
                }
            }
            set_is_fetching.set(false);
        });
    };

    view! {
        <div class="upload-section">
            <h4>"艺术作品上传"</h4>

            <div class="tab-bar">
                <button
                    class="tab"
                    class:active=move || tab.get() == UploadTab::Local
                    on:click=move |_| set_tab.set(UploadTab::Local)
                >
                    "本地上传"
                </button>
                <button
                    class="tab"
                    class:active=move || tab.get() == UploadTab::Url
                    on:click=move |_| set_tab.set(UploadTab::Url)
                >
                    "网络链接"
                </button>
            </div>

            <Show
                when=move || tab.get() == UploadTab::Local
                fallback=move || {
                    view! {
                        <div class="url-row">
                            <input
                                type="text"
                                placeholder="http://..."
                                prop:value=move || url.get()
                                on:input=move |ev| set_url.set(event_target_value(&ev))
                            />
                            <button class="btn" disabled=move || is_fetching.get() on:click=on_load_url>
                                {move || if is_fetching.get() { "加载中..." } else { "加载" }}
                            </button>
                        </div>
                    }
                }
            >
                <div
                    class="upload-area"
                    class:dragover=move || is_dragover.get()
                    on:drop=on_drop
                    on:dragover=on_dragover
                    on:dragleave=on_dragleave
                    on:click=on_click
                >
                    <p>"拖拽图片到此处 或 点击选择文件"</p>
                    <p class="text-muted">"支持格式: JPG, JPEG, PNG"</p>
                </div>
            </Show>

            <Show when=move || input_error.get().is_some()>
                <p class="error-text">{move || input_error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || image.get().is_some()
                fallback=|| {
                    view! { <div class="preview-placeholder">"等待影像输入..."</div> }
                }
            >
                <img
                    class="preview"
                    src=move || image.get().map(|i| i.data_url()).unwrap_or_default()
                />
            </Show>
        </div>
    }
}

fn read_file_bytes<F>(file: File, on_bytes: F)
where
    F: Fn(Vec<u8>) + 'static,
{
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            let bytes = js_sys::Uint8Array::new(&result).to_vec();
            on_bytes(bytes);
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_array_buffer(&file);
}
