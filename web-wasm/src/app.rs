//! 主应用组件
//!
//! 单一的 SessionState 状态存储加若干展示信号。每次状态变化时
//! 所有可交互性与可见内容都从状态重新推导，组件之间不传布尔开关。

use art_mind_common::prompts::build_prompt;
use art_mind_common::{ReportTranscript, SessionState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::console;

use crate::api::gemini;
use crate::components::{
    archive_panel::ArchivePanel, auth_panel::AuthPanel, header::Header, mode_panel::ModePanel,
    report_view::ReportView, upload_area::UploadArea,
};
use crate::config;
use crate::image_source::ResolvedImage;

/// 主应用组件
#[component]
pub fn App() -> impl IntoView {
    // 启动时解析凭证。缺失是致命错误，界面停在提示上，
    // 不再挂接任何后续交互。
    let api_key = match config::load_api_key() {
        Ok(key) => key,
        Err(e) => {
            return view! { <FatalScreen message=e.to_string() /> }.into_any();
        }
    };
    let api_key = StoredValue::new(api_key);

    // 会话状态与展示信号
    let session = RwSignal::new(SessionState::default());
    let image = RwSignal::new(None::<ResolvedImage>);
    let transcript = RwSignal::new(ReportTranscript::default());
    let submit_warning = RwSignal::new(None::<String>);
    let runtime_error = RwSignal::new(None::<String>);
    let is_generating = RwSignal::new(false);

    let is_unlocked = move || session.with(|s| s.is_unlocked());

    // 启动一次生成：前置校验 -> 构建提示词 -> 流式渲染
    let on_start = move |_| {
        if is_generating.get() {
            return;
        }
        submit_warning.set(None);
        runtime_error.set(None);

        if api_key.with_value(|key| key.is_empty()) {
            submit_warning.set(Some("系统错误: 未检测到 API Key。".to_string()));
            return;
        }
        let Some(current_image) = image.get() else {
            submit_warning.set(Some("请先上传图片或输入图片链接。".to_string()));
            return;
        };

        let prompt = session.with(|s| build_prompt(s.mode, &s.record));
        transcript.set(ReportTranscript::start());
        is_generating.set(true);

        let key = api_key.get_value();
        spawn_local(async move {
            let outcome = gemini::stream_report(&key, &prompt, &current_image, |fragment| {
                transcript.update(|t| t.push_fragment(&fragment));
            })
            .await;

            match outcome {
                Ok(()) => transcript.update(|t| t.finish()),
                Err(e) => {
                    console::error_1(&e.to_string().into());
                    transcript.update(|t| t.fail());
                    runtime_error.set(Some(e.to_string()));
                }
            }
            is_generating.set(false);
        });
    };

    view! {
        <div class="layout">
            <aside class="sidebar">
                <ModePanel session=session />
                <hr class="divider" />
                <ArchivePanel session=session />
            </aside>

            <main class="main-area">
                <Header />

                <Show
                    when=is_unlocked
                    fallback=move || view! { <AuthPanel session=session /> }
                >
                    <UploadArea image=image />

                    <button
                        class="btn btn-launch"
                        disabled=move || is_generating.get()
                        on:click=on_start
                    >
                        {move || if is_generating.get() { "生成中..." } else { "启动" }}
                    </button>

                    <Show when=move || submit_warning.get().is_some()>
                        <p class="warning-text">{move || submit_warning.get().unwrap_or_default()}</p>
                    </Show>

                    <ReportView transcript=transcript runtime_error=runtime_error />
                </Show>
            </main>
        </div>
    }
    .into_any()
}

/// 致命配置错误界面
#[component]
fn FatalScreen(message: String) -> impl IntoView {
    view! {
        <div class="layout">
            <main class="main-area">
                <Header />
                <p class="error-text">{message}</p>
            </main>
        </div>
    }
}
