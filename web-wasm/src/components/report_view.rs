//! 分析报告组件
//!
//! 渲染不断增长的转写文本，流式进行中带进度游标。
//! 运行时错误显示在已有文本下方，部分结果不丢弃。

use art_mind_common::{ReportTranscript, StreamPhase};
use leptos::prelude::*;

#[component]
pub fn ReportView(
    transcript: RwSignal<ReportTranscript>,
    runtime_error: RwSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || transcript.with(|t| t.phase() != StreamPhase::Idle)>
            <div class="report">
                <hr class="divider" />
                <h3>"分析报告"</h3>
                <div class="report-text">{move || transcript.with(|t| t.display_text())}</div>
                <Show when=move || runtime_error.get().is_some()>
                    <p class="error-text">{move || runtime_error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </Show>
    }
}
