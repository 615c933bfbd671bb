//! 模式选择组件

use art_mind_common::{Mode, SessionState};
use leptos::prelude::*;

#[component]
pub fn ModePanel(session: RwSignal<SessionState>) -> impl IntoView {
    view! {
        <div class="mode-panel">
            <h3>"模式选择"</h3>
            {Mode::ALL
                .iter()
                .map(|mode| {
                    let mode = *mode;
                    view! {
                        <label class="mode-option">
                            <input
                                type="radio"
                                name="mode"
                                prop:checked=move || session.with(|s| s.mode == mode)
                                on:change=move |_| session.update(|s| s.select_mode(mode))
                            />
                            <span>{mode.label()}</span>
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}
