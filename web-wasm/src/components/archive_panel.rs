//! 档案录入组件
//!
//! 艺术家 / 作品名 / 创作年份三组输入，其中艺术家与年份各带一个
//! “未知”勾选。所有可交互性由会话状态现场推导，组件里不存任何
//! 开关。底部是只读的系统状态栏。

use art_mind_common::{Field, SessionState, UNKNOWN};
use leptos::prelude::*;

#[component]
pub fn ArchivePanel(session: RwSignal<SessionState>) -> impl IntoView {
    let enabled = move |field: Field| session.with(|s| s.is_enabled(field));

    view! {
        <div class="archive-panel">
            <h3>"档案录入"</h3>

            <div class="form-group">
                <label>"艺术家"</label>
                <div class="field-row">
                    <input
                        type="text"
                        placeholder="如: 弗朗西斯·培根"
                        prop:value=move || session.with(|s| s.record.artist().to_string())
                        disabled=move || !enabled(Field::ArtistText)
                        on:input=move |ev| {
                            session.update(|s| s.set_artist(event_target_value(&ev)))
                        }
                    />
                    <label class="unknown-toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || session.with(|s| s.record.artist_unknown)
                            disabled=move || !enabled(Field::ArtistUnknown)
                            on:change=move |ev| {
                                session.update(|s| s.set_artist_unknown(event_target_checked(&ev)))
                            }
                        />
                        {UNKNOWN}
                    </label>
                </div>
            </div>

            <div class="form-group">
                <label>"作品名称"</label>
                <div class="field-row">
                    <input
                        type="text"
                        placeholder="如: 肖像习作"
                        prop:value=move || session.with(|s| s.record.title.clone())
                        disabled=move || !enabled(Field::Title)
                        on:input=move |ev| {
                            session.update(|s| s.set_title(event_target_value(&ev)))
                        }
                    />
                </div>
            </div>

            <div class="form-group">
                <label>"创作年份"</label>
                <div class="field-row">
                    <input
                        type="text"
                        placeholder="如: 1953"
                        prop:value=move || session.with(|s| s.record.year().to_string())
                        disabled=move || !enabled(Field::YearText)
                        on:input=move |ev| {
                            session.update(|s| s.set_year(event_target_value(&ev)))
                        }
                    />
                    <label class="unknown-toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || session.with(|s| s.record.year_unknown)
                            disabled=move || !enabled(Field::YearUnknown)
                            on:change=move |ev| {
                                session.update(|s| s.set_year_unknown(event_target_checked(&ev)))
                            }
                        />
                        {UNKNOWN}
                    </label>
                </div>
            </div>

            <div class="form-group status-group">
                <label>"系统状态"</label>
                <input
                    type="text"
                    disabled=true
                    prop:value=move || session.with(|s| s.status_line().to_string())
                />
            </div>
        </div>
    }
}
