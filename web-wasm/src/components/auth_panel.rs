//! 权限验证组件
//!
//! 当前模式锁定时占据主区域。密钥匹配则解锁并由状态推导刷新
//! 整个界面；不匹配仅在本面板内联报错，允许无限次重试。

use art_mind_common::{Error, SessionState};
use leptos::prelude::*;

#[component]
pub fn AuthPanel(session: RwSignal<SessionState>) -> impl IntoView {
    let (password, set_password) = signal(String::new());
    let (auth_error, set_auth_error) = signal(None::<String>);

    let on_unlock = move |_| {
        let candidate = password.get();
        let outcome = session
            .try_update(|s| s.submit_password(&candidate))
            .unwrap_or(Err(Error::AuthDenied));
        match outcome {
            Ok(()) => set_auth_error.set(None),
            Err(e) => set_auth_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="auth-panel">
            <hr class="divider" />
            <h3>"权限验证"</h3>
            <p>
                "您正在尝试访问 "
                <strong>{move || session.with(|s| s.mode.label())}</strong>
                "，请输入访问密钥。"
            </p>
            <input
                type="password"
                placeholder="输入密钥"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button class="btn" on:click=on_unlock>
                "解锁终端"
            </button>
            <Show when=move || auth_error.get().is_some()>
                <p class="error-text">{move || auth_error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
