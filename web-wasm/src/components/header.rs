//! 标题组件

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"图解心灵讨论组"</h1>
        </header>
    }
}
