//! Cart Notice Component
//!
//! Short-lived confirmation after a dish is added.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn CartNotice() -> impl IntoView {
    let ctx = use_app_context();
    let notice = ctx.notice;

    view! {
        {move || notice.get().map(|n| view! {
            <div class="cart-notice" role="status">
                "Agregado: " {n.item.to_string()}
            </div>
        })}
    }
}
