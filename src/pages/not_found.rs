//! Fallback for unknown paths.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::DEFAULT_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found-page">
            <h1>"Página no encontrada"</h1>
            <A href=DEFAULT_PATH>"Volver al inicio"</A>
        </section>
    }
}
