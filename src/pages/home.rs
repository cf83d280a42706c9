//! Home page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::Page;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <h1>"Bienvenido"</h1>
            <p>"Elige tus platos del menú y revisa tu pedido en el carrito."</p>
            <A href=Page::Catalog.path()>"Ver catálogo"</A>
        </section>
    }
}
