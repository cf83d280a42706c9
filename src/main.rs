//! Storefront Frontend Entry Point

mod activation;
mod app;
mod cart;
mod catalog;
mod components;
mod config;
mod context;
mod models;
mod pages;
mod routes;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config/> });
}
