//! Tagged Todos Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_location();
    if console_logger::init(config.log_level).is_err() {
        web_sys::console::warn_1(&"[APP] logger already installed".into());
    }
    log::info!("starting, snapshot key {:?}", config.storage_key);

    mount_to_body(move || view! { <App config=config /> });
}
