//! Project Board Entry Point

mod board;
mod component;
mod components;
mod config;
mod dom;
mod error;
mod models;
mod project_item;
mod project_list;
mod store;
mod tooltip;
mod app;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match BoardConfig::from_page_text(dom::read_config_text().as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (BoardConfig::default(), Some(e)),
    };
    if let Err(e) = rolling_logger::init(config.level_filter(), config.log_capacity) {
        web_sys::console::error_1(&format!("logger: {}", e).into());
    }
    if let Some(e) = config_error {
        log::warn!("{}, using defaults", e);
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
