//! Character Viewer Entry Point

mod models;
mod error;
mod config;
mod logging;
mod api;
mod loader;
mod filter;
mod pagination;
mod store;
mod components;
mod app;

use app::App;
use config::ViewerConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ViewerConfig::from_location();
    logging::init(config.log_level);
    log::debug!("[MAIN] {:?}", config);

    mount_to_body(move || view! { <App config=config /> });
}
