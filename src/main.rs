//! Benefits Portal Frontend Entry Point

mod api;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod forms;
mod logging;
mod models;
mod notifications;
mod session;
mod storage;
mod store;
mod validation;
mod wizard;

use app::App;
use leptos::prelude::*;

use crate::config::config;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config().log_capacity);
    mount_to_body(App);
}
