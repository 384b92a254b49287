//! Logging Setup
//!
//! Routes the `log` facade through the rolling logger, echoing to the
//! browser console.

use log::{Level, LevelFilter};
use rolling_logger::{LogEntry, LoggerConfig};
use wasm_bindgen::JsValue;

fn console_sink(entry: &LogEntry) {
    let line = JsValue::from_str(&format!("[{}] {}", entry.target, entry.message));
    match entry.level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::log_1(&line),
    }
}

fn browser_clock() -> i64 {
    js_sys::Date::now() as i64
}

pub fn init(capacity: usize) {
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    let config = LoggerConfig {
        app_name: "BenefitsPortal",
        capacity,
        level,
        clock: browser_clock,
        sink: Some(console_sink),
    };
    if let Err(e) = rolling_logger::init_logger(config) {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }
}
