//! Browser Helpers
//!
//! Small wrappers over js-sys/web-sys used by several components.

use chrono::NaiveDate;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::models::Upload;

/// Local calendar date according to the browser
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or(NaiveDate::MAX)
}

pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

/// First file selected in the `<input type="file">` that fired `ev`
pub fn selected_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    ev.target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?
        .files()?
        .get(0)
}

pub async fn read_upload(file: web_sys::File) -> Result<Upload, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Could not read {}: {:?}", file.name(), e))?;
    Ok(Upload {
        file_name: file.name(),
        mime: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

/// Format minor currency units as `£12.50`
pub fn money(minor: u64) -> String {
    format!("£{}.{:02}", minor / 100, minor % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money() {
        assert_eq!(money(0), "£0.00");
        assert_eq!(money(1250), "£12.50");
        assert_eq!(money(7), "£0.07");
    }
}
