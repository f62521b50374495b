//! Rendering-engine capability detection and scroll variable plumbing.
//!
//! Native sticky positioning combined with containment/compositing hints
//! misbehaves on Chromium-family engines for large tables, so fixed cells
//! there are positioned by a composited transform driven by the
//! `--scroll-left`/`--scroll-right` custom properties instead. Detection
//! happens once per viewer; the flag is then threaded explicitly into the
//! style derivation so style computation stays a pure function.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use crate::types::{SCROLL_LEFT_VAR, SCROLL_RIGHT_VAR};

/// Probe whether the current engine prefers the composited-transform sticky
/// path. Firefox and Safari are excluded up front; Chromium family is
/// recognized by the `chrome` global plus the user-agent string.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn detect_composited_sticky() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let ua = window.navigator().user_agent().unwrap_or_default();
    if ua.contains("Firefox") || (ua.contains("Safari") && !ua.contains("Chrome")) {
        return false;
    }
    let chrome = js_sys::Reflect::get(&window, &JsValue::from_str("chrome"))
        .unwrap_or(JsValue::UNDEFINED);
    !chrome.is_undefined() && !chrome.is_null() && (ua.contains("Chrome") || ua.contains("Chromium"))
}

/// Update the scroll custom properties on the table element.
///
/// The host calls this from its horizontal scroll handler; the composited
/// transform path tracks scrolling solely through these two variables, so
/// no per-cell style writes happen during scroll.
#[cfg(target_arch = "wasm32")]
pub fn update_scroll_vars(
    element: &web_sys::HtmlElement,
    scroll_left: f64,
) -> Result<(), JsValue> {
    let style = element.style();
    style.set_property(SCROLL_LEFT_VAR, &format!("{scroll_left}px"))?;
    style.set_property(SCROLL_RIGHT_VAR, &format!("{}px", -scroll_left))?;
    Ok(())
}
