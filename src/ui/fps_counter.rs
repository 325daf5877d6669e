//! Frame-rate badge.
//!
//! Renders a measured rate as a rounded pill: `"07 fps"`, `"43 fps"`,
//! `"100 fps"`. The component keeps no state; the parent recomputes the
//! value and re-renders.

use dioxus::dioxus_core::Attribute;
use dioxus::prelude::*;

/// Minimum number of digits shown before the suffix.
pub const MIN_DIGITS: usize = 2;

/// Base presentation of the badge: small type, padding, pill shape, dark
/// background, white centered text.
pub const BASE_CLASSES: [&str; 7] = [
    "text-sm",
    "py-2",
    "px-5",
    "bg-slate-600",
    "text-white",
    "text-center",
    "rounded-full",
];

/// Text shown for a rate. Rounds half away from zero, pads to two digits.
/// Negative rates read as zero; NaN and infinities show `--`.
pub fn format_fps(value: f64) -> String {
    if !value.is_finite() {
        return "-- fps".to_string();
    }
    let rounded = if value > 0.0 { value.round() } else { 0.0 };
    format!("{:0width$.0} fps", rounded, width = MIN_DIGITS)
}

/// Caller class first, then the base classes.
pub fn badge_class(extra: Option<&str>) -> String {
    let mut classes: Vec<&str> = Vec::with_capacity(BASE_CLASSES.len() + 1);
    if let Some(extra) = extra.map(str::trim).filter(|c| !c.is_empty()) {
        classes.push(extra);
    }
    classes.extend(BASE_CLASSES);
    classes.join(" ")
}

/// Builds a passthrough attribute for [`FpsCounter`], e.g. `data-testid` or `aria-label`.
pub fn passthrough(name: &'static str, value: impl Into<String>) -> Attribute {
    let value: String = value.into();
    Attribute::new(name, value, None, false)
}

/// Read-only frame-rate badge.
///
/// `class` is merged in front of the base classes; `attributes` are
/// forwarded to the root element as-is (use `class` for classes).
#[component]
pub fn FpsCounter(
    value: f64,
    #[props(default, into)] class: String,
    #[props(default)] attributes: Vec<Attribute>,
) -> Element {
    let class = badge_class(Some(class.as_str()));
    let text = format_fps(value);
    rsx! {
        div {
            class: "{class}",
            ..attributes,
            "{text}"
        }
    }
}
