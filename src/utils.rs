use crate::config::{
    DEFAULT_BASE_SECONDS, DURATION_BADGE_PREFIX, START_LOADER_LABEL, STOP_LOADER_LABEL,
};
use motion_lab::{compute_duration, try_compute_duration, FormattedDuration};
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

/// Badge text shown next to the animated box.
pub fn duration_badge_text(duration: &FormattedDuration) -> String {
    format!("{}{}", DURATION_BADGE_PREFIX, duration)
}

/// Validate the raw speed field against the strict rules.
///
/// Returns `None` when the text is a usable multiplier, otherwise a hint that
/// names the problem and the duration that will be applied anyway.
pub fn speed_input_hint(input: &str) -> Option<String> {
    match try_compute_duration(DEFAULT_BASE_SECONDS, input) {
        Ok(_) => None,
        Err(err) => Some(format!(
            "{} (applies as {})",
            err,
            compute_duration(DEFAULT_BASE_SECONDS, input)
        )),
    }
}

/// Label for the loader toggle button.
pub fn loader_button_label(active: bool) -> &'static str {
    if active {
        STOP_LOADER_LABEL
    } else {
        START_LOADER_LABEL
    }
}

/// `aria-hidden` value for the loader.
pub fn loader_aria_hidden(active: bool) -> &'static str {
    if active {
        "false"
    } else {
        "true"
    }
}

/// Restart a CSS animation driven by `class`.
///
/// Removing and re-adding the class in the same frame is a no-op for the
/// browser, so a layout read in between forces the restyle.
pub fn restart_class_animation(element: &HtmlElement, class: &str) -> Result<(), JsValue> {
    let classes = element.class_list();
    classes.remove_1(class)?;
    let _ = element.offset_width();
    classes.add_1(class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_prefixes_duration() {
        let duration = compute_duration(DEFAULT_BASE_SECONDS, 2);
        assert_eq!(duration_badge_text(&duration), "duration: 1.50s");
    }

    #[test]
    fn initial_badge_uses_defaults() {
        let duration = compute_duration(DEFAULT_BASE_SECONDS, crate::config::DEFAULT_SPEED);
        assert_eq!(duration_badge_text(&duration), "duration: 3.00s");
    }

    #[test]
    fn valid_speed_has_no_hint() {
        assert_eq!(speed_input_hint("1.5"), None);
        assert_eq!(speed_input_hint(" 40 "), None);
    }

    #[test]
    fn invalid_speed_hint_shows_applied_value() {
        assert_eq!(
            speed_input_hint("fast").as_deref(),
            Some("Speed multiplier must be a valid number (applies as 3.00s)")
        );
        assert_eq!(
            speed_input_hint("").as_deref(),
            Some("Speed multiplier cannot be zero (applies as 3.00s)")
        );
        assert_eq!(
            speed_input_hint("-2").as_deref(),
            Some("Speed multiplier cannot be negative (applies as 0.10s)")
        );
    }

    #[test]
    fn loader_labels_follow_state() {
        assert_eq!(loader_button_label(true), "Stop Loader");
        assert_eq!(loader_button_label(false), "Start Loader");
        assert_eq!(loader_aria_hidden(true), "false");
        assert_eq!(loader_aria_hidden(false), "true");
    }
}
