use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use wasm_bindgen::prelude::*;

pub mod animation;
pub mod counter;

use animation::{apply_animation_duration, StyleTarget};
use counter::ApplyCounter;

/// Default calculation parameters
pub mod defaults {
    /// Shortest duration ever produced, in seconds.
    pub const DURATION_FLOOR_SECS: f64 = 0.1;
    /// Substituted for any operand that is zero, NaN or non-finite.
    pub const FALLBACK_VALUE: f64 = 1.0;
}

// Numeric literal grammar accepted by JavaScript's `Number()`
static DECIMAL_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").unwrap());
static RADIX_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0([xXoObB])([0-9a-zA-Z]+)$").unwrap());
static INFINITY_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([+-]?)Infinity$").unwrap());

/// Parse text the way `Number(text)` does: surrounding whitespace is ignored,
/// empty text is `0`, and anything unparseable is `NaN`.
pub fn parse_number(input: &str) -> f64 {
    let trimmed = input.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        return 0.0;
    }

    if DECIMAL_LITERAL.is_match(trimmed) {
        return trimmed.parse().unwrap_or(f64::NAN);
    }

    if let Some(captures) = RADIX_LITERAL.captures(trimmed) {
        let radix = match &captures[1] {
            "x" | "X" => 16,
            "o" | "O" => 8,
            _ => 2,
        };
        // Fold into f64 so long literals lose precision instead of overflowing
        return captures[2]
            .chars()
            .try_fold(0.0_f64, |acc, c| {
                c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
            })
            .unwrap_or(f64::NAN);
    }

    if let Some(captures) = INFINITY_LITERAL.captures(trimmed) {
        return if &captures[1] == "-" {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    f64::NAN
}

/// Anything that can be coerced to a number with `Number()` semantics.
pub trait NumericInput {
    /// The coerced value; `NaN` when coercion fails.
    fn to_number(&self) -> f64;
}

macro_rules! impl_numeric_input_for_primitive {
    ($($t:ty),*) => {
        $(
            impl NumericInput for $t {
                fn to_number(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_numeric_input_for_primitive!(f64, f32, i32, i64, u32, u64, usize);

impl NumericInput for bool {
    fn to_number(&self) -> f64 {
        if *self {
            1.0
        } else {
            0.0
        }
    }
}

impl NumericInput for str {
    fn to_number(&self) -> f64 {
        parse_number(self)
    }
}

impl NumericInput for String {
    fn to_number(&self) -> f64 {
        parse_number(self)
    }
}

/// A missing value behaves like `undefined`.
impl<T: NumericInput> NumericInput for Option<T> {
    fn to_number(&self) -> f64 {
        self.as_ref().map_or(f64::NAN, NumericInput::to_number)
    }
}

impl<T: NumericInput + ?Sized> NumericInput for &T {
    fn to_number(&self) -> f64 {
        (**self).to_number()
    }
}

#[wasm_bindgen]
extern "C" {
    /// The global `Number` function called without `new`.
    #[wasm_bindgen(js_name = Number)]
    fn js_number(value: &JsValue) -> f64;
}

/// Raw values from JavaScript go through the engine's own `Number()`.
impl NumericInput for JsValue {
    fn to_number(&self) -> f64 {
        js_number(self)
    }
}

/// `toFixed` writes values from here on in exponent form.
const FIXED_NOTATION_LIMIT: f64 = 1e21;
/// Beyond this, `seconds * 100` is no longer exact.
const EXACT_HUNDREDTHS_LIMIT: f64 = 9_007_199_254_740_992.0 / 100.0;

/// Render `value` like JavaScript's `value.toFixed(2)`.
///
/// Exact binary ties at the third decimal (x.125, x.375, ...) round up rather
/// than to even. From 1e21 on, the shortest exponent form is used.
fn to_fixed_2(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.abs() >= FIXED_NOTATION_LIMIT {
        // Rust writes `1.5e21`, JavaScript `1.5e+21`
        return format!("{:e}", value).replacen('e', "e+", 1);
    }

    // A tie is exactly k + n/8 with n odd
    let eighths = value * 8.0;
    let is_tie = value > 0.0
        && value < EXACT_HUNDREDTHS_LIMIT
        && eighths.fract() == 0.0
        && eighths % 2.0 == 1.0;
    if is_tie {
        let hundredths = (value * 100.0).ceil() as u64;
        return format!("{}.{:02}", hundredths / 100, hundredths % 100);
    }

    format!("{:.2}", value)
}

/// A duration rendered as `"<seconds>s"` with exactly two fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FormattedDuration(String);

impl FormattedDuration {
    fn from_seconds(seconds: f64) -> Self {
        FormattedDuration(format!("{}s", to_fixed_2(seconds)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FormattedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for FormattedDuration {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FormattedDuration {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<FormattedDuration> for String {
    fn from(duration: FormattedDuration) -> Self {
        duration.0
    }
}

/// Which side of the division an input feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Base,
    Multiplier,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Base => write!(f, "Base duration"),
            Operand::Multiplier => write!(f, "Speed multiplier"),
        }
    }
}

/// Reasons strict duration computation rejects an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationError {
    NotANumber(Operand),
    NotFinite(Operand),
    Zero(Operand),
    Negative(Operand),
}

impl fmt::Display for DurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationError::NotANumber(op) => write!(f, "{} must be a valid number", op),
            DurationError::NotFinite(op) => write!(f, "{} must be finite", op),
            DurationError::Zero(op) => write!(f, "{} cannot be zero", op),
            DurationError::Negative(op) => write!(f, "{} cannot be negative", op),
        }
    }
}

impl std::error::Error for DurationError {}

/// Coerce an operand, substituting [`defaults::FALLBACK_VALUE`] when the
/// result is zero, NaN or infinite. Negative values pass through.
#[inline]
fn coerce_or_fallback(value: impl NumericInput) -> f64 {
    let n = value.to_number();
    if n.is_finite() && n != 0.0 {
        n
    } else {
        defaults::FALLBACK_VALUE
    }
}

#[inline]
fn floored_duration(base: f64, multiplier: f64) -> FormattedDuration {
    FormattedDuration::from_seconds((base / multiplier).max(defaults::DURATION_FLOOR_SECS))
}

/// Compute `max(0.1, base / multiplier)` as a formatted duration.
///
/// Invalid operands never fail: anything that coerces to zero, NaN or an
/// infinity is replaced by `1` before dividing. The number is written the way
/// `toFixed(2)` writes it, including exponent form from 1e21 and `Infinity`
/// for an overflowed quotient.
///
/// # Examples
/// ```
/// use motion_lab::compute_duration;
///
/// assert_eq!(compute_duration(3, 2), "1.50s");
/// assert_eq!(compute_duration(3, 100), "0.10s");
/// assert_eq!(compute_duration("abc", 2), compute_duration(1, 2));
/// ```
pub fn compute_duration(base: impl NumericInput, multiplier: impl NumericInput) -> FormattedDuration {
    floored_duration(coerce_or_fallback(base), coerce_or_fallback(multiplier))
}

fn strict_operand(value: impl NumericInput, operand: Operand) -> Result<f64, DurationError> {
    let n = value.to_number();
    if n.is_nan() {
        Err(DurationError::NotANumber(operand))
    } else if n.is_infinite() {
        Err(DurationError::NotFinite(operand))
    } else if n == 0.0 {
        Err(DurationError::Zero(operand))
    } else if n < 0.0 {
        Err(DurationError::Negative(operand))
    } else {
        Ok(n)
    }
}

/// Like [`compute_duration`], but reports the inputs leniency would rewrite.
///
/// Negative operands are rejected too, even though the lenient path lets
/// them through to the floor.
pub fn try_compute_duration(
    base: impl NumericInput,
    multiplier: impl NumericInput,
) -> Result<FormattedDuration, DurationError> {
    let base = strict_operand(base, Operand::Base)?;
    let multiplier = strict_operand(multiplier, Operand::Multiplier)?;
    Ok(floored_duration(base, multiplier))
}

/// Diagnostic readout of a [`DurationApplier`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplySnapshot {
    pub apply_count: u64,
    pub last_duration: Option<FormattedDuration>,
}

/// `computeDuration(base, multiplier)` for JavaScript callers.
#[wasm_bindgen(js_name = computeDuration)]
pub fn compute_duration_js(base: JsValue, multiplier: JsValue) -> String {
    compute_duration(&base, &multiplier).into_string()
}

/// Applies durations to elements and owns the count of applications.
///
/// JavaScript keeps one instance per page section instead of sharing a
/// global counter.
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct DurationApplier {
    counter: ApplyCounter,
    last_duration: Option<FormattedDuration>,
}

#[wasm_bindgen]
impl DurationApplier {
    #[wasm_bindgen(constructor)]
    pub fn new() -> DurationApplier {
        DurationApplier::default()
    }

    /// Write the computed duration to `element` and return it.
    pub fn apply(&mut self, element: &web_sys::HtmlElement, base: JsValue, multiplier: JsValue) -> String {
        let mut element = element.clone();
        self.apply_to(&mut element, &base, &multiplier).into_string()
    }

    #[wasm_bindgen(getter, js_name = applyCount)]
    pub fn apply_count_js(&self) -> f64 {
        self.counter.get() as f64
    }

    /// `{ applyCount, lastDuration }` as a plain object.
    pub fn snapshot(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.snapshot_data()).unwrap_or(JsValue::NULL)
    }
}

impl DurationApplier {
    pub fn apply_to<T: StyleTarget + ?Sized>(
        &mut self,
        target: &mut T,
        base: impl NumericInput,
        multiplier: impl NumericInput,
    ) -> FormattedDuration {
        let duration = apply_animation_duration(target, &mut self.counter, base, multiplier);
        debug!("applier #{} wrote {}", self.counter.get(), duration);
        self.last_duration = Some(duration.clone());
        duration
    }

    pub fn apply_count(&self) -> u64 {
        self.counter.get()
    }

    pub fn snapshot_data(&self) -> ApplySnapshot {
        ApplySnapshot {
            apply_count: self.counter.get(),
            last_duration: self.last_duration.clone(),
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn js_values_use_number_coercion() {
        assert_eq!(JsValue::from_str(" 0x10 ").to_number(), 16.0);
        assert_eq!(JsValue::from_str("").to_number(), 0.0);
        assert_eq!(JsValue::TRUE.to_number(), 1.0);
        assert_eq!(JsValue::NULL.to_number(), 0.0);
        assert!(JsValue::UNDEFINED.to_number().is_nan());
        assert!(JsValue::from_str("abc").to_number().is_nan());
    }

    #[wasm_bindgen_test]
    fn exported_compute_duration_falls_back() {
        assert_eq!(compute_duration_js(JsValue::from_str("abc"), JsValue::from(2)), "0.50s");
        assert_eq!(compute_duration_js(JsValue::from(3), JsValue::from_str("24")), "0.13s");
        assert_eq!(compute_duration_js(JsValue::NULL, JsValue::UNDEFINED), "1.00s");
    }
}
