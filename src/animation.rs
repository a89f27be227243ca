//! Writing computed durations onto animation targets.

use crate::counter::ApplyCounter;
use crate::{compute_duration, FormattedDuration, NumericInput};
use log::{debug, warn};
use web_sys::HtmlElement;

/// CSS property receiving the duration.
pub const ANIMATION_DURATION_PROPERTY: &str = "animation-duration";

/// Anything with a settable animation duration. Implementors are owned by
/// the caller; this module only writes to them.
pub trait StyleTarget {
    fn set_animation_duration(&mut self, duration: &FormattedDuration);
}

impl StyleTarget for HtmlElement {
    fn set_animation_duration(&mut self, duration: &FormattedDuration) {
        if let Err(e) = self
            .style()
            .set_property(ANIMATION_DURATION_PROPERTY, duration.as_str())
        {
            warn!("Failed to set {}: {:?}", ANIMATION_DURATION_PROPERTY, e);
        }
    }
}

/// Compute the duration, write it to `target` and count the application.
///
/// Every call increments `counter` by exactly one, whatever the inputs were,
/// since invalid inputs are normalised by [`compute_duration`].
pub fn apply_animation_duration<T>(
    target: &mut T,
    counter: &mut ApplyCounter,
    base: impl NumericInput,
    multiplier: impl NumericInput,
) -> FormattedDuration
where
    T: StyleTarget + ?Sized,
{
    let duration = compute_duration(base, multiplier);
    target.set_animation_duration(&duration);
    let count = counter.increment();
    debug!("Applied {} (application {})", duration, count);
    duration
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeStyle {
        animation_duration: Option<String>,
        writes: usize,
    }

    impl StyleTarget for FakeStyle {
        fn set_animation_duration(&mut self, duration: &FormattedDuration) {
            self.animation_duration = Some(duration.to_string());
            self.writes += 1;
        }
    }

    #[test]
    fn writes_and_returns_the_same_duration() {
        let mut style = FakeStyle::default();
        let mut counter = ApplyCounter::new();

        let duration = apply_animation_duration(&mut style, &mut counter, 3, 2);

        assert_eq!(duration, "1.50s");
        assert_eq!(style.animation_duration.as_deref(), Some("1.50s"));
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn counts_every_call_regardless_of_input() {
        let mut style = FakeStyle::default();
        let mut counter = ApplyCounter::new();
        let speeds = ["2", "", "abc", "0", "-4", "Infinity", "0.5"];

        for speed in speeds {
            apply_animation_duration(&mut style, &mut counter, 3, speed);
        }

        assert_eq!(counter.get(), speeds.len() as u64);
        assert_eq!(style.writes, speeds.len());
        assert_eq!(style.animation_duration.as_deref(), Some("6.00s"));
    }

    #[test]
    fn counter_continues_from_its_current_value() {
        let mut style = FakeStyle::default();
        let mut counter = ApplyCounter::new();
        counter.increment();
        counter.increment();

        apply_animation_duration(&mut style, &mut counter, 1, 1);
        assert_eq!(counter.get(), 3);
    }

    #[test]
    fn works_through_a_trait_object() {
        let mut style = FakeStyle::default();
        let target: &mut dyn StyleTarget = &mut style;
        let mut counter = ApplyCounter::new();

        let duration = apply_animation_duration(target, &mut counter, 3, 100);
        assert_eq!(duration, "0.10s");
        assert_eq!(style.animation_duration.as_deref(), Some("0.10s"));
    }
}
