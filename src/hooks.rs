use crate::utils::speed_input_hint;
use motion_lab::counter::ClickCounter;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Holds the state and callbacks for the speed multiplier field.
#[derive(Clone, PartialEq)]
pub struct SpeedInput {
    /// The current text content of the input field, applied as-is.
    pub text: String,
    /// Strict validation hint; `None` when the text is a usable multiplier.
    pub hint: Option<String>,
    /// Callback for the text input's `oninput` event.
    pub on_text_input: Callback<InputEvent>,
}

/// Custom hook tracking the raw speed text.
///
/// The text is never rejected; the hint only explains what leniency will do
/// with it.
#[hook]
pub fn use_speed_input(initial_text: &'static str) -> SpeedInput {
    let text_state_handle = use_state(|| initial_text.to_string());

    let on_text_input = {
        let text_setter = text_state_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text_setter.set(input.value());
        })
    };

    let text = (*text_state_handle).clone();
    SpeedInput {
        hint: speed_input_hint(&text),
        text,
        on_text_input,
    }
}

/// Custom hook owning a [`ClickCounter`] for the component's lifetime.
///
/// Emitting the returned callback increments the counter and yields the new
/// count.
#[hook]
pub fn use_click_counter() -> Callback<(), u32> {
    let counter = use_mut_ref(ClickCounter::new);
    use_callback((), move |_, _| counter.borrow_mut().increment())
}
