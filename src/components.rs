//! Pure Yew view components for the motion lab page.
//!
//! These components render from props only; the interactive state lives in
//! `Main`.

use crate::config::{FLIPPED_CLASS, LOADER_ACTIVE_CLASS};
use crate::utils::loader_aria_hidden;
use yew::prelude::*;

/// Badge showing the last computed duration.
#[derive(Properties, PartialEq)]
pub struct DurationBadgeProps {
    pub text: AttrValue,
}

#[function_component(DurationBadge)]
pub fn duration_badge(props: &DurationBadgeProps) -> Html {
    html! {
        <span id="computedDuration" class="badge">{ props.text.clone() }</span>
    }
}

/// Speed multiplier field with its validation hint.
#[derive(Properties, PartialEq)]
pub struct SpeedFieldProps {
    pub text: AttrValue,
    pub hint: Option<AttrValue>,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub oninput: Callback<InputEvent>,
}

#[function_component(SpeedField)]
pub fn speed_field(props: &SpeedFieldProps) -> Html {
    html! {
        <div class="form-group">
            <label for="speed">{ "Speed multiplier:" }</label>
            <input
                type="number"
                id="speed"
                min={props.min.to_string()}
                max={props.max.to_string()}
                step={props.step.to_string()}
                value={props.text.clone()}
                class={if props.hint.is_some() { "invalid" } else { "" }}
                oninput={props.oninput.clone()}
            />
            if let Some(hint) = &props.hint {
                <div class="input-hint">{ hint.clone() }</div>
            }
        </div>
    }
}

/// Two-sided card; the back shows while `flipped` is set.
#[derive(Properties, PartialEq)]
pub struct FlipCardProps {
    pub flipped: bool,
}

#[function_component(FlipCard)]
pub fn flip_card(props: &FlipCardProps) -> Html {
    html! {
        <div class="card-scene">
            <div id="card" class={classes!("card", props.flipped.then_some(FLIPPED_CLASS))}>
                <div class="card-face card-front">{ "Front" }</div>
                <div class="card-face card-back">{ "Back" }</div>
            </div>
        </div>
    }
}

/// Spinner that only animates while `active`.
#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    pub active: bool,
}

#[function_component(Loader)]
pub fn loader(props: &LoaderProps) -> Html {
    html! {
        <div
            id="loader"
            class={classes!("loader", props.active.then_some(LOADER_ACTIVE_CLASS))}
            aria-hidden={loader_aria_hidden(props.active)}
        ></div>
    }
}
