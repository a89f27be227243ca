//! Main module for the motion lab page using Yew.
//! Wires the duration applier, class toggles and counters into the UI.

use log::{info, warn};
use motion_lab::{
    animation::apply_animation_duration, compute_duration, counter::ApplyCounter,
};
use web_sys::HtmlElement;
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod utils;

use components::{DurationBadge, FlipCard, Loader, SpeedField};
use config::*;
use hooks::{use_click_counter, use_speed_input};
use utils::{duration_badge_text, loader_button_label, restart_class_animation};

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let box_ref = use_node_ref();
    // Owned here instead of a page-wide global; survives re-renders
    let apply_counter = use_mut_ref(ApplyCounter::new);
    let speed = use_speed_input(DEFAULT_SPEED_TEXT);
    let badge_text = use_state(|| {
        duration_badge_text(&compute_duration(DEFAULT_BASE_SECONDS, DEFAULT_SPEED))
    });
    let flipped = use_state(|| false);
    let count_flip = use_click_counter();
    let loader_active = use_state(|| false);

    let on_apply = {
        let box_ref = box_ref.clone();
        let apply_counter = apply_counter.clone();
        let badge_text = badge_text.clone();
        let speed_text = speed.text.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(mut animated_box) = box_ref.cast::<HtmlElement>() else {
                warn!("[apply] animated box is not mounted");
                return;
            };
            let mut counter = apply_counter.borrow_mut();
            let duration = apply_animation_duration(
                &mut animated_box,
                &mut counter,
                DEFAULT_BASE_SECONDS,
                speed_text.as_str(),
            );
            badge_text.set(duration_badge_text(&duration));
            info!("[apply] apply_count={}", counter.get());
        })
    };

    let on_flip = {
        let flipped = flipped.clone();
        Callback::from(move |_: MouseEvent| {
            flipped.set(!*flipped);
            info!("[flip] count={}", count_flip.emit(()));
        })
    };

    let on_pulse = {
        let box_ref = box_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(animated_box) = box_ref.cast::<HtmlElement>() else {
                warn!("[pulse] animated box is not mounted");
                return;
            };
            if let Err(e) = restart_class_animation(&animated_box, PULSE_CLASS) {
                warn!("[pulse] failed to restart animation: {:?}", e);
            }
        })
    };

    let on_toggle_loader = {
        let loader_active = loader_active.clone();
        Callback::from(move |_: MouseEvent| loader_active.set(!*loader_active))
    };

    html! {
        <div class="container">
            <h1>{ "Motion Lab" }</h1>

            <section class="panel">
                <h2>{ "Animation speed" }</h2>
                <div ref={box_ref} id="animatedBox" class="box"></div>
                <SpeedField
                    text={speed.text.clone()}
                    hint={speed.hint.clone().map(AttrValue::from)}
                    min={MIN_SPEED}
                    max={MAX_SPEED}
                    step={SPEED_STEP}
                    oninput={speed.on_text_input.clone()}
                />
                <div class="button-row">
                    <button id="applySpeed" class="btn-primary" onclick={on_apply}>
                        { "Apply Speed" }
                    </button>
                    <button id="pulseBoxBtn" class="btn-secondary" onclick={on_pulse}>
                        { "Pulse Box" }
                    </button>
                    <DurationBadge text={(*badge_text).clone()} />
                </div>
            </section>

            <section class="panel">
                <h2>{ "Card flip" }</h2>
                <FlipCard flipped={*flipped} />
                <button id="flipCardBtn" class="btn-secondary" onclick={on_flip}>
                    { "Flip Card" }
                </button>
            </section>

            <section class="panel">
                <h2>{ "Loader" }</h2>
                <Loader active={*loader_active} />
                <button id="toggleLoaderBtn" class="btn-secondary" onclick={on_toggle_loader}>
                    { loader_button_label(*loader_active) }
                </button>
            </section>
        </div>
    }
}

/// App wrapper.
#[function_component]
pub fn App() -> Html {
    html! {
        <Main />
    }
}

/// Entry point: installs the panic hook and console logger, then renders.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_keeps_click_diagnostics() {
        // `[apply]` and `[flip]` lines are logged at info
        assert!(LOG_LEVEL >= log::Level::Info);
        assert!(log::Level::Info <= LOG_LEVEL.to_level_filter());
    }
}
