//! Main module for the Wall Timer application using Yew.
//! Wires the countdown engine, the tick/alert scheduling, and the UI.

use gloo_timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::Rc;
use wall_timer::{
    audio::{tone_frequency_hz, ToneSink, WebAudioSink},
    AlertKind, CountdownEngine,
};
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod utils;

use components::{ControlBar, MuteToggle, SettingsModal, TimerDisplay};
use config::{ALERT_DISPLAY_MS, APP_TITLE, TICK_MS};
use utils::format_clock;

/// Mirror the engine's revision counter into Yew state to trigger a
/// re-render. Reads the counter through the cell so it is fresh even from
/// long-lived timer closures.
fn sync_view(engine: &Rc<RefCell<CountdownEngine>>, engine_rev: &UseStateHandle<u64>) {
    engine_rev.set(engine.borrow().revision());
}

/// Primary application component owning the engine and its scheduling.
///
/// The engine lives in a `use_mut_ref` cell so the interval and timeout
/// closures always see current state; `engine_rev` is the render trigger.
/// At most one tick interval and one pending alert clear exist at a time,
/// and both cancel on drop.
#[function_component(Main)]
fn main_component() -> Html {
    let engine = use_mut_ref(CountdownEngine::default);
    let engine_rev = use_state(|| 0u64);
    let alerts_enabled = use_state(|| true);
    let settings_open = use_state(|| false);
    let sink = use_mut_ref(WebAudioSink::new);
    // Pending auto-clear for the current transient alert. Replacing or
    // clearing the slot cancels the scheduled callback.
    let clear_timer = use_mut_ref(|| None::<Timeout>);

    // Re-render whenever the engine changes.
    let _ = *engine_rev;
    let (remaining_secs, is_running, alert, initial_secs) = {
        let e = engine.borrow();
        (e.remaining_secs(), e.is_running(), e.alert(), e.initial_secs())
    };

    // Drive the 1 s tick while running. Keyed on the mute flag as well so
    // the tick closure never plays from a stale setting.
    {
        let engine = engine.clone();
        let engine_rev = engine_rev.clone();
        let sink = sink.clone();
        let clear_timer = clear_timer.clone();
        use_effect_with((is_running, *alerts_enabled), move |&(running, alerts_on)| {
            let tick_handle = running.then(|| {
                Interval::new(TICK_MS, move || {
                    let crossed = engine.borrow_mut().tick();
                    if let Some(kind) = crossed {
                        if alerts_on {
                            sink.borrow().play_tone(tone_frequency_hz(kind), kind);
                        }
                        if kind.is_transient() {
                            let generation = engine.borrow().alert_generation();
                            let engine_for_clear = engine.clone();
                            let engine_rev_for_clear = engine_rev.clone();
                            let handle = Timeout::new(ALERT_DISPLAY_MS, move || {
                                // The generation check makes a clear that
                                // outlived its alert a no-op.
                                if engine_for_clear.borrow_mut().clear_alert(generation) {
                                    sync_view(&engine_for_clear, &engine_rev_for_clear);
                                }
                            });
                            *clear_timer.borrow_mut() = Some(handle);
                        }
                    }
                    sync_view(&engine, &engine_rev);
                })
            });
            move || drop(tick_handle)
        });
    }

    // Show the remaining time in the tab title while running.
    {
        use_effect_with((remaining_secs, is_running), move |&(remaining, running)| {
            let title = if running {
                format!("{} \u{00b7} {}", format_clock(remaining), APP_TITLE)
            } else {
                APP_TITLE.to_string()
            };
            gloo_utils::document().set_title(&title);
            || ()
        });
    }

    let on_toggle = {
        let engine = engine.clone();
        let engine_rev = engine_rev.clone();
        let sink = sink.clone();
        Callback::from(move |_: ()| {
            {
                let mut e = engine.borrow_mut();
                if e.is_running() {
                    e.pause();
                } else if e.start() {
                    // Audio contexts start suspended until a user gesture;
                    // the start click is that gesture.
                    sink.borrow().unlock();
                }
            }
            sync_view(&engine, &engine_rev);
        })
    };

    let on_reset = {
        let engine = engine.clone();
        let engine_rev = engine_rev.clone();
        let clear_timer = clear_timer.clone();
        Callback::from(move |_: ()| {
            engine.borrow_mut().reset();
            *clear_timer.borrow_mut() = None;
            sync_view(&engine, &engine_rev);
        })
    };

    let on_apply = {
        let engine = engine.clone();
        let engine_rev = engine_rev.clone();
        let clear_timer = clear_timer.clone();
        let settings_open = settings_open.clone();
        Callback::from(move |(minutes, seconds): (u32, u32)| {
            engine.borrow_mut().apply_duration(minutes, seconds);
            *clear_timer.borrow_mut() = None;
            settings_open.set(false);
            sync_view(&engine, &engine_rev);
        })
    };

    let on_mute_toggle = {
        let alerts_enabled = alerts_enabled.clone();
        Callback::from(move |_: ()| {
            alerts_enabled.set(!*alerts_enabled);
        })
    };

    let on_open_settings = {
        let settings_open = settings_open.clone();
        Callback::from(move |_: ()| settings_open.set(true))
    };
    let on_close_settings = {
        let settings_open = settings_open.clone();
        Callback::from(move |_: ()| settings_open.set(false))
    };

    let bg_class = match alert {
        Some(AlertKind::Warning) => "bg-warning",
        Some(AlertKind::Critical) => "bg-critical",
        Some(AlertKind::Ended) => "bg-ended",
        None => "bg-idle",
    };

    html! {
        <div class={classes!("screen", bg_class)}>
            <div class="top-bar">
                <MuteToggle alerts_enabled={*alerts_enabled} on_toggle={on_mute_toggle} />
            </div>
            <TimerDisplay {remaining_secs} {alert} />
            <ControlBar
                {is_running}
                on_toggle={on_toggle}
                on_reset={on_reset}
                on_settings={on_open_settings}
            />
            if *settings_open {
                <SettingsModal
                    {initial_secs}
                    on_apply={on_apply}
                    on_close={on_close_settings}
                />
            }
        </div>
    }
}

/// App wrapper; kept separate so the root component stays trivial.
#[function_component]
pub fn App() -> Html {
    html! { <Main /> }
}

/// Entry point: installs the panic hook and mounts the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
