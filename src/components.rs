//! Pure Yew view components for the timer screen.
//!
//! Stateless where possible: everything renders from props and reports user
//! intent through callbacks, so the countdown state stays with the `Main`
//! component that owns the engine.

use crate::config::FINAL_SECONDS_HIGHLIGHT;
use crate::hooks::use_duration_field;
use crate::utils::ClockParts;
use wall_timer::AlertKind;
use yew::prelude::*;

/// Banner line shown above the digits while an alert is active.
fn alert_banner_text(kind: AlertKind, remaining_secs: u32) -> String {
    match kind {
        AlertKind::Ended => "Time Up!".to_string(),
        _ => format!("Only {} Mins Left", remaining_secs / 60),
    }
}

#[derive(Properties, PartialEq)]
pub struct TimerDisplayProps {
    pub remaining_secs: u32,
    pub alert: Option<AlertKind>,
}

/// The big clock: `H:MM:SS` digits with the hours segment hidden at zero,
/// plus the alert banner. The seconds digits turn urgent over the final
/// stretch of the countdown.
#[function_component(TimerDisplay)]
pub fn timer_display(props: &TimerDisplayProps) -> Html {
    let clock = ClockParts::from_secs(props.remaining_secs);
    let seconds_class = (props.remaining_secs <= FINAL_SECONDS_HIGHLIGHT
        && props.remaining_secs > 0)
        .then_some("digits-final");

    html! {
        <div class="timer-display">
            if let Some(kind) = props.alert {
                <div class="alert-banner">
                    { alert_banner_text(kind, props.remaining_secs) }
                </div>
            }
            <div class={classes!("digits", (clock.hours > 0).then_some("digits-with-hours"))}>
                if clock.hours > 0 {
                    <span>{ format!("{}:", clock.hours) }</span>
                }
                <span>{ format!("{:02}", clock.minutes) }</span>
                <span class={classes!(seconds_class)}>{ format!(":{:02}", clock.seconds) }</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ControlBarProps {
    pub is_running: bool,
    pub on_toggle: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_settings: Callback<()>,
}

/// Reset / start-pause / settings buttons under the clock.
#[function_component(ControlBar)]
pub fn control_bar(props: &ControlBarProps) -> Html {
    let on_toggle = props.on_toggle.reform(|_: MouseEvent| ());
    let on_reset = props.on_reset.reform(|_: MouseEvent| ());
    let on_settings = props.on_settings.reform(|_: MouseEvent| ());

    html! {
        <div class="control-bar">
            <button class="btn-secondary" title="Reset" onclick={on_reset}>
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" width="2rem" height="2rem">
                    <path stroke-linecap="round" stroke-linejoin="round" d="M4 4v6h6" />
                    <path stroke-linecap="round" stroke-linejoin="round" d="M4 10a8 8 0 1 0 2.3-5.7" />
                </svg>
            </button>
            <button class={classes!("btn-primary", props.is_running.then_some("running"))}
                title={if props.is_running { "Pause" } else { "Start" }}
                onclick={on_toggle}
            >
                if props.is_running {
                    <svg viewBox="0 0 24 24" fill="currentColor" width="2.5rem" height="2.5rem">
                        <rect x="6" y="4" width="4" height="16" rx="1" />
                        <rect x="14" y="4" width="4" height="16" rx="1" />
                    </svg>
                } else {
                    <svg viewBox="0 0 24 24" fill="currentColor" width="2.5rem" height="2.5rem">
                        <polygon points="7,4 20,12 7,20" />
                    </svg>
                }
            </button>
            <button class="btn-secondary" title="Settings" onclick={on_settings}>
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" width="2rem" height="2rem">
                    <circle cx="12" cy="12" r="3" />
                    <path stroke-linecap="round" d="M12 2v3M12 19v3M2 12h3M19 12h3M4.9 4.9l2.1 2.1M17 17l2.1 2.1M19.1 4.9 17 7M7 17l-2.1 2.1" />
                </svg>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MuteToggleProps {
    pub alerts_enabled: bool,
    pub on_toggle: Callback<()>,
}

/// Top-bar toggle for alert tones. Muting only silences the sink; visual
/// alerts keep firing.
#[function_component(MuteToggle)]
pub fn mute_toggle(props: &MuteToggleProps) -> Html {
    let onclick = props.on_toggle.reform(|_: MouseEvent| ());
    html! {
        <button class="mute-toggle" {onclick}>
            <span class="mute-label">
                { if props.alerts_enabled { "ALERTS ON" } else { "MUTED" } }
            </span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct SettingsModalProps {
    pub initial_secs: u32,
    /// Emitted with `(minutes, seconds)` when the user applies a duration.
    pub on_apply: Callback<(u32, u32)>,
    pub on_close: Callback<()>,
}

/// Duration entry modal. The fields are free text and commit leniently:
/// anything that does not parse as a number applies as 0.
#[function_component(SettingsModal)]
pub fn settings_modal(props: &SettingsModalProps) -> Html {
    let minutes = use_duration_field(props.initial_secs / 60);
    let seconds = use_duration_field(props.initial_secs % 60);

    let on_apply = {
        let on_apply = props.on_apply.clone();
        let minutes_value = minutes.value;
        let seconds_value = seconds.value;
        Callback::from(move |_: MouseEvent| {
            on_apply.emit((minutes_value, seconds_value));
        })
    };
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <h2>{ "Set Duration" }</h2>
                    <button class="modal-close" title="Close" onclick={on_close}>{ "\u{2715}" }</button>
                </div>
                <div class="duration-fields">
                    <div class="form-group">
                        <label for="minutes_input">{ "Minutes" }</label>
                        <input
                            type="number"
                            id="minutes_input"
                            min="0"
                            value={minutes.text.clone()}
                            oninput={minutes.oninput.clone()}
                        />
                    </div>
                    <div class="form-group">
                        <label for="seconds_input">{ "Seconds" }</label>
                        <input
                            type="number"
                            id="seconds_input"
                            min="0"
                            max="59"
                            value={seconds.text.clone()}
                            oninput={seconds.oninput.clone()}
                        />
                    </div>
                </div>
                <button class="btn-apply" onclick={on_apply}>{ "Apply Changes" }</button>
            </div>
        </div>
    }
}
