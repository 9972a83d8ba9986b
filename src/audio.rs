//! Alert tone output over the Web Audio API.
//!
//! The engine never talks to the browser directly; it reports threshold
//! crossings and the caller asks a [`ToneSink`] for the matching tone. Tone
//! playback is best-effort: if the audio context cannot be created or the
//! oscillator graph fails, the error is logged and the countdown continues.

use crate::AlertKind;
use log::warn;
use std::cell::RefCell;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{AudioContext, AudioContextState};

/// Peak gain of the tone envelope (linear attack, exponential decay).
const PEAK_GAIN: f32 = 0.1;
/// Seconds from silence to peak gain.
const ATTACK_SECS: f64 = 0.05;
/// Exponential ramps cannot reach zero; decay to this instead.
const DECAY_FLOOR: f32 = 0.0001;

/// Oscillator frequency for an alert, in Hz.
pub fn tone_frequency_hz(kind: AlertKind) -> f32 {
    match kind {
        AlertKind::Warning => 660.0,
        AlertKind::Critical => 880.0,
        AlertKind::Ended => 440.0,
    }
}

/// Tone length in seconds; the end-of-countdown tone rings longer.
pub fn tone_duration_secs(kind: AlertKind) -> f64 {
    match kind {
        AlertKind::Warning | AlertKind::Critical => 0.5,
        AlertKind::Ended => 1.5,
    }
}

/// Capability interface for audio output, so the countdown logic can be
/// exercised without a real audio backend.
pub trait ToneSink {
    fn play_tone(&self, freq_hz: f32, kind: AlertKind);
}

/// Sink that plays nothing. Useful in tests and headless contexts.
#[derive(Debug, Default)]
pub struct NullSink;

impl ToneSink for NullSink {
    fn play_tone(&self, _freq_hz: f32, _kind: AlertKind) {}
}

/// [`ToneSink`] backed by a lazily created [`AudioContext`].
///
/// Browsers refuse to start an audio context outside a user gesture, so the
/// context is created on first use and [`unlock`](Self::unlock) should be
/// called from a click handler (the start button) to resume it if the
/// browser left it suspended.
#[derive(Default)]
pub struct WebAudioSink {
    ctx: RefCell<Option<AudioContext>>,
}

impl WebAudioSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&self) -> Option<AudioContext> {
        let mut slot = self.ctx.borrow_mut();
        if slot.is_none() {
            match AudioContext::new() {
                Ok(ctx) => *slot = Some(ctx),
                Err(err) => {
                    warn!("audio context unavailable: {:?}", err);
                    return None;
                }
            }
        }
        slot.clone()
    }

    /// Resume a suspended context. Fire-and-forget; a failed resume only
    /// costs the tone, never the countdown.
    pub fn unlock(&self) {
        let Some(ctx) = self.context() else { return };
        if ctx.state() != AudioContextState::Suspended {
            return;
        }
        match ctx.resume() {
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    warn!("audio context resume failed: {:?}", err);
                }
            }),
            Err(err) => warn!("audio context resume failed: {:?}", err),
        }
    }

    fn build_and_start_tone(
        ctx: &AudioContext,
        freq_hz: f32,
        duration_secs: f64,
    ) -> Result<(), JsValue> {
        let osc = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;
        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        osc.frequency().set_value(freq_hz);

        let now = ctx.current_time();
        let end = now + duration_secs;
        gain.gain().set_value_at_time(0.0, now)?;
        gain.gain()
            .linear_ramp_to_value_at_time(PEAK_GAIN, now + ATTACK_SECS)?;
        gain.gain().exponential_ramp_to_value_at_time(DECAY_FLOOR, end)?;

        osc.start()?;
        osc.stop_with_when(end)?;
        Ok(())
    }
}

impl ToneSink for WebAudioSink {
    fn play_tone(&self, freq_hz: f32, kind: AlertKind) {
        let Some(ctx) = self.context() else { return };
        if let Err(err) = Self::build_and_start_tone(&ctx, freq_hz, tone_duration_secs(kind)) {
            warn!("tone playback failed for {} alert: {:?}", kind, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CountdownEngine, Thresholds};

    /// Sink that records every requested tone instead of playing it.
    #[derive(Default)]
    struct RecordingSink {
        tones: RefCell<Vec<(f32, AlertKind)>>,
    }

    impl ToneSink for RecordingSink {
        fn play_tone(&self, freq_hz: f32, kind: AlertKind) {
            self.tones.borrow_mut().push((freq_hz, kind));
        }
    }

    /// Drive an engine run the way the UI does: one tone request per alert,
    /// gated on the mute flag.
    fn drive(engine: &mut CountdownEngine, sink: &impl ToneSink, alerts_enabled: bool) {
        assert!(engine.start());
        while engine.is_running() {
            if let Some(kind) = engine.tick() {
                if alerts_enabled {
                    sink.play_tone(tone_frequency_hz(kind), kind);
                }
            }
        }
    }

    #[test]
    fn each_alert_maps_to_its_own_frequency() {
        assert_eq!(tone_frequency_hz(AlertKind::Warning), 660.0);
        assert_eq!(tone_frequency_hz(AlertKind::Critical), 880.0);
        assert_eq!(tone_frequency_hz(AlertKind::Ended), 440.0);
    }

    #[test]
    fn end_tone_rings_longer_than_the_others() {
        assert!(tone_duration_secs(AlertKind::Ended) > tone_duration_secs(AlertKind::Warning));
        assert_eq!(
            tone_duration_secs(AlertKind::Warning),
            tone_duration_secs(AlertKind::Critical)
        );
    }

    #[test]
    fn a_full_run_requests_one_tone_per_alert() {
        let sink = RecordingSink::default();
        let mut engine =
            CountdownEngine::with_thresholds(10, Thresholds { warning_secs: 6, critical_secs: 3 });
        drive(&mut engine, &sink, true);
        assert_eq!(
            *sink.tones.borrow(),
            vec![
                (660.0, AlertKind::Warning),
                (880.0, AlertKind::Critical),
                (440.0, AlertKind::Ended),
            ]
        );
    }

    #[test]
    fn countdown_completes_with_a_silent_sink() {
        // Audio output is best-effort; with no backend at all the run
        // still finishes and the alert state still transitions.
        let mut engine =
            CountdownEngine::with_thresholds(10, Thresholds { warning_secs: 6, critical_secs: 3 });
        drive(&mut engine, &NullSink, true);
        assert_eq!(engine.remaining_secs(), 0);
        assert_eq!(engine.alert(), Some(AlertKind::Ended));
    }

    #[test]
    fn muting_suppresses_tones_but_not_alert_state() {
        let sink = RecordingSink::default();
        let mut engine =
            CountdownEngine::with_thresholds(10, Thresholds { warning_secs: 6, critical_secs: 3 });
        drive(&mut engine, &sink, false);
        assert!(sink.tones.borrow().is_empty());
        // The visual alert still transitioned.
        assert_eq!(engine.alert(), Some(AlertKind::Ended));
    }
}
