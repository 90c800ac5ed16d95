//! Celebration sound playback
//!
//! The app talks to an [`EffectPlayer`] rather than a device so tests
//! can swap in a recording fake. Playback happens on a detached
//! thread; a machine with no audio output logs a warning and the
//! celebration is silently skipped.

use rodio::source::{SineWave, Source};
use rodio::OutputStream;
use std::time::Duration;
use tracing::warn;

pub trait EffectPlayer: Send {
    /// Fire-and-forget; must never block the caller or propagate
    /// failure.
    fn play_celebration(&self);
}

/// Synthesizes the party-popper sound: a short pop overlaid with four
/// ascending chimes starting 100ms apart.
pub struct RodioEffects;

impl EffectPlayer for RodioEffects {
    fn play_celebration(&self) {
        std::thread::spawn(|| {
            let Ok((_stream, handle)) = OutputStream::try_default() else {
                warn!("No audio output device, skipping celebration sound");
                return;
            };

            let pop = tone(800.0, Duration::from_millis(100), 0.3);
            if let Err(err) = handle.play_raw(pop) {
                warn!("Could not play celebration sound: {}", err);
                return;
            }

            for (i, freq) in [600.0, 800.0, 1000.0, 1200.0].into_iter().enumerate() {
                let chime = tone(freq, Duration::from_millis(300), 0.2)
                    .delay(Duration::from_millis(i as u64 * 100));
                if let Err(err) = handle.play_raw(chime) {
                    warn!("Could not play celebration sound: {}", err);
                    return;
                }
            }

            // The stream dies with this thread; wait out the last
            // chime (starts at 300ms, plays for 300ms).
            std::thread::sleep(Duration::from_millis(700));
        });
    }
}

fn tone(freq: f32, duration: Duration, amplitude: f32) -> impl Source<Item = f32> + Send + 'static {
    SineWave::new(freq)
        .take_duration(duration)
        .amplify(amplitude)
}
