//! Audible completion cue.
//! The terminal bell is the portable fallback; macOS also gets a system beep.

use anyhow::Result;
use std::io::Write;

#[cfg(target_os = "macos")]
use std::process::Command;

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
}

/// A single tone with an exponential gain ramp
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f64,
    pub waveform: Waveform,
    pub start_gain: f64,
    pub end_gain: f64,
    pub duration_secs: f64,
}

/// Played once whenever a work or break interval finishes
pub const COMPLETION_TONE: Tone = Tone {
    frequency_hz: 800.0,
    waveform: Waveform::Sine,
    start_gain: 0.3,
    end_gain: 0.01,
    duration_secs: 0.5,
};

pub trait ToneGenerator {
    fn play_tone(&mut self, tone: &Tone) -> Result<()>;
}

/// Rings the terminal bell
#[derive(Debug, Default)]
pub struct TerminalBell;

impl ToneGenerator for TerminalBell {
    fn play_tone(&mut self, tone: &Tone) -> Result<()> {
        tracing::debug!(
            frequency_hz = tone.frequency_hz,
            waveform = ?tone.waveform,
            start_gain = tone.start_gain,
            end_gain = tone.end_gain,
            duration_secs = tone.duration_secs,
            "Playing completion tone"
        );

        let mut stdout = std::io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()?;

        #[cfg(target_os = "macos")]
        {
            Command::new("osascript").arg("-e").arg("beep").spawn()?;
        }

        Ok(())
    }
}

/// Records every tone instead of playing it
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingTone {
    pub played: std::rc::Rc<std::cell::RefCell<Vec<Tone>>>,
    pub fail: bool,
}

#[cfg(test)]
impl ToneGenerator for RecordingTone {
    fn play_tone(&mut self, tone: &Tone) -> Result<()> {
        self.played.borrow_mut().push(*tone);
        if self.fail {
            anyhow::bail!("audio device unavailable");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_tone_parameters() {
        assert_eq!(COMPLETION_TONE.frequency_hz, 800.0);
        assert_eq!(COMPLETION_TONE.waveform, Waveform::Sine);
        assert_eq!(COMPLETION_TONE.start_gain, 0.3);
        assert_eq!(COMPLETION_TONE.end_gain, 0.01);
        assert_eq!(COMPLETION_TONE.duration_secs, 0.5);
    }
}
