//! Loading, validating and saving the work/break durations.

use crate::domain::Durations;
use crate::persistence::SettingsStore;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Store key of the settings record
pub const SETTINGS_KEY: &str = "pomodoroSettings";

pub const DEFAULT_WORK_MINUTES: f64 = 25.0;
pub const DEFAULT_BREAK_MINUTES: f64 = 5.0;

pub const WORK_MINUTES_RANGE: RangeInclusive<f64> = 0.1..=60.0;
pub const BREAK_MINUTES_RANGE: RangeInclusive<f64> = 0.1..=30.0;

/// What an empty or unreadable input field counts as
const FALLBACK_INPUT_MINUTES: f64 = 0.1;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Please enter valid durations (Work: 0.1-60 min, Break: 0.1-30 min)")]
    OutOfRange {
        session_minutes: f64,
        break_minutes: f64,
    },
    #[error("Could not save settings: {reason}")]
    Persist { reason: String },
}

/// Persisted record, durations in decimal minutes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_duration: Option<f64>,
}

/// Convert decimal minutes to whole seconds, rounding to nearest
pub fn minutes_to_seconds(minutes: f64) -> i64 {
    (minutes * 60.0).round() as i64
}

/// Seconds as minutes with one decimal, the way the settings form shows them
pub fn format_minutes(seconds: i64) -> String {
    format!("{:.1}", seconds as f64 / 60.0)
}

/// Read a minutes field. Unparsable or zero input counts as 0.1.
pub fn parse_minutes(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|m| !m.is_nan() && *m != 0.0)
        .unwrap_or(FALLBACK_INPUT_MINUTES)
}

fn field_seconds(minutes: Option<f64>, default_minutes: f64) -> i64 {
    minutes
        .filter(|m| m.is_finite() && *m > 0.0)
        .map(minutes_to_seconds)
        .filter(|secs| *secs > 0)
        .unwrap_or_else(|| minutes_to_seconds(default_minutes))
}

/// Durations from the store, or the 25/5 defaults when the record is missing or malformed
pub fn load_durations(store: &dyn SettingsStore) -> Durations {
    let Some(raw) = store.get(SETTINGS_KEY) else {
        tracing::debug!("No saved settings found, using defaults");
        return Durations::default();
    };

    match serde_json::from_str::<PersistedSettings>(&raw) {
        Ok(record) => {
            let durations = Durations {
                session_secs: field_seconds(record.session_duration, DEFAULT_WORK_MINUTES),
                break_secs: field_seconds(record.break_duration, DEFAULT_BREAK_MINUTES),
            };
            tracing::debug!(
                session_secs = durations.session_secs,
                break_secs = durations.break_secs,
                "Loaded saved settings"
            );
            durations
        }
        Err(e) => {
            tracing::warn!("Malformed saved settings, using defaults: {}", e);
            Durations::default()
        }
    }
}

pub fn validate(session_minutes: f64, break_minutes: f64) -> Result<(), SettingsError> {
    if WORK_MINUTES_RANGE.contains(&session_minutes) && BREAK_MINUTES_RANGE.contains(&break_minutes) {
        Ok(())
    } else {
        Err(SettingsError::OutOfRange {
            session_minutes,
            break_minutes,
        })
    }
}

/// Validate and persist new durations. Nothing is written on rejection.
pub fn save_durations(
    store: &mut dyn SettingsStore,
    session_minutes: f64,
    break_minutes: f64,
) -> Result<Durations, SettingsError> {
    validate(session_minutes, break_minutes)?;

    let record = PersistedSettings {
        session_duration: Some(session_minutes),
        break_duration: Some(break_minutes),
    };
    let json = serde_json::to_string(&record).map_err(|e| SettingsError::Persist {
        reason: e.to_string(),
    })?;
    store
        .set(SETTINGS_KEY, &json)
        .map_err(|e| SettingsError::Persist {
            reason: format!("{:#}", e),
        })?;

    tracing::info!(session_minutes, break_minutes, "Settings saved");
    Ok(Durations {
        session_secs: minutes_to_seconds(session_minutes),
        break_secs: minutes_to_seconds(break_minutes),
    })
}
