//! Light state resolution
//!
//! Combines the printer status with user overrides into the single
//! [`LightState`] the renderer shows. Holds the memory that needs more than
//! one tick: the finished dwell and the door / chamber light edges.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::pattern::PatternKey;
use crate::settings::{LightMode, RenderOverrides};
use crate::status::PrinterStatus;
use crate::telemetry::PrinterState;

/// What the strip is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightState {
    #[default]
    NoWifi,
    NoPrinter,
    PrinterIdle,
    Printing,
    /// Strip dark
    Off,
    /// Plain white work light
    White,
    Warning,
    Error,
    /// A print just completed
    Finished,
}

impl LightState {
    /// Pattern configuration used by this state; `Off` and `White` have none
    pub const fn pattern_key(self) -> Option<PatternKey> {
        match self {
            Self::NoWifi => Some(PatternKey::NoWifi),
            Self::NoPrinter => Some(PatternKey::NoPrinter),
            Self::PrinterIdle => Some(PatternKey::PrinterIdle),
            Self::Printing => Some(PatternKey::Printing),
            Self::Warning => Some(PatternKey::Warning),
            Self::Error => Some(PatternKey::Error),
            Self::Finished => Some(PatternKey::Finished),
            Self::Off | Self::White => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoWifi => "no_wifi",
            Self::NoPrinter => "no_printer",
            Self::PrinterIdle => "printer_idle",
            Self::Printing => "printing",
            Self::Off => "off",
            Self::White => "white",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Finished => "finished",
        }
    }
}

/// Result of one resolver tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub state: LightState,
    /// New `light_on` value to store when chamber sync fired this tick
    pub light_on_sync: Option<bool>,
}

/// Per-tick light state machine
#[derive(Debug, Clone, Default)]
pub struct LightStateResolver {
    /// Last state before overrides were applied
    previous: LightState,
    /// Start of the finished dwell, if one is running
    finished_since: Option<Instant>,
    door_was_open: bool,
    /// `None` until the chamber light has been observed once
    chamber_light_was_on: Option<bool>,
    current: LightState,
}

impl LightStateResolver {
    pub const fn new() -> Self {
        Self {
            previous: LightState::NoWifi,
            finished_since: None,
            door_was_open: false,
            chamber_light_was_on: None,
            current: LightState::NoWifi,
        }
    }

    /// Most recently resolved state
    pub const fn current(&self) -> LightState {
        self.current
    }

    pub const fn in_finished_dwell(&self) -> bool {
        self.finished_since.is_some()
    }

    /// Resolve the light state for this tick
    pub fn resolve(
        &mut self,
        status: &PrinterStatus,
        overrides: &RenderOverrides,
        now: Instant,
    ) -> Resolution {
        let door_opened = status.door_open && !self.door_was_open;
        self.door_was_open = status.door_open;

        let light_on_sync = self.sync_chamber_light(status.chamber_light_on, overrides);
        let light_on = light_on_sync.unwrap_or(overrides.light_on);

        let state = if status.wifi_connected {
            let state = self.resolve_printer(status.printer, overrides, door_opened, now);
            self.previous = state;
            Self::apply_overrides(state, light_on, overrides.light_mode)
        } else {
            LightState::NoWifi
        };

        if state != self.current {
            #[cfg(feature = "esp32-log")]
            println!(
                "[resolver] {} -> {}",
                self.current.as_str(),
                state.as_str()
            );
            self.current = state;
        }

        Resolution {
            state,
            light_on_sync,
        }
    }

    fn resolve_printer(
        &mut self,
        printer: PrinterState,
        overrides: &RenderOverrides,
        door_opened: bool,
        now: Instant,
    ) -> LightState {
        if printer != PrinterState::Idle {
            self.finished_since = None;
        }

        match printer {
            PrinterState::Disconnected => LightState::NoPrinter,
            PrinterState::Idle => {
                self.resolve_idle(overrides.idle_timeout_minutes, door_opened, now)
            }
            PrinterState::Printing => LightState::Printing,
            PrinterState::CameraOff => LightState::Off,
            PrinterState::Warning => LightState::Warning,
            PrinterState::Error => LightState::Error,
        }
    }

    fn resolve_idle(
        &mut self,
        timeout_minutes: u8,
        door_opened: bool,
        now: Instant,
    ) -> LightState {
        if timeout_minutes == 0 {
            self.finished_since = None;
            return LightState::PrinterIdle;
        }

        let Some(since) = self.finished_since else {
            // Opening the door as the print ends skips the dwell
            if self.previous == LightState::Printing && !door_opened {
                self.finished_since = Some(now);
                return LightState::Finished;
            }
            return LightState::PrinterIdle;
        };

        let timeout = Duration::from_secs(u64::from(timeout_minutes) * 60);
        let elapsed = now
            .checked_duration_since(since)
            .unwrap_or(Duration::from_millis(0));
        if door_opened || elapsed >= timeout {
            self.finished_since = None;
            LightState::PrinterIdle
        } else {
            LightState::Finished
        }
    }

    /// Edge-triggered mirror of the printer's chamber light.
    ///
    /// An unknown reading clears the baseline, so the first report after
    /// (re)connecting never counts as a toggle.
    fn sync_chamber_light(
        &mut self,
        chamber_light_on: Option<bool>,
        overrides: &RenderOverrides,
    ) -> Option<bool> {
        let Some(chamber_light_on) = chamber_light_on else {
            self.chamber_light_was_on = None;
            return None;
        };
        let previous = self.chamber_light_was_on.replace(chamber_light_on)?;
        if !overrides.chamber_sync || previous == chamber_light_on {
            return None;
        }
        #[cfg(feature = "esp32-log")]
        println!("[resolver] chamber light sync -> {}", chamber_light_on);
        Some(chamber_light_on)
    }

    const fn apply_overrides(state: LightState, light_on: bool, mode: LightMode) -> LightState {
        if !light_on {
            LightState::Off
        } else if matches!(mode, LightMode::White) {
            LightState::White
        } else {
            state
        }
    }
}
