//! Telemetry interpretation
//!
//! Turns the printer's stage code and HMS list into one [`PrinterState`].
//! The transport layer parses reports; this module only sees complete values.

mod hms;
mod stage;

pub use hms::{FIRST_LAYER_INSPECTION, HmsError, Severity, describe};
pub use stage::{CAMERA_OFF_STAGES, ERROR_STAGES, IDLE_STAGES, StageClass, stage_name};

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Semantic printer state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrinterState {
    /// No connection to the printer
    #[default]
    Disconnected,
    Idle,
    Printing,
    /// Vision system is working, lights must stay dark
    CameraOff,
    Error,
    Warning,
}

impl PrinterState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Idle => "idle",
            Self::Printing => "printing",
            Self::CameraOff => "no_lights",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// One parsed printer report
#[derive(Debug, Clone, Copy)]
pub struct RawTelemetry<'a> {
    pub stage: i32,
    pub hms: &'a [HmsError],
}

impl RawTelemetry<'_> {
    pub fn interpret(&self) -> PrinterState {
        interpret(self.stage, self.hms)
    }
}

/// Interpret a report.
///
/// A non-empty HMS list takes precedence over the stage. Within the list
/// the last entry decides, except that the first-layer inspection code
/// forces [`PrinterState::CameraOff`] and stops the scan.
pub fn interpret(stage: i32, hms: &[HmsError]) -> PrinterState {
    if hms.is_empty() {
        return match StageClass::of(stage) {
            StageClass::Error => PrinterState::Error,
            StageClass::CameraOff => PrinterState::CameraOff,
            StageClass::Idle => PrinterState::Idle,
            StageClass::Printing => PrinterState::Printing,
        };
    }

    let mut state = PrinterState::Error;
    for error in hms {
        #[cfg(feature = "esp32-log")]
        println!(
            "[telemetry] hms {:016x} ({}): {}",
            error.id(),
            error.severity().as_str(),
            error.description().unwrap_or("unknown")
        );

        if error.id() == FIRST_LAYER_INSPECTION {
            state = PrinterState::CameraOff;
            break;
        }

        state = if error.severity().is_fault() {
            PrinterState::Error
        } else {
            PrinterState::Warning
        };
    }
    state
}
