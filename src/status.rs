//! Printer status shared between the telemetry task and the render task.
//!
//! The whole status is one `Copy` value replaced inside a critical section,
//! so the render task always reads a consistent snapshot.

use core::cell::Cell;

use critical_section::Mutex;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::telemetry::{PrinterState, RawTelemetry};

/// Everything the resolver needs to know about the printer and the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrinterStatus {
    pub wifi_connected: bool,
    pub printer: PrinterState,
    pub door_open: bool,
    /// `None` until the printer has reported it
    pub chamber_light_on: Option<bool>,
}

/// Printer status cell written by the I/O task
pub struct SharedStatus {
    inner: Mutex<Cell<PrinterStatus>>,
}

impl SharedStatus {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(PrinterStatus {
                wifi_connected: false,
                printer: PrinterState::Disconnected,
                door_open: false,
                chamber_light_on: None,
            })),
        }
    }

    /// Read the current status
    pub fn get(&self) -> PrinterStatus {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }

    fn update(&self, change: impl FnOnce(&mut PrinterStatus)) {
        critical_section::with(|cs| {
            let cell = self.inner.borrow(cs);
            let mut status = cell.get();
            change(&mut status);
            cell.set(status);
        });
    }

    pub fn set_wifi_connected(&self, connected: bool) {
        self.update(|status| status.wifi_connected = connected);
    }

    /// The printer's broker accepted us; idle until the first report
    pub fn printer_connected(&self) {
        self.update(|status| {
            status.printer = PrinterState::Idle;
            status.chamber_light_on = None;
        });
    }

    pub fn printer_disconnected(&self) {
        self.update(|status| {
            status.printer = PrinterState::Disconnected;
            status.chamber_light_on = None;
        });
    }

    /// Interpret a report and store the resulting printer state
    pub fn apply_telemetry(&self, telemetry: &RawTelemetry<'_>) -> PrinterState {
        let state = telemetry.interpret();
        #[cfg(feature = "esp32-log")]
        println!(
            "[status] stage {} -> {}",
            telemetry.stage,
            state.as_str()
        );
        self.update(|status| status.printer = state);
        state
    }

    pub fn set_door_open(&self, open: bool) {
        self.update(|status| status.door_open = open);
    }

    pub fn set_chamber_light_on(&self, on: bool) {
        self.update(|status| status.chamber_light_on = Some(on));
    }
}

impl Default for SharedStatus {
    fn default() -> Self {
        Self::new()
    }
}
