//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::renderer::{Renderer, RendererConfig};
use crate::resolver::{LightState, LightStateResolver};
use crate::settings::SettingsStore;
use crate::status::SharedStatus;
use crate::telemetry::PrinterState;
use crate::OutputDriver;

/// Default frame duration (~60 FPS).
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(16);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// State resolved for this frame.
    pub light_state: LightState,
    /// Whether pixels were sent to the driver.
    pub written: bool,
}

/// The render task: status -> resolver -> renderer -> driver.
///
/// This is the only writer of the pixel output and the only owner of the
/// resolver's memory. Telemetry and configuration reach it through
/// [`SharedStatus`] and [`SettingsStore`], which it re-reads every frame.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(driver, &STATUS, &SETTINGS, &RendererConfig::default());
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     Timer::after(result.sleep_duration).await;
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputDriver, const MAX_LEDS: usize, const CHANGES: usize> {
    output: O,
    renderer: Renderer<MAX_LEDS>,
    resolver: LightStateResolver,
    status: &'a SharedStatus,
    settings: &'a SettingsStore<CHANGES>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: OutputDriver, const MAX_LEDS: usize, const CHANGES: usize>
    FrameScheduler<'a, O, MAX_LEDS, CHANGES>
{
    /// Create a new frame scheduler using `DEFAULT_FRAME_DURATION`.
    pub fn new(
        driver: O,
        status: &'a SharedStatus,
        settings: &'a SettingsStore<CHANGES>,
        config: &RendererConfig,
    ) -> Self {
        Self::with_frame_duration(driver, status, settings, config, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        driver: O,
        status: &'a SharedStatus,
        settings: &'a SettingsStore<CHANGES>,
        config: &RendererConfig,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            renderer: Renderer::new(config),
            resolver: LightStateResolver::new(),
            status,
            settings,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Resolves the light state from the current status and settings
    /// 3. Renders the frame and writes it if it changed
    /// 4. Returns the deadline for the next frame
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        let status = self.status.get();
        let mut settings = self.settings.snapshot();
        let resolution = self.resolver.resolve(&status, &settings.overrides, now);
        if let Some(on) = resolution.light_on_sync {
            self.settings.set_light_on(on);
            settings.overrides.light_on = on;
        }

        let written = match self.renderer.render(resolution.state, &settings, now) {
            Some(frame) => {
                self.output.write(frame);
                self.output.show();
                true
            }
            None => false,
        };

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            light_state: resolution.state,
            written,
        }
    }

    /// Light state resolved on the last frame
    pub const fn light_state(&self) -> LightState {
        self.resolver.current()
    }

    /// Printer state as currently reported
    pub fn printer_state(&self) -> PrinterState {
        self.status.get().printer
    }

    pub fn renderer(&self) -> &Renderer<MAX_LEDS> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer<MAX_LEDS> {
        &mut self.renderer
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
