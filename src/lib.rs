#![no_std]

pub mod channel;
pub mod color;
pub mod effect;
pub mod filter;
pub mod frame_scheduler;
pub mod gamma;
pub mod math8;
pub mod pattern;
pub mod renderer;
pub mod resolver;
pub mod settings;
pub mod status;
pub mod telemetry;
pub mod transition;

pub use filter::{FilterProcessorConfig, WiringOrder};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use gamma::ws2812_lut;
pub use pattern::{Pattern, PatternConfig, PatternKey, PatternTable};
pub use renderer::{Renderer, RendererConfig};
pub use resolver::{LightState, LightStateResolver, Resolution};
pub use settings::{
    LightMode, RenderOverrides, SettingChange, SettingKey, SettingValue, Settings,
    SettingsError, SettingsStore,
};
pub use status::{PrinterStatus, SharedStatus};
pub use telemetry::{HmsError, PrinterState, RawTelemetry, interpret};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Load colors into the strip's buffer
    fn write(&mut self, colors: &[Rgb]);

    /// Latch the loaded colors onto the LEDs
    fn show(&mut self) {}
}
