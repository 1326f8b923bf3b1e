use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{BLACK, Hsv, Rgb, hsv2rgb};
use crate::effect::{EffectSlot, resting_color};
use crate::filter::{FilterProcessor, FilterProcessorConfig, WiringOrder};
use crate::math8::scale_exact;
use crate::resolver::LightState;
use crate::settings::Settings;
use crate::transition::Crossfade;

/// Default length of a state crossfade
pub const DEFAULT_FADE_DURATION: Duration = Duration::from_millis(600);

/// Configuration for the renderer
#[derive(Clone, Copy)]
pub struct RendererConfig {
    /// Number of LEDs on the strip, clamped to the buffer size
    pub led_count: usize,
    pub filters: FilterProcessorConfig,
    /// Crossfade length on state changes
    pub fade: Duration,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            led_count: 36,
            filters: FilterProcessorConfig::default(),
            fade: DEFAULT_FADE_DURATION,
        }
    }
}

/// Identity of the last frame handed to the driver
#[derive(Clone, Copy, PartialEq, Eq)]
struct WrittenFrame {
    hue: u8,
    sat: u8,
    val: u8,
    led_count: usize,
    wiring: WiringOrder,
}

/// Render engine - turns a light state into pixels
///
/// The whole strip shows one color. State changes crossfade from the live
/// color to the new state's resting color; a change requested during a fade
/// is picked up once the fade has finished.
pub struct Renderer<const MAX_LEDS: usize> {
    led_count: usize,
    filters: FilterProcessor,

    // Internal state
    state: LightState,
    effect: EffectSlot,
    fade: Crossfade<Hsv>,
    live: Hsv,
    last_written: Option<WrittenFrame>,
    frame_buffer: [Rgb; MAX_LEDS],
}

impl<const MAX_LEDS: usize> Renderer<MAX_LEDS> {
    /// Create a renderer. The strip starts dark and fades into the first state.
    pub fn new(config: &RendererConfig) -> Self {
        Self {
            led_count: config.led_count.min(MAX_LEDS),
            filters: FilterProcessor::new(&config.filters),
            state: LightState::Off,
            effect: EffectSlot::default(),
            fade: Crossfade::new_hsv(config.fade),
            live: BLACK,
            last_written: None,
            frame_buffer: [Rgb::default(); MAX_LEDS],
        }
    }

    /// State currently shown (or being faded to)
    pub const fn state(&self) -> LightState {
        self.state
    }

    pub const fn is_fading(&self) -> bool {
        self.fade.is_fading()
    }

    /// Color of the last rendered frame, before output filters
    pub const fn live_color(&self) -> Hsv {
        self.live
    }

    pub const fn led_count(&self) -> usize {
        self.led_count
    }

    pub fn set_led_count(&mut self, count: usize) {
        self.led_count = count.min(MAX_LEDS);
    }

    pub fn set_wiring(&mut self, wiring: WiringOrder) {
        self.filters.wiring = wiring;
    }

    /// Force the next frame to be written even if nothing changed
    pub fn invalidate(&mut self) {
        self.last_written = None;
    }

    /// Last frame handed out by [`Self::render`]
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer[..self.led_count]
    }

    /// Process one frame
    ///
    /// Returns the pixels to write, or `None` when they are identical to
    /// the previous frame.
    pub fn render(
        &mut self,
        state: LightState,
        settings: &Settings,
        now: Instant,
    ) -> Option<&[Rgb]> {
        if state != self.state && !self.fade.is_fading() {
            self.begin_transition(state, settings, now);
        }

        let color = match self.fade.tick(now) {
            Some(color) => {
                if !self.fade.is_fading() {
                    // Fade done, start the pattern at its peak
                    self.effect.reset(now);
                }
                color
            }
            None => self.steady_color(settings, now),
        };
        self.live = color;

        self.write_frame(color)
    }

    fn begin_transition(&mut self, state: LightState, settings: &Settings, now: Instant) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[renderer] fade {} -> {}",
            self.state.as_str(),
            state.as_str()
        );
        let target = Self::resting_color_of(state, settings);
        if let Some(key) = state.pattern_key() {
            self.effect = EffectSlot::for_pattern(settings.patterns.get(key).pattern, now);
        }
        self.state = state;
        self.fade.start(self.live, target, now);
    }

    /// Color of the current state outside a fade, from current settings
    fn steady_color(&mut self, settings: &Settings, now: Instant) -> Hsv {
        let Some(key) = self.state.pattern_key() else {
            return Self::resting_color_of(self.state, settings);
        };
        let config = settings.patterns.get(key);
        if config.pattern != self.effect.pattern() {
            self.effect = EffectSlot::for_pattern(config.pattern, now);
        }
        self.effect.render(&config, settings.overrides.brightness, now)
    }

    /// Color a state settles on
    ///
    /// `Off` is black so fades keep hue and saturation and only dim;
    /// `White` is unsaturated at full brightness.
    fn resting_color_of(state: LightState, settings: &Settings) -> Hsv {
        let brightness = settings.overrides.brightness;
        match state.pattern_key() {
            Some(key) => resting_color(&settings.patterns.get(key), brightness),
            None if state == LightState::White => Hsv {
                hue: 0,
                sat: 0,
                val: scale_exact(u8::MAX, brightness),
            },
            None => BLACK,
        }
    }

    fn write_frame(&mut self, color: Hsv) -> Option<&[Rgb]> {
        let written = WrittenFrame {
            hue: color.hue,
            sat: color.sat,
            val: color.val,
            led_count: self.led_count,
            wiring: self.filters.wiring,
        };
        if self.last_written == Some(written) {
            return None;
        }
        self.last_written = Some(written);

        let frame = &mut self.frame_buffer[..self.led_count];
        frame.fill(hsv2rgb(color));
        self.filters.apply(frame);
        Some(frame)
    }
}
