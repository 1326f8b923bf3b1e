//! Runtime configuration
//!
//! [`Settings`] is the typed configuration record. Dotted names such as
//! `leds.printing.hue` only exist at the protocol boundary ([`SettingKey`]);
//! the render path reads fields directly.

mod key;
mod store;

use core::fmt;

pub use key::{PatternField, SettingKey, SettingValue, ValueKind};
pub use store::{ChangeReceiver, SettingChange, SettingsStore};

use crate::pattern::{Pattern, PatternTable};

const LIGHT_MODE_NAME_WHITE: &str = "White";
const LIGHT_MODE_NAME_REACTIVE: &str = "Reactive";

const LIGHT_MODE_ID_WHITE: u8 = 0;
const LIGHT_MODE_ID_REACTIVE: u8 = 1;

/// What the strip shows while it is on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum LightMode {
    /// Plain white work light
    White = LIGHT_MODE_ID_WHITE,
    /// Follow the printer state
    Reactive = LIGHT_MODE_ID_REACTIVE,
}

impl LightMode {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            LIGHT_MODE_ID_WHITE => Self::White,
            LIGHT_MODE_ID_REACTIVE => Self::Reactive,
            _ => return None,
        })
    }

    /// Effect name as shown by the home-automation bridge
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::White => LIGHT_MODE_NAME_WHITE,
            Self::Reactive => LIGHT_MODE_NAME_REACTIVE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            LIGHT_MODE_NAME_WHITE => Some(Self::White),
            LIGHT_MODE_NAME_REACTIVE => Some(Self::Reactive),
            _ => None,
        }
    }
}

/// User overrides read by the resolver and renderer every tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOverrides {
    pub light_on: bool,
    pub light_mode: LightMode,
    /// How long the finished pattern stays up; 0 disables it
    pub idle_timeout_minutes: u8,
    /// Mirror the printer's chamber light into `light_on`
    pub chamber_sync: bool,
    /// Global brightness scale (0-255 = 0.0-1.0)
    pub brightness: u8,
}

impl RenderOverrides {
    pub const DEFAULT: Self = Self {
        light_on: true,
        light_mode: LightMode::Reactive,
        idle_timeout_minutes: 5,
        chamber_sync: false,
        brightness: 255,
    };
}

impl Default for RenderOverrides {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete configuration record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Settings {
    pub patterns: PatternTable,
    pub overrides: RenderOverrides,
}

/// Why a setting could not be read or written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsError {
    /// No setting with this name
    UnknownKey,
    /// The value has the wrong type for the key
    TypeMismatch,
    /// The value is outside the accepted range
    OutOfRange,
    /// The text could not be parsed as the key's type
    Malformed,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey => f.write_str("unknown setting"),
            Self::TypeMismatch => f.write_str("wrong value type for setting"),
            Self::OutOfRange => f.write_str("value out of range"),
            Self::Malformed => f.write_str("malformed value"),
        }
    }
}

impl core::error::Error for SettingsError {}

impl Settings {
    pub const DEFAULT: Self = Self {
        patterns: PatternTable::DEFAULT,
        overrides: RenderOverrides::DEFAULT,
    };

    /// Read a setting by key
    pub fn get(&self, key: SettingKey) -> SettingValue {
        match key {
            SettingKey::Pattern(state, field) => {
                let config = self.patterns.get(state);
                match field {
                    PatternField::Pattern => SettingValue::Byte(config.pattern as u8),
                    PatternField::Hue => SettingValue::Int(i32::from(config.hue)),
                    PatternField::Saturation => SettingValue::Byte(config.saturation),
                    PatternField::Value => SettingValue::Byte(config.value),
                    PatternField::PulsesPerMinute => {
                        SettingValue::Byte(config.pulses_per_minute)
                    }
                }
            }
            SettingKey::IdleTimeout => SettingValue::Byte(self.overrides.idle_timeout_minutes),
            SettingKey::LightMode => SettingValue::Byte(self.overrides.light_mode as u8),
            SettingKey::LightOn => SettingValue::Bool(self.overrides.light_on),
            SettingKey::ChamberSync => SettingValue::Bool(self.overrides.chamber_sync),
            SettingKey::Brightness => SettingValue::Byte(self.overrides.brightness),
        }
    }

    /// Validate and write a setting.
    ///
    /// On error the record is left unchanged.
    pub fn set(&mut self, key: SettingKey, value: SettingValue) -> Result<(), SettingsError> {
        if value.kind() != key.kind() {
            return Err(SettingsError::TypeMismatch);
        }

        match (key, value) {
            (SettingKey::Pattern(state, field), value) => {
                let config = self.patterns.get_mut(state);
                match (field, value) {
                    (PatternField::Pattern, SettingValue::Byte(raw)) => {
                        config.pattern = Pattern::from_raw(raw).ok_or(SettingsError::OutOfRange)?;
                    }
                    (PatternField::Hue, SettingValue::Int(hue)) => {
                        config.hue = u8::try_from(hue).map_err(|_| SettingsError::OutOfRange)?;
                    }
                    (PatternField::Saturation, SettingValue::Byte(saturation)) => {
                        config.saturation = saturation;
                    }
                    (PatternField::Value, SettingValue::Byte(value)) => {
                        config.value = value;
                    }
                    (PatternField::PulsesPerMinute, SettingValue::Byte(rate)) => {
                        if rate == 0 {
                            return Err(SettingsError::OutOfRange);
                        }
                        config.pulses_per_minute = rate;
                    }
                    _ => return Err(SettingsError::TypeMismatch),
                }
            }
            (SettingKey::IdleTimeout, SettingValue::Byte(minutes)) => {
                self.overrides.idle_timeout_minutes = minutes;
            }
            (SettingKey::LightMode, SettingValue::Byte(raw)) => {
                self.overrides.light_mode =
                    LightMode::from_raw(raw).ok_or(SettingsError::OutOfRange)?;
            }
            (SettingKey::LightOn, SettingValue::Bool(on)) => {
                self.overrides.light_on = on;
            }
            (SettingKey::ChamberSync, SettingValue::Bool(enabled)) => {
                self.overrides.chamber_sync = enabled;
            }
            (SettingKey::Brightness, SettingValue::Byte(brightness)) => {
                self.overrides.brightness = brightness;
            }
            _ => return Err(SettingsError::TypeMismatch),
        }
        Ok(())
    }
}
