use core::fmt;

use crate::pattern::PatternKey;
use crate::settings::SettingsError;

const GROUP_LEDS: &str = "leds";

const FIELD_NAME_PATTERN: &str = "pattern";
const FIELD_NAME_HUE: &str = "hue";
const FIELD_NAME_SATURATION: &str = "saturation";
const FIELD_NAME_VALUE: &str = "value";
const FIELD_NAME_PULSES_PER_MINUTE: &str = "pulse_per_min";

const KEY_NAME_IDLE_TIMEOUT: &str = "timeout";
const KEY_NAME_LIGHT_MODE: &str = "light_mode";
const KEY_NAME_LIGHT_ON: &str = "light_on";
const KEY_NAME_CHAMBER_SYNC: &str = "chamber_sync";
const KEY_NAME_BRIGHTNESS: &str = "brightness";

/// Field of a [`crate::pattern::PatternConfig`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternField {
    Pattern,
    Hue,
    Saturation,
    Value,
    PulsesPerMinute,
}

impl PatternField {
    pub const ALL: [Self; 5] = [
        Self::Pattern,
        Self::Hue,
        Self::Saturation,
        Self::Value,
        Self::PulsesPerMinute,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pattern => FIELD_NAME_PATTERN,
            Self::Hue => FIELD_NAME_HUE,
            Self::Saturation => FIELD_NAME_SATURATION,
            Self::Value => FIELD_NAME_VALUE,
            Self::PulsesPerMinute => FIELD_NAME_PULSES_PER_MINUTE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            FIELD_NAME_PATTERN => Some(Self::Pattern),
            FIELD_NAME_HUE => Some(Self::Hue),
            FIELD_NAME_SATURATION => Some(Self::Saturation),
            FIELD_NAME_VALUE => Some(Self::Value),
            FIELD_NAME_PULSES_PER_MINUTE => Some(Self::PulsesPerMinute),
            _ => None,
        }
    }
}

/// Name of one configurable value
///
/// Dotted names:
/// - `leds.<state>.<field>` for pattern parameters
/// - `leds.finished.timeout` for the finished dwell
/// - `light_mode`, `light_on`, `chamber_sync`, `brightness`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingKey {
    Pattern(PatternKey, PatternField),
    IdleTimeout,
    LightMode,
    LightOn,
    ChamberSync,
    Brightness,
}

impl SettingKey {
    /// Every known key, pattern groups first
    pub fn all() -> impl Iterator<Item = Self> {
        PatternKey::ALL
            .into_iter()
            .flat_map(|state| {
                PatternField::ALL
                    .into_iter()
                    .map(move |field| Self::Pattern(state, field))
            })
            .chain([
                Self::IdleTimeout,
                Self::LightMode,
                Self::LightOn,
                Self::ChamberSync,
                Self::Brightness,
            ])
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            KEY_NAME_LIGHT_MODE => return Some(Self::LightMode),
            KEY_NAME_LIGHT_ON => return Some(Self::LightOn),
            KEY_NAME_CHAMBER_SYNC => return Some(Self::ChamberSync),
            KEY_NAME_BRIGHTNESS => return Some(Self::Brightness),
            _ => {}
        }

        let mut parts = s.split('.');
        if parts.next()? != GROUP_LEDS {
            return None;
        }
        let state = PatternKey::parse_from_str(parts.next()?)?;
        let field = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        if field == KEY_NAME_IDLE_TIMEOUT {
            return (state == PatternKey::Finished).then_some(Self::IdleTimeout);
        }
        PatternField::parse_from_str(field).map(|field| Self::Pattern(state, field))
    }

    /// Type of the values this key accepts
    pub const fn kind(self) -> ValueKind {
        match self {
            Self::Pattern(_, PatternField::Hue) => ValueKind::Int,
            Self::Pattern(..) | Self::IdleTimeout | Self::LightMode | Self::Brightness => {
                ValueKind::Byte
            }
            Self::LightOn | Self::ChamberSync => ValueKind::Bool,
        }
    }

    /// Keys whose changes the home-automation bridge republishes
    pub const fn is_user_facing(self) -> bool {
        matches!(self, Self::LightOn | Self::LightMode | Self::ChamberSync)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(state, field) => {
                write!(f, "{GROUP_LEDS}.{}.{}", state.as_str(), field.as_str())
            }
            Self::IdleTimeout => write!(
                f,
                "{GROUP_LEDS}.{}.{KEY_NAME_IDLE_TIMEOUT}",
                PatternKey::Finished.as_str()
            ),
            Self::LightMode => f.write_str(KEY_NAME_LIGHT_MODE),
            Self::LightOn => f.write_str(KEY_NAME_LIGHT_ON),
            Self::ChamberSync => f.write_str(KEY_NAME_CHAMBER_SYNC),
            Self::Brightness => f.write_str(KEY_NAME_BRIGHTNESS),
        }
    }
}

/// Value type of a setting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Byte,
    Int,
    Bool,
}

/// Typed setting value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingValue {
    Byte(u8),
    Int(i32),
    Bool(bool),
}

impl SettingValue {
    pub const fn kind(self) -> ValueKind {
        match self {
            Self::Byte(_) => ValueKind::Byte,
            Self::Int(_) => ValueKind::Int,
            Self::Bool(_) => ValueKind::Bool,
        }
    }

    /// Parse the text form used by the configuration protocol
    pub fn parse(kind: ValueKind, s: &str) -> Result<Self, SettingsError> {
        let s = s.trim();
        match kind {
            ValueKind::Byte => s
                .parse::<u8>()
                .map(Self::Byte)
                .map_err(|_| SettingsError::Malformed),
            ValueKind::Int => s
                .parse::<i32>()
                .map(Self::Int)
                .map_err(|_| SettingsError::Malformed),
            ValueKind::Bool => match s {
                "true" | "1" => Ok(Self::Bool(true)),
                "false" | "0" => Ok(Self::Bool(false)),
                _ => Err(SettingsError::Malformed),
            },
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}
