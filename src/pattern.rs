//! Per-state visual parameters
//!
//! Every light state that shows a color owns one [`PatternConfig`]. The
//! table is plain data; the settings store hands out copies so the render
//! path never holds a lock.

const PATTERN_NAME_CONSTANT: &str = "Constant";
const PATTERN_NAME_PULSE: &str = "Pulse";

const PATTERN_ID_CONSTANT: u8 = 0;
const PATTERN_ID_PULSE: u8 = 1;

/// How a state's color varies over time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Pattern {
    /// Solid color at the configured value
    Constant = PATTERN_ID_CONSTANT,
    /// Breathing brightness
    Pulse = PATTERN_ID_PULSE,
}

impl Pattern {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_CONSTANT => Self::Constant,
            PATTERN_ID_PULSE => Self::Pulse,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Constant => PATTERN_NAME_CONSTANT,
            Self::Pulse => PATTERN_NAME_PULSE,
        }
    }
}

/// Visual parameters of one state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternConfig {
    pub pattern: Pattern,
    /// Hue on the 0-255 color wheel
    pub hue: u8,
    pub saturation: u8,
    /// Peak brightness
    pub value: u8,
    /// Breaths per minute, only used by [`Pattern::Pulse`]. Never zero.
    pub pulses_per_minute: u8,
}

impl PatternConfig {
    pub const fn constant(hue: u8, saturation: u8, value: u8) -> Self {
        Self {
            pattern: Pattern::Constant,
            hue,
            saturation,
            value,
            pulses_per_minute: 7,
        }
    }

    pub const fn pulse(hue: u8, saturation: u8, value: u8, pulses_per_minute: u8) -> Self {
        Self {
            pattern: Pattern::Pulse,
            hue,
            saturation,
            value,
            pulses_per_minute,
        }
    }
}

const KEY_NAME_NO_WIFI: &str = "noWiFi";
const KEY_NAME_NO_PRINTER: &str = "noPrinterConnected";
const KEY_NAME_PRINTER_IDLE: &str = "printerConnected";
const KEY_NAME_PRINTING: &str = "printing";
const KEY_NAME_ERROR: &str = "error";
const KEY_NAME_WARNING: &str = "warning";
const KEY_NAME_FINISHED: &str = "finished";

/// States that carry a pattern configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternKey {
    NoWifi,
    NoPrinter,
    PrinterIdle,
    Printing,
    Error,
    Warning,
    Finished,
}

impl PatternKey {
    pub const ALL: [Self; 7] = [
        Self::NoWifi,
        Self::NoPrinter,
        Self::PrinterIdle,
        Self::Printing,
        Self::Error,
        Self::Warning,
        Self::Finished,
    ];

    /// Name of the group in the configuration tree
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoWifi => KEY_NAME_NO_WIFI,
            Self::NoPrinter => KEY_NAME_NO_PRINTER,
            Self::PrinterIdle => KEY_NAME_PRINTER_IDLE,
            Self::Printing => KEY_NAME_PRINTING,
            Self::Error => KEY_NAME_ERROR,
            Self::Warning => KEY_NAME_WARNING,
            Self::Finished => KEY_NAME_FINISHED,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            KEY_NAME_NO_WIFI => Some(Self::NoWifi),
            KEY_NAME_NO_PRINTER => Some(Self::NoPrinter),
            KEY_NAME_PRINTER_IDLE => Some(Self::PrinterIdle),
            KEY_NAME_PRINTING => Some(Self::Printing),
            KEY_NAME_ERROR => Some(Self::Error),
            KEY_NAME_WARNING => Some(Self::Warning),
            KEY_NAME_FINISHED => Some(Self::Finished),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// One pattern configuration per patterned state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternTable {
    entries: [PatternConfig; 7],
}

impl PatternTable {
    /// Factory defaults
    pub const DEFAULT: Self = Self {
        entries: [
            PatternConfig::pulse(203, 255, 255, 10),
            PatternConfig::constant(203, 255, 255),
            PatternConfig::constant(0, 0, 128),
            PatternConfig::constant(0, 0, 255),
            PatternConfig::pulse(0, 255, 255, 7),
            PatternConfig::constant(171, 255, 255),
            PatternConfig::constant(63, 255, 255),
        ],
    };

    pub const fn get(&self, key: PatternKey) -> PatternConfig {
        self.entries[key.index()]
    }

    pub fn get_mut(&mut self, key: PatternKey) -> &mut PatternConfig {
        &mut self.entries[key.index()]
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}
