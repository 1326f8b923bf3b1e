use core::cell::RefCell;

use critical_section::Mutex;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::channel::{Channel, Receiver};
use crate::pattern::{PatternConfig, PatternKey};
use crate::settings::{
    LightMode, RenderOverrides, SettingKey, SettingValue, Settings, SettingsError,
};

/// A setting that was written
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettingChange {
    pub key: SettingKey,
    pub value: SettingValue,
}

impl SettingChange {
    /// See [`SettingKey::is_user_facing`]
    pub const fn is_user_facing(&self) -> bool {
        self.key.is_user_facing()
    }
}

/// Type alias for the change notification receiver
pub type ChangeReceiver<'a, const SIZE: usize> = Receiver<'a, SettingChange, SIZE>;

/// Shared configuration with change notifications
///
/// Writers (web/IPC task, home-automation bridge, the resolver's chamber
/// sync) go through a critical section sized to one write. Every accepted
/// write is queued on the change channel; when listeners fall behind the
/// oldest notifications are dropped.
pub struct SettingsStore<const CHANGES: usize> {
    settings: Mutex<RefCell<Settings>>,
    changes: Channel<SettingChange, CHANGES>,
}

impl<const CHANGES: usize> SettingsStore<CHANGES> {
    pub const fn new(settings: Settings) -> Self {
        Self {
            settings: Mutex::new(RefCell::new(settings)),
            changes: Channel::new(),
        }
    }

    /// Copy of the whole record
    pub fn snapshot(&self) -> Settings {
        critical_section::with(|cs| *self.settings.borrow(cs).borrow())
    }

    pub fn pattern(&self, key: PatternKey) -> PatternConfig {
        critical_section::with(|cs| self.settings.borrow(cs).borrow().patterns.get(key))
    }

    pub fn overrides(&self) -> RenderOverrides {
        critical_section::with(|cs| self.settings.borrow(cs).borrow().overrides)
    }

    pub fn get(&self, key: SettingKey) -> SettingValue {
        critical_section::with(|cs| self.settings.borrow(cs).borrow().get(key))
    }

    /// Validate and write one setting, then notify listeners
    pub fn set(&self, key: SettingKey, value: SettingValue) -> Result<(), SettingsError> {
        critical_section::with(|cs| self.settings.borrow(cs).borrow_mut().set(key, value))?;
        self.publish(SettingChange { key, value });
        Ok(())
    }

    /// Write a setting from its protocol form, e.g. `("leds.printing.hue", "120")`
    pub fn set_from_str(&self, name: &str, raw: &str) -> Result<SettingKey, SettingsError> {
        let key = SettingKey::parse_from_str(name).ok_or(SettingsError::UnknownKey)?;
        let value = SettingValue::parse(key.kind(), raw)?;
        self.set(key, value)?;
        Ok(key)
    }

    /// Replace the whole record, e.g. after loading persisted values.
    ///
    /// Loading is not a user action, so no notifications are sent.
    pub fn load(&self, settings: Settings) {
        critical_section::with(|cs| *self.settings.borrow(cs).borrow_mut() = settings);
    }

    pub fn set_light_on(&self, on: bool) {
        self.write(SettingKey::LightOn, SettingValue::Bool(on), |overrides| {
            overrides.light_on = on;
        });
    }

    pub fn set_light_mode(&self, mode: LightMode) {
        self.write(
            SettingKey::LightMode,
            SettingValue::Byte(mode as u8),
            |overrides| overrides.light_mode = mode,
        );
    }

    pub fn set_chamber_sync(&self, enabled: bool) {
        self.write(
            SettingKey::ChamberSync,
            SettingValue::Bool(enabled),
            |overrides| overrides.chamber_sync = enabled,
        );
    }

    pub fn set_brightness(&self, brightness: u8) {
        self.write(
            SettingKey::Brightness,
            SettingValue::Byte(brightness),
            |overrides| overrides.brightness = brightness,
        );
    }

    pub fn set_idle_timeout(&self, minutes: u8) {
        self.write(
            SettingKey::IdleTimeout,
            SettingValue::Byte(minutes),
            |overrides| overrides.idle_timeout_minutes = minutes,
        );
    }

    /// Receiver for change notifications
    pub const fn changes(&self) -> ChangeReceiver<'_, CHANGES> {
        self.changes.receiver()
    }

    fn write(
        &self,
        key: SettingKey,
        value: SettingValue,
        apply: impl FnOnce(&mut RenderOverrides),
    ) {
        critical_section::with(|cs| apply(&mut self.settings.borrow(cs).borrow_mut().overrides));
        self.publish(SettingChange { key, value });
    }

    fn publish(&self, change: SettingChange) {
        #[cfg(feature = "esp32-log")]
        println!("[settings] {} = {}", change.key, change.value);
        let _ = self.changes.send_overwriting(change);
    }
}

impl<const CHANGES: usize> Default for SettingsStore<CHANGES> {
    fn default() -> Self {
        Self::new(Settings::DEFAULT)
    }
}
