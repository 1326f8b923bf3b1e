mod tests {
    use printer_status_light::settings::PatternField;
    use printer_status_light::{
        LightMode, Pattern, PatternKey, SettingChange, SettingKey, SettingValue, Settings,
        SettingsError, SettingsStore,
    };

    #[test]
    fn test_parse_setting_keys() {
        assert_eq!(
            SettingKey::parse_from_str("leds.printing.hue"),
            Some(SettingKey::Pattern(PatternKey::Printing, PatternField::Hue))
        );
        assert_eq!(
            SettingKey::parse_from_str("leds.noWiFi.pulse_per_min"),
            Some(SettingKey::Pattern(
                PatternKey::NoWifi,
                PatternField::PulsesPerMinute
            ))
        );
        assert_eq!(
            SettingKey::parse_from_str("leds.finished.timeout"),
            Some(SettingKey::IdleTimeout)
        );
        assert_eq!(SettingKey::parse_from_str("light_mode"), Some(SettingKey::LightMode));
        assert_eq!(SettingKey::parse_from_str("light_on"), Some(SettingKey::LightOn));
        assert_eq!(SettingKey::parse_from_str("chamber_sync"), Some(SettingKey::ChamberSync));
        assert_eq!(SettingKey::parse_from_str("brightness"), Some(SettingKey::Brightness));
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert_eq!(SettingKey::parse_from_str("leds.printing.timeout"), None);
        assert_eq!(SettingKey::parse_from_str("leds.bogus.hue"), None);
        assert_eq!(SettingKey::parse_from_str("leds.printing.hue.extra"), None);
        assert_eq!(SettingKey::parse_from_str("leds.printing"), None);
        assert_eq!(SettingKey::parse_from_str("wifi.printing.hue"), None);
        assert_eq!(SettingKey::parse_from_str(""), None);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(SettingKey::all().count(), 40);
        assert_eq!(
            format!("{}", SettingKey::Pattern(PatternKey::NoPrinter, PatternField::Value)),
            "leds.noPrinterConnected.value"
        );
        assert_eq!(format!("{}", SettingKey::IdleTimeout), "leds.finished.timeout");
        for key in SettingKey::all() {
            let name = format!("{key}");
            assert_eq!(SettingKey::parse_from_str(&name), Some(key), "{name}");
        }
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::DEFAULT;
        assert_eq!(
            settings.get(SettingKey::Pattern(
                PatternKey::NoWifi,
                PatternField::PulsesPerMinute
            )),
            SettingValue::Byte(10)
        );
        assert_eq!(
            settings.get(SettingKey::Pattern(PatternKey::Error, PatternField::Pattern)),
            SettingValue::Byte(Pattern::Pulse as u8)
        );
        assert_eq!(
            settings.get(SettingKey::Pattern(PatternKey::Finished, PatternField::Hue)),
            SettingValue::Int(63)
        );
        assert_eq!(settings.get(SettingKey::IdleTimeout), SettingValue::Byte(5));
        assert_eq!(settings.get(SettingKey::LightOn), SettingValue::Bool(true));
        assert_eq!(settings.overrides.light_mode, LightMode::Reactive);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_set_validates() {
        let mut settings = Settings::DEFAULT;
        let hue = SettingKey::Pattern(PatternKey::Printing, PatternField::Hue);

        assert_eq!(settings.set(hue, SettingValue::Int(300)), Err(SettingsError::OutOfRange));
        assert_eq!(settings.set(hue, SettingValue::Int(-1)), Err(SettingsError::OutOfRange));
        assert_eq!(settings.set(hue, SettingValue::Byte(10)), Err(SettingsError::TypeMismatch));
        assert_eq!(
            settings.set(
                SettingKey::Pattern(PatternKey::Error, PatternField::PulsesPerMinute),
                SettingValue::Byte(0)
            ),
            Err(SettingsError::OutOfRange)
        );
        assert_eq!(
            settings.set(
                SettingKey::Pattern(PatternKey::Error, PatternField::Pattern),
                SettingValue::Byte(2)
            ),
            Err(SettingsError::OutOfRange)
        );
        assert_eq!(
            settings.set(SettingKey::LightMode, SettingValue::Byte(7)),
            Err(SettingsError::OutOfRange)
        );
        assert_eq!(settings, Settings::DEFAULT);

        assert_eq!(settings.set(hue, SettingValue::Int(120)), Ok(()));
        assert_eq!(settings.patterns.get(PatternKey::Printing).hue, 120);
    }

    #[test]
    fn test_parse_values() {
        use printer_status_light::settings::ValueKind;

        assert_eq!(SettingValue::parse(ValueKind::Byte, "42"), Ok(SettingValue::Byte(42)));
        assert_eq!(SettingValue::parse(ValueKind::Byte, "256"), Err(SettingsError::Malformed));
        assert_eq!(SettingValue::parse(ValueKind::Int, " -5 "), Ok(SettingValue::Int(-5)));
        assert_eq!(SettingValue::parse(ValueKind::Bool, "1"), Ok(SettingValue::Bool(true)));
        assert_eq!(SettingValue::parse(ValueKind::Bool, "false"), Ok(SettingValue::Bool(false)));
        assert_eq!(SettingValue::parse(ValueKind::Bool, "maybe"), Err(SettingsError::Malformed));
    }

    #[test]
    fn test_store_set_from_str_notifies() {
        let store: SettingsStore<4> = SettingsStore::new(Settings::DEFAULT);
        let changes = store.changes();

        let key = store.set_from_str("leds.printing.hue", "120");
        assert_eq!(
            key,
            Ok(SettingKey::Pattern(PatternKey::Printing, PatternField::Hue))
        );
        assert_eq!(store.pattern(PatternKey::Printing).hue, 120);

        let change = changes.try_receive().expect("change notification");
        assert_eq!(
            change,
            SettingChange {
                key: SettingKey::Pattern(PatternKey::Printing, PatternField::Hue),
                value: SettingValue::Int(120),
            }
        );
        assert!(!change.is_user_facing());
        assert!(changes.is_empty());
    }

    #[test]
    fn test_store_rejected_write_is_silent() {
        let store: SettingsStore<4> = SettingsStore::default();
        let changes = store.changes();

        assert_eq!(store.set_from_str("leds.bogus.hue", "1"), Err(SettingsError::UnknownKey));
        assert_eq!(store.set_from_str("light_on", "maybe"), Err(SettingsError::Malformed));
        assert_eq!(
            store.set_from_str("leds.printing.hue", "300"),
            Err(SettingsError::OutOfRange)
        );
        assert!(changes.is_empty());
        assert_eq!(store.snapshot(), Settings::DEFAULT);
    }

    #[test]
    fn test_store_typed_setters() {
        let store: SettingsStore<8> = SettingsStore::default();
        let changes = store.changes();

        store.set_light_mode(LightMode::White);
        store.set_brightness(128);

        let mode = changes.try_receive().expect("light mode change");
        assert_eq!(mode.key, SettingKey::LightMode);
        assert_eq!(mode.value, SettingValue::Byte(LightMode::White as u8));
        assert!(mode.is_user_facing());

        let brightness = changes.try_receive().expect("brightness change");
        assert_eq!(brightness.value, SettingValue::Byte(128));
        assert!(!brightness.is_user_facing());

        let overrides = store.overrides();
        assert_eq!(overrides.light_mode, LightMode::White);
        assert_eq!(overrides.brightness, 128);
        assert_eq!(store.get(SettingKey::Brightness), SettingValue::Byte(128));
    }

    #[test]
    fn test_store_drops_oldest_notification() {
        let store: SettingsStore<2> = SettingsStore::default();
        let changes = store.changes();

        store.set_idle_timeout(1);
        store.set_idle_timeout(2);
        store.set_idle_timeout(3);

        assert_eq!(changes.try_receive().map(|c| c.value), Ok(SettingValue::Byte(2)));
        assert_eq!(changes.try_receive().map(|c| c.value), Ok(SettingValue::Byte(3)));
        assert!(changes.try_receive().is_err());
    }

    #[test]
    fn test_store_load_does_not_notify() {
        let store: SettingsStore<2> = SettingsStore::default();
        let mut settings = Settings::DEFAULT;
        settings.overrides.light_on = false;

        store.load(settings);
        assert!(!store.overrides().light_on);
        assert!(store.changes().is_empty());
    }

    #[test]
    fn test_light_mode_names() {
        assert_eq!(LightMode::parse_from_str("White"), Some(LightMode::White));
        assert_eq!(LightMode::parse_from_str("Reactive"), Some(LightMode::Reactive));
        assert_eq!(LightMode::parse_from_str("white"), None);
        assert_eq!(LightMode::from_raw(1), Some(LightMode::Reactive));
        assert_eq!(LightMode::White.as_str(), "White");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(format!("{}", SettingsError::UnknownKey), "unknown setting");
        assert_eq!(format!("{}", SettingsError::OutOfRange), "value out of range");
    }
}
