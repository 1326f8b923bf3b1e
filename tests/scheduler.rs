mod tests {
    use embassy_time::Instant;
    use printer_status_light::color::{Hsv, hsv2rgb};
    use printer_status_light::settings::SettingKey;
    use printer_status_light::{
        FilterProcessorConfig, FrameScheduler, LightState, OutputDriver, PrinterState,
        RawTelemetry, RendererConfig, Rgb, SettingValue, SettingsStore, SharedStatus,
        WiringOrder,
    };

    const MINUTE_MS: u64 = 60_000;

    #[derive(Default)]
    struct RecordingDriver {
        writes: usize,
        shows: usize,
        last: Vec<Rgb>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.writes += 1;
            self.last = colors.to_vec();
        }

        fn show(&mut self) {
            self.shows += 1;
        }
    }

    type Scheduler<'a> = FrameScheduler<'a, RecordingDriver, 8, 8>;

    fn renderer_config() -> RendererConfig {
        RendererConfig {
            led_count: 4,
            filters: FilterProcessorConfig {
                gamma: false,
                wiring: WiringOrder::Grb,
            },
            fade: embassy_time::Duration::from_millis(0),
        }
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn online(status: &SharedStatus, stage: i32) {
        status.set_wifi_connected(true);
        status.printer_connected();
        status.apply_telemetry(&RawTelemetry { stage, hms: &[] });
    }

    #[test]
    fn test_no_wifi_on_boot() {
        let status = SharedStatus::new();
        let settings = SettingsStore::<8>::default();
        let mut scheduler: Scheduler =
            FrameScheduler::new(RecordingDriver::default(), &status, &settings, &renderer_config());

        let result = scheduler.tick(at(0));
        assert_eq!(result.light_state, LightState::NoWifi);
        assert!(result.written);
        assert_eq!(scheduler.printer_state(), PrinterState::Disconnected);

        let color = scheduler.renderer().live_color();
        assert_eq!((color.hue, color.sat, color.val), (203, 255, 255));
    }

    #[test]
    fn test_printing_report_shows_printing_color() {
        let status = SharedStatus::new();
        let settings = SettingsStore::<8>::default();
        let mut scheduler: Scheduler =
            FrameScheduler::new(RecordingDriver::default(), &status, &settings, &renderer_config());

        online(&status, 1);
        let result = scheduler.tick(at(0));
        assert_eq!(result.light_state, LightState::Printing);
        assert_eq!(scheduler.light_state(), LightState::Printing);

        let expected = hsv2rgb(Hsv {
            hue: 0,
            sat: 0,
            val: 255,
        });
        assert_eq!(scheduler.output().last, vec![expected; 4]);
        assert_eq!(scheduler.output().shows, 1);
    }

    #[test]
    fn test_finished_then_idle_after_timeout() {
        let status = SharedStatus::new();
        let settings = SettingsStore::<8>::default();
        let mut scheduler: Scheduler =
            FrameScheduler::new(RecordingDriver::default(), &status, &settings, &renderer_config());

        online(&status, 1);
        assert_eq!(scheduler.tick(at(0)).light_state, LightState::Printing);

        status.apply_telemetry(&RawTelemetry { stage: 255, hms: &[] });
        assert_eq!(scheduler.tick(at(16)).light_state, LightState::Finished);
        let color = scheduler.renderer().live_color();
        assert_eq!((color.hue, color.sat, color.val), (63, 255, 255));

        assert_eq!(
            scheduler.tick(at(16 + 5 * MINUTE_MS - 1)).light_state,
            LightState::Finished
        );
        assert_eq!(
            scheduler.tick(at(16 + 5 * MINUTE_MS)).light_state,
            LightState::PrinterIdle
        );
    }

    #[test]
    fn test_identical_frames_are_written_once() {
        let status = SharedStatus::new();
        let settings = SettingsStore::<8>::default();
        let mut scheduler: Scheduler =
            FrameScheduler::new(RecordingDriver::default(), &status, &settings, &renderer_config());

        online(&status, 1);
        assert!(scheduler.tick(at(0)).written);
        assert!(!scheduler.tick(at(16)).written);
        assert!(!scheduler.tick(at(32)).written);
        assert_eq!(scheduler.output().writes, 1);

        settings.set_brightness(100);
        assert!(scheduler.tick(at(48)).written);
        assert_eq!(scheduler.output().writes, 2);
    }

    #[test]
    fn test_light_off_and_white_mode() {
        let status = SharedStatus::new();
        let settings = SettingsStore::<8>::default();
        let mut scheduler: Scheduler =
            FrameScheduler::new(RecordingDriver::default(), &status, &settings, &renderer_config());

        online(&status, 1);
        settings.set_light_on(false);
        assert_eq!(scheduler.tick(at(0)).light_state, LightState::Off);
        assert_eq!(scheduler.output().last, vec![Rgb::default(); 4]);

        settings.set_light_on(true);
        settings.set_light_mode(printer_status_light::LightMode::White);
        assert_eq!(scheduler.tick(at(16)).light_state, LightState::White);
    }

    #[test]
    fn test_chamber_light_sync_updates_settings() {
        let status = SharedStatus::new();
        let settings = SettingsStore::<8>::default();
        let changes = settings.changes();
        let mut scheduler: Scheduler =
            FrameScheduler::new(RecordingDriver::default(), &status, &settings, &renderer_config());

        online(&status, 1);
        status.set_chamber_light_on(false);
        settings.set_chamber_sync(true);
        assert_eq!(changes.try_receive().map(|c| c.key), Ok(SettingKey::ChamberSync));

        scheduler.tick(at(0));
        assert!(changes.is_empty());

        status.set_chamber_light_on(true);
        scheduler.tick(at(16));
        status.set_chamber_light_on(false);
        assert_eq!(scheduler.tick(at(32)).light_state, LightState::Off);
        assert!(!settings.overrides().light_on);

        let on = changes.try_receive().expect("sync on");
        assert_eq!((on.key, on.value), (SettingKey::LightOn, SettingValue::Bool(true)));
        assert!(on.is_user_facing());
        let off = changes.try_receive().expect("sync off");
        assert_eq!(off.value, SettingValue::Bool(false));

        // Stays off on the following frames
        assert_eq!(scheduler.tick(at(48)).light_state, LightState::Off);
    }

    #[test]
    fn test_first_chamber_report_keeps_light_setting() {
        let status = SharedStatus::new();
        let settings = SettingsStore::<8>::default();
        let changes = settings.changes();
        let mut scheduler: Scheduler =
            FrameScheduler::new(RecordingDriver::default(), &status, &settings, &renderer_config());

        status.set_wifi_connected(true);
        scheduler.tick(at(0));

        settings.set_chamber_sync(true);
        settings.set_light_on(false);
        while changes.try_receive().is_ok() {}

        status.printer_connected();
        status.apply_telemetry(&RawTelemetry { stage: 255, hms: &[] });
        status.set_chamber_light_on(true);
        assert_eq!(scheduler.tick(at(16)).light_state, LightState::Off);
        assert!(!settings.overrides().light_on);
        assert!(changes.is_empty());

        // Reconnecting forgets the reading, the next report is a new baseline
        status.printer_disconnected();
        scheduler.tick(at(32));
        status.printer_connected();
        status.set_chamber_light_on(true);
        assert_eq!(scheduler.tick(at(48)).light_state, LightState::Off);
        assert!(!settings.overrides().light_on);

        status.set_chamber_light_on(false);
        scheduler.tick(at(64));
        status.set_chamber_light_on(true);
        assert_eq!(scheduler.tick(at(80)).light_state, LightState::PrinterIdle);
        assert!(settings.overrides().light_on);
    }

    #[test]
    fn test_frame_timing() {
        let status = SharedStatus::new();
        let settings = SettingsStore::<8>::default();
        let mut scheduler: Scheduler =
            FrameScheduler::new(RecordingDriver::default(), &status, &settings, &renderer_config());

        let first = scheduler.tick(at(1_000));
        assert_eq!(first.next_deadline, at(1_016));
        assert_eq!(first.sleep_duration.as_millis(), 16);

        let second = scheduler.tick(at(1_016));
        assert_eq!(second.next_deadline, at(1_032));
        assert_eq!(second.sleep_duration.as_millis(), 16);

        // Long stall: no catch-up burst
        let late = scheduler.tick(at(5_000));
        assert_eq!(late.next_deadline, at(5_016));
    }
}
