mod tests {
    use embassy_time::Instant;
    use printer_status_light::PatternConfig;
    use printer_status_light::effect::{
        ConstantEffect, Effect, EffectSlot, PULSE_VALUE_MIN, PulseEffect, resting_color,
    };
    use printer_status_light::pattern::Pattern;

    #[test]
    fn test_breath_starts_at_peak() {
        assert_eq!(PulseEffect::breath(10, 0), 255);
        assert_eq!(PulseEffect::breath(7, 0), 255);
        assert_eq!(PulseEffect::breath(10, 6_000), 255);
    }

    #[test]
    fn test_breath_reaches_floor_mid_period() {
        assert_eq!(PulseEffect::breath(10, 3_000), PULSE_VALUE_MIN);
        assert_eq!(PulseEffect::breath(12, 2_500), PULSE_VALUE_MIN);
    }

    #[test]
    fn test_breath_is_periodic() {
        for t in (0..6_000).step_by(97) {
            assert_eq!(PulseEffect::breath(10, t), PulseEffect::breath(10, t + 6_000));
            assert_eq!(PulseEffect::breath(10, t), PulseEffect::breath(10, t + 60_000));
        }
    }

    #[test]
    fn test_breath_stays_in_range() {
        for t in (0..60_000).step_by(7) {
            let value = PulseEffect::breath(7, t);
            assert!(value >= PULSE_VALUE_MIN, "t={t}: {value}");
        }
    }

    #[test]
    fn test_breath_descends_then_rises() {
        let samples: Vec<u8> = (0..=6_000)
            .step_by(100)
            .map(|t| PulseEffect::breath(10, t))
            .collect();
        let (falling, rising) = samples.split_at(31);
        assert!(falling.windows(2).all(|w| w[0] >= w[1]));
        assert!(rising.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_zero_rate_treated_as_one() {
        assert_eq!(PulseEffect::breath(0, 30_000), PulseEffect::breath(1, 30_000));
    }

    #[test]
    fn test_pulse_render_scales_value_and_brightness() {
        let config = PatternConfig::pulse(5, 250, 200, 10);
        let effect = PulseEffect::new(Instant::from_millis(1_000));

        let peak = effect.render(&config, 255, Instant::from_millis(1_000));
        assert_eq!((peak.hue, peak.sat, peak.val), (5, 250, 200));

        let dimmed = effect.render(&config, 128, Instant::from_millis(1_000));
        assert_eq!(dimmed.val, 100);

        let trough = effect.render(&config, 255, Instant::from_millis(4_000));
        assert_eq!(trough.val, 15);
        assert!(u16::from(trough.val) >= u16::from(PULSE_VALUE_MIN) * 200 / 256);
    }

    #[test]
    fn test_pulse_reset_restarts_at_peak() {
        let config = PatternConfig::pulse(0, 255, 255, 7);
        let mut effect = PulseEffect::new(Instant::from_millis(0));
        effect.reset(Instant::from_millis(5_000));
        assert_eq!(effect.render(&config, 255, Instant::from_millis(5_000)).val, 255);
    }

    #[test]
    fn test_constant_render() {
        let config = PatternConfig::constant(10, 20, 200);
        let color = ConstantEffect.render(&config, 128, Instant::from_millis(0));
        assert_eq!((color.hue, color.sat, color.val), (10, 20, 100));

        let rest = resting_color(&PatternConfig::pulse(10, 20, 200, 7), 255);
        assert_eq!((rest.hue, rest.sat, rest.val), (10, 20, 200));
    }

    #[test]
    fn test_effect_slot_for_pattern() {
        let now = Instant::from_millis(0);
        assert_eq!(EffectSlot::for_pattern(Pattern::Pulse, now).pattern(), Pattern::Pulse);
        assert_eq!(
            EffectSlot::for_pattern(Pattern::Constant, now).pattern(),
            Pattern::Constant
        );
        assert_eq!(EffectSlot::default().pattern(), Pattern::Constant);
    }
}
