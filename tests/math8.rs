mod tests {
    use embassy_time::Duration;
    use printer_status_light::math8::{blend8, progress8, scale_exact};

    #[test]
    fn test_scale_exact_keeps_full_scale() {
        for value in [0u8, 1, 20, 128, 200, 254, 255] {
            assert_eq!(scale_exact(value, 255), value);
            assert_eq!(scale_exact(value, 0), 0);
        }
        assert_eq!(scale_exact(255, 128), 128);
        assert_eq!(scale_exact(200, 128), 100);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_progress8() {
        assert_eq!(
            progress8(Duration::from_millis(0), Duration::from_millis(100)),
            0
        );
        assert_eq!(
            progress8(Duration::from_millis(50), Duration::from_millis(100)),
            127
        );
        assert_eq!(
            progress8(Duration::from_millis(100), Duration::from_millis(100)),
            255
        );
        assert_eq!(
            progress8(Duration::from_millis(0), Duration::from_millis(0)),
            255
        );
    }
}
