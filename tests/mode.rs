mod tests {
    use qc2s_light_composer::Mode;

    #[test]
    fn test_mode_names_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(Mode::parse_from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(Mode::parse_from_str("lightning"), Some(Mode::Lightning));
        assert_eq!(Mode::parse_from_str("Lightning"), None);
        assert_eq!(Mode::parse_from_str("rainbow"), None);
    }

    #[test]
    fn test_mode_from_raw() {
        assert_eq!(Mode::from_raw(0), Some(Mode::Solid));
        assert_eq!(Mode::from_raw(5), Some(Mode::Pulse));
        assert_eq!(Mode::from_raw(6), None);
        for mode in Mode::ALL {
            assert_eq!(Mode::from_raw(mode as u8), Some(mode));
        }
    }

    #[test]
    fn test_mode_capabilities() {
        assert!(!Mode::Solid.uses_speed());
        assert!(!Mode::Solid.uses_delay());
        assert!(Mode::Blink.uses_speed());
        assert!(Mode::Blink.uses_delay());
        for mode in [Mode::Cycle, Mode::Wave, Mode::Lightning, Mode::Pulse] {
            assert!(mode.uses_speed());
            assert!(!mode.uses_delay());
            assert_eq!(mode.max_colors(), 10);
        }
        assert_eq!(Mode::Solid.max_colors(), 1);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(Mode::Pulse.label(), "Pulse");
        assert_eq!(Mode::Wave.description(), "Offset upper and lower zones");
        assert_eq!(Mode::default(), Mode::Solid);
    }
}
