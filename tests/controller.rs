mod tests {
    use qc2s_light_composer::{
        ConfigError, Configuration, Frame, FrameCursor, LightController, MemoryStore, Mode,
        Parameter, SettingsStore, StoredValue,
        color::{BLACK, PRESET_COLORS, Rgb},
        settings::{KEY_BRIGHTNESS, KEY_COLORS, KEY_MODE, save_settings},
        synthesize,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    fn colors(controller: &LightController<'_, MemoryStore>) -> Vec<Rgb> {
        controller.configuration().colors.to_vec()
    }

    #[test]
    fn test_new_loads_settings_and_regenerates() {
        let saved = Configuration::new(Mode::Cycle, &[RED, GREEN])
            .unwrap()
            .with_speed(100);
        let mut store = MemoryStore::new();
        save_settings(&mut store, &saved).unwrap();

        let cursor = FrameCursor::new();
        let controller = LightController::new(&cursor, store);
        assert_eq!(controller.configuration(), &saved);
        assert_eq!(cursor.len(), 24);
        assert_eq!(controller.primary_color(), RED);
    }

    #[test]
    fn test_update_synthesizes_and_persists() {
        let cursor = FrameCursor::new();
        let mut controller = LightController::new(&cursor, MemoryStore::new());
        assert_eq!(cursor.next_frame(), Frame::uniform(RED));

        let config = Configuration::new(Mode::Blink, &[BLUE, GREEN])
            .unwrap()
            .with_speed(99)
            .with_delay(2)
            .with_brightness(50);
        controller.update_configuration(config.clone()).unwrap();

        assert_eq!(cursor.snapshot().unwrap(), synthesize(&config));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.next_frame(), Frame::uniform(Rgb::new(0, 0, 127)));
        assert_eq!(controller.store().read(KEY_MODE), Some(StoredValue::Text("blink".into())));
        assert_eq!(
            controller.store().read(KEY_COLORS),
            Some(StoredValue::TextList(vec!["0000FF".into(), "00FF00".into()]))
        );
        assert_eq!(controller.store().read(KEY_BRIGHTNESS), Some(StoredValue::Integer(50)));
    }

    #[test]
    fn test_invalid_update_changes_nothing() {
        let cursor = FrameCursor::new();
        let mut controller = LightController::new(&cursor, MemoryStore::new());
        let before = cursor.snapshot().unwrap();

        assert_eq!(
            controller.set_brightness(101),
            Err(ConfigError::OutOfRange {
                parameter: Parameter::Brightness,
                value: 101
            })
        );
        assert_eq!(controller.configuration(), &Configuration::default());
        assert!(controller.store().is_empty());
        assert_eq!(cursor.snapshot().unwrap(), before);
    }

    #[test]
    fn test_switching_to_solid_keeps_first_color() {
        let cursor = FrameCursor::new();
        let mut controller = LightController::new(&cursor, MemoryStore::new());
        controller.set_mode(Mode::Cycle).unwrap();
        controller.set_colors(&[GREEN, BLUE, RED]).unwrap();
        controller.set_mode(Mode::Solid).unwrap();
        assert_eq!(colors(&controller), vec![GREEN]);
        assert_eq!(cursor.next_frame(), Frame::uniform(GREEN));
    }

    #[test]
    fn test_toggle_color() {
        let cursor = FrameCursor::new();
        let mut controller = LightController::new(&cursor, MemoryStore::new());

        // Solid replaces
        controller.toggle_color(BLUE).unwrap();
        assert_eq!(colors(&controller), vec![BLUE]);
        controller.toggle_color(BLUE).unwrap();
        assert_eq!(colors(&controller), vec![BLUE]);

        controller.set_mode(Mode::Wave).unwrap();
        controller.toggle_color(RED).unwrap();
        controller.toggle_color(GREEN).unwrap();
        assert_eq!(colors(&controller), vec![BLUE, RED, GREEN]);
        controller.toggle_color(RED).unwrap();
        assert_eq!(colors(&controller), vec![BLUE, GREEN]);

        controller.set_colors(&PRESET_COLORS[..10]).unwrap();
        controller.toggle_color(PRESET_COLORS[10]).unwrap();
        assert_eq!(controller.configuration().colors.len(), 10);
    }

    #[test]
    fn test_last_color_is_kept() {
        let cursor = FrameCursor::new();
        let mut controller = LightController::new(&cursor, MemoryStore::new());
        controller.set_mode(Mode::Pulse).unwrap();
        controller.toggle_color(RED).unwrap();
        assert_eq!(colors(&controller), vec![RED]);
        controller.remove_color(0).unwrap();
        assert_eq!(colors(&controller), vec![RED]);
    }

    #[test]
    fn test_remove_and_clear_colors() {
        let cursor = FrameCursor::new();
        let mut controller = LightController::new(&cursor, MemoryStore::new());
        controller.set_mode(Mode::Cycle).unwrap();
        controller.set_colors(&[RED, GREEN, BLUE]).unwrap();
        controller.remove_color(1).unwrap();
        assert_eq!(colors(&controller), vec![RED, BLUE]);
        controller.remove_color(9).unwrap();
        assert_eq!(colors(&controller), vec![RED, BLUE]);
        controller.clear_colors().unwrap();
        assert_eq!(colors(&controller), vec![RED]);
    }

    #[test]
    fn test_empty_colors_stream_black() {
        let cursor = FrameCursor::new();
        let mut controller = LightController::new(&cursor, MemoryStore::new());
        controller.set_mode(Mode::Lightning).unwrap();
        controller.set_colors(&[]).unwrap();
        assert_eq!(controller.primary_color(), BLACK);
        assert_eq!(cursor.len(), 1);
        assert_eq!(cursor.next_frame(), Frame::BLACK);
    }

    #[test]
    fn test_too_many_colors_rejected() {
        let cursor = FrameCursor::new();
        let mut controller = LightController::new(&cursor, MemoryStore::new());
        assert_eq!(
            controller.set_colors(&[RED, GREEN]),
            Err(ConfigError::TooManyColors { limit: 1, count: 2 })
        );
        controller.set_mode(Mode::Cycle).unwrap();
        assert!(controller.set_colors(&PRESET_COLORS).is_err());
        assert_eq!(colors(&controller), vec![RED]);
    }
}
