#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::angles::*;
    use crate::config::*;
    use crate::enums::*;
    use crate::errors::ConfigError;
    use crate::events::Event;
    use crate::state::{UnitView, WorldSnapshot};
    use crate::types::{Position, SimTime, UnitId};

    // ---- Angles ----

    #[test]
    fn test_signed_heading_diff_shortest_path() {
        assert_relative_eq!(signed_heading_diff(10.0, 350.0), -20.0);
        assert_relative_eq!(signed_heading_diff(350.0, 10.0), 20.0);
        assert_relative_eq!(signed_heading_diff(90.0, 45.0), -45.0);
        assert_relative_eq!(signed_heading_diff(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_signed_heading_diff_half_turn_is_positive() {
        assert_relative_eq!(signed_heading_diff(0.0, 180.0), 180.0);
        assert_relative_eq!(signed_heading_diff(180.0, 0.0), 180.0);
        assert_relative_eq!(signed_heading_diff(270.0, 90.0), 180.0);
    }

    #[test]
    fn test_signed_heading_diff_range_over_grid() {
        let mut from = 0.0;
        while from < 360.0 {
            let mut to = 0.0;
            while to < 360.0 {
                let d = signed_heading_diff(from, to);
                assert!(d > -180.0 && d <= 180.0, "diff({from}, {to}) = {d}");
                to += 7.5;
            }
            from += 11.25;
        }
    }

    #[test]
    fn test_normalize_heading() {
        assert_relative_eq!(normalize_heading(-5.0), 355.0);
        assert_relative_eq!(normalize_heading(360.0), 0.0);
        assert_relative_eq!(normalize_heading(725.0), 5.0);
        assert!(normalize_heading(-1e-18) < 360.0);
    }

    #[test]
    fn test_is_valid_heading() {
        assert!(is_valid_heading(0.0));
        assert!(is_valid_heading(359.999));
        assert!(!is_valid_heading(360.0));
        assert!(!is_valid_heading(-0.1));
        assert!(!is_valid_heading(f64::NAN));
    }

    #[test]
    fn test_bearing_deg_cardinal_directions() {
        let origin = Position::new(0.0, 0.0, 0.0);
        assert_relative_eq!(bearing_deg(&origin, &Position::new(0.0, 10.0, 0.0)), 0.0);
        assert_relative_eq!(bearing_deg(&origin, &Position::new(10.0, 0.0, 0.0)), 90.0);
        assert_relative_eq!(bearing_deg(&origin, &Position::new(0.0, -10.0, 0.0)), 180.0);
        assert_relative_eq!(bearing_deg(&origin, &Position::new(-10.0, 0.0, 0.0)), 270.0);
        assert_relative_eq!(bearing_deg(&origin, &origin), 0.0);
    }

    // ---- Types ----

    #[test]
    fn test_distance_km_ignores_altitude() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3000.0, 4000.0, 9000.0);
        assert_relative_eq!(a.distance_km(&b), 5.0);
        assert_relative_eq!(a.horizontal_range_to(&b), 5000.0);
    }

    #[test]
    fn test_position_offset() {
        let p = Position::new(100.0, 100.0, 50.0).offset(90.0, 1000.0);
        assert_relative_eq!(p.x, 1100.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 100.0, epsilon = 1e-9);
        assert_relative_eq!(p.z, 50.0);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(0.5);
        time.advance(0.5);
        assert_eq!(time.tick, 2);
        assert_relative_eq!(time.elapsed_secs, 1.0);
    }

    // ---- Config ----

    #[test]
    fn test_two_party_mapping() {
        let pair = TwoPartyMapping::default();
        assert_eq!(pair.other(UnitId(1)), UnitId(2));
        assert_eq!(pair.other(UnitId(2)), UnitId(1));
        // Any other launcher maps to the second id.
        assert_eq!(pair.other(UnitId(7)), UnitId(2));
    }

    #[test]
    fn test_default_config_is_pac3() {
        let config = ScenarioConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.fratricide.enabled);
        assert_eq!(config.missile.speed_profile.len(), 8);
        assert_eq!(config.missile.speed_profile[1].time_secs, 20.0);
        assert_eq!(config.missile.speed_profile[1].speed_kts, 2300.0);
    }

    #[test]
    fn test_config_from_partial_json() {
        let json = r#"{ "seed": 7, "fratricide": { "enabled": false } }"#;
        let config = ScenarioConfig::from_json_str(json).unwrap();
        assert_eq!(config.seed, 7);
        assert!(!config.fratricide.enabled);
        assert_eq!(config.fratricide.radius_km, 1.5);
        assert_eq!(config.tick_secs, 1.0);
        assert_eq!(config.missile, MissileConfig::default());
    }

    #[test]
    fn test_config_serde() {
        let config = ScenarioConfig {
            seed: 99,
            tick_secs: 0.25,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back = ScenarioConfig::from_json_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_config_rejects_bad_tick() {
        let err = ScenarioConfig::from_json_str(r#"{ "tick_secs": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = ScenarioConfig::from_json_str(r#"{ "tick_secs": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_config_rejects_degenerate_pair() {
        let json = r#"{ "fratricide": { "pair": { "first": 3, "second": 3 } } }"#;
        let err = ScenarioConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_config_parse_error() {
        let err = ScenarioConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    // ---- Events / snapshots ----

    #[test]
    fn test_event_serde_is_tagged() {
        let event = Event::UnitDestroyed {
            aggressor: UnitId(5),
            source: UnitId(1),
            victim: UnitId(3),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"UnitDestroyed""#));
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_snapshot_lookup() {
        let snapshot = WorldSnapshot {
            time: SimTime::default(),
            units: vec![UnitView {
                id: UnitId(4),
                name: "Bandit 1".to_string(),
                class: UnitClass::Aircraft,
                side: Side::Red,
                position: Position::default(),
                heading: 180.0,
                speed: 400.0,
                target: None,
            }],
        };
        assert_eq!(snapshot.unit(UnitId(4)).unwrap().name, "Bandit 1");
        assert!(snapshot.unit(UnitId(5)).is_none());
    }
}
