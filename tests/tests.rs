#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Locale, TimeZone, Utc};
    use futures::executor::block_on;
    use rand::{SeedableRng, rngs::StdRng};
    use std::cell::Cell;
    use strom_dashboard::components::chart::{build_chart, series_data};
    use strom_dashboard::hooks::use_live_series::SeriesState;
    use strom_dashboard::models::{
        dashboard::{DashboardAction, DashboardState, FilterSelection, placeholder_series},
        error::AppError,
        lookups::Lookups,
        power::{DataType, PowerSample, PowerTypeMapping},
    };
    use strom_dashboard::services::api::{DataFilters, LookupSource, decode_body, load_lookups};

    // Lookup source answering from canned results
    struct FakeSource {
        power_types: Result<Vec<PowerTypeMapping>, AppError>,
        regions: Result<Vec<String>, AppError>,
        calls: Cell<u32>,
    }

    impl FakeSource {
        fn new(types_ok: bool, regions_ok: bool) -> Self {
            Self {
                power_types: if types_ok {
                    Ok(vec![
                        PowerTypeMapping::new(4068, "Stromerzeugung: Photovoltaik"),
                        PowerTypeMapping::new(4067, "Stromerzeugung: Wind Onshore"),
                    ])
                } else {
                    Err(AppError::HttpStatus {
                        status: 500,
                        body: "boom".to_string(),
                    })
                },
                regions: if regions_ok {
                    Ok(vec!["DE".to_string(), "Amprion".to_string()])
                } else {
                    Err(AppError::Transport("DNS failure".to_string()))
                },
                calls: Cell::new(0),
            }
        }
    }

    impl LookupSource for FakeSource {
        async fn power_types(&self) -> Result<Vec<PowerTypeMapping>, AppError> {
            self.calls.set(self.calls.get() + 1);
            self.power_types.clone()
        }

        async fn regions(&self) -> Result<Vec<String>, AppError> {
            self.calls.set(self.calls.get() + 1);
            self.regions.clone()
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 4, 8, 45, 0).unwrap()
    }

    fn fallback_like_lookups() -> Lookups {
        Lookups::new(
            vec![PowerTypeMapping::new(1, "Solar"), PowerTypeMapping::new(2, "Wind")],
            vec!["Nord".to_string(), "Süd".to_string()],
        )
    }

    // ===== Startup Lookup Tests =====

    #[test]
    fn test_load_lookups_independent_fallback() {
        let fallback = Lookups::fallback();

        for (types_ok, regions_ok) in [(true, true), (true, false), (false, true), (false, false)] {
            let source = FakeSource::new(types_ok, regions_ok);
            let lookups = block_on(load_lookups(&source));

            assert_eq!(source.calls.get(), 2);
            match &source.power_types {
                Ok(types) => assert_eq!(&lookups.power_types, types),
                Err(_) => assert_eq!(lookups.power_types, fallback.power_types),
            }
            match &source.regions {
                Ok(regions) => assert_eq!(&lookups.regions, regions),
                Err(_) => assert_eq!(lookups.regions, fallback.regions),
            }
        }
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_display() {
        let error = AppError::HttpStatus {
            status: 404,
            body: String::new(),
        };
        assert_eq!(error.to_string(), "HTTP error! status: 404");
        assert_eq!(error.status(), Some(404));

        let error = AppError::Transport("Connection refused".to_string());
        assert_eq!(error.to_string(), "Network error: Connection refused");
        assert_eq!(error.status(), None);
    }

    // ===== Sample Decoding Tests =====

    #[test]
    fn test_sample_deserialization() {
        let json = r#"[
            {"id": 7, "wattage": 1234.5, "timestamp": "2025-10-04T00:15:00+00:00", "power_type": 4068, "region": "DE"},
            {"id": 8, "wattage": 99.0, "timestamp": "2025-10-04T00:30:00", "power_type": 4068, "region": "DE"}
        ]"#;

        let samples: Vec<PowerSample> = decode_body(json).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].wattage, 1234.5);
        assert_eq!(
            samples[1].timestamp,
            Utc.with_ymd_and_hms(2025, 10, 4, 0, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_sample_with_bad_timestamp_is_parse_error() {
        let json = r#"[{"id": 1, "wattage": 1.0, "timestamp": "soon", "power_type": 1, "region": "DE"}]"#;
        let result: Result<Vec<PowerSample>, _> = decode_body(json);
        assert!(matches!(result, Err(AppError::Parse(_))));
    }

    // ===== Query Parameter Tests =====

    #[test]
    fn test_query_params_present_exactly_once() {
        let cases = [
            (DataFilters::default(), vec![]),
            (
                DataFilters {
                    region: Some("Nord".to_string()),
                    ..DataFilters::default()
                },
                vec!["region=Nord"],
            ),
            (
                DataFilters {
                    power_type: Some(2),
                    limit: Some(25),
                    ..DataFilters::default()
                },
                vec!["power_type=2", "limit=25"],
            ),
            (
                DataFilters {
                    region: Some("Süd".to_string()),
                    power_type: Some(0),
                    limit: Some(0),
                    ..DataFilters::default()
                },
                vec!["region=S%C3%BCd"],
            ),
        ];

        for (filters, expected) in cases {
            let query = filters.query_string();
            let pairs: Vec<&str> = if query.is_empty() {
                vec![]
            } else {
                query.split('&').collect()
            };
            assert_eq!(pairs, expected);
        }
    }

    // ===== Derived Sequence Tests =====

    #[test]
    fn test_placeholder_series_is_ordered_daily() {
        let mut rng = StdRng::seed_from_u64(42);
        let selection = FilterSelection {
            data_type: DataType::Generation,
            region: "Süd".to_string(),
            power_type: "2".to_string(),
        };
        let points = placeholder_series(&selection, &fallback_like_lookups(), fixed_now(), &mut rng);

        assert_eq!(points.len(), 10);
        for pair in points.windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
            assert_eq!(pair[1].timestamp - pair[0].timestamp, Duration::days(1));
        }
        assert!(points.iter().all(|p| p.region == "Süd" && p.power_type_name == "Wind"));
    }

    #[test]
    fn test_unmatched_power_type_resolves_to_all() {
        let lookups = fallback_like_lookups();
        assert_eq!(lookups.power_type_name("1"), "Solar");
        assert_eq!(lookups.power_type_name("2"), "Wind");
        assert_eq!(lookups.power_type_name(""), "All");
        assert_eq!(lookups.power_type_name("3"), "All");
    }

    #[test]
    fn test_end_to_end_consumption_nord_solar() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut state = DashboardState::initial(fixed_now(), &mut rng);
        assert_eq!(state.chart_title(), "Generation Data");

        state.apply(DashboardAction::LookupsLoaded(fallback_like_lookups()), fixed_now(), &mut rng);
        state.apply(DashboardAction::SetDataType(DataType::Consumption), fixed_now(), &mut rng);
        state.apply(DashboardAction::SetRegion("Nord".to_string()), fixed_now(), &mut rng);
        state.apply(DashboardAction::SetPowerType("1".to_string()), fixed_now(), &mut rng);

        let points = state.chart_data();
        assert_eq!(points.len(), 10);
        assert!(points.iter().all(|p| p.region == "Nord"));
        assert!(points.iter().all(|p| p.power_type_name == "Solar"));
        assert_eq!(state.chart_title(), "Consumption Data");
        assert_eq!(state.selection().data_type, DataType::Consumption);
    }

    // ===== Chart Tests =====

    #[test]
    fn test_chart_from_dashboard_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(5);
        let state = DashboardState::initial(fixed_now(), &mut rng);

        let data = series_data(state.chart_data(), &Utc, Locale::POSIX);
        assert_eq!(data.0.len(), 10);
        assert_eq!(data.0.last().unwrap(), "10/04/25");
        assert!(data.0.iter().all(|label| !label.contains(':')));

        let first = build_chart(&data, &state.chart_title()).to_string();
        let second = build_chart(&series_data(state.chart_data(), &Utc, Locale::POSIX), &state.chart_title()).to_string();
        assert_eq!(first, second);
    }

    // ===== SeriesState Tests =====

    #[test]
    fn test_series_state_data_extraction() {
        let mut rng = StdRng::seed_from_u64(11);
        let state = DashboardState::initial(fixed_now(), &mut rng);
        let loaded = SeriesState::Loaded(state.chart_data().clone());

        assert_eq!(loaded.data(), Some(state.chart_data()));
        assert!(SeriesState::Loading.data().is_none());
        assert!(SeriesState::Disabled.data().is_none());
        assert!(SeriesState::Error("Test error".to_string()).data().is_none());
    }
}
