use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::{
    dashboard::{FilterSelection, chart_points_from_samples},
    lookups::Lookups,
    power::ChartDataPoint,
};
use crate::services::api::{ApiConfig, StromClient};

#[derive(Clone, PartialEq, Debug)]
pub enum SeriesState {
    Disabled,
    Loading,
    Loaded(Rc<Vec<ChartDataPoint>>),
    Error(String),
}

impl SeriesState {
    /// Returns the points if they are loaded
    pub fn data(&self) -> Option<&Rc<Vec<ChartDataPoint>>> {
        match self {
            SeriesState::Loaded(points) => Some(points),
            _ => None,
        }
    }
}

/// Fetches real samples for the current selection. Failures are surfaced as
/// `SeriesState::Error` without retry or substitute data.
#[hook]
pub fn use_live_series(
    api: Rc<ApiConfig>,
    selection: FilterSelection,
    lookups: Rc<Lookups>,
    enabled: bool,
) -> UseStateHandle<SeriesState> {
    let state = use_state_eq(|| SeriesState::Disabled);

    {
        let state = state.clone();

        use_effect_with(
            (selection, lookups, enabled),
            move |(selection, lookups, enabled)| {
                let aborted = Rc::new(Cell::new(false));

                if *enabled {
                    state.set(SeriesState::Loading);

                    let aborted_check = aborted.clone();
                    let selection = selection.clone();
                    let lookups = lookups.clone();

                    spawn_local(async move {
                        let filters = selection.to_filters(Some(Config::LIVE_SERIES_LIMIT));
                        let result = match StromClient::with_config((*api).clone()) {
                            Ok(client) => client.get_samples(selection.data_type, Some(&filters)).await,
                            Err(e) => Err(e),
                        };

                        if aborted_check.get() {
                            return; // Selection changed while in flight
                        }

                        match result {
                            Ok(samples) => {
                                let points = chart_points_from_samples(samples, &selection, &lookups);
                                state.set(SeriesState::Loaded(Rc::new(points)));
                            }
                            Err(e) => {
                                tracing::error!(error = %e, data_type = %selection.data_type, "Error fetching samples");
                                state.set(SeriesState::Error(e.to_string()));
                            }
                        }
                    });
                } else {
                    state.set(SeriesState::Disabled);
                }

                move || {
                    aborted.set(true);
                }
            },
        );
    }

    state
}
