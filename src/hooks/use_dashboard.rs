use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{
    dashboard::{DashboardAction, DashboardState},
    lookups::Lookups,
    power::DataType,
};
use crate::services::api::{ApiConfig, StromClient, load_lookups};

/// Handle returned by `use_dashboard`
#[derive(Clone)]
pub struct DashboardHandle {
    pub state: UseReducerHandle<DashboardState>,
    pub set_data_type: Callback<DataType>,
    pub set_region: Callback<String>,
    pub set_power_type: Callback<String>,
}

/// Owns the filter selection and lookup lists. The lookups are fetched once
/// on mount; each list falls back independently if its request fails.
#[hook]
pub fn use_dashboard(api: Rc<ApiConfig>) -> DashboardHandle {
    let state = use_reducer(DashboardState::new);

    {
        let dispatcher = state.dispatcher();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let lookups = match StromClient::with_config((*api).clone()) {
                    Ok(client) => load_lookups(&client).await,
                    Err(e) => {
                        tracing::warn!(error = %e, "No HTTP client, using fallback lookups");
                        Lookups::fallback()
                    }
                };
                dispatcher.dispatch(DashboardAction::LookupsLoaded(lookups));
            });

            || ()
        });
    }

    let set_data_type = {
        let dispatcher = state.dispatcher();
        Callback::from(move |data_type| dispatcher.dispatch(DashboardAction::SetDataType(data_type)))
    };
    let set_region = {
        let dispatcher = state.dispatcher();
        Callback::from(move |region| dispatcher.dispatch(DashboardAction::SetRegion(region)))
    };
    let set_power_type = {
        let dispatcher = state.dispatcher();
        Callback::from(move |power_type| dispatcher.dispatch(DashboardAction::SetPowerType(power_type)))
    };

    DashboardHandle {
        state,
        set_data_type,
        set_region,
        set_power_type,
    }
}
