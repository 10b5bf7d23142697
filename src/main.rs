use strom_dashboard::{
    components::{
        FilterSelect, PowerChart, Status,
        filter_select::{data_type_options, parsed_callback, power_type_options, region_options},
    },
    config::Config,
    hooks::{use_dashboard::use_dashboard, use_live_series::use_live_series},
    models::power::DataType,
    services::api::ApiConfig,
    utils::console::init_logging,
};
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let api = use_memo((), |_| ApiConfig::from_env());
    let dashboard = use_dashboard(api.clone());

    let selection = dashboard.state.selection().clone();
    let lookups = dashboard.state.lookups().clone();
    let live = use_live_series(
        api,
        selection.clone(),
        lookups.clone(),
        Config::ENABLE_LIVE_SERIES,
    );

    let chart_points = if Config::ENABLE_LIVE_SERIES {
        live.data().cloned()
    } else {
        Some(dashboard.state.chart_data().clone())
    };

    let on_data_type = parsed_callback::<DataType>(dashboard.set_data_type.clone());

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Strom App"}</h1>
                <p class="subtitle">{"Power Generation & Consumption Dashboard"}</p>
            </header>

            <main class="app-main">
                <section class="filter-section">
                    <h2>{"Filter Data"}</h2>
                    <div class="filter-grid">
                        <FilterSelect
                            label="Data Type"
                            value={selection.data_type.value()}
                            options={data_type_options()}
                            on_change={on_data_type}
                        />
                        <FilterSelect
                            label="Region"
                            value={selection.region.clone()}
                            options={region_options(&lookups.regions)}
                            on_change={dashboard.set_region.clone()}
                        />
                        <FilterSelect
                            label="Power Type"
                            value={selection.power_type.clone()}
                            options={power_type_options(&lookups.power_types)}
                            on_change={dashboard.set_power_type.clone()}
                        />
                    </div>
                </section>

                <section class="chart-section">
                    <Status state={(*live).clone()} />
                    if let Some(points) = chart_points {
                        <PowerChart {points} title={dashboard.state.chart_title()} />
                    }
                </section>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    init_logging(Config::LOG_LEVEL);
    yew::Renderer::<App>::new().render();
}
