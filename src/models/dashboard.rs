use super::{
    lookups::Lookups,
    power::{ChartDataPoint, DataType, PowerSample},
};
use crate::{config::Config, services::api::DataFilters};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use std::rc::Rc;
use yew::functional::Reducible;

/// The three filter selects. Empty region or power type means "no filter".
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FilterSelection {
    pub data_type: DataType,
    pub region: String,
    pub power_type: String,
}

impl FilterSelection {
    /// Request filters for the sample endpoints.
    pub fn to_filters(&self, limit: Option<u32>) -> DataFilters {
        DataFilters {
            region: (!self.region.is_empty()).then(|| self.region.clone()),
            power_type: self.power_type.parse().ok(),
            start_date: None,
            end_date: None,
            limit,
        }
    }

    pub fn region_label(&self) -> &str {
        if self.region.is_empty() {
            Config::ALL_LABEL
        } else {
            &self.region
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardAction {
    SetDataType(DataType),
    SetRegion(String),
    SetPowerType(String),
    LookupsLoaded(Lookups),
}

/// All mutable dashboard state. Every change to the selection or the lookup
/// lists goes through [`DashboardState::apply`], which rebuilds the chart data.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    selection: FilterSelection,
    lookups: Rc<Lookups>,
    chart_data: Rc<Vec<ChartDataPoint>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::initial(Utc::now(), &mut rand::thread_rng())
    }

    /// Empty lookups, unfiltered selection, chart data derived at `now`.
    pub fn initial<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Self {
        let mut state = Self {
            selection: FilterSelection::default(),
            lookups: Rc::new(Lookups::default()),
            chart_data: Rc::new(Vec::new()),
        };
        state.recompute(now, rng);
        state
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn lookups(&self) -> &Rc<Lookups> {
        &self.lookups
    }

    pub fn chart_data(&self) -> &Rc<Vec<ChartDataPoint>> {
        &self.chart_data
    }

    pub fn chart_title(&self) -> String {
        self.selection.data_type.chart_title()
    }

    /// Applies one action. Returns `false`, leaving the chart data untouched,
    /// when the action does not change anything.
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        action: DashboardAction,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> bool {
        let changed = match action {
            DashboardAction::SetDataType(data_type) => {
                replace_if_changed(&mut self.selection.data_type, data_type)
            }
            DashboardAction::SetRegion(region) => {
                replace_if_changed(&mut self.selection.region, region)
            }
            DashboardAction::SetPowerType(power_type) => {
                replace_if_changed(&mut self.selection.power_type, power_type)
            }
            DashboardAction::LookupsLoaded(lookups) => {
                if *self.lookups == lookups {
                    false
                } else {
                    self.lookups = Rc::new(lookups);
                    true
                }
            }
        };

        if changed {
            self.recompute(now, rng);
        }
        changed
    }

    fn recompute<R: Rng + ?Sized>(&mut self, now: DateTime<Utc>, rng: &mut R) {
        self.chart_data = Rc::new(placeholder_series(&self.selection, &self.lookups, now, rng));
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action, Utc::now(), &mut rand::thread_rng()) {
            Rc::new(next)
        } else {
            self
        }
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

/// Stand-in series until the chart is wired to the sample endpoints: one
/// random point per day for the last days up to `now`, oldest first.
pub fn placeholder_series<R: Rng + ?Sized>(
    selection: &FilterSelection,
    lookups: &Lookups,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<ChartDataPoint> {
    let region = selection.region_label();
    let power_type_name = lookups.power_type_name(&selection.power_type);

    let mut points: Vec<ChartDataPoint> = (0..Config::PLACEHOLDER_POINTS)
        .map(|i| ChartDataPoint {
            timestamp: now - Duration::days(i as i64),
            wattage: rng.gen_range(Config::PLACEHOLDER_WATTAGE_MIN..Config::PLACEHOLDER_WATTAGE_MAX),
            region: region.to_string(),
            power_type_name: power_type_name.to_string(),
        })
        .collect();

    points.reverse();
    points
}

/// Converts fetched samples into chart points, oldest first. Region and power
/// type name read "All" unless the corresponding filter is set.
pub fn chart_points_from_samples(
    mut samples: Vec<PowerSample>,
    selection: &FilterSelection,
    lookups: &Lookups,
) -> Vec<ChartDataPoint> {
    samples.sort_by_key(|s| s.timestamp);

    samples
        .into_iter()
        .map(|s| {
            let region = if selection.region.is_empty() {
                Config::ALL_LABEL.to_string()
            } else {
                s.region
            };
            let power_type_name = if selection.power_type.is_empty() {
                Config::ALL_LABEL
            } else {
                lookups.name_for_id(s.power_type).unwrap_or(Config::ALL_LABEL)
            };

            ChartDataPoint {
                timestamp: s.timestamp,
                wattage: s.wattage,
                region,
                power_type_name: power_type_name.to_string(),
            }
        })
        .collect()
}
