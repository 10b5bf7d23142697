use super::error::AppError;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Which measurement table the dashboard is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataType {
    #[default]
    Generation,
    Consumption,
}

impl DataType {
    /// Value used in the data type `<select>`.
    pub fn value(&self) -> &'static str {
        match self {
            DataType::Generation => "generation",
            DataType::Consumption => "consumption",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DataType::Generation => "Generation",
            DataType::Consumption => "Consumption",
        }
    }

    /// API path serving samples of this type.
    pub fn endpoint(&self) -> &'static str {
        match self {
            DataType::Generation => "/generation",
            DataType::Consumption => "/consumption",
        }
    }

    pub fn chart_title(&self) -> String {
        format!("{} Data", self.label())
    }

    pub fn all() -> &'static [DataType] {
        &[DataType::Generation, DataType::Consumption]
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for DataType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generation" => Ok(DataType::Generation),
            "consumption" => Ok(DataType::Consumption),
            _ => Err(AppError::InvalidSelection(format!("Unknown data type: {s}"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PowerTypeMapping {
    pub power_type_id: i64,
    pub power_type_name: String,
}

impl PowerTypeMapping {
    pub fn new(power_type_id: i64, power_type_name: impl Into<String>) -> Self {
        Self {
            power_type_id,
            power_type_name: power_type_name.into(),
        }
    }
}

/// One measured sample as served by `/generation` and `/consumption`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PowerSample {
    pub id: i64,
    pub wattage: f64,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub power_type: i64,
    pub region: String,
}

pub type GenerationData = PowerSample;
pub type ConsumptionData = PowerSample;

/// A point handed to the chart. Region and power type name are carried
/// along for display but are not plotted.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartDataPoint {
    pub timestamp: DateTime<Utc>,
    pub wattage: f64,
    pub region: String,
    pub power_type_name: String,
}

/// Parses RFC 3339 timestamps, and naive ISO-8601 date-times as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|n| n.and_utc()))
        .map_err(|e| AppError::Parse(format!("Invalid timestamp {raw:?}: {e}")))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}
