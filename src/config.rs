use tracing::Level;

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Base URL used when no override was provided at build time
    pub const DEFAULT_API_BASE_URL: &'static str = "http://localhost:8000/api";

    /// Number of points in the placeholder series (one per day)
    pub const PLACEHOLDER_POINTS: usize = 10;

    /// Placeholder wattage range in MW, upper bound exclusive
    pub const PLACEHOLDER_WATTAGE_MIN: f64 = 500.0;
    pub const PLACEHOLDER_WATTAGE_MAX: f64 = 1500.0;

    /// Fetch real samples instead of the placeholder series
    pub const ENABLE_LIVE_SERIES: bool = false;

    /// `limit` passed to the sample endpoints when the live series is on
    pub const LIVE_SERIES_LIMIT: u32 = 100;

    /// Label used when a filter is not narrowing the selection
    pub const ALL_LABEL: &'static str = "All";

    /// Lookup lists shown when the backend cannot be reached
    pub const FALLBACK_POWER_TYPES: &'static [(i64, &'static str)] = &[(1, "Solar"), (2, "Wind")];
    pub const FALLBACK_REGIONS: &'static [&'static str] = &["Nord", "Süd"];

    /// Chart styling
    pub const CHART_LINE_COLOR: &'static str = "rgb(75, 192, 192)";
    pub const CHART_FILL_COLOR: &'static str = "rgba(75, 192, 192, 0.2)";

    /// chrono pattern for x-axis labels, rendered in the browser's locale
    /// (calendar date, no time of day)
    pub const DATE_LABEL_FORMAT: &'static str = "%x";

    /// Delay before re-rendering the chart after a window resize
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// Most verbose level forwarded to the browser console
    pub const LOG_LEVEL: Level = Level::INFO;
}
