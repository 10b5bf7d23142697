pub mod use_dashboard;
pub mod use_live_series;
