pub mod chart;
pub mod filter_select;
pub mod status;

pub use chart::PowerChart;
pub use filter_select::FilterSelect;
pub use status::Status;
