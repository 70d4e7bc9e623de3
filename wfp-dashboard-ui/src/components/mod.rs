//! Reusable Dioxus RSX components for the wildfire dashboard.

mod cause_table;
mod chart_panel;
mod location_picker;
mod month_selector;
mod size_panel;
mod state_selector;
mod status_banner;

pub use cause_table::CauseTable;
pub use chart_panel::ChartPanel;
pub use location_picker::LocationPicker;
pub use month_selector::MonthSelector;
pub use size_panel::SizePanel;
pub use state_selector::StateSelector;
pub use status_banner::StatusBanner;
