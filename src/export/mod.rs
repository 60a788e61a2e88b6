//! Presentation of a finished calculation: the downloadable CSV sheet and
//! the per-scenario chart series.

mod chart;
mod sheet;

pub use chart::{ChartBar, MAXIMUM_BAR_LABEL, chart_series};
pub use sheet::{CSV_CONTENT_TYPE, CSV_TITLE, export_file_name, render_csv};
