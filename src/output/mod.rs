pub mod console;
pub mod export;

pub use console::{format_report, format_school, should_use_colors, NO_CENTERS_MESSAGE};
pub use export::{render_csv, CSV_HEADERS};
