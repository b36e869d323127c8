mod constants;
mod formatter;
mod unit_table;

pub use constants::LIGHT_YEAR_THRESHOLD_METERS;
pub use formatter::format_distance;
