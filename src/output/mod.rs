//! Output stage: result files, console rendering and the JSON summary.

mod display;
mod json;
mod persist;

pub use display::{print_results, render_results};
pub use json::write_json_summary;
pub use persist::save_results;
