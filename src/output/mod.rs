//! Manifest output

mod json;

pub use json::{print_json, write_json};
