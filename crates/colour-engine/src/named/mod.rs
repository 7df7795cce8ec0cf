//! Nearest named colour.

mod dictionary;
mod matcher;

pub use dictionary::CSS_NAMED_COLOURS;
pub use matcher::{lookup_name, nearest_name, NamedColourMatcher};
