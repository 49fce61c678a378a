pub mod enrich;
pub mod rules;

pub use enrich::validate_and_enrich;
