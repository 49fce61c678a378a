pub mod replay;
pub mod state;
pub mod transition;

pub use replay::{replay, TraceEntry, VehicleMachine};
pub use state::VehicleState;
