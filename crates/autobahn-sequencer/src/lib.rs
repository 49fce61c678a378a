pub mod chain;
pub mod optimize;

pub use chain::chain_tests;
pub use optimize::optimize;
