pub mod balance;
pub mod engine;
pub mod state;
pub mod strength;

pub use balance::*;
pub use engine::*;
pub use state::*;
pub use strength::*;
