pub mod condition;
pub mod player;
pub mod position;
pub mod skills;

pub use condition::*;
pub use player::*;
pub use position::*;
pub use skills::*;
