pub mod batch;
pub mod engine;
pub mod events;
pub mod result;
pub mod squad;

pub use batch::*;
pub use engine::*;
pub use events::*;
pub use result::*;
pub use squad::*;
