//! Pure data: the counter state, its actions and the wire payload.

pub mod counter;
pub mod payload;

pub use counter::*;
pub use payload::*;
