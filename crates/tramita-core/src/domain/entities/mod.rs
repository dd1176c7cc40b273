//! Domain entities.

mod procedure;
mod user;

pub use procedure::*;
pub use user::*;
