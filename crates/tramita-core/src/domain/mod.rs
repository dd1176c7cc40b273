//! # Tramita Domain
//!
//! Domain entities and value objects: user accounts and the procedures
//! they are assigned to.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
