//! Process-memory storage.
//!
//! Rows live in ordered maps guarded by `parking_lot` locks, so listings
//! come back in ID order. Stored values are cloned on every read.

mod procedure_repository;
mod table;
mod user_repository;

pub use procedure_repository::InMemoryProcedureRepository;
pub use user_repository::InMemoryUserRepository;
