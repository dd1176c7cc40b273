//! Data Transfer Objects (DTOs).

mod procedure_dto;
mod user_dto;

pub use procedure_dto::*;
pub use user_dto::*;
