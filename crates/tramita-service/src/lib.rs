//! # Tramita Service
//!
//! Business logic service layer for Tramita.
//! Services take transfer objects in, convert them to domain objects with
//! the shared [`Mappers`](mappers::Mappers), apply the business rules and
//! hand transfer objects back.

pub mod dto;
pub mod r#impl;
pub mod mappers;
pub mod password;
pub mod procedure_service;
pub mod user_service;

pub use dto::*;
pub use mappers::Mappers;
pub use password::*;
pub use procedure_service::*;
pub use r#impl::*;
pub use user_service::*;
