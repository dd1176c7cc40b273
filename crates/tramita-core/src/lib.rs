//! # Tramita Core
//!
//! Core types, traits, and error definitions for Tramita.
//! This crate holds the domain model shared by every layer, the generic
//! domain↔transfer [`Mapper`], and the logging bootstrap.

pub mod domain;
pub mod error;
pub mod id;
pub mod mapper;
pub mod result;
pub mod telemetry;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use mapper::*;
pub use result::*;
pub use traits::*;
