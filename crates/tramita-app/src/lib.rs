//! # Tramita App
//!
//! Application assembly for Tramita: configuration loading, logging
//! initialization, dependency wiring and startup data seeding.
//!
//! ```no_run
//! # async fn run() -> tramita_core::TramitaResult<()> {
//! use tramita_app::{AppBuilder, ServiceResolver};
//!
//! let container = AppBuilder::new().with_config_dir("./config").start().await?;
//! let users = container.user_service().find_all().await?;
//! # let _ = users;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod bootstrap;
pub mod di;
pub mod startup;

pub use app::AppBuilder;
pub use bootstrap::seed_admin;
pub use di::*;
