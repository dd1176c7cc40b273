//! Service implementations.

mod procedure_service_impl;
mod user_service_impl;

pub use procedure_service_impl::ProcedureServiceImpl;
pub use user_service_impl::UserServiceImpl;
