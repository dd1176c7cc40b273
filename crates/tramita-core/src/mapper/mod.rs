//! Domain ↔ transfer object mapping.
//!
//! A [`Mapper`] is bound to exactly one pair of types: a domain type (the
//! stored representation) and a transfer type (what crosses the service
//! boundary). The pair is fixed by the implementing type, so it is known
//! before the first conversion. What differs between implementations is how
//! the fields are copied:
//!
//! - [`ConvertMapper`] delegates to `From` impls written field by field.
//! - [`FnMapper`] holds two caller-supplied closures.
//! - [`StructuralMapper`] matches fields by their serialized names.
//!
//! Mappers carry no mutable state. Build one per type pair, wrap it in a
//! [`SharedMapper`] and hand clones of the `Arc` to every caller.

mod convert;
mod function;
mod structural;

pub use convert::ConvertMapper;
pub use function::{FnMapper, FnMapperBuilder};
pub use structural::StructuralMapper;

use crate::MappingResult;
use std::sync::Arc;

/// Bidirectional converter between a domain type and a transfer type.
pub trait Mapper: Send + Sync {
    /// Internal, stored representation.
    type Domain;
    /// Externally facing representation.
    type Transfer;

    /// Builds a transfer object from a domain object.
    ///
    /// Transfer fields without a counterpart in the domain type are left at
    /// their zero value.
    fn to_transfer(&self, domain: Self::Domain) -> MappingResult<Self::Transfer>;

    /// Builds a domain object from a transfer object.
    fn to_domain(&self, transfer: Self::Transfer) -> MappingResult<Self::Domain>;

    /// Converts every element with [`Mapper::to_transfer`], keeping order.
    fn to_transfer_list(&self, domains: Vec<Self::Domain>) -> MappingResult<Vec<Self::Transfer>> {
        domains.into_iter().map(|domain| self.to_transfer(domain)).collect()
    }

    /// Converts every element with [`Mapper::to_domain`], keeping order.
    fn to_domain_list(&self, transfers: Vec<Self::Transfer>) -> MappingResult<Vec<Self::Domain>> {
        transfers.into_iter().map(|transfer| self.to_domain(transfer)).collect()
    }
}

/// Process-wide handle to a mapper for the `K`/`V` pair.
pub type SharedMapper<K, V> = Arc<dyn Mapper<Domain = K, Transfer = V>>;
