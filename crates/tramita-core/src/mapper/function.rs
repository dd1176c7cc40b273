//! Mapper built from caller-supplied conversion functions.

use super::Mapper;
use crate::{MappingConfigurationError, MappingResult};
use std::fmt;
use std::sync::Arc;
use tracing::error;

type ConvertFn<A, B> = Arc<dyn Fn(A) -> B + Send + Sync>;

/// Strategy mapper holding one closure per direction.
///
/// A direction that was never bound fails every call with
/// [`MappingConfigurationError`]; list conversions check the binding before
/// looking at their input, so an unbound mapper fails even on empty lists.
pub struct FnMapper<K, V> {
    to_transfer: Option<ConvertFn<K, V>>,
    to_domain: Option<ConvertFn<V, K>>,
}

impl<K, V> FnMapper<K, V> {
    /// Creates a mapper with both directions bound.
    pub fn new<F, G>(to_transfer: F, to_domain: G) -> Self
    where
        F: Fn(K) -> V + Send + Sync + 'static,
        G: Fn(V) -> K + Send + Sync + 'static,
    {
        Self {
            to_transfer: Some(Arc::new(to_transfer)),
            to_domain: Some(Arc::new(to_domain)),
        }
    }

    /// Creates a mapper with no direction bound.
    #[must_use]
    pub const fn unbound() -> Self {
        Self {
            to_transfer: None,
            to_domain: None,
        }
    }

    /// Starts building a mapper one direction at a time.
    #[must_use]
    pub const fn builder() -> FnMapperBuilder<K, V> {
        FnMapperBuilder {
            mapper: Self::unbound(),
        }
    }

    /// Returns true when both directions are bound.
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.to_transfer.is_some() && self.to_domain.is_some()
    }

    fn transfer_fn(&self) -> MappingResult<&ConvertFn<K, V>> {
        self.to_transfer
            .as_ref()
            .ok_or_else(|| unbound::<K, V>("domain -> transfer"))
    }

    fn domain_fn(&self) -> MappingResult<&ConvertFn<V, K>> {
        self.to_domain
            .as_ref()
            .ok_or_else(|| unbound::<V, K>("transfer -> domain"))
    }
}

fn unbound<S, T>(direction: &str) -> MappingConfigurationError {
    let err = MappingConfigurationError::new::<S, T>(format!(
        "no {} conversion is bound to this mapper",
        direction
    ));
    error!(
        source_type = err.source_type,
        target_type = err.target_type,
        "Mapper used before its conversion was bound"
    );
    err
}

impl<K, V> Mapper for FnMapper<K, V> {
    type Domain = K;
    type Transfer = V;

    fn to_transfer(&self, domain: K) -> MappingResult<V> {
        let convert = self.transfer_fn()?;
        Ok(convert(domain))
    }

    fn to_domain(&self, transfer: V) -> MappingResult<K> {
        let convert = self.domain_fn()?;
        Ok(convert(transfer))
    }

    fn to_transfer_list(&self, domains: Vec<K>) -> MappingResult<Vec<V>> {
        let convert = self.transfer_fn()?;
        Ok(domains.into_iter().map(|domain| convert(domain)).collect())
    }

    fn to_domain_list(&self, transfers: Vec<V>) -> MappingResult<Vec<K>> {
        let convert = self.domain_fn()?;
        Ok(transfers.into_iter().map(|transfer| convert(transfer)).collect())
    }
}

impl<K, V> Clone for FnMapper<K, V> {
    fn clone(&self) -> Self {
        Self {
            to_transfer: self.to_transfer.clone(),
            to_domain: self.to_domain.clone(),
        }
    }
}

impl<K, V> Default for FnMapper<K, V> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<K, V> fmt::Debug for FnMapper<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMapper")
            .field("domain", &std::any::type_name::<K>())
            .field("transfer", &std::any::type_name::<V>())
            .field("to_transfer_bound", &self.to_transfer.is_some())
            .field("to_domain_bound", &self.to_domain.is_some())
            .finish()
    }
}

/// Builder for [`FnMapper`].
pub struct FnMapperBuilder<K, V> {
    mapper: FnMapper<K, V>,
}

impl<K, V> FnMapperBuilder<K, V> {
    /// Binds the domain → transfer conversion.
    #[must_use]
    pub fn to_transfer<F>(mut self, convert: F) -> Self
    where
        F: Fn(K) -> V + Send + Sync + 'static,
    {
        self.mapper.to_transfer = Some(Arc::new(convert));
        self
    }

    /// Binds the transfer → domain conversion.
    #[must_use]
    pub fn to_domain<G>(mut self, convert: G) -> Self
    where
        G: Fn(V) -> K + Send + Sync + 'static,
    {
        self.mapper.to_domain = Some(Arc::new(convert));
        self
    }

    /// Finishes the mapper. Directions not bound stay unbound.
    #[must_use]
    pub fn build(self) -> FnMapper<K, V> {
        self.mapper
    }
}
