//! Mapper that matches fields by their serialized names.

use super::Mapper;
use crate::{MappingConfigurationError, MappingResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;
use tracing::error;

/// Copies same-named fields between two serde types.
///
/// The source is serialized to a JSON value and the target is deserialized
/// from it, which recurses into nested structs and collections. Source
/// fields the target does not declare are ignored. For target fields the
/// source lacks to fall back to zero values, the target must carry
/// `#[serde(default)]`; otherwise the target cannot be built and the call
/// fails with [`MappingConfigurationError`].
pub struct StructuralMapper<K, V> {
    _pair: PhantomData<fn() -> (K, V)>,
}

impl<K, V> StructuralMapper<K, V> {
    /// Creates the mapper.
    #[must_use]
    pub const fn new() -> Self {
        Self { _pair: PhantomData }
    }
}

impl<K, V> Default for StructuralMapper<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for StructuralMapper<K, V> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for StructuralMapper<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuralMapper")
            .field("domain", &std::any::type_name::<K>())
            .field("transfer", &std::any::type_name::<V>())
            .finish()
    }
}

fn copy_fields<S, T>(source: S) -> MappingResult<T>
where
    S: Serialize,
    T: DeserializeOwned,
{
    let shape = serde_json::to_value(source).map_err(|e| failed::<S, T>("source is not serializable", &e))?;
    serde_json::from_value(shape).map_err(|e| failed::<S, T>("target cannot be constructed", &e))
}

fn failed<S, T>(what: &str, cause: &serde_json::Error) -> MappingConfigurationError {
    let err = MappingConfigurationError::new::<S, T>(format!("{}: {}", what, cause));
    error!(
        source_type = err.source_type,
        target_type = err.target_type,
        reason = %err.reason,
        "Structural mapping failed"
    );
    err
}

impl<K, V> Mapper for StructuralMapper<K, V>
where
    K: Serialize + DeserializeOwned,
    V: Serialize + DeserializeOwned,
{
    type Domain = K;
    type Transfer = V;

    fn to_transfer(&self, domain: K) -> MappingResult<V> {
        copy_fields(domain)
    }

    fn to_domain(&self, transfer: V) -> MappingResult<K> {
        copy_fields(transfer)
    }
}
