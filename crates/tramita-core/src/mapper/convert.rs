//! Mapper backed by `From` conversions.

use super::Mapper;
use crate::MappingResult;
use std::fmt;
use std::marker::PhantomData;

/// Mapper that delegates to `From<K> for V` and `From<V> for K`.
///
/// The field correspondence lives in those impls, so the compiler checks
/// every copied field. Conversions never fail.
pub struct ConvertMapper<K, V> {
    _pair: PhantomData<fn() -> (K, V)>,
}

impl<K, V> ConvertMapper<K, V> {
    /// Creates the mapper.
    #[must_use]
    pub const fn new() -> Self {
        Self { _pair: PhantomData }
    }
}

impl<K, V> Default for ConvertMapper<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for ConvertMapper<K, V> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for ConvertMapper<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertMapper")
            .field("domain", &std::any::type_name::<K>())
            .field("transfer", &std::any::type_name::<V>())
            .finish()
    }
}

impl<K, V> Mapper for ConvertMapper<K, V>
where
    K: From<V>,
    V: From<K>,
{
    type Domain = K;
    type Transfer = V;

    fn to_transfer(&self, domain: K) -> MappingResult<V> {
        Ok(V::from(domain))
    }

    fn to_domain(&self, transfer: V) -> MappingResult<K> {
        Ok(K::from(transfer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Account {
        id: i64,
        name: String,
        role: String,
        password_hash: String,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct AccountView {
        id: i64,
        name: String,
        role: String,
        nickname: String,
    }

    impl From<Account> for AccountView {
        fn from(account: Account) -> Self {
            Self {
                id: account.id,
                name: account.name,
                role: account.role,
                ..Self::default()
            }
        }
    }

    impl From<AccountView> for Account {
        fn from(view: AccountView) -> Self {
            Self {
                id: view.id,
                name: view.name,
                role: view.role,
                ..Self::default()
            }
        }
    }

    fn ana() -> Account {
        Account {
            id: 7,
            name: "Ana".to_string(),
            role: "ADMIN".to_string(),
            password_hash: "x".to_string(),
        }
    }

    #[test]
    fn test_unmatched_source_fields_are_dropped() {
        let mapper = ConvertMapper::<Account, AccountView>::new();
        let view = mapper.to_transfer(ana()).unwrap();
        assert_eq!(
            view,
            AccountView {
                id: 7,
                name: "Ana".to_string(),
                role: "ADMIN".to_string(),
                nickname: String::new(),
            }
        );
    }

    #[test]
    fn test_round_trip_of_representable_value() {
        let mapper = ConvertMapper::<Account, AccountView>::new();
        let account = Account {
            password_hash: String::new(),
            ..ana()
        };
        let back = mapper.to_domain(mapper.to_transfer(account.clone()).unwrap()).unwrap();
        assert_eq!(back, account);
    }

    #[test]
    fn test_partially_populated_source() {
        let mapper = ConvertMapper::<Account, AccountView>::new();
        let view = mapper
            .to_transfer(Account {
                id: 1,
                ..Account::default()
            })
            .unwrap();
        assert_eq!(view.id, 1);
        assert!(view.name.is_empty());
        assert!(view.role.is_empty());
    }

    #[test]
    fn test_empty_domain_list() {
        let mapper = ConvertMapper::<Account, AccountView>::default();
        assert!(mapper.to_domain_list(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_debug_names_the_pair() {
        let mapper = ConvertMapper::<Account, AccountView>::new();
        let debug = format!("{:?}", mapper);
        assert!(debug.contains("Account"));
        assert!(debug.contains("AccountView"));
    }
}
