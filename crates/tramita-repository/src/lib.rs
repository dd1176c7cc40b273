//! # Tramita Repository
//!
//! Storage seam for the service layer:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository> / Arc<dyn ProcedureRepository>
//! InMemoryUserRepository / InMemoryProcedureRepository
//!   ↓
//! process memory
//! ```
//!
//! Services depend only on the traits. Enable the `mocks` feature to get
//! `mockall` doubles (`MockUserRepository`, `MockProcedureRepository`).

pub mod memory;
pub mod traits;

pub use memory::*;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tramita_core::{Procedure, Role, User, UserId};

    #[tokio::test]
    async fn test_repositories_work_behind_trait_objects() {
        let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let procedures: Arc<dyn ProcedureRepository> = Arc::new(InMemoryProcedureRepository::new(Arc::clone(&users)));

        let ana = users
            .save(User::new("ana", "ana@example.com", "Ana", "hash", Role::Finalizador))
            .await
            .unwrap();

        let mut procedure = Procedure::new("Permit", "");
        procedure.assign_users(vec![ana.clone()]);
        let saved = procedures.save(procedure).await.unwrap();

        let assigned = procedures.find_by_assigned_user(ana.id).await.unwrap();
        assert_eq!(assigned.len(), 1);
        assert_eq!(assigned[0].id, saved.id);
        assert!(procedures.find_by_assigned_user(UserId::new(99)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_saves_get_distinct_ids() {
        let users = Arc::new(InMemoryUserRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let users = Arc::clone(&users);
                tokio::spawn(async move {
                    users
                        .save(User::new(
                            format!("user{}", i),
                            format!("user{}@example.com", i),
                            "User",
                            "hash",
                            Role::Finalizador,
                        ))
                        .await
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 16);
        assert_eq!(users.count().await.unwrap(), 16);
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_usernames_store_one() {
        let users = Arc::new(InMemoryUserRepository::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let users = Arc::clone(&users);
                tokio::spawn(async move {
                    users
                        .save(User::new(
                            "same",
                            format!("same{}@example.com", i),
                            "Same",
                            "hash",
                            Role::Triador,
                        ))
                        .await
                        .is_ok()
                })
            })
            .collect();

        let mut stored = 0;
        for handle in handles {
            if handle.await.unwrap() {
                stored += 1;
            }
        }
        assert_eq!(stored, 1);
        assert_eq!(users.count().await.unwrap(), 1);
    }
}
