//! In-memory procedure repository.

use super::table::Table;
use crate::{ProcedureRepository, UserRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::debug;
use tramita_core::{Entity, Procedure, ProcedureId, TramitaError, TramitaResult, User, UserId};

/// Stored form of a procedure. Assignees are kept as user IDs.
#[derive(Clone)]
struct ProcedureRow {
    id: ProcedureId,
    title: String,
    description: String,
    user_ids: Vec<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<&Procedure> for ProcedureRow {
    fn from(procedure: &Procedure) -> Self {
        Self {
            id: procedure.id,
            title: procedure.title.clone(),
            description: procedure.description.clone(),
            user_ids: procedure.assigned_user_ids(),
            created_at: procedure.created_at,
            updated_at: procedure.updated_at,
        }
    }
}

impl Entity<ProcedureId> for ProcedureRow {
    fn id(&self) -> &ProcedureId {
        &self.id
    }
}

/// Procedure repository backed by process memory.
///
/// Assignees are joined against the user repository on every read, so a
/// returned procedure always carries the current state of its users. Users
/// that no longer exist are left out.
pub struct InMemoryProcedureRepository {
    procedures: Table<ProcedureId, ProcedureRow>,
    users: Arc<dyn UserRepository>,
}

impl InMemoryProcedureRepository {
    /// Creates an empty repository that resolves assignees through `users`.
    #[must_use]
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self {
            procedures: Table::new(),
            users,
        }
    }

    async fn join(&self, row: ProcedureRow) -> TramitaResult<Procedure> {
        let mut assigned_users: Vec<User> = Vec::with_capacity(row.user_ids.len());
        for &user_id in &row.user_ids {
            if let Some(user) = self.users.find_by_id(user_id).await? {
                assigned_users.push(user);
            }
        }

        Ok(Procedure {
            id: row.id,
            title: row.title,
            description: row.description,
            assigned_users,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }

    async fn join_all(&self, rows: Vec<ProcedureRow>) -> TramitaResult<Vec<Procedure>> {
        let mut procedures = Vec::with_capacity(rows.len());
        for row in rows {
            procedures.push(self.join(row).await?);
        }
        Ok(procedures)
    }
}

impl std::fmt::Debug for InMemoryProcedureRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryProcedureRepository")
            .field("procedures", &self.procedures.len())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ProcedureRepository for InMemoryProcedureRepository {
    async fn find_by_id(&self, id: ProcedureId) -> TramitaResult<Option<Procedure>> {
        match self.procedures.get(id) {
            Some(row) => Ok(Some(self.join(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> TramitaResult<Vec<Procedure>> {
        self.join_all(self.procedures.all()).await
    }

    async fn find_by_assigned_user(&self, user_id: UserId) -> TramitaResult<Vec<Procedure>> {
        let rows = self.procedures.filter(|row| row.user_ids.contains(&user_id));
        let mut procedures = self.join_all(rows).await?;
        procedures.retain(|procedure| procedure.is_assigned_to(user_id));
        Ok(procedures)
    }

    async fn save(&self, mut procedure: Procedure) -> TramitaResult<Procedure> {
        let row = self
            .procedures
            .insert_unless(ProcedureRow::from(&procedure), |row, id| row.id = id, |_| false)
            .map_err(|row| TramitaError::internal(format!("Procedure id {} already in use", row.id)))?;
        procedure.id = row.id;

        debug!("Stored procedure '{}' as {}", procedure.title, procedure.id);
        Ok(procedure)
    }

    async fn update(&self, procedure: Procedure) -> TramitaResult<Procedure> {
        match self.procedures.replace_unless(ProcedureRow::from(&procedure), |_| false) {
            Ok(Some(_)) => Ok(procedure),
            Ok(None) | Err(_) => Err(TramitaError::not_found("Procedure", procedure.id)),
        }
    }

    async fn count(&self) -> TramitaResult<u64> {
        Ok(self.procedures.len() as u64)
    }
}
