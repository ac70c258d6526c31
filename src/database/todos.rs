//! To-do Persistence
//!
//! Queries for the todos table. Every statement matches on both the row id
//! and the owner id, so a to-do belonging to another user behaves exactly
//! like a missing row.

use anyhow::{Context, Result};
use uuid::Uuid;

use crate::database::connection::DatabaseConnection;
use crate::database::models::{FromRow, Todo};

impl DatabaseConnection {
    /// Insert a new to-do for the given owner, defaulting to not completed
    pub async fn create_todo(&self, owner_id: Uuid, content: &str) -> Result<Todo> {
        let client = self
            .pool()
            .get()
            .await
            .context("Failed to get DB connection")?;

        let row = client
            .query_one(
                "INSERT INTO todos (id, owner_id, content) VALUES ($1, $2, $3)
                 RETURNING id, owner_id, content, completed, created_at, updated_at",
                &[&Uuid::new_v4(), &owner_id, &content],
            )
            .await
            .context("Failed to insert to-do")?;

        Todo::from_row(&row).context("Failed to read inserted to-do row")
    }

    /// Fetch all of one owner's to-dos in insertion order
    pub async fn list_todos_by_owner(&self, owner_id: Uuid) -> Result<Vec<Todo>> {
        let client = self
            .pool()
            .get()
            .await
            .context("Failed to get DB connection")?;

        let rows = client
            .query(
                "SELECT id, owner_id, content, completed, created_at, updated_at
                 FROM todos WHERE owner_id = $1
                 ORDER BY created_at ASC, id ASC",
                &[&owner_id],
            )
            .await
            .context("Failed to query to-dos by owner")?;

        rows.iter()
            .map(Todo::from_row)
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read to-do rows")
    }

    /// Update content and/or completed on a to-do. Fields left as `None`
    /// keep their stored value. Returns `None` when no row matches both the
    /// id and the owner.
    pub async fn update_todo(
        &self,
        owner_id: Uuid,
        todo_id: Uuid,
        content: Option<&str>,
        completed: Option<bool>,
    ) -> Result<Option<Todo>> {
        let client = self
            .pool()
            .get()
            .await
            .context("Failed to get DB connection")?;

        let row = client
            .query_opt(
                "UPDATE todos
                 SET content = COALESCE($3, content),
                     completed = COALESCE($4, completed),
                     updated_at = NOW()
                 WHERE id = $1 AND owner_id = $2
                 RETURNING id, owner_id, content, completed, created_at, updated_at",
                &[&todo_id, &owner_id, &content, &completed],
            )
            .await
            .context("Failed to update to-do")?;

        row.map(|r| Todo::from_row(&r))
            .transpose()
            .context("Failed to read updated to-do row")
    }

    /// Delete a to-do. Returns `false` when no row matches both the id and
    /// the owner.
    pub async fn delete_todo(&self, owner_id: Uuid, todo_id: Uuid) -> Result<bool> {
        let client = self
            .pool()
            .get()
            .await
            .context("Failed to get DB connection")?;

        let deleted = client
            .execute(
                "DELETE FROM todos WHERE id = $1 AND owner_id = $2",
                &[&todo_id, &owner_id],
            )
            .await
            .context("Failed to delete to-do")?;

        Ok(deleted > 0)
    }
}
