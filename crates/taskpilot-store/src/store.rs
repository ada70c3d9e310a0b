//! SQLite-backed todo store.

use crate::error::StoreError;
use log::info;
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;
use taskpilot_core::{Todo, TodoDraft};

/// Table bootstrap, executed on every open.
///
/// `category` is NOT NULL with no default: the closed enumeration is
/// enforced at the validated input boundary, and the store never invents a
/// value outside it.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    task TEXT NOT NULL,
    description TEXT,
    category TEXT NOT NULL,
    priority TEXT NOT NULL,
    due_date TEXT
);
";

/// Single-connection store for todo records.
///
/// Each operation is one statement; callers provide their own serialization
/// (the server wraps the store in an async mutex).
pub struct TodoStore {
    conn: Connection,
}

impl TodoStore {
    /// Open (creating if needed) the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        info!("opened todo store at {}", path.display());
        Self::init(conn)
    }

    /// Open an in-memory database. Used by tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Insert a draft and return the stored record with its assigned id.
    pub fn insert(&self, draft: &TodoDraft) -> Result<Todo, StoreError> {
        self.conn.execute(
            "INSERT INTO todos (task, description, category, priority, due_date)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                draft.task,
                draft.description,
                draft.category.as_str(),
                draft.priority.as_str(),
                draft.due_date,
            ],
        )?;
        Ok(Todo {
            id: self.conn.last_insert_rowid(),
            task: draft.task.clone(),
            description: draft.description.clone(),
            category: draft.category,
            priority: draft.priority,
            due_date: draft.due_date,
        })
    }

    /// Every record, in insertion order.
    pub fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, task, description, category, priority, due_date
             FROM todos ORDER BY id",
        )?;
        let rows = stmt.query_map([], row_to_todo)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Look up one record by id.
    pub fn get(&self, id: i64) -> Result<Option<Todo>, StoreError> {
        let todo = self
            .conn
            .query_row(
                "SELECT id, task, description, category, priority, due_date
                 FROM todos WHERE id = ?1",
                params![id],
                row_to_todo,
            )
            .optional()?;
        Ok(todo)
    }

    /// Write every field of `todo` back to its row.
    ///
    /// Returns false when the id no longer exists.
    pub fn update(&self, todo: &Todo) -> Result<bool, StoreError> {
        let changed = self.conn.execute(
            "UPDATE todos
             SET task = ?2, description = ?3, category = ?4, priority = ?5, due_date = ?6
             WHERE id = ?1",
            params![
                todo.id,
                todo.task,
                todo.description,
                todo.category.as_str(),
                todo.priority.as_str(),
                todo.due_date,
            ],
        )?;
        Ok(changed > 0)
    }

    /// Remove a record by id. Returns false when it was already gone.
    pub fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let changed = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}

fn row_to_todo(row: &Row<'_>) -> rusqlite::Result<Todo> {
    let category: String = row.get(3)?;
    let priority: String = row.get(4)?;
    Ok(Todo {
        id: row.get(0)?,
        task: row.get(1)?,
        description: row.get(2)?,
        category: category.parse().map_err(|err| {
            rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(err))
        })?,
        priority: priority.parse().map_err(|err| {
            rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(err))
        })?,
        due_date: row.get(5)?,
    })
}
