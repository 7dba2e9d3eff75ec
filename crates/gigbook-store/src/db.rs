//! Storage handle
//!
//! `Db` owns exactly one SQLite connection. It is created by the caller and
//! passed by reference into every repository operation; dropping it releases
//! the connection.

use crate::errors::{connection_failure, from_rusqlite, Result};
use crate::migrations::apply_migrations;
use rusqlite::{Connection, OptionalExtension, Params, Row};
use std::path::{Path, PathBuf};

/// Where the store lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Ephemeral; lost when the handle is dropped
    Memory,
    /// Persisted across runs
    File(PathBuf),
}

/// Handle to an initialized gigbook store
#[derive(Debug)]
pub struct Db {
    conn: Connection,
    location: Location,
}

impl Db {
    /// Open (or create) a file-backed store and bring its schema up to date
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| connection_failure(path, e))?;
        Self::init(conn, Location::File(path.to_path_buf()))
    }

    /// Open an in-memory store with a fresh schema
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| connection_failure(Path::new(":memory:"), e))?;
        Self::init(conn, Location::Memory)
    }

    fn init(mut conn: Connection, location: Location) -> Result<Self> {
        configure(&conn, &location)?;
        apply_migrations(&mut conn)?;

        tracing::debug!(location = ?location, "store opened");

        Ok(Self { conn, location })
    }

    /// Whether data written through this handle outlives the process
    pub fn is_persistent(&self) -> bool {
        matches!(self.location, Location::File(_))
    }

    /// Run a parameterized statement and return the last inserted row id
    ///
    /// The row id is only meaningful after an `INSERT`.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<i64> {
        self.conn.execute(sql, params).map_err(from_rusqlite)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Run a parameterized query and map every result row
    pub fn query_rows<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare(sql).map_err(from_rusqlite)?;
        let rows = stmt
            .query_map(params, map)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(rows)
    }

    /// Run a parameterized query and map the first row, if there is one
    pub fn query_opt<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Option<T>>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        self.conn
            .query_row(sql, params, map)
            .optional()
            .map_err(from_rusqlite)
    }

    /// Borrow the underlying connection
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, surfacing any error SQLite reports on close
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| from_rusqlite(e))
    }
}

/// Configure a connection for its location
///
/// File stores use WAL journaling. The schema declares its references but
/// they are never enforced; the bundled SQLite enables enforcement by
/// default, so it is switched off for every connection.
fn configure(conn: &Connection, location: &Location) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", false).map_err(from_rusqlite)?;

    if let Location::File(_) = location {
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| {
            row.get::<_, String>(0)
        })
        .map_err(from_rusqlite)?;
    }

    Ok(())
}
