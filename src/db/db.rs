use super::migrations::init_with_migrations;
use anyhow::Result;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

pub const DB_FILE_NAME: &str = "yarukoto.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens (or creates) the database at `path` and applies pending migrations.
    pub fn open(path: &Path) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Private in-memory database with the current schema.
    pub fn in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens an existing database without touching its schema, for inspection.
    /// Fails instead of creating a file when nothing exists at `path`.
    pub fn open_without_migrations(path: &Path) -> Result<Connection> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(conn)
    }
}
