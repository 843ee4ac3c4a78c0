use crate::libs::user::{NewUser, User};
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

const INSERT_USER: &str = "INSERT INTO users (username, password) VALUES (?1, ?2)";
const SELECT_USER_BY_ID: &str = "SELECT id, username, password FROM users WHERE id = ?1";
const SELECT_USER_BY_USERNAME: &str = "SELECT id, username, password FROM users WHERE username = ?1";

pub struct Users<'c> {
    conn: &'c Connection,
}

impl<'c> Users<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Users { conn }
    }

    pub fn insert(&self, new_user: &NewUser) -> Result<User> {
        self.conn.execute(INSERT_USER, params![new_user.username, new_user.password])?;
        Ok(User::from_new(self.conn.last_insert_rowid(), new_user))
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        self.conn.query_row(SELECT_USER_BY_ID, params![id], map_row).optional()
    }

    pub fn get_by_username(&self, username: &str) -> Result<Option<User>> {
        self.conn.query_row(SELECT_USER_BY_USERNAME, params![username], map_row).optional()
    }
}

fn map_row(row: &Row<'_>) -> Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        password: row.get(2)?,
    })
}
