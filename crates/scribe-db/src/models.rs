//! Database row types. These map directly to SQLite rows.
//! `UserRow` never leaves the server; `BlogRow` converts into the public model.

use scribe_types::models::Blog;

#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    /// Argon2 PHC string.
    pub password: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogRow {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
}

impl From<BlogRow> for Blog {
    fn from(row: BlogRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            author_id: row.author_id,
        }
    }
}
