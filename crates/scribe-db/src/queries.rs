use crate::Database;
use crate::models::{BlogRow, UserRow};
use anyhow::{Context, Result};
use rusqlite::{OptionalExtension, Row};

const USER_COLUMNS: &str = "id, username, password, name";
const BLOG_COLUMNS: &str = "id, title, content, author_id";

impl Database {
    // -- Users --

    pub fn create_user(
        &self,
        username: &str,
        password_hash: &str,
        name: Option<&str>,
    ) -> Result<UserRow> {
        self.with_conn_mut(|conn| {
            let row = conn
                .query_row(
                    &format!(
                        "INSERT INTO users (username, password, name) VALUES (?1, ?2, ?3)
                         RETURNING {USER_COLUMNS}"
                    ),
                    (username, password_hash, name),
                    user_from_row,
                )
                .with_context(|| format!("Failed to create user '{}'", username))?;
            Ok(row)
        })
    }

    pub fn find_user_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare(&format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?1"))?;
            Ok(stmt.query_row([username], user_from_row).optional()?)
        })
    }

    // -- Blogs --

    pub fn create_blog(&self, title: &str, content: &str, author_id: i64) -> Result<BlogRow> {
        self.with_conn_mut(|conn| {
            let row = conn
                .query_row(
                    &format!(
                        "INSERT INTO blogs (title, content, author_id) VALUES (?1, ?2, ?3)
                         RETURNING {BLOG_COLUMNS}"
                    ),
                    (title, content, author_id),
                    blog_from_row,
                )
                .with_context(|| format!("Failed to create blog for author {}", author_id))?;
            Ok(row)
        })
    }

    /// Replace title and content of blog `id`. The author is never touched.
    /// Returns `None` when no row has that id.
    pub fn update_blog(&self, id: i64, title: &str, content: &str) -> Result<Option<BlogRow>> {
        self.with_conn_mut(|conn| {
            let row = conn
                .query_row(
                    &format!(
                        "UPDATE blogs SET title = ?2, content = ?3 WHERE id = ?1
                         RETURNING {BLOG_COLUMNS}"
                    ),
                    (id, title, content),
                    blog_from_row,
                )
                .optional()
                .with_context(|| format!("Failed to update blog {}", id))?;
            Ok(row)
        })
    }

    pub fn find_blog(&self, id: i64) -> Result<Option<BlogRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("SELECT {BLOG_COLUMNS} FROM blogs WHERE id = ?1"))?;
            Ok(stmt.query_row([id], blog_from_row).optional()?)
        })
    }

    /// Every blog in the store, oldest first.
    pub fn list_blogs(&self) -> Result<Vec<BlogRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("SELECT {BLOG_COLUMNS} FROM blogs ORDER BY id"))?;
            let rows = stmt
                .query_map([], blog_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<UserRow> {
    Ok(UserRow {
        id: row.get(0)?,
        username: row.get(1)?,
        password: row.get(2)?,
        name: row.get(3)?,
    })
}

fn blog_from_row(row: &Row<'_>) -> rusqlite::Result<BlogRow> {
    Ok(BlogRow {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        author_id: row.get(3)?,
    })
}
