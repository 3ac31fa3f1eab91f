use serde::{Deserialize, Serialize};

/// A blog post as returned to clients. Field names follow the
/// `{"id","title","content","authorId"}` shape existing clients read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
}
