use serde::{Deserialize, Serialize};

use crate::models::Blog;

// -- JWT Claims --

/// Token payload shared by the token service and the auth middleware.
/// `id` is the store-assigned user id; nothing else identifies the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: i64,
    pub exp: usize,
}

// -- Users --

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub username: String,
    pub password: String,
}

// -- Blogs --

#[derive(Debug, Deserialize)]
pub struct CreateBlogRequest {
    pub title: String,
    pub content: String,
}

/// Body of both update routes. `id` selects the row on `PUT /api/v1/blog`
/// and is ignored on `PUT /api/v1/blog/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateBlogRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BlogIdResponse {
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BlogResponse {
    pub blog: Option<Blog>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BlogsResponse {
    pub blogs: Vec<Blog>,
}

/// Error body used by the blog domain: `{"message": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_name_is_optional() {
        let req: SignupRequest =
            serde_json::from_str(r#"{"username":"a","password":"p"}"#).unwrap();
        assert_eq!(req.username, "a");
        assert!(req.name.is_none());
    }

    #[test]
    fn update_without_id_parses() {
        let req: UpdateBlogRequest =
            serde_json::from_str(r#"{"title":"t","content":"c"}"#).unwrap();
        assert!(req.id.is_none());
    }

    #[test]
    fn missing_blog_serializes_as_null() {
        let body = serde_json::to_value(BlogResponse { blog: None }).unwrap();
        assert_eq!(body, serde_json::json!({ "blog": null }));
    }
}
