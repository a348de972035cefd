//! Loading blog records from JSON files.

use std::path::Path;

use serde_json::{Value, json};
use tracing::info;

use crate::application::dto::parse_blog_records;
use crate::domain::entities::NewBlog;
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;

/// Reads a JSON array of blog records and validates every record.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the file cannot be read.
/// Returns [`AppError::Validation`] if the content is not a JSON array or a
/// record is malformed (see [`parse_blog_records`]).
pub async fn load_blogs(path: &Path) -> Result<Vec<NewBlog>, AppError> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::internal(
            "Failed to read blog file",
            json!({ "path": path.display().to_string(), "reason": e.to_string() }),
        )
    })?;

    let blogs = parse_blogs(&content)?;
    info!(path = %path.display(), count = blogs.len(), "Loaded blog records");
    Ok(blogs)
}

/// Parses and validates blog records from a JSON document.
pub fn parse_blogs(content: &str) -> Result<Vec<NewBlog>, AppError> {
    let document: Value = serde_json::from_str(content).map_err(|e| {
        AppError::bad_request("Invalid JSON", json!({ "reason": e.to_string() }))
    })?;

    let Value::Array(records) = document else {
        return Err(AppError::bad_request(
            "Expected a JSON array of blog records",
            json!({}),
        ));
    };

    Ok(parse_blog_records(records)?
        .into_iter()
        .map(|input| input.into_new_blog(None))
        .collect())
}

/// Stores every record in the repository, preserving order.
pub async fn seed<R: BlogRepository>(repository: &R, blogs: Vec<NewBlog>) -> Result<(), AppError> {
    for blog in blogs {
        repository.create(blog).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::MemoryBlogRepository;

    const TWO_BLOGS: &str = r#"[
        { "title": "React patterns", "author": "Michael Chan", "url": "https://reactpatterns.com/", "likes": 7 },
        { "title": "Type wars", "author": "Robert C. Martin", "url": "http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html" }
    ]"#;

    #[test]
    fn test_parse_blogs() {
        let blogs = parse_blogs(TWO_BLOGS).unwrap();

        assert_eq!(blogs.len(), 2);
        assert_eq!(blogs[0].likes, 7);
        assert_eq!(blogs[1].likes, 0);
        assert!(blogs.iter().all(|b| b.user_id.is_none()));
    }

    #[test]
    fn test_parse_blogs_requires_array() {
        let err = parse_blogs(r#"{ "title": "t" }"#).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_parse_blogs_invalid_json() {
        let err = parse_blogs("[{").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = load_blogs(Path::new("/nonexistent/blogs.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_load_and_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blogs.json");
        tokio::fs::write(&path, TWO_BLOGS).await.unwrap();

        let repo = MemoryBlogRepository::new();
        seed(&repo, load_blogs(&path).await.unwrap()).await.unwrap();

        let stored = repo.list().await.unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].title, "React patterns");
        assert_eq!(stored[1].id, 2);
    }
}
