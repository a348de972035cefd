use crate::domain::entities::{Blog, BlogPatch, NewBlog};
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Default)]
struct BlogStore {
    next_id: i64,
    blogs: Vec<Blog>,
}

/// In-memory [`BlogRepository`] keeping blogs in insertion order.
///
/// Ids start at 1 and are never reused, even after deletes.
#[derive(Default)]
pub struct MemoryBlogRepository {
    store: RwLock<BlogStore>,
}

impl MemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogRepository for MemoryBlogRepository {
    async fn create(&self, new_blog: NewBlog) -> Result<Blog, AppError> {
        let mut store = self.store.write().await;
        store.next_id += 1;

        let blog = Blog::new(
            store.next_id,
            new_blog.title,
            new_blog.author,
            new_blog.url,
            new_blog.likes,
            new_blog.user_id,
        );
        store.blogs.push(blog.clone());

        debug!(id = blog.id, author = %blog.author, "Blog stored");
        Ok(blog)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Blog>, AppError> {
        let store = self.store.read().await;
        Ok(store.blogs.iter().find(|b| b.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Blog>, AppError> {
        Ok(self.store.read().await.blogs.clone())
    }

    async fn update(&self, id: i64, patch: BlogPatch) -> Result<Blog, AppError> {
        let mut store = self.store.write().await;
        let blog = store
            .blogs
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::not_found("Blog not found", json!({ "id": id })))?;

        blog.apply(patch);
        debug!(id, "Blog updated");
        Ok(blog.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut store = self.store.write().await;
        let index = store
            .blogs
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| AppError::not_found("Blog not found", json!({ "id": id })))?;

        store.blogs.remove(index);
        debug!(id, "Blog deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_blog(title: &str, likes: u64) -> NewBlog {
        NewBlog {
            title: title.to_string(),
            author: "Edsger W. Dijkstra".to_string(),
            url: "https://example.com".to_string(),
            likes,
            user_id: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = MemoryBlogRepository::new();

        let first = repo.create(new_blog("first", 1)).await.unwrap();
        let second = repo.create(new_blog("second", 2)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = MemoryBlogRepository::new();
        repo.create(new_blog("b", 1)).await.unwrap();
        repo.create(new_blog("a", 2)).await.unwrap();

        let titles: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();

        assert_eq!(titles, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = MemoryBlogRepository::new();
        let first = repo.create(new_blog("first", 1)).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(new_blog("second", 1)).await.unwrap();

        assert_eq!(second.id, 2);
        assert!(repo.find_by_id(first.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_blog() {
        let repo = MemoryBlogRepository::new();
        let patch = BlogPatch {
            title: "t".to_string(),
            author: "a".to_string(),
            url: "https://example.com".to_string(),
            likes: 0,
        };

        let result = repo.update(42, patch).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_blog() {
        let repo = MemoryBlogRepository::new();
        let result = repo.delete(42).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
