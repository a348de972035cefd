#![allow(dead_code)]

use bloglist::application::dto::BlogInput;
use bloglist::application::services::{BlogService, RegistrationPolicy, StatsService, UserService};
use bloglist::domain::entities::Blog;
use bloglist::infrastructure::hashing::BcryptPasswordHasher;
use bloglist::infrastructure::persistence::{MemoryBlogRepository, MemoryUserRepository};
use std::sync::Arc;

pub struct TestServices {
    pub blogs: BlogService<MemoryBlogRepository, MemoryUserRepository>,
    pub users: UserService<MemoryUserRepository, BcryptPasswordHasher>,
    pub stats: StatsService<MemoryBlogRepository>,
    pub hasher: Arc<BcryptPasswordHasher>,
}

pub fn create_test_services() -> TestServices {
    let blog_repo = Arc::new(MemoryBlogRepository::new());
    let user_repo = Arc::new(MemoryUserRepository::new());
    let hasher = Arc::new(BcryptPasswordHasher::new(4).unwrap());

    TestServices {
        blogs: BlogService::new(blog_repo.clone(), user_repo.clone()),
        users: UserService::new(user_repo, hasher.clone(), RegistrationPolicy::default()),
        stats: StatsService::new(blog_repo),
        hasher,
    }
}

pub fn blog_input(title: &str, author: &str, likes: u64) -> BlogInput {
    BlogInput {
        title: title.to_string(),
        author: author.to_string(),
        url: format!("https://example.com/{}", title.to_lowercase().replace(' ', "-")),
        likes: Some(likes),
    }
}

pub fn blog(title: &str, author: &str, likes: u64) -> Blog {
    let input = blog_input(title, author, likes);
    Blog::new(0, input.title, input.author, input.url, likes, None)
}

pub fn list_with_one_blog() -> Vec<Blog> {
    vec![blog(
        "Go To Statement Considered Harmful",
        "Edsger W. Dijkstra",
        5,
    )]
}

pub fn list_with_many_blogs() -> Vec<Blog> {
    vec![
        blog("React patterns", "Michael Chan", 7),
        blog("Go To Statement Considered Harmful", "Edsger W. Dijkstra", 5),
        blog("Canonical string reduction", "Edsger W. Dijkstra", 12),
    ]
}

pub fn list_with_equal_likes() -> Vec<Blog> {
    vec![
        blog("React patterns", "Michael Chan", 7),
        blog("Go To Statement Considered Harmful", "Edsger W. Dijkstra", 9),
        blog("Canonical string reduction", "Edsger W. Dijkstra", 9),
    ]
}
