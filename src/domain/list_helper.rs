//! Statistics over a list of blogs.
//!
//! All functions are pure: they borrow the slice, never mutate it and keep no
//! state between calls. Functions that pick a single record return `None` for
//! an empty list.
//!
//! # Tie-breaking
//!
//! - [`favorite_blog`] returns the first blog, in input order, with the
//!   highest like count.
//! - [`most_blogs`] and [`most_likes`] group blogs by exact `author` value and
//!   return the first author, in first-seen order, reaching the maximum.
//!
//! # Overflow
//!
//! Like sums use plain addition. Blogs admitted at the boundary carry at most
//! [`MAX_LIKES`] likes, so no list that fits in memory can overflow `u64`. A
//! list built around that limit panics under overflow checks instead of
//! reporting a capped number.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::entities::Blog;
#[cfg(doc)]
use crate::domain::entities::MAX_LIKES;

/// The most liked blog, reduced to the fields worth reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteBlog {
    pub title: String,
    pub author: String,
    pub likes: u64,
}

/// An author together with how many blogs they have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorBlogCount {
    pub author: String,
    pub post_count: u64,
}

/// An author together with the likes summed over all their blogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLikes {
    pub author: String,
    pub total_likes: u64,
}

/// All list statistics in one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogSummary {
    pub blog_count: usize,
    pub total_likes: u64,
    pub favorite_blog: Option<FavoriteBlog>,
    pub most_blogs: Option<AuthorBlogCount>,
    pub most_likes: Option<AuthorLikes>,
}

/// Sum of likes over all blogs; 0 for an empty list.
pub fn total_likes(blogs: &[Blog]) -> u64 {
    blogs.iter().map(|blog| blog.likes).sum()
}

/// The blog with the most likes.
pub fn favorite_blog(blogs: &[Blog]) -> Option<FavoriteBlog> {
    let favorite = blogs.iter().reduce(|best, current| {
        if best.likes >= current.likes {
            best
        } else {
            current
        }
    })?;

    Some(FavoriteBlog {
        title: favorite.title.clone(),
        author: favorite.author.clone(),
        likes: favorite.likes,
    })
}

/// The author with the most blogs.
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogCount> {
    let (author, post_count) = max_group(group_by_author(blogs, |_| 1))?;
    Some(AuthorBlogCount {
        author: author.to_string(),
        post_count,
    })
}

/// The author whose blogs have the most likes in total.
pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    let (author, total_likes) = max_group(group_by_author(blogs, |blog| blog.likes))?;
    Some(AuthorLikes {
        author: author.to_string(),
        total_likes,
    })
}

/// Computes every statistic over the same list.
pub fn summarize(blogs: &[Blog]) -> BlogSummary {
    BlogSummary {
        blog_count: blogs.len(),
        total_likes: total_likes(blogs),
        favorite_blog: favorite_blog(blogs),
        most_blogs: most_blogs(blogs),
        most_likes: most_likes(blogs),
    }
}

/// Accumulates `weight(blog)` per author, keeping authors in first-seen order.
fn group_by_author<F>(blogs: &[Blog], weight: F) -> Vec<(&str, u64)>
where
    F: Fn(&Blog) -> u64,
{
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, u64)> = Vec::new();

    for blog in blogs {
        let author = blog.author.as_str();
        let slot = *slots.entry(author).or_insert_with(|| {
            groups.push((author, 0));
            groups.len() - 1
        });
        groups[slot].1 += weight(blog);
    }

    groups
}

/// Picks the largest group; an earlier group wins ties.
fn max_group(groups: Vec<(&str, u64)>) -> Option<(&str, u64)> {
    groups
        .into_iter()
        .reduce(|best, current| if best.1 >= current.1 { best } else { current })
}
