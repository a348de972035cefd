//! Boundary types for blog records coming from outside the process.

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::warn;
use validator::Validate;

use crate::domain::entities::{BlogPatch, MAX_LIKES, NewBlog};
use crate::error::AppError;

/// A blog record as supplied by a caller or a data file.
///
/// `likes` may be omitted or `null`, in which case it counts as 0. Negative
/// or fractional likes fail deserialization, and likes above [`MAX_LIKES`]
/// fail validation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BlogInput {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,

    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    #[serde(default)]
    #[validate(range(max = MAX_LIKES, message = "likes is too large"))]
    pub likes: Option<u64>,
}

impl BlogInput {
    pub fn into_new_blog(self, user_id: Option<i64>) -> NewBlog {
        NewBlog {
            title: self.title,
            author: self.author,
            url: self.url,
            likes: self.likes.unwrap_or(0),
            user_id,
        }
    }

    pub fn into_patch(self) -> BlogPatch {
        BlogPatch {
            title: self.title,
            author: self.author,
            url: self.url,
            likes: self.likes.unwrap_or(0),
        }
    }
}

/// Converts raw JSON records into validated [`BlogInput`]s.
///
/// Stops at the first bad record.
///
/// # Errors
///
/// Returns [`AppError::Validation`] whose details carry the zero-based
/// `index` of the offending record and the reason it was rejected.
pub fn parse_blog_records(records: Vec<Value>) -> Result<Vec<BlogInput>, AppError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| parse_blog_record(index, record))
        .collect()
}

fn parse_blog_record(index: usize, record: Value) -> Result<BlogInput, AppError> {
    let input: BlogInput = serde_json::from_value(record).map_err(|e| {
        warn!(index, error = %e, "Rejected malformed blog record");
        AppError::bad_request(
            "Malformed blog record",
            json!({ "index": index, "reason": e.to_string() }),
        )
    })?;

    input.validate().map_err(|e| {
        warn!(index, "Rejected invalid blog record");
        AppError::bad_request(
            "Invalid blog record",
            json!({ "index": index, "errors": e }),
        )
    })?;

    Ok(input)
}
