use std::sync::LazyLock;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::{find_post, BlogPost, SITE};
#[cfg(any(feature = "ssr", feature = "rss"))]
use crate::highlight::render_markdown;

/// Rendered posts by id. Filled on the server by [`get_post`] and in the
/// browser from server function responses.
pub static GLOBAL_POST_CACHE: LazyLock<DashMap<u32, Post>> = LazyLock::new(DashMap::new);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlogError {
    #[error("Blog post not found")]
    NotFound,
    #[error("Invalid blog post id: {0}")]
    InvalidId(String),
}

/// Parse the `:id` route segment. Only plain decimal digits are accepted.
pub fn parse_post_id(raw: &str) -> Result<u32, BlogError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BlogError::InvalidId(raw.to_string()));
    }
    raw.parse::<u32>()
        .map_err(|_| BlogError::InvalidId(raw.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMeta {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub long_date: String,
    pub read_time: String,
    pub tags: Vec<String>,
    pub author: String,
}

impl From<&BlogPost> for PostMeta {
    fn from(p: &BlogPost) -> Self {
        PostMeta {
            id: p.id,
            title: p.title.to_string(),
            date: p.date.to_string(),
            long_date: p.long_date(),
            read_time: p.read_time.to_string(),
            tags: p.tags.iter().map(|t| t.to_string()).collect(),
            author: SITE.author.name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub meta: PostMeta,
    /// HTML rendered from the markdown body
    pub content: String,
}

#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn get_post(id: u32) -> Result<Post, BlogError> {
    let record = find_post(id).ok_or(BlogError::NotFound)?;

    let cache = &*GLOBAL_POST_CACHE;
    let post = cache
        .entry(id)
        .or_insert_with(|| {
            log::debug!("rendering blog post {id}");
            Post {
                meta: PostMeta::from(record),
                content: render_markdown(record.content),
            }
        })
        .clone();
    Ok(post)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_post_id() {
        assert_eq!(parse_post_id("3"), Ok(3));
        assert_eq!(
            parse_post_id("abc"),
            Err(BlogError::InvalidId("abc".to_string()))
        );
        assert!(parse_post_id("-1").is_err());
        assert!(parse_post_id("").is_err());
    }

    #[test]
    fn test_parse_post_id_rejects_non_canonical() {
        for raw in ["+1", " 1", "1 ", "1.0", "0x1"] {
            assert_eq!(
                parse_post_id(raw),
                Err(BlogError::InvalidId(raw.to_string())),
                "id {raw:?}"
            );
        }
        assert_eq!(parse_post_id("01"), Ok(1));
        assert!(parse_post_id("99999999999").is_err());
    }

    #[test]
    fn test_post_meta_from_record() {
        let meta = PostMeta::from(find_post(4).expect("post 4 exists"));
        assert_eq!(meta.id, 4);
        assert_eq!(meta.date, "2024-02-28");
        assert_eq!(meta.title, "Database Design Principles for Modern Applications");
        assert_eq!(meta.long_date, "February 28, 2024");
        assert_eq!(meta.tags, vec!["Database", "PostgreSQL", "Performance"]);
        assert_eq!(meta.author, "Alex Johnson");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(BlogError::NotFound.to_string(), "Blog post not found");
        assert_eq!(
            BlogError::InvalidId("x".to_string()).to_string(),
            "Invalid blog post id: x"
        );
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_get_post_renders_and_caches() {
        let post = get_post(1).expect("post 1 exists");
        assert_eq!(post.meta.id, 1);
        assert!(post.content.contains("<h1>Introduction</h1>"));
        assert!(post.content.contains("<h2>Component Architecture</h2>"));
        assert!(GLOBAL_POST_CACHE.contains_key(&1));

        let again = get_post(1).expect("post 1 exists");
        assert_eq!(again, post);
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_get_post_requested_id() {
        let post = get_post(6).expect("post 6 exists");
        assert_eq!(post.meta.title, "CSS Grid vs Flexbox: When to Use Each Layout Method");
        assert!(post.content.contains("Full content would go here..."));
        assert_eq!(get_post(7), Err(BlogError::NotFound));
    }
}
