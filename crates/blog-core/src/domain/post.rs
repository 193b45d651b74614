use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Parameter names reported in validation errors.
pub mod fields {
    pub const ID: &str = "Id";
    pub const TITLE: &str = "Title";
    pub const SUB_TITLE: &str = "SubTitle";
    pub const CONTENT: &str = "Content";
    pub const AUTHOR: &str = "Author";
    pub const CREATED_DATE: &str = "CreatedDate";
    pub const UPDATED_DATE: &str = "UpdatedDate";
}

/// Post entity - represents a blog post or article.
///
/// `Post::default()` is the empty post: nil id, empty text and epoch
/// timestamps. Those defaults are what the validation rules treat as missing,
/// so absent fields deserialize to them and get reported by the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub sub_title: String,
    pub content: String,
    pub author: String,
    pub created_date: DateTime<FixedOffset>,
    pub updated_date: DateTime<FixedOffset>,
}

impl Post {
    /// Create a new post stamped with `now` for both timestamps.
    pub fn new(
        title: String,
        sub_title: String,
        content: String,
        author: String,
        now: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            sub_title,
            content,
            author,
            created_date: now,
            updated_date: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_has_matching_dates() {
        let now = chrono::Utc::now().fixed_offset();
        let post = Post::new(
            "Title".to_owned(),
            "Sub".to_owned(),
            "Body".to_owned(),
            "Author".to_owned(),
            now,
        );

        assert!(!post.id.is_nil());
        assert_eq!(post.created_date, post.updated_date);
    }

    #[test]
    fn test_serializes_with_camel_case_names() {
        let json = serde_json::to_value(Post::default()).unwrap();

        assert!(json.get("subTitle").is_some());
        assert!(json.get("createdDate").is_some());
        assert!(json.get("updatedDate").is_some());
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let post: Post = serde_json::from_str(r#"{"content":"body"}"#).unwrap();

        assert_eq!(post.content, "body");
        assert!(post.id.is_nil());
        assert!(post.title.is_empty());
        assert_eq!(post.created_date, DateTime::<FixedOffset>::default());
    }
}
