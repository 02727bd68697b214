//! Post rows and the draft tuple edited by the form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A row of the `posts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub content: String,
    /// Image URLs in display order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub video_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// Identity of the creating user
    #[serde(rename = "user_id")]
    pub owner: String,
}

impl Post {
    /// Whether the post carries any images or videos.
    #[must_use]
    pub fn has_media(&self) -> bool {
        !self.images.is_empty() || !self.video_urls.is_empty()
    }

    /// The editable part of this post, as a draft.
    #[must_use]
    pub fn to_draft(&self) -> Draft {
        Draft {
            content: self.content.clone(),
            images: self.images.clone(),
            video_urls: self.video_urls.clone(),
        }
    }
}

/// Unsaved content/images/video_urls held by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub content: String,
    pub images: Vec<String>,
    pub video_urls: Vec<String>,
}

impl Draft {
    /// Create a text-only draft.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// A draft is empty when it has no non-whitespace text and no media.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty() && !self.has_media()
    }

    #[must_use]
    pub fn has_media(&self) -> bool {
        !self.images.is_empty() || !self.video_urls.is_empty()
    }
}

/// Insert body for a new post.
#[derive(Debug, Serialize)]
pub struct NewPost<'a> {
    pub content: &'a str,
    pub images: &'a [String],
    pub video_urls: &'a [String],
    pub user_id: &'a str,
}

impl<'a> NewPost<'a> {
    #[must_use]
    pub fn new(draft: &'a Draft, owner_id: &'a str) -> Self {
        Self {
            content: &draft.content,
            images: &draft.images,
            video_urls: &draft.video_urls,
            user_id: owner_id,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_is_empty() {
        assert!(Draft::default().is_empty());
        assert!(Draft::text("   \n\t").is_empty());
        assert!(!Draft::text("hello").is_empty());

        let media_only = Draft {
            images: vec!["https://x/img.png".to_string()],
            ..Draft::default()
        };
        assert!(!media_only.is_empty());

        let video_only = Draft {
            video_urls: vec!["https://x/clip.mp4".to_string()],
            ..Draft::default()
        };
        assert!(!video_only.is_empty());
    }

    #[test]
    fn test_post_deserializes_null_media() {
        let json = r#"{
            "id": "7f1c0a52-5b8e-4a4e-9d0c-0e1f2a3b4c5d",
            "content": "hello",
            "images": null,
            "video_urls": ["https://x/v.mp4"],
            "created_at": "2024-05-01T12:00:00.123456+00:00",
            "user_id": "user-1"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert!(post.images.is_empty());
        assert_eq!(post.video_urls, vec!["https://x/v.mp4".to_string()]);
        assert_eq!(post.owner, "user-1");
        assert!(post.has_media());
    }

    #[test]
    fn test_post_deserializes_missing_media() {
        let json = r#"{
            "id": "1",
            "content": "text only",
            "created_at": "2024-05-01T12:00:00Z",
            "user_id": "user-1"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert!(!post.has_media());
        assert_eq!(post.to_draft(), Draft::text("text only"));
    }

    #[test]
    fn test_new_post_body() {
        let draft = Draft {
            content: "hello".to_string(),
            images: vec!["https://x/img.png".to_string()],
            video_urls: Vec::new(),
        };
        let body = serde_json::to_value(NewPost::new(&draft, "user-1")).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "content": "hello",
                "images": ["https://x/img.png"],
                "video_urls": [],
                "user_id": "user-1"
            })
        );
    }
}
