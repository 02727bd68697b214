//! REST API over the posts table.

use async_trait::async_trait;
use tracing::debug;

use super::{check_status, UserClient};
use crate::posts::{BackendError, Draft, NewPost, Post, PostRepository};

/// Writes don't need the affected rows echoed back.
const PREFER_MINIMAL: (&str, &str) = ("Prefer", "return=minimal");

fn eq(value: &str) -> String {
    format!("eq.{value}")
}

#[async_trait]
impl PostRepository for UserClient {
    async fn list_owned_by(&self, owner_id: &str) -> Result<Vec<Post>, BackendError> {
        debug!(owner_id = %owner_id, "Listing posts");

        let request = self
            .request(self.backend.http.get(self.backend.table_url()))
            .query(&[
                ("select", "*".to_string()),
                ("user_id", eq(owner_id)),
                ("order", "created_at.desc".to_string()),
            ]);

        let response = check_status(request.send().await?).await?;
        let posts: Option<Vec<Post>> = response.json().await?;
        Ok(posts.unwrap_or_default())
    }

    async fn create(&self, draft: &Draft, owner_id: &str) -> Result<(), BackendError> {
        debug!(
            owner_id = %owner_id,
            images = draft.images.len(),
            videos = draft.video_urls.len(),
            "Inserting post"
        );

        let request = self
            .request(self.backend.http.post(self.backend.table_url()))
            .header(PREFER_MINIMAL.0, PREFER_MINIMAL.1)
            .json(&NewPost::new(draft, owner_id));

        check_status(request.send().await?).await?;
        Ok(())
    }

    async fn update(&self, post_id: &str, draft: &Draft) -> Result<(), BackendError> {
        debug!(post_id = %post_id, "Updating post");

        let request = self
            .request(self.backend.http.patch(self.backend.table_url()))
            .query(&[("id", eq(post_id))])
            .header(PREFER_MINIMAL.0, PREFER_MINIMAL.1)
            .json(draft);

        check_status(request.send().await?).await?;
        Ok(())
    }

    async fn delete(&self, post_id: &str) -> Result<(), BackendError> {
        debug!(post_id = %post_id, "Deleting post");

        let request = self
            .request(self.backend.http.delete(self.backend.table_url()))
            .query(&[("id", eq(post_id))]);

        check_status(request.send().await?).await?;
        Ok(())
    }
}
