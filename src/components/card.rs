//! Card components for the owned-post list.

use maud::{html, Markup, Render};

use super::button::Button;
use super::carousel::MediaCarousel;
use crate::posts::Post;

/// One post in the "Seus posts" list, with its edit and delete actions.
///
/// Cards are rendered inside the editor form, so their buttons submit the
/// current draft along with the chosen action.
#[derive(Debug, Clone)]
pub struct PostCard<'a> {
    pub post: &'a Post,
    /// Highlight the card whose post is loaded in the editor
    pub is_editing: bool,
}

impl<'a> PostCard<'a> {
    #[must_use]
    pub const fn new(post: &'a Post) -> Self {
        Self {
            post,
            is_editing: false,
        }
    }

    #[must_use]
    pub const fn editing(mut self, is_editing: bool) -> Self {
        self.is_editing = is_editing;
        self
    }
}

impl Render for PostCard<'_> {
    fn render(&self) -> Markup {
        let post = self.post;
        let edit_action = format!("edit:{}", post.id);
        let delete_action = format!("delete:{}", post.id);
        let class = if self.is_editing {
            "post-card editing"
        } else {
            "post-card"
        };

        html! {
            article class=(class) id=(format!("post-{}", post.id)) {
                @if !post.content.is_empty() {
                    p class="post-content" { (post.content) }
                }
                @if post.has_media() {
                    (MediaCarousel::new(&post.id, &post.images, &post.video_urls))
                }
                footer class="post-card-footer" {
                    time datetime=(post.created_at.to_rfc3339()) {
                        (post.created_at.format("%d/%m/%Y %H:%M").to_string())
                    }
                    div class="post-actions" {
                        (Button::outline("Editar").action(&edit_action))
                        (Button::danger("Excluir").action(&delete_action).title("Excluir post"))
                    }
                }
            }
        }
    }
}

/// The list of the signed-in user's posts.
#[derive(Debug, Clone)]
pub struct PostList<'a> {
    pub posts: &'a [Post],
    pub editing: Option<&'a str>,
}

impl<'a> PostList<'a> {
    #[must_use]
    pub const fn new(posts: &'a [Post], editing: Option<&'a str>) -> Self {
        Self { posts, editing }
    }
}

impl Render for PostList<'_> {
    fn render(&self) -> Markup {
        html! {
            section class="post-list" {
                h2 { "Seus posts" }
                @if self.posts.is_empty() {
                    p class="empty-state" { "Você ainda não publicou nada." }
                } @else {
                    @for post in self.posts {
                        (PostCard::new(post).editing(self.editing == Some(post.id.as_str())))
                    }
                }
            }
        }
    }
}
