//! Base layout components for the web UI.
//!
//! This module provides the main page layout structure including
//! the HTML skeleton, navigation, and footer.

use maud::{html, Markup, DOCTYPE};

use crate::session::Identity;

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Olá" } };
/// let page = BaseLayout::new("Posts", user.as_ref()).render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    user: Option<&'a Identity>,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page title and user.
    ///
    /// Pass `None` for anonymous visitors.
    #[must_use]
    pub fn new(title: &'a str, user: Option<&'a Identity>) -> Self {
        Self { title, user }
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main class="container">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="pt-BR" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    meta name="color-scheme" content="light dark";
                    title { (self.title) " - Post Desk" }
                    link rel="stylesheet" href="/static/css/style.css";
                    script src="/static/js/carousel.js" defer {}
                }
                body {
                    (self.render_header())
                    main class="container" {
                        (content)
                    }
                    (Self::render_footer())
                }
            }
        }
    }

    fn render_header(&self) -> Markup {
        html! {
            header class="container" {
                nav {
                    ul {
                        li {
                            a href="/posts" {
                                strong class="site-logo" { "Post Desk" }
                            }
                        }
                    }
                    ul {
                        (self.render_auth_nav())
                    }
                }
            }
        }
    }

    fn render_auth_nav(&self) -> Markup {
        match self.user {
            Some(user) => html! {
                li class="nav-user" { (user.email.as_deref().unwrap_or(&user.id)) }
                li {
                    form action="/logout" method="post" class="inline-form" {
                        button type="submit" class="btn outline" { "Sair" }
                    }
                }
            },
            None => html! {
                li { a href="/login" { "Entrar" } }
            },
        }
    }

    fn render_footer() -> Markup {
        html! {
            footer class="container" {
                small { "Post Desk" }
            }
        }
    }
}
