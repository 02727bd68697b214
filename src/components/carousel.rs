//! Carousel component for post media.
//!
//! Shows a post's images followed by its videos in a horizontally scrolling
//! track. Sources are the raw URLs stored on the post. The prev/next buttons
//! and the counter are driven by `static/js/carousel.js`.

use maud::{html, Markup, PreEscaped, Render};

/// One slide in the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide<'a> {
    Image(&'a str),
    Video(&'a str),
}

/// Carousel over a post's (or a draft's) media.
///
/// # Example
///
/// ```ignore
/// use crate::components::MediaCarousel;
///
/// html! {
///     (MediaCarousel::new("post-1", &post.images, &post.video_urls))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MediaCarousel<'a> {
    /// Unique ID for this carousel instance
    pub id: &'a str,
    pub slides: Vec<Slide<'a>>,
}

impl<'a> MediaCarousel<'a> {
    /// Images come first, then videos, each in stored order.
    #[must_use]
    pub fn new(id: &'a str, images: &'a [String], video_urls: &'a [String]) -> Self {
        let slides = images
            .iter()
            .map(|src| Slide::Image(src))
            .chain(video_urls.iter().map(|src| Slide::Video(src)))
            .collect();
        Self { id, slides }
    }
}

impl Render for MediaCarousel<'_> {
    fn render(&self) -> Markup {
        let total = self.slides.len();
        if total == 0 {
            return html! {};
        }

        html! {
            div class="carousel" id=(format!("carousel-{}", self.id)) {
                div class="carousel-viewport" {
                    @if total > 1 {
                        button class="carousel-nav carousel-nav-prev"
                               type="button"
                               aria-label="Anterior" {
                            (PreEscaped(r#"<svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M15.41 7.41L14 6l-6 6 6 6 1.41-1.41L10.83 12z"/></svg>"#))
                        }
                        button class="carousel-nav carousel-nav-next"
                               type="button"
                               aria-label="Próximo" {
                            (PreEscaped(r#"<svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M10 6L8.59 7.41 13.17 12l-4.58 4.59L10 18l6-6z"/></svg>"#))
                        }
                    }

                    div class="carousel-track" role="region" aria-label="Mídia do post" {
                        @for (index, slide) in self.slides.iter().enumerate() {
                            div class="carousel-item" data-index=(index) {
                                @match slide {
                                    Slide::Image(src) => {
                                        img src=(src)
                                            alt=(format!("Imagem {}", index + 1))
                                            loading=(if index < 3 { "eager" } else { "lazy" });
                                    }
                                    Slide::Video(src) => {
                                        video controls preload="metadata" src=(src) {
                                            "Seu navegador não suporta vídeos."
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                @if total > 1 {
                    div class="carousel-counter" aria-live="polite" {
                        span class="carousel-current" { "1" }
                        " / "
                        span class="carousel-total" { (total) }
                    }
                }
            }
        }
    }
}
