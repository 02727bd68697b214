//! The post editor page: draft form, media preview, and the owned-post list.
//!
//! The page is stateless on the server. The draft's media lists and the edit
//! target travel back with every submission in hidden fields; the textarea
//! carries the text.

use maud::{html, Markup, PreEscaped};

use crate::components::{
    BaseLayout, Button, Form, HiddenInput, MediaCarousel, MediaKind, PostList, TextArea, Toast,
    UrlDialog,
};
use crate::form::FormController;
use crate::session::Identity;

/// Keeps the submit button disabled while the draft has no text and no media,
/// and makes Enter in a dialog field confirm that dialog.
const EDITOR_SCRIPT: &str = r#"(function() {
    var form = document.getElementById('post-form');
    if (!form) return;
    var content = form.querySelector('textarea[name="content"]');
    var submit = form.querySelector('button[value="submit"]');
    var hasMedia = form.parentElement.dataset.hasMedia === 'true';
    function update() { submit.disabled = !hasMedia && content.value.trim() === ''; }
    content.addEventListener('input', update);
    update();
    form.querySelectorAll('.url-dialog input').forEach(function(input) {
        input.addEventListener('keydown', function(event) {
            if (event.key !== 'Enter') return;
            event.preventDefault();
            input.closest('.url-dialog').querySelector('button[name="action"]').click();
        });
    });
})();"#;

/// Join URLs for a hidden field; one URL per line.
#[must_use]
pub fn join_urls(urls: &[String]) -> String {
    urls.join("\n")
}

/// Split a hidden field back into URLs, skipping blank lines.
#[must_use]
pub fn split_urls(field: &str) -> Vec<String> {
    field
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Render the full posts page for a controller after its intent has run.
#[must_use]
pub fn render_posts_page(form: &FormController, user: Option<&Identity>) -> Markup {
    let state = form.state();
    let draft = state.draft();
    let editing = state.editing();

    let heading = if editing.is_some() {
        "Editar post"
    } else {
        "Criar novo post"
    };
    let submit_label = if editing.is_some() {
        "Salvar alterações"
    } else {
        "Publicar"
    };
    let images = join_urls(&draft.images);
    let video_urls = join_urls(&draft.video_urls);

    let body = html! {
        // First submit button in the form, so implicit submission (Enter in a
        // single-line field) hits this one and goes nowhere.
        button type="submit" class="implicit-submit" hidden disabled aria-hidden="true" {}
        (HiddenInput::new("editing", editing.unwrap_or("")))
        (HiddenInput::new("images", &images))
        (HiddenInput::new("video_urls", &video_urls))

        section class="post-editor" {
            h1 { (heading) }
            (TextArea::new("content")
                .id("content")
                .rows(4)
                .placeholder("O que você está pensando?")
                .value(&draft.content))

            @if draft.has_media() {
                div class="draft-preview" {
                    (MediaCarousel::new("draft", &draft.images, &draft.video_urls))
                }
            }

            div class="editor-actions" {
                (UrlDialog::new(MediaKind::Image))
                (UrlDialog::new(MediaKind::Video))
                div class="editor-submit" {
                    @if editing.is_some() {
                        (Button::secondary("Cancelar").action("cancel"))
                    }
                    (Button::primary(submit_label).action("submit"))
                }
            }
        }

        (PostList::new(form.posts(), editing))
    };

    let content = html! {
        @if let Some(notice) = form.notice() {
            (Toast::new(notice))
        }
        div id="post-form-wrapper" data-has-media=(if draft.has_media() { "true" } else { "false" }) {
            (Form::post("/posts", body).id("post-form").class("post-form"))
        }
        script { (PreEscaped(EDITOR_SCRIPT)) }
    };

    BaseLayout::new("Posts", user).render(content)
}
