//! Disclosure dialogs that collect a single media URL.

use maud::{html, Markup, Render};

use super::button::Button;
use super::form::{FormGroup, Input, Label};

/// Which draft sequence the dialog appends to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Name of the URL field submitted with the form.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Image => "image_url",
            Self::Video => "video_url",
        }
    }

    /// `action` value that confirms the dialog.
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::Image => "attach_image",
            Self::Video => "attach_video",
        }
    }

    const fn trigger(&self) -> &'static str {
        match self {
            Self::Image => "Foto",
            Self::Video => "Vídeo",
        }
    }

    const fn heading(&self) -> &'static str {
        match self {
            Self::Image => "Adicionar foto do Dropbox",
            Self::Video => "Adicionar vídeo do Dropbox",
        }
    }

    const fn placeholder(&self) -> &'static str {
        match self {
            Self::Image => "Cole o link da imagem do Dropbox",
            Self::Video => "Cole o link do vídeo do Dropbox",
        }
    }
}

/// A `<details>` dialog with one URL field and a confirm button.
///
/// The field is not `required`: other buttons in the same form must still
/// submit while it is empty.
#[derive(Debug, Clone, Copy)]
pub struct UrlDialog {
    pub kind: MediaKind,
}

impl UrlDialog {
    #[must_use]
    pub const fn new(kind: MediaKind) -> Self {
        Self { kind }
    }
}

impl Render for UrlDialog {
    fn render(&self) -> Markup {
        let field = self.kind.field();
        html! {
            details class="url-dialog" {
                summary class="btn outline" role="button" { (self.kind.trigger()) }
                div class="url-dialog-body" {
                    h3 { (self.kind.heading()) }
                    (FormGroup::new(
                        Label::new(field, "URL"),
                        Input::url(field)
                            .id(field)
                            .placeholder(self.kind.placeholder())
                            .autocomplete("off")
                            .render(),
                    ))
                    (Button::primary("Adicionar").action(self.kind.action()))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_dialog() {
        let html = UrlDialog::new(MediaKind::Image).render().into_string();
        assert!(html.contains("<details"));
        assert!(html.contains("Adicionar foto do Dropbox"));
        assert!(html.contains(r#"name="image_url""#));
        assert!(html.contains(r#"value="attach_image""#));
        assert!(!html.contains("required"));
    }

    #[test]
    fn test_video_dialog() {
        let html = UrlDialog::new(MediaKind::Video).render().into_string();
        assert!(html.contains("Adicionar vídeo do Dropbox"));
        assert!(html.contains(r#"name="video_url""#));
        assert!(html.contains(r#"value="attach_video""#));
    }
}
