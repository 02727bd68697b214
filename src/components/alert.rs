//! Alert and toast components for displaying messages and notifications.

use maud::{html, Markup, Render};

use crate::form::{Notice, NoticeVariant};

/// Alert variant types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    Success,
    Error,
}

impl AlertVariant {
    /// Get the CSS class for the alert article element.
    #[must_use]
    pub const fn article_class(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl From<NoticeVariant> for AlertVariant {
    fn from(variant: NoticeVariant) -> Self {
        match variant {
            NoticeVariant::Success => Self::Success,
            NoticeVariant::Error => Self::Error,
        }
    }
}

/// An inline alert message.
///
/// # Example
///
/// ```ignore
/// use crate::components::alert::Alert;
///
/// let alert = Alert::error("E-mail ou senha inválidos").with_title("Erro");
/// ```
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    pub variant: AlertVariant,
    pub title: Option<&'a str>,
    pub message: &'a str,
}

impl<'a> Alert<'a> {
    #[must_use]
    pub const fn new(variant: AlertVariant, message: &'a str) -> Self {
        Self {
            variant,
            title: None,
            message,
        }
    }

    #[must_use]
    pub const fn error(message: &'a str) -> Self {
        Self::new(AlertVariant::Error, message)
    }

    #[must_use]
    pub const fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }
}

impl Render for Alert<'_> {
    fn render(&self) -> Markup {
        html! {
            article class=(self.variant.article_class()) role="alert" {
                @if let Some(title) = self.title {
                    strong { (title) }
                    " "
                }
                (self.message)
            }
        }
    }
}

/// A toast for the notice left by the last action.
#[derive(Debug, Clone, Copy)]
pub struct Toast {
    pub notice: Notice,
}

impl Toast {
    #[must_use]
    pub const fn new(notice: Notice) -> Self {
        Self { notice }
    }
}

impl Render for Toast {
    fn render(&self) -> Markup {
        let variant = AlertVariant::from(self.notice.variant);
        html! {
            div class=(format!("toast toast-{}", variant.article_class())) role="status" aria-live="polite" {
                strong class="toast-title" { (self.notice.title) }
                p class="toast-description" { (self.notice.description) }
            }
        }
    }
}
