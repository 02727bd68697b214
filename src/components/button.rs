//! Button component for the web UI.
//!
//! Every interaction on the post page is a form submission, so buttons carry
//! a `name`/`value` pair that tells the handler which intent was chosen.

use maud::{html, Markup, Render};

/// Button style variants matching CSS classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary button (default) - `.btn.btn-primary`
    #[default]
    Primary,
    /// Outline button - `.btn.outline`
    Outline,
    /// Danger button - `.btn.btn-danger`
    Danger,
    /// Secondary button - `.btn.btn-secondary`
    Secondary,
}

impl ButtonVariant {
    /// Returns the CSS class(es) for this variant.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Outline => "btn outline",
            Self::Danger => "btn btn-danger",
            Self::Secondary => "btn btn-secondary",
        }
    }
}

/// A configurable button.
///
/// # Example
///
/// ```ignore
/// use crate::components::button::Button;
///
/// let publish = Button::primary("Publicar").action("submit");
/// let remove = Button::danger("Excluir").action(&format!("delete:{id}"));
/// ```
#[derive(Debug, Clone)]
pub struct Button<'a> {
    pub label: &'a str,
    pub variant: ButtonVariant,
    /// Value of the `action` field sent when this button submits the form
    pub action: Option<&'a str>,
    /// Button type attribute, `submit` when an action is set, else `button`
    pub r#type: Option<&'a str>,
    pub title: Option<&'a str>,
}

impl<'a> Button<'a> {
    #[must_use]
    pub fn new(label: &'a str, variant: ButtonVariant) -> Self {
        Self {
            label,
            variant,
            action: None,
            r#type: None,
            title: None,
        }
    }

    #[must_use]
    pub fn primary(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Primary)
    }

    #[must_use]
    pub fn outline(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Outline)
    }

    #[must_use]
    pub fn danger(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Danger)
    }

    #[must_use]
    pub fn secondary(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Secondary)
    }

    /// Submit the surrounding form with `action=<value>`.
    #[must_use]
    pub fn action(mut self, action: &'a str) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn r#type(mut self, r#type: &'a str) -> Self {
        self.r#type = Some(r#type);
        self
    }

    /// Tooltip, also used as the accessible label for icon-only buttons.
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    fn button_type(&self) -> &'a str {
        self.r#type
            .unwrap_or(if self.action.is_some() { "submit" } else { "button" })
    }
}

impl Render for Button<'_> {
    fn render(&self) -> Markup {
        html! {
            button
                type=(self.button_type())
                class=(self.variant.class())
                title=[self.title]
                aria-label=[self.title]
                name=[self.action.map(|_| "action")]
                value=[self.action]
            {
                (self.label)
            }
        }
    }
}
