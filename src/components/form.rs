//! Form components for maud templates.
//!
//! This module provides the form elements used by the post editor and the
//! sign-in page, matching the styles in `static/css/style.css`.

use maud::{html, Markup, Render};

/// A form container element.
#[derive(Debug)]
pub struct Form<'a> {
    /// Form action URL
    pub action: &'a str,
    /// HTTP method ("get" or "post")
    pub method: &'a str,
    /// Form content (inputs, buttons, etc.)
    pub content: Markup,
    /// Optional CSS class
    pub class: Option<&'a str>,
    /// Optional form ID
    pub id: Option<&'a str>,
}

impl<'a> Form<'a> {
    #[must_use]
    pub fn new(action: &'a str, method: &'a str, content: Markup) -> Self {
        Self {
            action,
            method,
            content,
            class: None,
            id: None,
        }
    }

    /// Create a POST form.
    #[must_use]
    pub fn post(action: &'a str, content: Markup) -> Self {
        Self::new(action, "post", content)
    }

    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}

impl Render for Form<'_> {
    fn render(&self) -> Markup {
        html! {
            form
                action=(self.action)
                method=(self.method)
                class=[self.class]
                id=[self.id]
            {
                (self.content)
            }
        }
    }
}

/// An input element.
#[derive(Debug, Clone)]
pub struct Input<'a> {
    /// Input name attribute
    pub name: &'a str,
    /// Input type ("text", "password", "email", "url", ...)
    pub r#type: &'a str,
    pub placeholder: Option<&'a str>,
    pub required: bool,
    pub id: Option<&'a str>,
    pub autocomplete: Option<&'a str>,
}

impl<'a> Input<'a> {
    #[must_use]
    pub fn new(name: &'a str, r#type: &'a str) -> Self {
        Self {
            name,
            r#type,
            placeholder: None,
            required: false,
            id: None,
            autocomplete: None,
        }
    }

    #[must_use]
    pub fn password(name: &'a str) -> Self {
        Self::new(name, "password")
    }

    #[must_use]
    pub fn email(name: &'a str) -> Self {
        Self::new(name, "email")
    }

    #[must_use]
    pub fn url(name: &'a str) -> Self {
        Self::new(name, "url")
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn autocomplete(mut self, autocomplete: &'a str) -> Self {
        self.autocomplete = Some(autocomplete);
        self
    }
}

impl Render for Input<'_> {
    fn render(&self) -> Markup {
        html! {
            input
                type=(self.r#type)
                name=(self.name)
                placeholder=[self.placeholder]
                required[self.required]
                id=[self.id]
                autocomplete=[self.autocomplete];
        }
    }
}

/// A multi-line text input.
#[derive(Debug, Clone)]
pub struct TextArea<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
    pub placeholder: Option<&'a str>,
    /// Number of visible rows
    pub rows: Option<u32>,
    pub id: Option<&'a str>,
}

impl<'a> TextArea<'a> {
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            value: None,
            placeholder: None,
            rows: None,
            id: None,
        }
    }

    #[must_use]
    pub fn value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    #[must_use]
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}

impl Render for TextArea<'_> {
    fn render(&self) -> Markup {
        html! {
            textarea
                name=(self.name)
                placeholder=[self.placeholder]
                rows=[self.rows]
                id=[self.id]
            {
                @if let Some(value) = self.value {
                    (value)
                }
            }
        }
    }
}

/// A form label.
#[derive(Debug, Clone)]
pub struct Label<'a> {
    /// The ID of the input this label is for
    pub r#for: &'a str,
    pub text: &'a str,
}

impl<'a> Label<'a> {
    #[must_use]
    pub fn new(r#for: &'a str, text: &'a str) -> Self {
        Self { r#for, text }
    }
}

impl Render for Label<'_> {
    fn render(&self) -> Markup {
        html! {
            label for=(self.r#for) { (self.text) }
        }
    }
}

/// A hidden input carrying state between requests.
#[derive(Debug, Clone)]
pub struct HiddenInput<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl<'a> HiddenInput<'a> {
    #[must_use]
    pub fn new(name: &'a str, value: &'a str) -> Self {
        Self { name, value }
    }
}

impl Render for HiddenInput<'_> {
    fn render(&self) -> Markup {
        html! {
            input type="hidden" name=(self.name) value=(self.value);
        }
    }
}

/// A label and its input, stacked.
#[derive(Debug)]
pub struct FormGroup<'a> {
    pub label: Label<'a>,
    pub input: Markup,
}

impl<'a> FormGroup<'a> {
    #[must_use]
    pub fn new(label: Label<'a>, input: Markup) -> Self {
        Self { label, input }
    }
}

impl Render for FormGroup<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="form-group" {
                (self.label)
                (self.input)
            }
        }
    }
}
