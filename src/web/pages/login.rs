//! Sign-in page.

use maud::{html, Markup, Render};

use crate::components::{Alert, BaseLayout, Button, Form, FormGroup, Input, Label};

/// Render the sign-in page, optionally with an error above the form.
#[must_use]
pub fn render_login_page(error: Option<&str>) -> Markup {
    let content = html! {
        div class="auth-container" {
            h1 { "Entrar" }

            @if let Some(e) = error {
                (Alert::error(e).with_title("Erro"))
            }

            (Form::post("/login", html! {
                (FormGroup::new(
                    Label::new("email", "E-mail"),
                    Input::email("email").id("email").required().autocomplete("username").render(),
                ))
                (FormGroup::new(
                    Label::new("password", "Senha"),
                    Input::password("password").id("password").required().autocomplete("current-password").render(),
                ))
                (Button::primary("Entrar").r#type("submit"))
            }))
        }
    };

    BaseLayout::new("Entrar", None).render(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_page() {
        let html = render_login_page(None).into_string();
        assert!(html.contains(r#"action="/login""#));
        assert!(html.contains(r#"name="email""#));
        assert!(html.contains(r#"name="password""#));
        assert!(!html.contains(r#"role="alert""#));
    }

    #[test]
    fn test_login_page_with_error() {
        let html = render_login_page(Some("E-mail ou senha inválidos")).into_string();
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains("E-mail ou senha inválidos"));
    }
}
