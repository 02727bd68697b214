//! Maud HTML template components for the web UI.
//!
//! - `layout`: Base page layout and navigation
//! - `alert`: Inline alerts and the post-action toast
//! - `button`: Form-submitting buttons
//! - `card`: Post cards and the owned-post list
//! - `carousel`: Image and video carousel
//! - `dialog`: Media URL dialogs
//! - `form`: Form elements and input components

pub mod alert;
pub mod button;
pub mod card;
pub mod carousel;
pub mod dialog;
pub mod form;
pub mod layout;

pub use alert::{Alert, AlertVariant, Toast};
pub use button::{Button, ButtonVariant};
pub use card::{PostCard, PostList};
pub use carousel::{MediaCarousel, Slide};
pub use dialog::{MediaKind, UrlDialog};
pub use form::{Form, FormGroup, HiddenInput, Input, Label, TextArea};
pub use layout::BaseLayout;

/// Re-export maud for convenience
pub use maud::{html, Markup, PreEscaped, DOCTYPE};
