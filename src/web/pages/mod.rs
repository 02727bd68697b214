//! Maud-based page templates for the web UI.
//!
//! Each page module exports a render function that produces the complete HTML.

pub mod login;
pub mod posts;

pub use login::render_login_page;
pub use posts::{render_posts_page, split_urls};
