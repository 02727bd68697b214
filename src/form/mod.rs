//! Form state controller: draft, edit target, owned posts, notices.

pub mod controller;
pub mod state;

pub use controller::{FormController, FormError, SubmitOutcome};
pub use state::{FormState, Notice, NoticeVariant};
