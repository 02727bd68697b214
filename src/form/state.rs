//! Form modes and user-facing notices.

use crate::posts::Draft;

/// What the form is doing with its draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    /// Writing a new post
    Composing(Draft),
    /// Changing an existing post
    Editing { post_id: String, draft: Draft },
}

impl Default for FormState {
    fn default() -> Self {
        Self::Composing(Draft::default())
    }
}

impl FormState {
    /// Rebuild the state from a draft and an optional edit target.
    #[must_use]
    pub fn from_parts(draft: Draft, editing: Option<String>) -> Self {
        match editing {
            Some(post_id) if !post_id.is_empty() => Self::Editing { post_id, draft },
            _ => Self::Composing(draft),
        }
    }

    #[must_use]
    pub fn draft(&self) -> &Draft {
        match self {
            Self::Composing(draft) | Self::Editing { draft, .. } => draft,
        }
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        match self {
            Self::Composing(draft) | Self::Editing { draft, .. } => draft,
        }
    }

    /// The post being edited, if any.
    #[must_use]
    pub fn editing(&self) -> Option<&str> {
        match self {
            Self::Composing(_) => None,
            Self::Editing { post_id, .. } => Some(post_id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Success,
    Error,
}

/// A toast shown after an action completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub variant: NoticeVariant,
    pub title: &'static str,
    pub description: &'static str,
}

impl Notice {
    const fn success(description: &'static str) -> Self {
        Self {
            variant: NoticeVariant::Success,
            title: "Sucesso",
            description,
        }
    }

    const fn error(description: &'static str) -> Self {
        Self {
            variant: NoticeVariant::Error,
            title: "Erro",
            description,
        }
    }

    pub const CREATED: Self = Self::success("Post criado com sucesso!");
    pub const UPDATED: Self = Self::success("Post atualizado com sucesso!");
    pub const DELETED: Self = Self::success("Post excluído com sucesso!");
    pub const SUBMIT_FAILED: Self = Self::error("Erro ao processar o post");
    pub const DELETE_FAILED: Self = Self::error("Erro ao excluir o post");
    pub const LOGIN_REQUIRED: Self = Self::error("Você precisa estar logado para criar um post");

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.variant == NoticeVariant::Error
    }
}
