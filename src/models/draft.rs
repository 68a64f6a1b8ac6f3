//! In-progress contact submission owned by the form.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::request::SubmissionPayload;

/// Inquiry category chosen from an exclusive set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Product inquiry
    #[serde(rename = "商品")]
    A,
    /// Contract inquiry
    #[serde(rename = "契約")]
    B,
    /// Anything else
    #[serde(rename = "その他")]
    Other,
}

impl Category {
    /// Every selectable category, in display order.
    pub const ALL: [Category; 3] = [Category::A, Category::B, Category::Other];

    /// Value carried in the preview and on the wire.
    pub fn value(self) -> &'static str {
        match self {
            Category::A => "商品",
            Category::B => "契約",
            Category::Other => "その他",
        }
    }

    /// Label shown next to the choice.
    pub fn label(self) -> &'static str {
        match self {
            Category::A => "A",
            Category::B => "B",
            Category::Other => "その他の問い合わせ",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Mutable draft of one contact submission.
///
/// Each field has its own setter and no setter touches another field. The
/// intended constraints (matching confirmation email, digit-only phone groups of
/// at most four characters) are not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactDraft {
    name: String,
    email: String,
    confirm_email: String,
    tel1: String,
    tel2: String,
    tel3: String,
    category: Option<Category>,
    message: String,
}

impl ContactDraft {
    /// Create an empty draft with no category selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_confirm_email(&mut self, value: impl Into<String>) {
        self.confirm_email = value.into();
    }

    pub fn set_tel1(&mut self, value: impl Into<String>) {
        self.tel1 = value.into();
    }

    pub fn set_tel2(&mut self, value: impl Into<String>) {
        self.tel2 = value.into();
    }

    pub fn set_tel3(&mut self, value: impl Into<String>) {
        self.tel3 = value.into();
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        self.message = value.into();
    }

    /// Select a category, replacing any previous selection.
    pub fn select_category(&mut self, category: Category) {
        self.category = Some(category);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn confirm_email(&self) -> &str {
        &self.confirm_email
    }

    pub fn tel1(&self) -> &str {
        &self.tel1
    }

    pub fn tel2(&self) -> &str {
        &self.tel2
    }

    pub fn tel3(&self) -> &str {
        &self.tel3
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether `category` is the currently selected choice.
    pub fn is_selected(&self, category: Category) -> bool {
        self.category == Some(category)
    }

    /// Body sent on submit. Only the name and email leave the client.
    pub fn payload(&self) -> SubmissionPayload {
        SubmissionPayload {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}
