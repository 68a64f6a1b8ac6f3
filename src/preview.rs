//! Read-only preview of a contact draft.
//!
//! The preview is a pure projection: it is rebuilt from the draft on demand and
//! keeps no state of its own.

use crate::models::ContactDraft;
use std::fmt;

/// Heading shown above the preview lines.
pub const PREVIEW_HEADING: &str = "プレビュー";

/// One labelled line of the preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLine {
    pub label: &'static str,
    pub value: String,
}

/// Snapshot of every draft field in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    lines: Vec<PreviewLine>,
}

impl Preview {
    pub fn of(draft: &ContactDraft) -> Self {
        let line = |label, value: String| PreviewLine { label, value };

        let lines = vec![
            line("メールアドレス", draft.email().to_string()),
            line("確認メール", draft.confirm_email().to_string()),
            line("氏名", draft.name().to_string()),
            line(
                "電話番号",
                format!("{}-{}-{}", draft.tel1(), draft.tel2(), draft.tel3()),
            ),
            line(
                "お問い合わせ種別",
                draft
                    .category()
                    .map(|c| c.value().to_string())
                    .unwrap_or_default(),
            ),
            line("お問い合わせ内容", draft.message().to_string()),
        ];

        Self { lines }
    }

    pub fn lines(&self) -> &[PreviewLine] {
        &self.lines
    }

    /// Value of the line with the given label, if present.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.value.as_str())
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", PREVIEW_HEADING)?;
        for line in &self.lines {
            writeln!(f, "{}：{}", line.label, line.value)?;
        }
        Ok(())
    }
}
