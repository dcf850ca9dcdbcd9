use serde::{Deserialize, Serialize};

/// Highlight item attached to a score: either bare text or a titled paragraph.
///
/// Stored reports contain both shapes, so deserialization accepts a JSON string or an
/// object with `title` and `description`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Labeled {
    PlainText(String),
    TitledEntry { title: String, description: String },
}

impl Labeled {
    pub fn title(&self) -> &str {
        match self {
            Labeled::PlainText(text) => text,
            Labeled::TitledEntry { title, .. } => title,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Labeled::PlainText(_) => None,
            Labeled::TitledEntry { description, .. } => Some(description),
        }
    }

    /// Single-line rendering used by the CLI.
    pub fn summary(&self) -> String {
        match self {
            Labeled::PlainText(text) => text.clone(),
            Labeled::TitledEntry { title, description } => format!("{title}: {description}"),
        }
    }
}
