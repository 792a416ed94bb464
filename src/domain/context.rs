//! Project context sent alongside a prompt

use crate::domain::llm::ChatMessage;

/// The file being worked on and, optionally, the selected part of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    pub file_path: String,
    pub file_content: String,
    pub selection: Option<String>,
}

impl ProjectContext {
    pub fn new(file_path: impl Into<String>, file_content: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            file_content: file_content.into(),
            selection: None,
        }
    }

    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selection = Some(selection.into());
        self
    }

    /// Render the context block; the selection wins over the full file when
    /// it is non-empty.
    pub fn render(&self) -> String {
        let mut text = String::from("CONTEXT:\n");
        text.push_str("File: ");
        text.push_str(&self.file_path);
        text.push('\n');

        match self.selection.as_deref() {
            Some(selection) if !selection.is_empty() => {
                text.push_str("Selected code:\n```\n");
                text.push_str(selection);
            }
            _ => {
                text.push_str("File content:\n```\n");
                text.push_str(&self.file_content);
            }
        }
        text.push_str("\n```\n");

        text
    }

    pub fn to_message(&self) -> ChatMessage {
        ChatMessage::system(self.render())
    }
}
