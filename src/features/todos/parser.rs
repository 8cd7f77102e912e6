use anyhow::Result;
use regex::Regex;

use super::data::Todo;

/// Literal marker of an unchecked checklist item
pub const UNCHECKED_MARKER: &str = "- [ ]";
/// Annotation stripped from task text wherever it appears
pub const BLOCKED_MARKER: &str = "[BLOCKED]";
/// Client tag applied when a document has no `client:` marker
pub const UNKNOWN_CLIENT: &str = "UNKNOWN";

/// Extracts checklist todos and the client tag from project markdown
#[derive(Debug, Clone)]
pub struct TodoParser {
    due_pattern: Regex,
    client_pattern: Regex,
}

impl TodoParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            due_pattern: Regex::new(r"\[DUE: ([0-9]{4}-[0-9]{2}-[0-9]{2})\]")?,
            client_pattern: Regex::new(r"client: ([A-Za-z0-9_]+)")?,
        })
    }

    /// Parse every unchecked item of a document, tagging each with the document's client
    pub fn parse_document(&self, content: &str) -> Vec<Todo> {
        let client = self.parse_client(content);
        self.parse_todos(content, &client)
    }

    /// Parse unchecked items in line order
    pub fn parse_todos(&self, content: &str, client: &str) -> Vec<Todo> {
        content
            .lines()
            .filter(|line| line.contains(UNCHECKED_MARKER))
            .filter_map(|line| self.parse_line(line, client))
            .collect()
    }

    /// Parse one candidate line; `None` when nothing but annotations remain
    fn parse_line(&self, line: &str, client: &str) -> Option<Todo> {
        let mut task = line.replacen(UNCHECKED_MARKER, "", 1).trim().to_string();

        let due = self.due_pattern.captures(line).map(|caps| {
            let annotation = caps[0].to_string();
            task = task.replacen(&annotation, "", 1).trim().to_string();
            caps[1].to_string()
        });

        let task = task.replace(BLOCKED_MARKER, "").trim().to_string();
        if task.is_empty() {
            return None;
        }

        Some(Todo {
            task,
            due,
            client: client.to_string(),
        })
    }

    /// First `client: <token>` marker in the document, upper-cased
    pub fn parse_client(&self, content: &str) -> String {
        self.client_pattern
            .captures(content)
            .map(|caps| caps[1].to_uppercase())
            .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
    }
}
