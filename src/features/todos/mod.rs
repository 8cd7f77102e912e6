//! Todos module - handles todo extraction from project documents
//!
//! This module provides:
//! - Unchecked checklist extraction (`- [ ]`) with `[DUE: ...]` and `[BLOCKED]` annotations
//! - Client tagging from a document's `client:` marker
//! - Directory scanning of `projects/*.md`

pub mod data;
pub mod parser;

// Re-export commonly used types
pub use data::{Todo, TodoScanner};
