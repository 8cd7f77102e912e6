use anyhow::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Value reported for a client section with no logged total
pub const NO_HOURS: &str = "0";

/// Monthly hour totals from the hours log, carried as written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoursReport {
    pub nedl: String,
    pub nextitle: String,
}

impl Default for HoursReport {
    fn default() -> Self {
        Self {
            nedl: NO_HOURS.to_string(),
            nextitle: NO_HOURS.to_string(),
        }
    }
}

/// Extracts the `**<Month> Total: <n> hrs**` line following each client header
#[derive(Debug, Clone)]
pub struct HoursParser {
    nedl_pattern: Regex,
    nextitle_pattern: Regex,
}

impl HoursParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            nedl_pattern: Self::section_total("NËDL")?,
            nextitle_pattern: Self::section_total("NexTitle")?,
        })
    }

    fn section_total(header: &str) -> Result<Regex> {
        let pattern = format!(
            r"(?s){}.*?\*\*[A-Za-z0-9_]+ Total: ([0-9.]+) hrs\*\*",
            regex::escape(header)
        );
        Ok(Regex::new(&pattern)?)
    }

    pub fn parse(&self, content: &str) -> HoursReport {
        let total = |pattern: &Regex| {
            pattern
                .captures(content)
                .map(|caps| caps[1].to_string())
                .unwrap_or_else(|| NO_HOURS.to_string())
        };

        HoursReport {
            nedl: total(&self.nedl_pattern),
            nextitle: total(&self.nextitle_pattern),
        }
    }

    /// Parse the hours log at `path`; an absent or unreadable file reports zero hours
    pub fn load(&self, path: &Path) -> HoursReport {
        match fs::read(path) {
            Ok(bytes) => self.parse(&String::from_utf8_lossy(&bytes)),
            Err(e) => {
                log::debug!("No hours log at {}: {e}", path.display());
                HoursReport::default()
            }
        }
    }
}
