use anyhow::Result;
use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::path::PathBuf;

use super::schedule::{is_friday, DueBucket};
use crate::features::hours::{HoursParser, HoursReport};
use crate::features::todos::{Todo, TodoScanner};
use crate::shared::Config;

const SUBJECT_BASE: &str = "Chief of Staff";
const CLOSING: &str = "---\nOpen chief-of-stuff in Cursor for details.";

/// Outcome of a run: either suppress the email or send subject and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailResult {
    Skip,
    Send { subject: String, body: String },
}

impl EmailResult {
    pub fn should_send(&self) -> bool {
        matches!(self, EmailResult::Send { .. })
    }
}

/// Serialises as `{"send":false}` or `{"send":true,"subject":..,"body":..}`
impl Serialize for EmailResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EmailResult::Skip => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("send", &false)?;
                map.end()
            }
            EmailResult::Send { subject, body } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("send", &true)?;
                map.serialize_entry("subject", subject)?;
                map.serialize_entry("body", body)?;
                map.end()
            }
        }
    }
}

/// Dated todos split by urgency, each bucket in scan order
#[derive(Debug, Default)]
struct DueTodos<'a> {
    overdue: Vec<&'a Todo>,
    today: Vec<&'a Todo>,
    tomorrow: Vec<&'a Todo>,
}

impl<'a> DueTodos<'a> {
    fn partition(todos: &'a [Todo], today: NaiveDate) -> Self {
        let mut buckets = DueTodos::default();

        for todo in todos {
            let Some(due) = todo.due.as_deref() else {
                continue;
            };

            match DueBucket::for_due_date(due, today) {
                Some(DueBucket::Overdue) => buckets.overdue.push(todo),
                Some(DueBucket::Today) => buckets.today.push(todo),
                Some(DueBucket::Tomorrow) => buckets.tomorrow.push(todo),
                None => {}
            }
        }

        buckets
    }

    fn is_empty(&self) -> bool {
        self.overdue.is_empty() && self.today.is_empty() && self.tomorrow.is_empty()
    }
}

/// Decide whether to send and, if so, build subject and body
pub fn compose_email(todos: &[Todo], hours: &HoursReport, today: NaiveDate) -> EmailResult {
    let friday = is_friday(today);
    let due = DueTodos::partition(todos, today);

    if due.is_empty() && !friday {
        return EmailResult::Skip;
    }

    EmailResult::Send {
        subject: compose_subject(&due, friday, today),
        body: compose_body(&due, hours, friday),
    }
}

fn compose_subject(due: &DueTodos, friday: bool, today: NaiveDate) -> String {
    let subject = format!("{SUBJECT_BASE} - {}", today.format("%a, %b %-d, %Y"));

    if !due.overdue.is_empty() {
        format!("🚨 OVERDUE - {subject}")
    } else if !due.today.is_empty() {
        format!("📅 Due Today - {subject}")
    } else if friday {
        format!("📊 Friday Review - {subject}")
    } else {
        subject
    }
}

fn compose_body(due: &DueTodos, hours: &HoursReport, friday: bool) -> String {
    let mut body = String::new();

    if !due.overdue.is_empty() {
        body.push_str("🚨 OVERDUE:\n");
        for todo in &due.overdue {
            body.push_str(&format!(
                "• [{}] {} (was due {})\n",
                todo.client,
                todo.task,
                todo.due.as_deref().unwrap_or_default()
            ));
        }
        body.push('\n');
    }

    push_section(&mut body, "📅 DUE TODAY:", &due.today);
    push_section(&mut body, "⏰ DUE TOMORROW:", &due.tomorrow);

    if friday {
        body.push_str("📊 FRIDAY HOURS REVIEW:\n");
        body.push_str(&format!("NËDL: {} hrs this month\n", hours.nedl));
        body.push_str(&format!("NexTitle: {} hrs this month\n", hours.nextitle));
        body.push_str("Remember to log your hours before invoicing!\n\n");
    }

    body.push_str(CLOSING);
    body
}

fn push_section(body: &mut String, heading: &str, todos: &[&Todo]) {
    if todos.is_empty() {
        return;
    }

    body.push_str(heading);
    body.push('\n');
    for todo in todos {
        body.push_str(&format!("• [{}] {}\n", todo.client, todo.task));
    }
    body.push('\n');
}

/// Reads the notes tree described by a [`Config`] and composes the reminder
pub struct Reminder {
    scanner: TodoScanner,
    hours_parser: HoursParser,
    time_path: PathBuf,
}

impl Reminder {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            scanner: TodoScanner::new(config.projects_path(), config.index_file.clone())?,
            hours_parser: HoursParser::new()?,
            time_path: config.time_path(),
        })
    }

    pub fn compose(&self, today: NaiveDate) -> EmailResult {
        let todos = self.scanner.scan_todos();
        let hours = self.hours_parser.load(&self.time_path);
        log::info!(
            "Found {} open todos ({} dated) for {today}",
            todos.len(),
            todos.iter().filter(|t| t.due.is_some()).count()
        );

        compose_email(&todos, &hours, today)
    }
}
