//! User-facing outcome messages.
//!
//! Every operation result, success or failure, is turned into a [`Report`]
//! at the command boundary. Reports render as plain text or with terminal
//! colors. Colors are only used when the target stream is a terminal.

use crate::error::ContactBookError;
use crate::models::Contact;
use owo_colors::OwoColorize;
use std::fmt;
use std::io::IsTerminal;

/// Severity of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Success,
    Info,
    Error,
}

/// A human-readable operation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub level: ReportLevel,
    pub message: String,
}

impl Report {
    pub fn new(level: ReportLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn added(contact: &Contact) -> Self {
        Self::new(
            ReportLevel::Success,
            format!("Contact {} was added!", contact.name),
        )
    }

    pub fn removed(contact: &Contact) -> Self {
        Self::new(
            ReportLevel::Success,
            format!("Contact {} was deleted!", contact.name),
        )
    }

    pub fn not_found(id: &str) -> Self {
        Self::new(
            ReportLevel::Info,
            format!("Contact with id - \"{}\" was not found!", id),
        )
    }

    /// Map any operation error to its report.
    pub fn from_error(err: &ContactBookError) -> Self {
        match err {
            ContactBookError::Validation(e) => {
                Self::new(ReportLevel::Error, format!("ERROR: {}!", e))
            }
            ContactBookError::NotFound(id) => Self::not_found(id),
            ContactBookError::Storage(e) => {
                Self::new(ReportLevel::Error, format!("Storage error: {}", e))
            }
        }
    }

    /// Whether the outcome should make the process exit unsuccessfully.
    pub fn is_failure(&self) -> bool {
        self.level == ReportLevel::Error
    }

    /// Render the message, colored green for success and red otherwise.
    pub fn render(&self, color: bool) -> String {
        if !color {
            return self.message.clone();
        }
        match self.level {
            ReportLevel::Success => self.message.green().to_string(),
            ReportLevel::Info | ReportLevel::Error => self.message.red().to_string(),
        }
    }

    /// Render for a specific output stream. Colors are dropped when the
    /// stream is redirected to a file or pipe.
    pub fn render_for(&self, color: bool, stream: &impl IsTerminal) -> String {
        self.render(color && stream.is_terminal())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Format contacts as an aligned text table with a header row.
pub fn contact_table(contacts: &[Contact]) -> String {
    const HEADERS: [&str; 4] = ["id", "name", "email", "phone"];

    let rows: Vec<[&str; 4]> = contacts
        .iter()
        .map(|c| [c.id.as_str(), c.name.as_str(), c.email.as_str(), c.phone.as_str()])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: &[&str; 4]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_row(&HEADERS));
    lines.extend(rows.iter().map(format_row));
    lines.join("\n")
}
