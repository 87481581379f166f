//! Renders a [`Report`] as the plain-text listing or as JSON.
//!
//! The text layout puts every diagnostic under a copy of the parsed line so the
//! caret line lines up with the offending lexeme:
//!
//! ```text
//!  Syntax error: invalid numerical literal at position 4 (got: 1.)
//!  Parsed: x = 1.
//!  Error:      ^^
//! ```

pub mod error;
pub mod visitor;

use crate::config::{ReportConfig, ReportFormat};
use crate::report::Report;
use error::FormatterError;
use visitor::FormatterVisitor;

pub struct Formatter {
    config: ReportConfig,
}

impl Formatter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, report: &Report) -> Result<String, FormatterError> {
        match self.config.format {
            ReportFormat::Text => {
                let mut visitor = FormatterVisitor::new(self.config.clone());
                visitor.format_report(report)
            }
            ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        }
    }
}
