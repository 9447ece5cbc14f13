//! Output formatting for resolved invocations.
//!
//! Supports multiple output formats: table (human-readable), JSON, and toon.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Token-efficient toon format
    Toon,
}

/// Trait for types that can be formatted for output
pub trait Outputable: Serialize {
    /// Format as a human-readable table
    fn to_table(&self) -> String;

    /// Format according to the specified output format
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
            OutputFormat::Toon => {
                let json_value = serde_json::to_value(self).unwrap_or_default();
                toon::encode(&json_value, None)
            }
        }
    }
}

/// Builds the `key: value` listing used by every table renderer.
pub struct FieldTable {
    title: String,
    rows: Vec<(String, String)>,
}

impl FieldTable {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    pub fn field(mut self, key: &str, value: impl ToString) -> Self {
        self.rows.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds a field rendered as `-` when absent.
    pub fn optional(self, key: &str, value: Option<&str>) -> Self {
        self.field(key, value.unwrap_or("-"))
    }

    pub fn render(&self) -> String {
        let width = self.rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
        let mut lines = vec![self.title.clone(), String::new()];
        for (key, value) in &self.rows {
            lines.push(format!("  {:<width$}  {}", key, value, width = width));
        }
        lines.join("\n")
    }
}
