//! Output sinks - where diagnostic events go.
//!
//! The facility depends only on the console-like [`Sink`] capability:
//! leveled, optionally colorized, optionally grouped, optionally tabular
//! output. [`ConsoleSink`] is the stderr implementation; [`MemorySink`]
//! records everything for assertions in tests and tooling.

use std::cell::RefCell;

use crossterm::style::{Color, Stylize};
use serde_json::Value;

use super::config::LogLevel;

// =============================================================================
// LogEvent
// =============================================================================

/// One transient diagnostic event.
///
/// Produced at a call site and handed straight to the sink; the facility
/// never stores it. Prefix and color are resolved from the active config
/// at emit time.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    pub level: LogLevel,
    pub prefix: String,
    pub color: Color,
    pub message: String,
    pub payload: Option<Value>,
}

// =============================================================================
// Sink trait
// =============================================================================

/// Console-like destination for diagnostic output.
///
/// Implementations must not fail from the caller's perspective; malformed
/// payloads are rendered as-is, not validated.
pub trait Sink {
    /// One leveled event.
    fn emit(&self, event: &LogEvent);

    /// Grouped entry: a component kind name with the props that reached it.
    fn group(&self, title: &str, payload: Option<&Value>);

    /// Tabular structured data for bulk inspection.
    fn table(&self, data: &Value);
}

// =============================================================================
// ConsoleSink
// =============================================================================

/// Stderr sink with crossterm-colorized level tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn emit(&self, event: &LogEvent) {
        let tag = format!("{} {}", event.prefix, event.level.as_str()).with(event.color);
        match &event.payload {
            Some(payload) => eprintln!("{} {} {}", tag, event.message, payload),
            None => eprintln!("{} {}", tag, event.message),
        }
    }

    fn group(&self, title: &str, payload: Option<&Value>) {
        eprintln!("{}", title.bold());
        if let Some(payload) = payload {
            match serde_json::to_string_pretty(payload) {
                Ok(body) => eprintln!("{body}"),
                Err(_) => eprintln!("{payload}"),
            }
        }
    }

    fn table(&self, data: &Value) {
        // One row per line for arrays, pretty JSON otherwise
        match data {
            Value::Array(rows) => {
                for (i, row) in rows.iter().enumerate() {
                    eprintln!("{i:>4}  {row}");
                }
            }
            other => match serde_json::to_string_pretty(other) {
                Ok(body) => eprintln!("{body}"),
                Err(_) => eprintln!("{other}"),
            },
        }
    }
}

// =============================================================================
// MemorySink
// =============================================================================

/// What a [`MemorySink`] recorded for one sink call.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkRecord {
    Event(LogEvent),
    Group { title: String, payload: Option<Value> },
    Table(Value),
}

/// Recording sink for tests and diagnostic tooling.
///
/// Share it as `Rc<MemorySink>`: hand one clone to the facility, keep the
/// other to inspect what was emitted.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: RefCell<Vec<SinkRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn records(&self) -> Vec<SinkRecord> {
        self.records.borrow().clone()
    }

    /// Recorded leveled events only (groups and tables filtered out).
    pub fn events(&self) -> Vec<LogEvent> {
        self.records
            .borrow()
            .iter()
            .filter_map(|r| match r {
                SinkRecord::Event(e) => Some(e.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of sink calls recorded.
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Drop everything recorded so far.
    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }
}

impl Sink for MemorySink {
    fn emit(&self, event: &LogEvent) {
        self.records.borrow_mut().push(SinkRecord::Event(event.clone()));
    }

    fn group(&self, title: &str, payload: Option<&Value>) {
        self.records.borrow_mut().push(SinkRecord::Group {
            title: title.to_string(),
            payload: payload.cloned(),
        });
    }

    fn table(&self, data: &Value) {
        self.records.borrow_mut().push(SinkRecord::Table(data.clone()));
    }
}
