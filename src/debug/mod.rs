//! Debug Instrumentation - environment-gated diagnostic logging.
//!
//! An explicitly owned facility that component bindings call to report
//! lifecycle and state events during development. Zero cost when disabled:
//! every operation checks the enabled flag before doing anything, and
//! payload closures are never invoked while disabled. Payloads may capture
//! rendering-sensitive data, so skipping their construction is part of the
//! contract, not an optimization.
//!
//! There is no hidden global: construct one [`DebugLog`], wrap it in an
//! `Rc`, and hand it to every binding at construction time.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use veneer::debug::{DebugLog, DebugPatch, MemorySink};
//! use serde_json::json;
//!
//! let sink = Rc::new(MemorySink::new());
//! let debug = DebugLog::from_env(sink.clone());
//!
//! debug.configure(DebugPatch::enabled(true));
//! debug.info("mounted");
//! debug.warn_with("fallback", || json!({"requested": "xl"}));
//! assert_eq!(sink.events().len(), 2);
//! ```

pub mod config;
pub mod sink;

pub use config::{DebugConfig, DebugPatch, LevelColors, LevelColorsPatch, LogLevel};
pub use sink::{ConsoleSink, LogEvent, MemorySink, Sink, SinkRecord};

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use rustc_hash::FxHashMap;
use serde_json::Value;

// =============================================================================
// DebugLog
// =============================================================================

/// The debug facility: one config, one sink, one set of open timers.
///
/// Single-threaded by design (the whole subsystem runs on the UI thread),
/// so interior mutability is `RefCell`, not a lock. `configure` swaps the
/// whole config value in one store: any logging call observes either the
/// pre- or post-merge config in full.
pub struct DebugLog {
    config: RefCell<DebugConfig>,
    sink: Rc<dyn Sink>,
    timers: RefCell<FxHashMap<String, Instant>>,
}

impl DebugLog {
    /// Facility with an explicit starting config.
    pub fn new(config: DebugConfig, sink: Rc<dyn Sink>) -> Self {
        Self {
            config: RefCell::new(config),
            sink,
            timers: RefCell::new(FxHashMap::default()),
        }
    }

    /// Facility seeded from the build-mode signal: enabled in debug
    /// builds, disabled in release builds.
    pub fn from_env(sink: Rc<dyn Sink>) -> Self {
        Self::new(DebugConfig::from_env(), sink)
    }

    /// Whether logging operations currently emit.
    pub fn enabled(&self) -> bool {
        self.config.borrow().enabled
    }

    // =========================================================================
    // Leveled logging
    // =========================================================================

    fn emit(&self, level: LogLevel, message: &str, payload: Option<Value>) {
        // config borrow released before the sink runs
        let (prefix, color) = {
            let config = self.config.borrow();
            (config.prefix.clone(), config.colors.for_level(level))
        };
        self.sink.emit(&LogEvent {
            level,
            prefix,
            color,
            message: message.to_string(),
            payload,
        });
    }

    pub fn info(&self, message: &str) {
        if self.enabled() {
            self.emit(LogLevel::Info, message, None);
        }
    }

    pub fn warn(&self, message: &str) {
        if self.enabled() {
            self.emit(LogLevel::Warn, message, None);
        }
    }

    pub fn error(&self, message: &str) {
        if self.enabled() {
            self.emit(LogLevel::Error, message, None);
        }
    }

    pub fn success(&self, message: &str) {
        if self.enabled() {
            self.emit(LogLevel::Success, message, None);
        }
    }

    /// Info with a lazily constructed payload. The closure runs only while
    /// enabled.
    pub fn info_with(&self, message: &str, payload: impl FnOnce() -> Value) {
        if self.enabled() {
            self.emit(LogLevel::Info, message, Some(payload()));
        }
    }

    /// Warn with a lazily constructed payload.
    pub fn warn_with(&self, message: &str, payload: impl FnOnce() -> Value) {
        if self.enabled() {
            self.emit(LogLevel::Warn, message, Some(payload()));
        }
    }

    /// Error with a lazily constructed payload.
    pub fn error_with(&self, message: &str, payload: impl FnOnce() -> Value) {
        if self.enabled() {
            self.emit(LogLevel::Error, message, Some(payload()));
        }
    }

    /// Success with a lazily constructed payload.
    pub fn success_with(&self, message: &str, payload: impl FnOnce() -> Value) {
        if self.enabled() {
            self.emit(LogLevel::Success, message, Some(payload()));
        }
    }

    // =========================================================================
    // Component traces
    // =========================================================================

    /// Grouped entry associating a component kind name with nothing but
    /// its name.
    pub fn component(&self, name: &str) {
        if self.enabled() {
            self.sink.group(name, None);
        }
    }

    /// Grouped entry associating a component kind name with the props that
    /// reached it. The props closure runs only while enabled.
    pub fn component_with(&self, name: &str, props: impl FnOnce() -> Value) {
        if self.enabled() {
            self.sink.group(name, Some(&props()));
        }
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// Open a named duration-measurement scope.
    pub fn time(&self, label: &str) {
        if self.enabled() {
            self.timers.borrow_mut().insert(label.to_string(), Instant::now());
        }
    }

    /// Close a named scope and report the elapsed time. An unmatched label
    /// gets the console-style warning instead of failing.
    pub fn time_end(&self, label: &str) {
        if !self.enabled() {
            return;
        }
        let started = self.timers.borrow_mut().remove(label);
        match started {
            Some(started) => {
                let ms = started.elapsed().as_secs_f64() * 1000.0;
                self.emit(LogLevel::Info, &format!("{label}: {ms:.2}ms"), None);
            }
            None => {
                self.emit(LogLevel::Warn, &format!("timer '{label}' does not exist"), None);
            }
        }
    }

    // =========================================================================
    // Tables
    // =========================================================================

    /// Tabular structured data for bulk inspection. The rows closure runs
    /// only while enabled.
    pub fn table(&self, rows: impl FnOnce() -> Value) {
        if self.enabled() {
            self.sink.table(&rows());
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Merge a partial reconfiguration into the active config.
    ///
    /// The merged value replaces the old one in a single store, so a
    /// logging call never observes a half-merged config.
    pub fn configure(&self, patch: DebugPatch) {
        let merged = self.config.borrow().merged(&patch);
        self.config.replace(merged);
    }

    /// Defensive copy of the active config. Mutating the returned value
    /// never affects the facility.
    pub fn config(&self) -> DebugConfig {
        self.config.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    fn enabled_log() -> (Rc<MemorySink>, DebugLog) {
        let sink = Rc::new(MemorySink::new());
        let debug = DebugLog::new(
            DebugConfig {
                enabled: true,
                ..DebugConfig::default()
            },
            sink.clone(),
        );
        (sink, debug)
    }

    fn disabled_log() -> (Rc<MemorySink>, DebugLog) {
        let sink = Rc::new(MemorySink::new());
        let debug = DebugLog::new(DebugConfig::default(), sink.clone());
        (sink, debug)
    }

    #[test]
    fn test_levels_emit_with_configured_color_and_prefix() {
        let (sink, debug) = enabled_log();
        debug.info("a");
        debug.warn("b");
        debug.error("c");
        debug.success("d");

        let events = sink.events();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0].level, LogLevel::Info);
        assert_eq!(events[1].level, LogLevel::Warn);
        assert_eq!(events[2].level, LogLevel::Error);
        assert_eq!(events[3].level, LogLevel::Success);
        for e in &events {
            assert_eq!(e.prefix, "[veneer]");
        }
    }

    #[test]
    fn test_disabled_emits_nothing() {
        let (sink, debug) = disabled_log();
        debug.info("x");
        debug.warn("x");
        debug.component("Button");
        debug.time("t");
        debug.time_end("t");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_disabled_never_evaluates_payloads() {
        let (sink, debug) = disabled_log();
        let evaluated = Cell::new(false);
        debug.warn_with("x", || {
            evaluated.set(true);
            json!({})
        });
        debug.table(|| {
            evaluated.set(true);
            json!([])
        });
        debug.component_with("Button", || {
            evaluated.set(true);
            json!({})
        });
        assert!(!evaluated.get());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_disabled_payload_that_would_panic_does_not_panic() {
        let (_sink, debug) = disabled_log();
        debug.info_with("x", || panic!("payload must not be constructed"));
    }

    #[test]
    fn test_configure_toggles_emission() {
        let (sink, debug) = disabled_log();
        debug.configure(DebugPatch::enabled(true));
        debug.info("x");
        assert_eq!(sink.events().len(), 1);

        debug.configure(DebugPatch::enabled(false));
        debug.info("x");
        assert_eq!(sink.events().len(), 1);
    }

    #[test]
    fn test_configure_prefix_and_color() {
        use crossterm::style::Color;

        let (sink, debug) = enabled_log();
        debug.configure(DebugPatch {
            prefix: Some("[app]".into()),
            colors: LevelColorsPatch {
                info: Some(Color::Blue),
                ..LevelColorsPatch::default()
            },
            ..DebugPatch::default()
        });
        debug.info("x");

        let events = sink.events();
        assert_eq!(events[0].prefix, "[app]");
        assert_eq!(events[0].color, Color::Blue);
    }

    #[test]
    fn test_config_returns_defensive_copy() {
        let (_sink, debug) = enabled_log();
        let mut first = debug.config();
        first.enabled = false;
        first.prefix = "[mutated]".into();

        let second = debug.config();
        assert!(second.enabled);
        assert_eq!(second.prefix, "[veneer]");
    }

    #[test]
    fn test_time_end_reports_label() {
        let (sink, debug) = enabled_log();
        debug.time("layout");
        debug.time_end("layout");

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, LogLevel::Info);
        assert!(events[0].message.starts_with("layout: "));
        assert!(events[0].message.ends_with("ms"));
    }

    #[test]
    fn test_time_end_without_time_warns() {
        let (sink, debug) = enabled_log();
        debug.time_end("ghost-timer");

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, LogLevel::Warn);
        assert!(events[0].message.contains("ghost-timer"));
    }

    #[test]
    fn test_component_group_carries_props() {
        let (sink, debug) = enabled_log();
        debug.component_with("Badge", || json!({"variant": "danger"}));

        let records = sink.records();
        assert_eq!(records.len(), 1);
        match &records[0] {
            SinkRecord::Group { title, payload } => {
                assert_eq!(title, "Badge");
                assert_eq!(payload.as_ref().unwrap()["variant"], "danger");
            }
            other => panic!("expected group record, got {other:?}"),
        }
    }

    #[test]
    fn test_table_passes_rows_through() {
        let (sink, debug) = enabled_log();
        debug.table(|| json!([{"kind": "Button", "variant": "primary"}]));

        match &sink.records()[0] {
            SinkRecord::Table(data) => assert_eq!(data[0]["kind"], "Button"),
            other => panic!("expected table record, got {other:?}"),
        }
    }
}
