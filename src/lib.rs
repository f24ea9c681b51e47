//! # veneer
//!
//! Framework-agnostic core of a multi-framework UI component library:
//! the shared component contract plus the debug instrumentation used to
//! trace component lifecycle during development.
//!
//! ## Architecture
//!
//! Independently written framework bindings stay behaviorally identical
//! because they all read one descriptor table:
//!
//! ```text
//! Host props → binding (component) → contract resolution → ComponentState
//!                     └── diagnostics → DebugLog → Sink
//! ```
//!
//! Contract violations (unknown variant/size) are absorbed at the binding
//! boundary: the host always renders a default, and the degradation is
//! visible only through the debug channel. The debug facility is an
//! explicitly owned object handed to bindings at construction, gated on
//! the build-mode environment signal, and free when disabled (payload
//! closures are never invoked).
//!
//! ## Modules
//!
//! - [`contract`] - Component kinds, variant/size sets, resolution, `describe()`
//! - [`component`] - Bindings: props, state lifecycle, degradation rules
//! - [`debug`] - Leveled diagnostics, component traces, timers, tables
//! - [`i18n`] - Injected translate capability for user-facing default text

pub mod component;
pub mod contract;
pub mod debug;
pub mod i18n;

pub use contract::{
    resolve_size, resolve_variant, ComponentKind, ContractError, Description, Descriptor, Size,
    Supports, Variant,
};

pub use component::{Alert, Badge, Button, ComponentState, Ctx, Input, Props};

pub use debug::{
    ConsoleSink, DebugConfig, DebugLog, DebugPatch, LevelColors, LevelColorsPatch, LogEvent,
    LogLevel, MemorySink, Sink, SinkRecord,
};

pub use i18n::Translate;
