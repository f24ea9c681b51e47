//! Component bindings - where raw host props meet the contract.
//!
//! A binding receives untyped [`Props`] from the host, resolves them
//! against the kind's descriptor, and absorbs every contract violation:
//! the host always gets a rendered default, never an error. Degradations
//! are observable only through the debug instrumentation channel.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use veneer::component::{Button, Ctx, Props};
//! use veneer::contract::{Size, Variant};
//! use veneer::debug::{DebugLog, MemorySink};
//!
//! let ctx = Ctx::new(Rc::new(DebugLog::from_env(Rc::new(MemorySink::new()))));
//! let button = Button::new(
//!     Props {
//!         variant: Some("ghost".into()),
//!         size: Some("xl".into()), // unknown, degrades to md
//!         ..Props::default()
//!     },
//!     &ctx,
//! );
//! assert_eq!(button.state().variant, Variant::Ghost);
//! assert_eq!(button.state().size, Size::Md);
//! ```

pub mod alert;
pub mod badge;
pub mod button;
pub mod input;

pub use alert::Alert;
pub use badge::Badge;
pub use button::Button;
pub use input::Input;

use std::rc::Rc;

use serde_json::{json, Value};

use crate::contract::{resolve_size, resolve_variant, ComponentKind, Size, Supports, Variant};
use crate::debug::DebugLog;
use crate::i18n::{resolve_text, Translate};

// =============================================================================
// Props
// =============================================================================

/// Raw, unvalidated props as they arrive from the host application.
///
/// Unknown variant/size identifiers never crash rendering; they degrade to
/// the kind's default with a warn-level diagnostic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    /// Requested variant identifier.
    pub variant: Option<String>,
    /// Requested size identifier.
    pub size: Option<String>,
    /// Disabled flag (ignored by kinds without DISABLED support).
    pub disabled: bool,
    /// Error state flag (ignored by kinds without ERROR support).
    pub invalid: bool,
    /// Explicit error message; when absent with `invalid` set, the default
    /// text comes from the translate capability.
    pub error: Option<String>,
    /// Accessible label.
    pub label: Option<String>,
    /// Child content (text for this core; markup is the renderer's job).
    pub children: Option<String>,
}

// =============================================================================
// Ctx
// =============================================================================

/// What every binding receives at construction: the debug facility and the
/// optional translate capability. One `Ctx` per host session; bindings
/// share it by reference.
#[derive(Clone)]
pub struct Ctx {
    pub debug: Rc<DebugLog>,
    pub translate: Option<Translate>,
}

impl Ctx {
    pub fn new(debug: Rc<DebugLog>) -> Self {
        Self {
            debug,
            translate: None,
        }
    }

    pub fn with_translate(debug: Rc<DebugLog>, translate: Translate) -> Self {
        Self {
            debug,
            translate: Some(translate),
        }
    }
}

// =============================================================================
// ComponentState
// =============================================================================

/// Dynamic render state of one component instance.
///
/// Created on instantiation, mutated only through prop updates from the
/// host, dropped on unmount. Instances never alias each other's state.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentState {
    pub kind: ComponentKind,
    pub variant: Variant,
    pub size: Size,
    pub disabled: bool,
    pub error: Option<String>,
    pub label: Option<String>,
    pub children: Option<String>,
}

impl ComponentState {
    /// Resolve `props` against the kind's descriptor and trace the
    /// instantiation.
    pub fn new(kind: ComponentKind, props: Props, ctx: &Ctx) -> Self {
        ctx.debug.component_with(kind.name(), || {
            json!({
                "variant": props.variant,
                "size": props.size,
                "disabled": props.disabled,
                "invalid": props.invalid,
                "label": props.label,
            })
        });
        Self::resolve(kind, props, ctx)
    }

    /// Re-resolve after a prop update from the host. Same degradation
    /// rules as construction.
    pub fn update(&mut self, props: Props, ctx: &Ctx) {
        *self = Self::resolve(self.kind, props, ctx);
    }

    fn resolve(kind: ComponentKind, props: Props, ctx: &Ctx) -> Self {
        let descriptor = kind.descriptor();
        let debug = &ctx.debug;

        let variant = match &props.variant {
            None => descriptor.default_variant,
            Some(requested) => resolve_variant(kind, requested).unwrap_or_else(|err| {
                debug.warn_with(&err.to_string(), || {
                    json!({"kind": kind.name(), "requested": requested})
                });
                descriptor.default_variant
            }),
        };

        let size = if descriptor.supports.contains(Supports::SIZING) {
            resolve_size(kind, props.size.as_deref()).unwrap_or_else(|err| {
                debug.warn_with(&err.to_string(), || {
                    json!({"kind": kind.name(), "requested": props.size})
                });
                descriptor.default_size
            })
        } else {
            if props.size.is_some() {
                debug.warn(&format!("{} does not support sizing", kind.name()));
            }
            descriptor.default_size
        };

        let disabled = if descriptor.supports.contains(Supports::DISABLED) {
            props.disabled
        } else {
            if props.disabled {
                debug.warn(&format!("{} does not support disabled", kind.name()));
            }
            false
        };

        let error = if descriptor.supports.contains(Supports::ERROR) {
            match (props.invalid, props.error) {
                (_, Some(message)) => Some(message),
                (true, None) => {
                    let key = format!("{}.error", kind.name().to_lowercase());
                    Some(resolve_text(ctx.translate.as_ref(), &key))
                }
                (false, None) => None,
            }
        } else {
            if props.invalid || props.error.is_some() {
                debug.warn(&format!("{} does not support an error state", kind.name()));
            }
            None
        };

        Self {
            kind,
            variant,
            size,
            disabled,
            error,
            label: props.label,
            children: props.children,
        }
    }

    /// Structured snapshot, shaped for `DebugLog::table` bulk inspection.
    pub fn snapshot(&self) -> Value {
        json!({
            "kind": self.kind.name(),
            "variant": self.variant.as_str(),
            "size": self.size.as_str(),
            "disabled": self.disabled,
            "error": self.error,
            "label": self.label,
        })
    }
}
