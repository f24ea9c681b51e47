//! Component Contract - the shared definition every binding must honor.
//!
//! Defines, once per component kind, the closed set of variants, sizes and
//! capability flags, plus the resolution rules for requested identifiers.
//! Framework bindings read this table and never invent options outside it.
//!
//! # Example
//!
//! ```
//! use veneer::contract::{ComponentKind, resolve_variant, Variant};
//!
//! assert_eq!(resolve_variant(ComponentKind::Button, "ghost"), Ok(Variant::Ghost));
//! assert!(resolve_variant(ComponentKind::Button, "sparkly").is_err());
//!
//! let desc = ComponentKind::Button.describe();
//! assert_eq!(desc.default_variant, "primary");
//! ```

pub mod kind;
pub mod resolve;
pub mod variant;

pub use kind::{ComponentKind, Description, Descriptor, Supports};
pub use resolve::{resolve_size, resolve_variant, ContractError};
pub use variant::{Size, Variant};
