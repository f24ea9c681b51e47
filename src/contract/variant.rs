//! Variant and size identifiers.
//!
//! One closed enum covers every variant name used by any component kind;
//! each kind's descriptor selects the ordered subset it actually supports.
//! Parsing is case-insensitive; canonical names are lowercase.
//!
//! # Example
//!
//! ```
//! use veneer::contract::{Variant, Size};
//!
//! assert_eq!(Variant::parse("Primary"), Some(Variant::Primary));
//! assert_eq!(Variant::Primary.as_str(), "primary");
//! assert_eq!(Size::parse("lg"), Some(Size::Lg));
//! ```

use serde::Serialize;

// =============================================================================
// Variant
// =============================================================================

/// Named, mutually exclusive style option for a component kind.
///
/// Which variants a kind accepts is defined by its [`Descriptor`];
/// this enum is only the universe of names.
///
/// [`Descriptor`]: crate::contract::Descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Default styling (text on background).
    #[default]
    Default,
    /// Primary action/emphasis.
    Primary,
    /// Secondary action.
    Secondary,
    /// Tertiary action.
    Tertiary,
    /// Outline - border only, transparent background.
    Outline,
    /// Ghost - transparent background.
    Ghost,
    /// Success state.
    Success,
    /// Warning state.
    Warning,
    /// Danger/destructive state.
    Danger,
    /// Informational state.
    Info,
}

impl Variant {
    /// Parse from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "tertiary" => Some(Self::Tertiary),
            "outline" => Some(Self::Outline),
            "ghost" => Some(Self::Ghost),
            "success" => Some(Self::Success),
            "warning" => Some(Self::Warning),
            "danger" => Some(Self::Danger),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
        }
    }

    /// Get all variant names as a slice.
    pub const fn all() -> &'static [Variant] {
        &[
            Self::Default,
            Self::Primary,
            Self::Secondary,
            Self::Tertiary,
            Self::Outline,
            Self::Ghost,
            Self::Success,
            Self::Warning,
            Self::Danger,
            Self::Info,
        ]
    }
}

// =============================================================================
// Size
// =============================================================================

/// Named size identifier shared by the kinds that support sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Small.
    Sm,
    /// Medium (the default when unspecified).
    #[default]
    Md,
    /// Large.
    Lg,
}

impl Size {
    /// Parse from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sm" => Some(Self::Sm),
            "md" => Some(Self::Md),
            "lg" => Some(Self::Lg),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Get all size names as a slice.
    pub const fn all() -> &'static [Size] {
        &[Self::Sm, Self::Md, Self::Lg]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parse_case_insensitive() {
        assert_eq!(Variant::parse("primary"), Some(Variant::Primary));
        assert_eq!(Variant::parse("PRIMARY"), Some(Variant::Primary));
        assert_eq!(Variant::parse("Danger"), Some(Variant::Danger));
        assert_eq!(Variant::parse("neon"), None);
        assert_eq!(Variant::parse(""), None);
    }

    #[test]
    fn test_variant_roundtrip_all() {
        for v in Variant::all() {
            assert_eq!(Variant::parse(v.as_str()), Some(*v));
        }
    }

    #[test]
    fn test_size_parse() {
        assert_eq!(Size::parse("sm"), Some(Size::Sm));
        assert_eq!(Size::parse("MD"), Some(Size::Md));
        assert_eq!(Size::parse("xl"), None);
    }

    #[test]
    fn test_size_default_is_md() {
        assert_eq!(Size::default(), Size::Md);
    }
}
