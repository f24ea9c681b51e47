//! Component kinds and their descriptors.
//!
//! Each kind owns exactly one [`Descriptor`]: the ordered variant set, the
//! ordered size set, the defaults, and the capability flags. The descriptor
//! table is the single source of truth every framework binding reads, which
//! is what keeps independently written bindings behaviorally identical.
//!
//! [`ComponentKind::describe`] is the introspection query consumed by
//! documentation tooling; it must never drive runtime rendering decisions.

use bitflags::bitflags;
use serde::Serialize;

use super::variant::{Size, Variant};

// =============================================================================
// Supports flags
// =============================================================================

bitflags! {
    /// Capability flags for a component kind.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Supports: u8 {
        /// Kind accepts a disabled flag.
        const DISABLED = 1 << 0;
        /// Kind accepts an error state/message.
        const ERROR = 1 << 1;
        /// Kind accepts a size prop.
        const SIZING = 1 << 2;
    }
}

// =============================================================================
// Descriptor
// =============================================================================

/// Immutable contract record for one component kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    /// Ordered set of accepted variants.
    pub variants: &'static [Variant],
    /// Fallback when a requested variant is unknown or unspecified.
    pub default_variant: Variant,
    /// Ordered set of accepted sizes (empty for unsized kinds).
    pub sizes: &'static [Size],
    /// Fallback when a requested size is unknown or unspecified.
    pub default_size: Size,
    /// Capability flags.
    pub supports: Supports,
}

impl Descriptor {
    /// Whether `variant` is a member of this kind's variant set.
    pub fn has_variant(&self, variant: Variant) -> bool {
        self.variants.contains(&variant)
    }

    /// Whether `size` is a member of this kind's size set.
    pub fn has_size(&self, size: Size) -> bool {
        self.sizes.contains(&size)
    }
}

// =============================================================================
// ComponentKind
// =============================================================================

const BUTTON: Descriptor = Descriptor {
    variants: &[Variant::Primary, Variant::Secondary, Variant::Outline, Variant::Ghost],
    default_variant: Variant::Primary,
    sizes: &[Size::Sm, Size::Md, Size::Lg],
    default_size: Size::Md,
    supports: Supports::DISABLED.union(Supports::SIZING),
};

const BADGE: Descriptor = Descriptor {
    variants: &[
        Variant::Default,
        Variant::Primary,
        Variant::Success,
        Variant::Warning,
        Variant::Danger,
        Variant::Info,
    ],
    default_variant: Variant::Default,
    sizes: &[Size::Sm, Size::Md],
    default_size: Size::Md,
    supports: Supports::SIZING,
};

const INPUT: Descriptor = Descriptor {
    variants: &[Variant::Default, Variant::Outline],
    default_variant: Variant::Default,
    sizes: &[Size::Sm, Size::Md, Size::Lg],
    default_size: Size::Md,
    supports: Supports::DISABLED.union(Supports::ERROR).union(Supports::SIZING),
};

const ALERT: Descriptor = Descriptor {
    variants: &[Variant::Info, Variant::Success, Variant::Warning, Variant::Danger],
    default_variant: Variant::Info,
    sizes: &[],
    default_size: Size::Md,
    supports: Supports::ERROR,
};

/// A logical UI element type, implemented once per framework binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComponentKind {
    Button,
    Badge,
    Input,
    Alert,
}

impl ComponentKind {
    /// The kind's contract record.
    pub const fn descriptor(&self) -> &'static Descriptor {
        match self {
            Self::Button => &BUTTON,
            Self::Badge => &BADGE,
            Self::Input => &INPUT,
            Self::Alert => &ALERT,
        }
    }

    /// Display name, matching the documented component name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Button => "Button",
            Self::Badge => "Badge",
            Self::Input => "Input",
            Self::Alert => "Alert",
        }
    }

    /// Get all component kinds as a slice.
    pub const fn all() -> &'static [ComponentKind] {
        &[Self::Button, Self::Badge, Self::Input, Self::Alert]
    }

    /// Introspection query for documentation tooling.
    ///
    /// Pure and side-effect free. Variant and size names come out in
    /// descriptor order, so two consumers of the same kind always see the
    /// same shape.
    pub fn describe(&self) -> Description {
        let d = self.descriptor();
        Description {
            kind: self.name(),
            variants: d.variants.iter().map(Variant::as_str).collect(),
            default_variant: d.default_variant.as_str(),
            sizes: d.sizes.iter().map(Size::as_str).collect(),
            default_size: d.default_size.as_str(),
            supports_disabled: d.supports.contains(Supports::DISABLED),
            supports_error: d.supports.contains(Supports::ERROR),
        }
    }
}

// =============================================================================
// Description
// =============================================================================

/// Serializable output of [`ComponentKind::describe`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Description {
    pub kind: &'static str,
    pub variants: Vec<&'static str>,
    pub default_variant: &'static str,
    pub sizes: Vec<&'static str>,
    pub default_size: &'static str,
    pub supports_disabled: bool,
    pub supports_error: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_default_is_member() {
        for kind in ComponentKind::all() {
            let d = kind.descriptor();
            assert!(
                d.has_variant(d.default_variant),
                "{} default variant must be in its variant set",
                kind.name()
            );
            if !d.sizes.is_empty() {
                assert!(d.has_size(d.default_size));
            }
        }
    }

    #[test]
    fn test_variant_sets_have_no_duplicates() {
        for kind in ComponentKind::all() {
            let d = kind.descriptor();
            for (i, v) in d.variants.iter().enumerate() {
                assert!(!d.variants[i + 1..].contains(v), "{} duplicates {:?}", kind.name(), v);
            }
        }
    }

    #[test]
    fn test_describe_is_stable_and_ordered() {
        let a = ComponentKind::Button.describe();
        let b = ComponentKind::Button.describe();
        assert_eq!(a, b);
        assert_eq!(a.variants, vec!["primary", "secondary", "outline", "ghost"]);
        assert_eq!(a.sizes, vec!["sm", "md", "lg"]);
        assert_eq!(a.default_variant, "primary");
        assert_eq!(a.default_size, "md");
        assert!(a.supports_disabled);
        assert!(!a.supports_error);
    }

    #[test]
    fn test_badge_uses_danger_not_error() {
        let badge = ComponentKind::Badge.describe();
        assert!(badge.variants.contains(&"danger"));
        assert!(!badge.variants.contains(&"error"));
    }

    #[test]
    fn test_describe_serializes() {
        let json = serde_json::to_value(ComponentKind::Input.describe()).unwrap();
        assert_eq!(json["kind"], "Input");
        assert_eq!(json["supports_error"], true);
    }
}
