//! Strict variant/size resolution.
//!
//! The strict form returns a [`ContractError`] when the requested identifier
//! is not in the kind's set. Framework bindings never surface that error to
//! the host; they fall back to the kind's default and report the degradation
//! through debug instrumentation (see [`crate::component`]).

use thiserror::Error;

use super::kind::ComponentKind;
use super::variant::{Size, Variant};

/// Recoverable contract violations.
///
/// Nothing in this taxonomy is fatal: both cases degrade to the kind's
/// default at the binding boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// Requested variant is not in the kind's variant set.
    #[error("unknown variant `{requested}` for {}", .kind.name())]
    UnknownVariant { kind: ComponentKind, requested: String },

    /// Requested size is not in the kind's size set.
    #[error("unknown size `{requested}` for {}", .kind.name())]
    UnknownSize { kind: ComponentKind, requested: String },
}

/// Resolve a requested variant identifier against a kind's variant set.
///
/// Returns the parsed variant iff it is a member of the set.
pub fn resolve_variant(kind: ComponentKind, requested: &str) -> Result<Variant, ContractError> {
    match Variant::parse(requested) {
        Some(v) if kind.descriptor().has_variant(v) => Ok(v),
        _ => Err(ContractError::UnknownVariant {
            kind,
            requested: requested.to_string(),
        }),
    }
}

/// Resolve a requested size identifier against a kind's size set.
///
/// `None` means unspecified and yields the kind's default size.
pub fn resolve_size(kind: ComponentKind, requested: Option<&str>) -> Result<Size, ContractError> {
    let Some(requested) = requested else {
        return Ok(kind.descriptor().default_size);
    };
    match Size::parse(requested) {
        Some(s) if kind.descriptor().has_size(s) => Ok(s),
        _ => Err(ContractError::UnknownSize {
            kind,
            requested: requested.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_resolve_to_themselves() {
        for kind in ComponentKind::all() {
            for v in kind.descriptor().variants {
                assert_eq!(resolve_variant(*kind, v.as_str()), Ok(*v));
            }
            for s in kind.descriptor().sizes {
                assert_eq!(resolve_size(*kind, Some(s.as_str())), Ok(*s));
            }
        }
    }

    #[test]
    fn test_non_member_variant_errors() {
        // "success" parses as a Variant but Button does not accept it
        let err = resolve_variant(ComponentKind::Button, "success").unwrap_err();
        assert_eq!(
            err,
            ContractError::UnknownVariant {
                kind: ComponentKind::Button,
                requested: "success".into()
            }
        );

        // garbage does not parse at all
        assert!(resolve_variant(ComponentKind::Button, "neon").is_err());
    }

    #[test]
    fn test_unspecified_size_defaults_to_md() {
        assert_eq!(resolve_size(ComponentKind::Button, None), Ok(Size::Md));
    }

    #[test]
    fn test_unknown_size_errors() {
        let err = resolve_size(ComponentKind::Button, Some("xl")).unwrap_err();
        assert_eq!(
            err,
            ContractError::UnknownSize {
                kind: ComponentKind::Button,
                requested: "xl".into()
            }
        );
    }

    #[test]
    fn test_badge_rejects_sizes_outside_its_set() {
        // Badge only supports sm/md
        assert!(resolve_size(ComponentKind::Badge, Some("lg")).is_err());
    }

    #[test]
    fn test_error_messages_name_kind_and_identifier() {
        let err = resolve_size(ComponentKind::Button, Some("xl")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Button"));
        assert!(msg.contains("xl"));
    }
}
