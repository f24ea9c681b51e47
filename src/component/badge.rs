//! Badge binding.
//!
//! Variants: default | primary | success | warning | danger | info
//! (default default). Sizes: sm | md (default md). The semantic error-role
//! variant is `danger` everywhere; `error` is not a Badge variant.

use crate::contract::ComponentKind;

use super::{ComponentState, Ctx, Props};

/// One Badge instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    state: ComponentState,
}

impl Badge {
    pub const KIND: ComponentKind = ComponentKind::Badge;

    pub fn new(props: Props, ctx: &Ctx) -> Self {
        Self {
            state: ComponentState::new(Self::KIND, props, ctx),
        }
    }

    pub fn state(&self) -> &ComponentState {
        &self.state
    }

    pub fn update(&mut self, props: Props, ctx: &Ctx) {
        self.state.update(props, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{Size, Variant};
    use crate::debug::{DebugConfig, DebugLog, MemorySink};
    use std::rc::Rc;

    fn ctx() -> Ctx {
        Ctx::new(Rc::new(DebugLog::new(
            DebugConfig::default(),
            Rc::new(MemorySink::new()),
        )))
    }

    #[test]
    fn test_danger_is_accepted() {
        let badge = Badge::new(
            Props {
                variant: Some("danger".into()),
                ..Props::default()
            },
            &ctx(),
        );
        assert_eq!(badge.state().variant, Variant::Danger);
    }

    #[test]
    fn test_error_identifier_degrades_to_default() {
        // `error` was binding drift; the contract only knows `danger`
        let badge = Badge::new(
            Props {
                variant: Some("error".into()),
                ..Props::default()
            },
            &ctx(),
        );
        assert_eq!(badge.state().variant, Variant::Default);
    }

    #[test]
    fn test_lg_is_outside_badge_size_set() {
        let badge = Badge::new(
            Props {
                size: Some("lg".into()),
                ..Props::default()
            },
            &ctx(),
        );
        assert_eq!(badge.state().size, Size::Md);
    }
}
