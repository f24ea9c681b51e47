//! Alert binding.
//!
//! Variants: info | success | warning | danger (default info). Unsized.
//! Carries an optional error text through the same error-state machinery
//! as Input, keyed `alert.error`.

use crate::contract::ComponentKind;

use super::{ComponentState, Ctx, Props};

/// One Alert instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    state: ComponentState,
}

impl Alert {
    pub const KIND: ComponentKind = ComponentKind::Alert;

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
