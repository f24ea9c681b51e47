//! Button binding.
//!
//! Variants: primary | secondary | outline | ghost (default primary).
//! Sizes: sm | md | lg (default md). Supports disabled.

use crate::contract::ComponentKind;

use super::{ComponentState, Ctx, Props};

/// One Button instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    state: ComponentState,
}

impl Button {
    pub const KIND: ComponentKind = ComponentKind::Button;

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

    /// Whether the host disabled this instance.
    pub fn is_disabled(&self) -> bool {
        self.state.disabled
    }
}
