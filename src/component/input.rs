//! Input binding.
//!
//! Variants: default | outline (default default). Sizes: sm | md | lg
//! (default md). Supports disabled and an error state: an explicit message
//! wins, otherwise the `input.error` text comes through the injected
//! translate capability.

use crate::contract::ComponentKind;

use super::{ComponentState, Ctx, Props};

/// One Input instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    state: ComponentState,
}

impl Input {
    pub const KIND: ComponentKind = ComponentKind::Input;

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

    /// Error message to render, if the instance is in the error state.
    pub fn error_message(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.state.disabled
    }
}
