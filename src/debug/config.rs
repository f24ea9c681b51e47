//! Debug configuration - enable flag, prefix, level colors.
//!
//! The config is owned by a [`DebugLog`] and reconfigured only through
//! [`DebugPatch`] merges: shallow for the top-level fields, shallow-per-level
//! for the color mapping.
//!
//! [`DebugLog`]: crate::debug::DebugLog
//! [`DebugPatch`]: crate::debug::DebugPatch

use crossterm::style::Color;

// =============================================================================
// LogLevel
// =============================================================================

/// Severity/semantic level of one diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Success,
}

impl LogLevel {
    /// Tag rendered by console-like sinks.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

// =============================================================================
// LevelColors
// =============================================================================

/// Level → color mapping for console-like sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelColors {
    pub info: Color,
    pub warn: Color,
    pub error: Color,
    pub success: Color,
}

impl LevelColors {
    /// Color assigned to `level`.
    pub const fn for_level(&self, level: LogLevel) -> Color {
        match level {
            LogLevel::Info => self.info,
            LogLevel::Warn => self.warn,
            LogLevel::Error => self.error,
            LogLevel::Success => self.success,
        }
    }
}

impl Default for LevelColors {
    fn default() -> Self {
        Self {
            info: Color::Cyan,
            warn: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
        }
    }
}

/// Per-level color overrides for [`DebugPatch`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelColorsPatch {
    pub info: Option<Color>,
    pub warn: Option<Color>,
    pub error: Option<Color>,
    pub success: Option<Color>,
}

impl LevelColorsPatch {
    fn is_empty(&self) -> bool {
        self.info.is_none() && self.warn.is_none() && self.error.is_none() && self.success.is_none()
    }
}

// =============================================================================
// DebugConfig
// =============================================================================

/// Full configuration of one debug facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Master switch. While false every logging operation is a no-op and
    /// payload closures are never invoked.
    pub enabled: bool,
    /// Prefix rendered in front of every message.
    pub prefix: String,
    /// Level → color mapping.
    pub colors: LevelColors,
}

impl DebugConfig {
    /// Config seeded from the build-mode signal: enabled in development
    /// (debug builds), disabled in production (release builds).
    pub fn from_env() -> Self {
        Self {
            enabled: cfg!(debug_assertions),
            ..Self::default()
        }
    }

    /// Apply a patch, producing the merged config.
    ///
    /// Top-level fields replace wholesale; colors merge per level.
    pub fn merged(&self, patch: &DebugPatch) -> Self {
        let mut next = self.clone();
        if let Some(enabled) = patch.enabled {
            next.enabled = enabled;
        }
        if let Some(prefix) = &patch.prefix {
            next.prefix = prefix.clone();
        }
        if !patch.colors.is_empty() {
            let c = &patch.colors;
            next.colors = LevelColors {
                info: c.info.unwrap_or(next.colors.info),
                warn: c.warn.unwrap_or(next.colors.warn),
                error: c.error.unwrap_or(next.colors.error),
                success: c.success.unwrap_or(next.colors.success),
            };
        }
        next
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            prefix: "[veneer]".to_string(),
            colors: LevelColors::default(),
        }
    }
}

// =============================================================================
// DebugPatch
// =============================================================================

/// Partial reconfiguration for [`DebugConfig::merged`].
///
/// Unset fields leave the current value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugPatch {
    pub enabled: Option<bool>,
    pub prefix: Option<String>,
    pub colors: LevelColorsPatch,
}

impl DebugPatch {
    /// Patch that only flips the enabled flag.
    pub fn enabled(on: bool) -> Self {
        Self {
            enabled: Some(on),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_is_shallow_for_top_level() {
        let base = DebugConfig::default();
        let merged = base.merged(&DebugPatch {
            enabled: Some(true),
            prefix: Some("[app]".into()),
            ..DebugPatch::default()
        });
        assert!(merged.enabled);
        assert_eq!(merged.prefix, "[app]");
        assert_eq!(merged.colors, base.colors);
    }

    #[test]
    fn test_merge_is_per_level_for_colors() {
        let base = DebugConfig::default();
        let merged = base.merged(&DebugPatch {
            colors: LevelColorsPatch {
                warn: Some(Color::Magenta),
                ..LevelColorsPatch::default()
            },
            ..DebugPatch::default()
        });
        assert_eq!(merged.colors.warn, Color::Magenta);
        // untouched levels keep their defaults
        assert_eq!(merged.colors.info, base.colors.info);
        assert_eq!(merged.colors.error, base.colors.error);
        assert_eq!(merged.colors.success, base.colors.success);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let base = DebugConfig {
            enabled: true,
            prefix: "[x]".into(),
            colors: LevelColors::default(),
        };
        assert_eq!(base.merged(&DebugPatch::default()), base);
    }

    #[test]
    fn test_level_color_lookup() {
        let colors = LevelColors::default();
        assert_eq!(colors.for_level(LogLevel::Error), Color::Red);
        assert_eq!(colors.for_level(LogLevel::Success), Color::Green);
    }
}
