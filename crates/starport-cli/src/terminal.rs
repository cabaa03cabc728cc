//! Terminal styling and color utilities.
//!
//! ANSI escape codes and color detection for the interactive session. Colors
//! are resolved once into a [`ColorPalette`] so rendering code never branches on
//! terminal capabilities.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";

    /// Bold cyan for the command prompt.
    pub const PROMPT: &str = "\x1b[1;36m";
    /// Bright bold white for headings and port names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for hints and secondary text.
    pub const GRAY: &str = "\x1b[90m";
    /// Green for acknowledgements.
    pub const GREEN: &str = "\x1b[32m";
    /// Red for failure reports.
    pub const RED: &str = "\x1b[31m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub prompt: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub green: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            prompt: colors::PROMPT,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            green: colors::GREEN,
            red: colors::RED,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            prompt: "",
            white_bold: "",
            gray: "",
            green: "",
            red: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    ///
    /// Returns `colored()` if the terminal supports ANSI colors,
    /// otherwise returns `plain()`.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Palette for the `--no-color` flag: plain when disabled, detected otherwise.
    #[must_use]
    pub fn for_flag(no_color: bool) -> Self {
        if no_color {
            Self::plain()
        } else {
            Self::detect()
        }
    }

    /// Wrap `text` in `code`, resetting afterwards.
    pub fn paint(&self, code: &str, text: &str) -> String {
        if code.is_empty() {
            text.to_string()
        } else {
            format!("{code}{text}{}", self.reset)
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_palette_colored() {
        let p = ColorPalette::colored();
        assert!(!p.reset.is_empty());
        assert!(!p.prompt.is_empty());
        assert!(!p.red.is_empty());
    }

    #[test]
    fn test_color_palette_plain() {
        let p = ColorPalette::plain();
        assert!(p.reset.is_empty());
        assert!(p.prompt.is_empty());
        assert!(p.red.is_empty());
    }

    #[test]
    fn test_paint_skips_empty_codes() {
        assert_eq!(ColorPalette::plain().paint("", "hull breach"), "hull breach");
        let p = ColorPalette::colored();
        assert_eq!(p.paint(p.red, "x"), "\x1b[31mx\x1b[0m");
    }

    #[test]
    fn test_no_color_flag_forces_plain() {
        assert_eq!(ColorPalette::for_flag(true), ColorPalette::plain());
    }

    // Environment variables are process-global, so tests touching them are
    // serialized through a mutex.

    use std::sync::Mutex;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    mod supports_color_tests {
        use super::*;
        use std::env;

        /// Run `f` with temporary environment variable changes.
        fn with_env_vars<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
        where
            F: FnOnce() -> R,
        {
            let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

            let saved: Vec<_> = vars.iter().map(|(k, _)| (*k, env::var_os(k))).collect();

            for (key, value) in vars {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }

            let result = f();

            for (key, value) in saved {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }

            result
        }

        #[test]
        fn test_supports_color_no_color_set() {
            with_env_vars(&[("NO_COLOR", Some("1")), ("TERM", None)], || {
                assert!(!supports_color(), "NO_COLOR=1 should disable colors");
            });
        }

        #[test]
        fn test_supports_color_term_dumb() {
            with_env_vars(&[("NO_COLOR", None), ("TERM", Some("dumb"))], || {
                assert!(!supports_color(), "TERM=dumb should disable colors");
            });
        }

        #[test]
        fn test_supports_color_default() {
            with_env_vars(
                &[("NO_COLOR", None), ("TERM", Some("xterm-256color"))],
                || {
                    assert!(supports_color(), "Normal terminal should support colors");
                },
            );
        }
    }
}
