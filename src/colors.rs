use std::io::{self, IsTerminal};

use crate::token::TokenKind;

const RESET: &str = "\x1b[0m";

/// ANSI styles for each kind of token in a rendered statement.
#[derive(Clone, Copy)]
pub struct Colors {
    pub bare: &'static str,
    pub string: &'static str,
    pub brace: &'static str,
    pub punct: &'static str,
    enabled: bool,
}

impl Colors {
    pub fn new(enabled: bool) -> Self {
        if enabled {
            Self {
                bare: "\x1b[1;34m", // Bold blue
                string: "\x1b[33m", // Yellow
                brace: "\x1b[35m",  // Magenta
                punct: "\x1b[31m",  // Red
                enabled: true,
            }
        } else {
            Self {
                bare: "",
                string: "",
                brace: "",
                punct: "",
                enabled: false,
            }
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Style for a token kind; `None` for kinds that render plainly.
    pub fn style(&self, kind: TokenKind) -> Option<&'static str> {
        if !self.enabled {
            return None;
        }
        match kind {
            TokenKind::Bare => Some(self.bare),
            TokenKind::Str => Some(self.string),
            TokenKind::EmptyObject => Some(self.brace),
            TokenKind::Dot | TokenKind::Equals | TokenKind::Semi => Some(self.punct),
            TokenKind::Noise | TokenKind::Error => None,
        }
    }

    pub fn reset(&self) -> &'static str {
        if self.enabled {
            RESET
        } else {
            ""
        }
    }
}

pub fn should_use_colors(force_color: bool, no_color: bool, configured: Option<bool>) -> bool {
    // Priority: --monochrome > --colorize > grin.toml > NO_COLOR env > TTY detection
    if no_color {
        return false;
    }
    if force_color {
        return true;
    }
    if let Some(colorize) = configured {
        return colorize;
    }
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    io::stdout().is_terminal()
}
