//! Terminal presentation settings.
//!
//! Terminal geometry and color capabilities are detected once, on first use,
//! and held by a [`Presentation`] owned by the caller instead of process-wide
//! state.

use once_cell::sync::OnceCell;

/// Width used when neither an override nor the environment provides one.
pub const FALLBACK_WIDTH: usize = 80;
/// Height used when neither an override nor the environment provides one.
pub const FALLBACK_HEIGHT: usize = 25;

/// TerminalSettings holds fixed overrides that win over detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalSettings {
    pub fixed_width: Option<usize>,
    pub fixed_height: Option<usize>,
}

/// Terminal describes the detected display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal {
    pub width: usize,
    pub height: usize,
    /// The terminal only understands a restricted set of escape sequences.
    pub dumb: bool,
    /// The terminal renders 24-bit color.
    pub true_color: bool,
    /// The user asked for no color through a non-empty `NO_COLOR`.
    pub no_color: bool,
}

impl Terminal {
    /// Detects the terminal from an environment lookup.
    pub fn detect<F>(settings: &TerminalSettings, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let dimension = |name: &str| {
            env(name)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|&n| n > 0)
        };

        let width = settings
            .fixed_width
            .or_else(|| dimension("COLUMNS"))
            .unwrap_or(FALLBACK_WIDTH);
        let height = settings
            .fixed_height
            .or_else(|| dimension("LINES"))
            .unwrap_or(FALLBACK_HEIGHT);
        let dumb = env("TERM").is_some_and(|term| term == "dumb");
        let true_color = env("COLORTERM").is_some_and(|value| {
            let value = value.to_ascii_lowercase();
            value == "truecolor" || value == "24bit"
        });
        let no_color = env("NO_COLOR").is_some_and(|value| !value.is_empty());

        let terminal = Terminal {
            width,
            height,
            dumb,
            true_color,
            no_color,
        };
        tracing::debug!(?terminal, "detected terminal");
        terminal
    }

    /// Detects the terminal from the process environment.
    pub fn from_env(settings: &TerminalSettings) -> Self {
        Terminal::detect(settings, |name| {
            std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
        })
    }
}

/// Presentation owns the terminal settings and the lazily detected terminal.
#[derive(Debug, Default)]
pub struct Presentation {
    settings: TerminalSettings,
    terminal: OnceCell<Terminal>,
}

impl Presentation {
    pub fn new(settings: TerminalSettings) -> Self {
        Presentation {
            settings,
            terminal: OnceCell::new(),
        }
    }

    pub fn settings(&self) -> &TerminalSettings {
        &self.settings
    }

    /// Returns the terminal, detecting it from the process environment on
    /// first access.
    pub fn terminal(&self) -> &Terminal {
        self.terminal
            .get_or_init(|| Terminal::from_env(&self.settings))
    }

    /// Returns the terminal, detecting it through `env` on first access.
    /// Later calls return the first result regardless of `env`.
    pub fn terminal_with<F>(&self, env: F) -> &Terminal
    where
        F: Fn(&str) -> Option<String>,
    {
        self.terminal
            .get_or_init(|| Terminal::detect(&self.settings, env))
    }
}
