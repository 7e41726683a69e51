//! Process-wide display preference, persisted to a small JSON state file.
//!
//! The store is an explicit context object built once in `main` and passed by
//! reference into rendering. It never lives in a global.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Default location of the theme state file, relative to the working
/// directory.
pub const THEME_STATE_FILE: &str = ".kairos/theme.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Returns the other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{other}', expected light or dark")),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ThemeState {
    theme: Theme,
}

/// The persisted theme preference. Loaded once at startup, written back on
/// every change.
pub struct ThemeStore {
    path: PathBuf,
    theme: Theme,
}

impl ThemeStore {
    /// Reads the preference from `path`, defaulting to light when the file is
    /// absent or unreadable.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let theme = std::fs::read(&path)
            .ok()
            .and_then(|bytes| serde_json::from_slice::<ThemeState>(&bytes).ok())
            .map(|state| state.theme)
            .unwrap_or(Theme::Light);

        Self { path, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Sets the preference and writes it through to the state file.
    pub fn set(&mut self, theme: Theme) -> anyhow::Result<()> {
        self.theme = theme;
        self.persist()
    }

    /// Flips the preference, persists it, and returns the new value.
    pub fn toggle(&mut self) -> anyhow::Result<Theme> {
        self.set(self.theme.toggled())?;
        Ok(self.theme)
    }

    fn persist(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        let state = ThemeState { theme: self.theme };
        std::fs::write(&self.path, serde_json::to_vec_pretty(&state)?)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}
