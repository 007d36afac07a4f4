//! Render configuration.
//!
//! Everything that varies per deployment rather than per node lives in
//! [`GridConfig`] and is passed explicitly into every render call. The
//! only process-wide value is the build mode read from the environment,
//! which [`BuildMode::process`] reads once and caches.

use std::fmt;
use std::str::FromStr;

use gridcss::{BreakpointRegistry, InlineStyle};
use once_cell::sync::Lazy;

use crate::error::{GridError, Result};

/// Environment variable consulted by [`BuildMode::from_env`].
pub const BUILD_MODE_ENV: &str = "FLEXGRID_ENV";

/// Whether development-only checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildMode {
    Production,
    Development,
    Test,
}

impl BuildMode {
    pub fn is_production(&self) -> bool {
        matches!(self, BuildMode::Production)
    }

    /// Reads [`BUILD_MODE_ENV`], falling back to the compile profile when unset.
    pub fn from_env() -> Result<BuildMode> {
        match std::env::var(BUILD_MODE_ENV) {
            Ok(value) => value.parse(),
            Err(_) => Ok(BuildMode::default()),
        }
    }

    /// The build mode of this process, read from the environment on first use.
    pub fn process() -> BuildMode {
        static MODE: Lazy<BuildMode> = Lazy::new(|| {
            BuildMode::from_env().unwrap_or_else(|e| {
                log::warn!("{e}; using {} build mode", BuildMode::default());
                BuildMode::default()
            })
        });
        *MODE
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Production => "production",
            BuildMode::Development => "development",
            BuildMode::Test => "test",
        }
    }
}

impl Default for BuildMode {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }
}

impl FromStr for BuildMode {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(BuildMode::Production),
            "development" | "dev" => Ok(BuildMode::Development),
            "test" => Ok(BuildMode::Test),
            other => Err(GridError::InvalidBuildMode(other.to_string())),
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-deployment settings for resolving and rendering grids.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    pub build_mode: BuildMode,
    /// Breakpoints the class map was generated for.
    pub breakpoints: BreakpointRegistry,
    /// Prefix for logged diagnostics, `[name] message`.
    pub name: String,
    /// Extra style merged into every grid outside production builds.
    pub debug_style: InlineStyle,
}

impl GridConfig {
    pub fn new(build_mode: BuildMode) -> Self {
        Self {
            build_mode,
            breakpoints: BreakpointRegistry::default(),
            name: env!("CARGO_PKG_NAME").to_string(),
            debug_style: InlineStyle::default(),
        }
    }

    /// Configuration using the process build mode.
    pub fn from_env() -> Self {
        Self::new(BuildMode::process())
    }

    pub fn with_build_mode(mut self, build_mode: BuildMode) -> Self {
        self.build_mode = build_mode;
        self
    }

    pub fn with_breakpoints(mut self, breakpoints: BreakpointRegistry) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_debug_style(mut self, debug_style: InlineStyle) -> Self {
        self.debug_style = debug_style;
        self
    }

    /// Whether the structural validator runs.
    pub fn validates(&self) -> bool {
        !self.build_mode.is_production()
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(BuildMode::default())
    }
}
