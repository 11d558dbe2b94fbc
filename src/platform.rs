//! Host platform detection.
use std::fmt;

use crate::paths::CaseSensitivity;

/// Detected operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    /// Linux, macOS and other Unix-like systems.
    Unix,
    /// Windows.
    Windows,
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix => write!(f, "unix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

/// Platform information for the current system.
#[derive(Debug, Clone)]
pub struct Platform {
    /// Operating system family.
    pub os: Os,
}

impl Platform {
    /// Detect the current platform.
    #[must_use]
    pub const fn detect() -> Self {
        Self {
            os: Self::detect_os(),
        }
    }

    /// Path comparison policy native to this platform's filesystems.
    #[must_use]
    pub const fn path_case(&self) -> CaseSensitivity {
        match self.os {
            Os::Windows => CaseSensitivity::Insensitive,
            Os::Unix => CaseSensitivity::Sensitive,
        }
    }

    const fn detect_os() -> Os {
        if cfg!(windows) { Os::Windows } else { Os::Unix }
    }
}
