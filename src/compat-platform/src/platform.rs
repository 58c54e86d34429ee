//! Platform facts behind the `is_<platform>` aliases.

use serde::{Deserialize, Serialize};

/// Identifies the operating system the way `os.name` and `sys.platform` do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInfo {
    /// Operating system family: `nt`, `posix`, or another identifier.
    pub os_name: String,
    /// Platform identifier: `win32`, `darwin`, `linux`, ...
    pub platform: String,
}

impl PlatformInfo {
    pub fn new(os_name: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            os_name: os_name.into(),
            platform: platform.into(),
        }
    }

    /// Facts for the running process.
    pub fn current() -> Self {
        Self::new(
            os_name_for(std::env::consts::FAMILY),
            platform_for(std::env::consts::OS),
        )
    }

    pub fn windows() -> Self {
        Self::new("nt", "win32")
    }

    pub fn linux() -> Self {
        Self::new("posix", "linux")
    }

    pub fn macos() -> Self {
        Self::new("posix", "darwin")
    }

    pub fn is_win(&self) -> bool {
        self.os_name == "nt"
    }

    pub fn is_posix(&self) -> bool {
        self.os_name == "posix"
    }

    pub fn is_darwin(&self) -> bool {
        self.platform == "darwin"
    }
}

fn os_name_for(family: &str) -> &str {
    match family {
        "windows" => "nt",
        "unix" => "posix",
        other => other,
    }
}

fn platform_for(os: &str) -> &str {
    match os {
        "windows" => "win32",
        "macos" => "darwin",
        other => other,
    }
}
