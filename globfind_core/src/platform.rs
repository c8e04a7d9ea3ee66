//! Platform conventions for filename comparison
//!
//! Windows filesystems compare names case-insensitively; everything else
//! (including macOS, whose default volume is case-insensitive but whose
//! shell tooling matches case-sensitively) compares exactly.

use serde::{Deserialize, Serialize};

/// How pattern letters are compared against filename letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseSensitivity {
    /// Follow the host platform's convention
    #[default]
    Native,
    /// Letters must match exactly
    Sensitive,
    /// Letters match regardless of case
    Insensitive,
}

impl CaseSensitivity {
    /// Resolve `Native` to the concrete behavior of this platform
    pub fn resolve(self) -> Self {
        match self {
            Self::Native => native_case_sensitivity(),
            other => other,
        }
    }

    /// Whether matching ignores case after resolution
    pub fn is_insensitive(self) -> bool {
        self.resolve() == Self::Insensitive
    }
}

/// Case sensitivity of filename matching on the current platform
pub fn native_case_sensitivity() -> CaseSensitivity {
    #[cfg(windows)]
    {
        CaseSensitivity::Insensitive
    }

    #[cfg(not(windows))]
    {
        CaseSensitivity::Sensitive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_resolution() {
        #[cfg(windows)]
        assert_eq!(CaseSensitivity::Native.resolve(), CaseSensitivity::Insensitive);

        #[cfg(not(windows))]
        assert_eq!(CaseSensitivity::Native.resolve(), CaseSensitivity::Sensitive);
    }

    #[test]
    fn test_explicit_settings_are_kept() {
        assert_eq!(
            CaseSensitivity::Sensitive.resolve(),
            CaseSensitivity::Sensitive
        );
        assert!(CaseSensitivity::Insensitive.is_insensitive());
        assert!(!CaseSensitivity::Sensitive.is_insensitive());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&CaseSensitivity::Insensitive).unwrap();
        assert_eq!(json, "\"insensitive\"");

        let parsed: CaseSensitivity = serde_json::from_str("\"native\"").unwrap();
        assert_eq!(parsed, CaseSensitivity::Native);
    }
}
