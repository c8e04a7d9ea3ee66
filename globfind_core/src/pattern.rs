//! Shell-style wildcard patterns for base names
//!
//! A [`Pattern`] understands the classic wildcard language:
//!
//! - `*` matches any run of zero or more characters
//! - `?` matches exactly one character
//! - `[seq]` matches one character from `seq` (ranges like `a-z` allowed)
//! - `[!seq]` matches one character not in `seq`
//!
//! Everything else is literal, including `{`, `}`, `\` and a `^` that opens
//! a class. Matching works on characters, not bytes, so `?` consumes one
//! `é` and a class can hold non-ASCII members. Names that are not valid
//! UTF-8 are matched through their lossy conversion.

use glob::MatchOptions;
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, ValidationError};
use crate::platform::CaseSensitivity;

/// Separators and leading dots get no special treatment inside a base name
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Compiled wildcard pattern matched against a single filename
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Pattern as written by the caller
    source: String,
    /// Compiled matcher, lowercased when `fold_case` is set
    matcher: glob::Pattern,
    /// Lowercase names before matching
    fold_case: bool,
    /// Requested case handling (unresolved)
    case: CaseSensitivity,
}

impl Pattern {
    /// Compile a pattern using the platform's native case handling
    pub fn new(pattern: &str) -> Result<Self> {
        Self::with_case(pattern, CaseSensitivity::Native)
    }

    /// Compile a pattern with explicit case handling
    ///
    /// Insensitive matching folds both sides with full Unicode lowercasing;
    /// `glob`'s own case option only folds ASCII.
    pub fn with_case(pattern: &str, case: CaseSensitivity) -> Result<Self> {
        if pattern.is_empty() {
            return Err(ValidationError::invalid_pattern(pattern, "pattern is empty").into());
        }

        let fold_case = case.is_insensitive();
        let mut translated = translate(pattern)?;
        if fold_case {
            translated = translated.to_lowercase();
        }

        let matcher = glob::Pattern::new(&translated)
            .map_err(|e| ValidationError::invalid_pattern(pattern, e.msg))?;

        log::trace!("Compiled pattern {pattern:?} as glob {translated:?}");

        Ok(Self {
            source: pattern.to_string(),
            matcher,
            fold_case,
            case,
        })
    }

    /// Test a base name against the pattern
    pub fn matches(&self, name: impl AsRef<OsStr>) -> bool {
        let name = name.as_ref().to_string_lossy();
        if self.fold_case {
            self.matcher.matches_with(&name.to_lowercase(), MATCH_OPTIONS)
        } else {
            self.matcher.matches_with(&name, MATCH_OPTIONS)
        }
    }

    /// Test only the final component of `path`
    ///
    /// Paths without a final component (`/`, `..`) never match.
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name().is_some_and(|name| self.matches(name))
    }

    /// The pattern as originally written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Case handling this pattern was compiled with
    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Pattern {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Normalize a wildcard pattern for `glob` and reject malformed classes
///
/// `glob` refuses `**` outside a whole path component, so runs of `*`
/// collapse to one star. Only `!` negates a class.
fn translate(pattern: &str) -> Result<String> {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    let mut prev_star = false;

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                if !prev_star {
                    out.push('*');
                }
                prev_star = true;
                continue;
            }
            '[' => {
                out.push('[');
                let mut members = Vec::new();
                let mut negated = false;
                let mut closed = false;
                for c in chars.by_ref() {
                    match c {
                        '!' if members.is_empty() && !negated => {
                            negated = true;
                            out.push('!');
                        }
                        // `]` right after the opening bracket is a member
                        ']' if !members.is_empty() => {
                            closed = true;
                            out.push(']');
                            break;
                        }
                        c => {
                            members.push(c);
                            out.push(c);
                        }
                    }
                }
                if !closed {
                    return Err(
                        ValidationError::invalid_pattern(pattern, "unterminated character class")
                            .into(),
                    );
                }
                check_ranges(pattern, &members)?;
            }
            c => out.push(c),
        }
        prev_star = false;
    }

    Ok(out)
}

/// Reject `z-a` style ranges, which could never match
fn check_ranges(pattern: &str, members: &[char]) -> Result<()> {
    let mut i = 0;
    while i < members.len() {
        if i + 2 < members.len() && members[i + 1] == '-' {
            if members[i + 2] < members[i] {
                return Err(ValidationError::invalid_pattern(
                    pattern,
                    format!("invalid character range {}-{}", members[i], members[i + 2]),
                )
                .into());
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}
