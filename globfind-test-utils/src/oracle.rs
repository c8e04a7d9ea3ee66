//! Reference wildcard matcher
//!
//! A deliberately naive backtracking matcher over characters, used as an
//! independent oracle for property tests of the compiled patterns.

/// Match `name` against `pattern` using `*`, `?`, `[seq]` and `[!seq]`
///
/// Unterminated classes and empty patterns never match; callers are expected
/// to feed only patterns the real matcher accepts.
pub fn reference_match(pattern: &str, name: &str) -> bool {
    let pat: Vec<char> = pattern.chars().collect();
    let txt: Vec<char> = name.chars().collect();
    !pat.is_empty() && helper(&pat, &txt)
}

fn helper(pat: &[char], txt: &[char]) -> bool {
    let Some((&first, rest)) = pat.split_first() else {
        return txt.is_empty();
    };

    match first {
        // * matches zero or more characters
        '*' => helper(rest, txt) || (!txt.is_empty() && helper(pat, &txt[1..])),
        // ? matches any single character
        '?' => !txt.is_empty() && helper(rest, &txt[1..]),
        '[' => match parse_class(rest) {
            Some((class, after)) => {
                !txt.is_empty() && class.contains(txt[0]) && helper(after, &txt[1..])
            }
            None => false,
        },
        c => !txt.is_empty() && txt[0] == c && helper(rest, &txt[1..]),
    }
}

struct Class {
    negated: bool,
    ranges: Vec<(char, char)>,
}

impl Class {
    fn contains(&self, c: char) -> bool {
        let hit = self.ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi);
        hit != self.negated
    }
}

/// Parse a class body (after `[`), returning it and the remaining pattern
fn parse_class(pat: &[char]) -> Option<(Class, &[char])> {
    let mut i = 0;
    let negated = pat.first() == Some(&'!');
    if negated {
        i += 1;
    }

    let mut ranges = Vec::new();
    let mut first = true;
    while i < pat.len() {
        let c = pat[i];
        if c == ']' && !first {
            return Some((Class { negated, ranges }, &pat[i + 1..]));
        }
        if i + 2 < pat.len() && pat[i + 1] == '-' && pat[i + 2] != ']' {
            ranges.push((c, pat[i + 2]));
            i += 3;
        } else {
            ranges.push((c, c));
            i += 1;
        }
        first = false;
    }
    None
}
