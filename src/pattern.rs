//! Format patterns written in `yyyy-MM-dd HH:mm:ss` letters.
//!
//! A [`Pattern`] keeps the text the caller wrote and the chrono strftime form
//! it translates to. The strftime form is the canonical one: equality, hashing
//! and the dispatch in [`crate::conversion::string_to_instant`] all use it.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimeError};

/// Day precision, `yyyy-MM-dd`.
pub const DAY_PATTERN: Pattern = Pattern::predefined("yyyy-MM-dd", "%Y-%m-%d");

/// Month precision, `yyyy-MM`.
pub const MONTH_PATTERN: Pattern = Pattern::predefined("yyyy-MM", "%Y-%m");

/// Second precision, `yyyy-MM-dd HH:mm:ss`.
pub const SECOND_PATTERN: Pattern = Pattern::predefined("yyyy-MM-dd HH:mm:ss", "%Y-%m-%d %H:%M:%S");

/// A validated format pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pattern {
    source: Cow<'static, str>,
    canonical: Cow<'static, str>,
}

impl Pattern {
    const fn predefined(source: &'static str, canonical: &'static str) -> Self {
        Pattern {
            source: Cow::Borrowed(source),
            canonical: Cow::Borrowed(canonical),
        }
    }

    /// Builds a pattern from letter syntax such as `yyyy/MM/dd HH:mm`.
    pub fn of(source: &str) -> Result<Self> {
        let canonical = translate(source)?;
        Ok(Pattern {
            source: Cow::Owned(source.to_string()),
            canonical: Cow::Owned(canonical),
        })
    }

    /// The text the pattern was built from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The chrono strftime form.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Whether the pattern carries a day-of-month or day-of-year field.
    pub(crate) fn has_day(&self) -> bool {
        let mut chars = self.canonical.chars();
        while let Some(c) = chars.next() {
            if c != '%' {
                continue;
            }
            let mut spec = chars.next();
            if spec == Some('-') {
                spec = chars.next();
            }
            if matches!(spec, Some('d') | Some('j')) {
                return true;
            }
        }
        false
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Pattern {}

impl std::hash::Hash for Pattern {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Pattern {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self> {
        Pattern::of(s)
    }
}

impl TryFrom<String> for Pattern {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self> {
        Pattern::of(&value)
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.source.into_owned()
    }
}

fn translate(source: &str) -> Result<String> {
    if source.trim().is_empty() {
        return Err(TimeError::invalid_pattern(source, "pattern cannot be empty"));
    }

    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\'' {
            // '' outside a quote is an escaped quote
            if chars.get(i + 1) == Some(&'\'') {
                out.push('\'');
                i += 2;
                continue;
            }
            i += 1;
            loop {
                match chars.get(i) {
                    None => return Err(TimeError::invalid_pattern(source, "unclosed quote")),
                    Some('\'') if chars.get(i + 1) == Some(&'\'') => {
                        out.push('\'');
                        i += 2;
                    }
                    Some('\'') => {
                        i += 1;
                        break;
                    }
                    Some(&literal) => {
                        push_literal(&mut out, literal);
                        i += 1;
                    }
                }
            }
            continue;
        }

        if !c.is_ascii_alphabetic() {
            push_literal(&mut out, c);
            i += 1;
            continue;
        }

        let run = chars[i..].iter().take_while(|&&next| next == c).count();
        let spec = field(c, run).ok_or_else(|| {
            TimeError::invalid_pattern(source, format!("unsupported field '{}'", c.to_string().repeat(run)))
        })?;
        out.push_str(spec);
        i += run;
    }

    Ok(out)
}

fn field(letter: char, run: usize) -> Option<&'static str> {
    let spec = match (letter, run) {
        ('y' | 'u', 4) => "%Y",
        ('y' | 'u', 2) => "%y",
        ('M', 1) => "%-m",
        ('M', 2) => "%m",
        ('M', 3) => "%b",
        ('M', 4) => "%B",
        ('d', 1) => "%-d",
        ('d', 2) => "%d",
        ('D', 1) => "%-j",
        ('D', 3) => "%j",
        ('H', 1) => "%-H",
        ('H', 2) => "%H",
        ('h', 1) => "%-I",
        ('h', 2) => "%I",
        ('m', 1) => "%-M",
        ('m', 2) => "%M",
        ('s', 1) => "%-S",
        ('s', 2) => "%S",
        ('S', 3) => "%3f",
        ('S', 6) => "%6f",
        ('S', 9) => "%9f",
        ('E', 1..=3) => "%a",
        ('E', 4) => "%A",
        ('a', 1) => "%p",
        _ => return None,
    };
    Some(spec)
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}
