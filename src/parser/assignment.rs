//! Classification of parameter file lines.
//!
//! A line defines a variable when it starts with an uppercase ASCII letter,
//! contains `=` and contains no `$`. The value after the first `=` must then
//! either use no delimiters or be wrapped consistently in exactly one of
//! `'...'`, `(...)` or `"..."`.

use std::fmt;

/// A `KEY=value` line that passed classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

/// Why a line was not turned into an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRejection {
    Empty,
    MissingEquals,
    ContainsDollar,
    NotUppercaseStart,
    MismatchedDelimiters,
}

impl fmt::Display for LineRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineRejection::Empty => write!(f, "empty line"),
            LineRejection::MissingEquals => write!(f, "no '=' in line"),
            LineRejection::ContainsDollar => write!(f, "line contains '$'"),
            LineRejection::NotUppercaseStart => {
                write!(f, "line does not start with an uppercase letter")
            }
            LineRejection::MismatchedDelimiters => write!(f, "value is not well quoted"),
        }
    }
}

impl LineRejection {
    /// Lines that never looked like an assignment, as opposed to assignments
    /// whose value was refused.
    pub fn is_skip(&self) -> bool {
        !matches!(self, LineRejection::MismatchedDelimiters)
    }
}

/// Start/end markers of a value for each delimiter style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuoteFlags {
    pub st1: bool,
    pub en1: bool,
    pub st2: bool,
    pub en2: bool,
    pub st3: bool,
    pub en3: bool,
}

impl QuoteFlags {
    pub fn of(value: &str) -> Self {
        Self {
            st1: value.starts_with('\''),
            en1: value.ends_with('\''),
            st2: value.starts_with('('),
            en2: value.ends_with(')'),
            st3: value.starts_with('"'),
            en3: value.ends_with('"'),
        }
    }

    pub fn is_well_quoted(&self) -> bool {
        let Self {
            st1,
            en1,
            st2,
            en2,
            st3,
            en3,
        } = *self;

        (st1 == en1 && st1 != st2 && st1 != st3)
            || (st2 == en2 && st2 != st1 && st2 != st3)
            || (st3 == en3 && st3 != st1 && st3 != st2)
            || (st1 == en1 && st2 == en2 && st3 == en3 && st1 == st2 && st2 == st3 && !st3)
    }
}

/// Trims a raw line: every character up to and including space goes.
///
/// Unicode spaces such as NBSP are part of the line.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c <= ' ')
}

/// Whether a trimmed line is a candidate `KEY=value` definition.
pub fn check_env_entry(line: &str) -> Result<(), LineRejection> {
    let first = line.chars().next().ok_or(LineRejection::Empty)?;
    if !line.contains('=') {
        return Err(LineRejection::MissingEquals);
    }
    if line.contains('$') {
        return Err(LineRejection::ContainsDollar);
    }
    if !first.is_ascii_uppercase() {
        return Err(LineRejection::NotUppercaseStart);
    }
    Ok(())
}

/// Classifies one trimmed line.
pub fn classify(line: &str) -> Result<Assignment<'_>, LineRejection> {
    check_env_entry(line)?;

    // the first character is an uppercase letter, so `name` is never empty
    let (name, value) = line.split_once('=').ok_or(LineRejection::MissingEquals)?;
    if !QuoteFlags::of(value).is_well_quoted() {
        return Err(LineRejection::MismatchedDelimiters);
    }

    Ok(Assignment { name, value })
}
