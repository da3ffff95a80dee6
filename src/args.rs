//! Classifies the positionally unordered inputs of [`format`].

use jiff::Zoned;

use crate::{Instant, flag, token};

/// One input to [`format`], classified by what it is rather than where it
/// stands.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatArg {
    /// A pattern string, or the name of a common format.
    Pattern(String),
    /// The moment to render.
    Instant(Instant),
    /// Whether to apply the fixed-offset shift before rendering.
    FixedOffset(bool),
}

impl From<&str> for FormatArg {
    fn from(pattern: &str) -> Self {
        Self::Pattern(pattern.to_owned())
    }
}

impl From<String> for FormatArg {
    fn from(pattern: String) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<bool> for FormatArg {
    fn from(fixed_offset: bool) -> Self {
        Self::FixedOffset(fixed_offset)
    }
}

impl From<Instant> for FormatArg {
    fn from(tm: Instant) -> Self {
        Self::Instant(tm)
    }
}

impl From<&Instant> for FormatArg {
    fn from(tm: &Instant) -> Self {
        Self::Instant(tm.clone())
    }
}

impl From<&Zoned> for FormatArg {
    fn from(zoned: &Zoned) -> Self {
        Self::Instant(Instant::from(zoned))
    }
}

impl From<Zoned> for FormatArg {
    fn from(zoned: Zoned) -> Self {
        Self::Instant(Instant::from(&zoned))
    }
}

/// Zero to three [`format`] inputs, in any order.
///
/// Implemented for `()`, for single values and for tuples of up to three
/// values convertible to [`FormatArg`], so `format(("Y-MM-DD", tm))` and
/// `format((tm, "Y-MM-DD"))` mean the same thing.
pub trait FormatArgs {
    fn into_args(self) -> Vec<FormatArg>;
}

impl FormatArgs for () {
    fn into_args(self) -> Vec<FormatArg> {
        Vec::new()
    }
}

impl FormatArgs for &str {
    fn into_args(self) -> Vec<FormatArg> {
        vec![self.into()]
    }
}

impl FormatArgs for String {
    fn into_args(self) -> Vec<FormatArg> {
        vec![self.into()]
    }
}

impl FormatArgs for bool {
    fn into_args(self) -> Vec<FormatArg> {
        vec![self.into()]
    }
}

impl FormatArgs for Instant {
    fn into_args(self) -> Vec<FormatArg> {
        vec![self.into()]
    }
}

impl FormatArgs for Zoned {
    fn into_args(self) -> Vec<FormatArg> {
        vec![self.into()]
    }
}

impl FormatArgs for &Zoned {
    fn into_args(self) -> Vec<FormatArg> {
        vec![self.into()]
    }
}

impl<A: Into<FormatArg>> FormatArgs for (A,) {
    fn into_args(self) -> Vec<FormatArg> {
        vec![self.0.into()]
    }
}

impl<A: Into<FormatArg>, B: Into<FormatArg>> FormatArgs for (A, B) {
    fn into_args(self) -> Vec<FormatArg> {
        vec![self.0.into(), self.1.into()]
    }
}

impl<A: Into<FormatArg>, B: Into<FormatArg>, C: Into<FormatArg>> FormatArgs for (A, B, C) {
    fn into_args(self) -> Vec<FormatArg> {
        vec![self.0.into(), self.1.into(), self.2.into()]
    }
}

/// Render a moment in time as text.
///
/// Accepts any mix of a pattern (or common format name), an instant and the
/// fixed-offset switch; each may be omitted. Defaults are the current
/// moment, [`flag::DEFAULT_PATTERN`] and local time. When the same role is
/// given twice the later value wins.
///
/// ```
/// use datefmt::{Instant, format};
/// use jiff::civil::date;
///
/// let tm = Instant::new(date(2021, 8, 6).at(20, 4, 5, 0), -240);
/// assert_eq!(format(("time", &tm)), "20:04:05");
/// assert_eq!(format((&tm, "time")), "20:04:05");
/// assert_eq!(format(("time", &tm, true)), "00:04:05");
/// ```
pub fn format(args: impl FormatArgs) -> String {
    let (pattern, tm) = resolve(args.into_args());
    flag::render(&token::tokenize(&pattern), &tm)
}

/// Apply the defaulting and shifting rules; see [`format`].
fn resolve(args: Vec<FormatArg>) -> (String, Instant) {
    let mut pattern = None;
    let mut instant = None;
    let mut fixed_offset = false;

    for arg in args {
        match arg {
            FormatArg::Pattern(p) => pattern = Some(p),
            FormatArg::Instant(tm) => instant = Some(tm),
            FormatArg::FixedOffset(v) => fixed_offset = v,
        }
    }

    let mut tm = instant.unwrap_or_else(Instant::now);
    if fixed_offset {
        tm = tm.as_fixed_offset();
    }

    let pattern = pattern.unwrap_or_else(|| flag::DEFAULT_PATTERN.to_owned());
    let pattern = match flag::common_format(&pattern) {
        Some(expansion) => expansion.to_owned(),
        None => pattern,
    };

    (pattern, tm)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn reference() -> Instant {
        Instant::new(date(2021, 8, 6).at(20, 4, 5, 678_000_000), -240)
    }

    #[test]
    fn test_argument_order_is_irrelevant() {
        let tm = reference();
        let want = "2021-08-06";
        assert_eq!(format(("Y-MM-DD", &tm)), want);
        assert_eq!(format((&tm, "Y-MM-DD")), want);
        assert_eq!(format((&tm, "Y-MM-DD", false)), want);
        assert_eq!(format((false, "Y-MM-DD", &tm)), want);
    }

    #[test]
    fn test_last_argument_of_a_role_wins() {
        let tm = reference();
        // two patterns: the later one is used
        assert_eq!(format(("H", "m", &tm)), "4");
        // two instants: the later one is used
        let other = Instant::new(date(2022, 1, 1).at(0, 0, 0, 0), -240);
        assert_eq!(format(("Y", &tm, &other)), "2022");
        // a later false overrides an earlier true
        assert_eq!(format((true, false, &tm)), format((&tm, false)));
    }

    #[test]
    fn test_common_format_names_expand() {
        let tm = reference();
        assert_eq!(format(("isoDate", &tm)), format(("Y-MM-DD", &tm)));
        assert_eq!(format(("date", &tm)), "8/6/21");
        assert_eq!(format(("longTime", &tm)), "08:04:05 PM");
        assert_eq!(format(("stamp", &tm)), "20210806200405678");
        // only a whole-string match is a name; otherwise the letters are
        // ordinary flags and literals (i, t, e and ! pass through)
        assert_eq!(format(("isoDate!", &tm)), "i5th6pte!");
    }

    #[test]
    fn test_omitted_pattern_uses_default() {
        let tm = reference();
        assert_eq!(format(tm.clone()), format((flag::DEFAULT_PATTERN, tm)));
    }

    #[test]
    fn test_fixed_offset_shift_moves_time_sensitive_fields() {
        let tm = reference();
        assert_eq!(format(("HH:mm", &tm, false)), "20:04");
        assert_eq!(format(("HH:mm", &tm, true)), "00:04");
        // crossing midnight moves the date too
        assert_eq!(format(("Y-MM-DD", &tm, true)), "2021-08-07");
        // patterns without time-sensitive flags are unaffected
        assert_eq!(format(("'fixed'", &tm, true)), format(("'fixed'", &tm, false)));
        assert_eq!(format(("ZZ", &tm, true)), format(("ZZ", &tm, false)));
    }

    #[test]
    fn test_quoting_round_trip() {
        let tm = reference();
        assert_eq!(format(("\"X\" y", &tm)), "X 21");
        assert_eq!(format(("'X' y", &tm)), "X 21");
    }

    #[test]
    fn test_literal_passthrough() {
        let tm = reference();
        assert_eq!(format(("--::--", &tm)), "--::--");
        assert_eq!(format(("", &tm)), "");
    }

    #[test]
    fn test_no_args_formats_now() {
        // only sanity: the default pattern always carries a meridiem
        let out = format(());
        assert!(out.ends_with("AM") || out.ends_with("PM"), "{out:?}");
    }

    #[test]
    fn test_zoned_argument() {
        let zoned: Zoned = "2021-08-06T20:04:05.678[America/New_York]".parse().unwrap();
        assert_eq!(format(("iso", &zoned)), "2021-08-06T20:04:05-0400");
    }
}
