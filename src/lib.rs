//! A small format-string interpreter for dates and times.
//!
//! [`format`] takes up to three inputs in any order (a pattern, an instant
//! and a "fixed offset" switch), splits the pattern into flags and literals
//! and renders each flag against the instant. Anything the tokenizer does
//! not recognize passes through verbatim, so formatting never fails.
//!
//! ```
//! use datefmt::{Instant, format};
//! use jiff::civil::date;
//!
//! let tm = Instant::new(date(2021, 8, 6).at(20, 4, 5, 678_000_000), -240);
//! assert_eq!(format(("isoDate", tm)), "2021-08-06");
//! ```
pub mod args;
pub mod clap_helper;
pub mod flag;
pub mod instant;
pub mod token;

pub use args::{FormatArg, FormatArgs, format};
pub use instant::Instant;

/// Sunday based weekdays in English.
pub const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// [`WEEKDAYS`] abbreviations to 3 letters.
pub const WEEKDAYS_ABB: [&str; 7] = abbr_strarr(WEEKDAYS);

/// Months in English.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// [`MONTHS`] abbreviations to 3 letters.
pub const MONTHS_ABB: [&str; 12] = abbr_strarr(MONTHS);

/// Abbreviate to 3 letters.
const fn abbr_strarr<const N: usize>(original: [&str; N]) -> [&str; N] {
    const CHARS: usize = 3;

    let mut v = [""; N];
    let mut i = 0;
    while i < original.len() {
        assert!(
            original[i].is_ascii() && original[i].len() >= CHARS,
            "automatic abbrevations only work with ASCII strings with enough length",
        );

        // a way around Index not being in const
        v[i] = unsafe {
            str::from_utf8_unchecked(
                original[i]
                    .as_bytes()
                    .first_chunk::<CHARS>()
                    .unwrap()
                    .as_slice(),
            )
        };
        i += 1;
    }
    v
}
