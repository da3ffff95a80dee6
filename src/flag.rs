//! The flag table: maps every tokenizable flag spelling to a renderer.
//!
//! Reference of recognized flags (case sensitive):
//!
//! ```text
//! D       Day of the month
//! DD      Day of the month - padded
//! DDD     Day of the month - with ordinal suffix (1st, 2nd, 3rd, 4th ...)
//! o       Day's ordinal suffix alone (st, nd, rd or th)
//! ddd     Day of the week - short name (Sun, Mon, Tue ...)
//! dddd    Day of the week - full name (Sunday, Monday, Tuesday ...)
//! d/dd    Same as D/DD
//! w       Week number (1-52)
//! ww      Week number - padded
//! M       Month (1-12)
//! MM      Month - padded
//! MMM     Month - short name (Jan, Feb, Mar ...)
//! MMMM    Month - full name (January, February, March ...)
//! j/J     Same as MMM/MMMM
//! Y       Year (2021) (same as YYYY)
//! y       Year, 2 digits (21) (same as yy, YY; undefined below year 1000)
//! H/HH    Hours, 24-hour clock (padded variant)
//! h/hh    Hours, 12-hour clock (padded variant)
//! m/mm    Minutes (padded variant)
//! s/ss    Seconds (padded variant)
//! l       Milliseconds, 3 digits
//! L       Milliseconds, 3 digits prefixed with a dot
//! a/A     a or p / A or P
//! aa/AA   am or pm / AM or PM
//! aaa/AAA a.m. or p.m. / A.M. or P.M. (aaaa/AAAA are aliases)
//! z       US timezone abbreviation (EST, MDT, ...), else GMT with offset
//! Z       UTC offset in hours (-5, +2.5)
//! ZZ      UTC offset as a padded HHMM (-0500, +0230)
//! ```
//!
//! Any other character passes through unchanged; quote a run with `'...'` or
//! `"..."` to keep flag letters literal.

use crate::{Instant, MONTHS, MONTHS_ABB, WEEKDAYS, WEEKDAYS_ABB, token::Token};

/// A pure rendering function for one flag.
pub type Renderer = fn(&Instant) -> String;

/// Pattern used when the caller supplies none.
pub const DEFAULT_PATTERN: &str = "dddd, J D, Y @ h:mm:ss AA";

/// Shortcut names that expand to a full pattern before tokenizing.
pub const COMMON_FORMATS: &[(&str, &str)] = &[
    ("default", DEFAULT_PATTERN), // Friday, August 6, 2021 @ 8:04:05 PM
    ("date", "M/D/YY"),              // 8/6/21
    ("time", "HH:mm:ss"),            // 20:04:05
    ("short", "M/D/YY @ HH:mm:ss"),  // 8/6/21 @ 20:04:05
    ("longDate", "J D, Y"),          // August 6, 2021
    ("longTime", "hh:mm:ss AA"),     // 08:04:05 PM
    ("long", "J D, Y @ h:mm:ss AA"), // August 6, 2021 @ 8:04:05 PM
    ("isoDate", "Y-MM-DD"),          // 2021-08-06
    ("isoTime", "H:mm:ss"),          // 20:04:05
    ("iso", "Y-MM-DDTHH:mm:ssZZ"),   // 2021-08-06T20:04:05-0400
    ("stamp", "YYYYMMDDHHmmssl"),    // 20210806200405678
];

/// The flag table. Keys are exactly the spellings the tokenizer can emit.
pub static FLAGS: &[(&str, Renderer)] = &[
    ("d", |tm| tm.day().to_string()),
    ("dd", |tm| format!("{:02}", tm.day())),
    ("ddd", |tm| WEEKDAYS_ABB[tm.weekday() as usize].to_string()),
    ("dddd", |tm| WEEKDAYS[tm.weekday() as usize].to_string()),
    ("D", |tm| tm.day().to_string()),
    ("DD", |tm| format!("{:02}", tm.day())),
    ("DDD", |tm| {
        format!("{}{}", tm.day(), ordinal_suffix(tm.day()))
    }),
    ("w", |tm| week_number(tm).to_string()),
    ("ww", |tm| format!("{:02}", week_number(tm))),
    ("M", |tm| tm.month().to_string()),
    ("MM", |tm| format!("{:02}", tm.month())),
    ("MMM", |tm| MONTHS_ABB[tm.month() as usize - 1].to_string()),
    ("MMMM", |tm| MONTHS[tm.month() as usize - 1].to_string()),
    ("j", |tm| MONTHS_ABB[tm.month() as usize - 1].to_string()),
    ("J", |tm| MONTHS[tm.month() as usize - 1].to_string()),
    ("y", short_year),
    ("yy", short_year),
    ("YY", short_year),
    ("Y", |tm| tm.year().to_string()),
    ("YYYY", |tm| tm.year().to_string()),
    ("H", |tm| tm.hour().to_string()),
    ("HH", |tm| format!("{:02}", tm.hour())),
    ("h", |tm| hour12(tm).to_string()),
    ("hh", |tm| format!("{:02}", hour12(tm))),
    ("m", |tm| tm.minute().to_string()),
    ("mm", |tm| format!("{:02}", tm.minute())),
    ("s", |tm| tm.second().to_string()),
    ("ss", |tm| format!("{:02}", tm.second())),
    ("l", |tm| format!("{:03}", tm.millisecond())),
    ("L", |tm| format!(".{:03}", tm.millisecond())),
    ("a", |tm| meridiem(tm, "a", "p")),
    ("aa", |tm| meridiem(tm, "am", "pm")),
    ("aaa", |tm| meridiem(tm, "a.m.", "p.m.")),
    ("aaaa", |tm| meridiem(tm, "a.m.", "p.m.")),
    ("A", |tm| meridiem(tm, "A", "P")),
    ("AA", |tm| meridiem(tm, "AM", "PM")),
    ("AAA", |tm| meridiem(tm, "A.M.", "P.M.")),
    ("AAAA", |tm| meridiem(tm, "A.M.", "P.M.")),
    ("z", zone_abbreviation),
    ("Z", offset_hours),
    ("ZZ", offset_hhmm),
    ("o", |tm| ordinal_suffix(tm.day()).to_string()),
];

/// Look the spelling up in [`FLAGS`].
pub fn renderer(spelling: &str) -> Option<Renderer> {
    FLAGS.iter().find(|(k, _)| *k == spelling).map(|&(_, f)| f)
}

/// Expand a common format name, if the whole string is one.
pub fn common_format(name: &str) -> Option<&'static str> {
    COMMON_FORMATS
        .iter()
        .find(|(k, _)| *k == name)
        .map(|&(_, v)| v)
}

/// Render a token sequence against an instant.
pub fn render(tokens: &[Token<'_>], tm: &Instant) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Flag(spelling) => match renderer(spelling) {
                Some(f) => out.push_str(&f(tm)),
                // the table covers every tokenizable spelling; if it ever
                // does not, degrade to literal output instead of failing
                None => out.push_str(spelling),
            },
            Token::Literal(text) => out.push_str(text),
        }
    }
    out
}

/// Hour on the 12-hour clock, 1 through 12, never 0.
fn hour12(tm: &Instant) -> i8 {
    match tm.hour() % 12 {
        0 => 12,
        h => h,
    }
}

fn meridiem(tm: &Instant, am: &str, pm: &str) -> String {
    if tm.hour() < 12 { am } else { pm }.to_string()
}

/// The decimal year minus its first two characters ("2021" -> "21").
///
/// Not modulo arithmetic, so years below 1000 are undefined.
fn short_year(tm: &Instant) -> String {
    let full = tm.year().to_string();
    full.get(2..).unwrap_or("").to_string()
}

/// Suffix for a day of the month: 11-13 take "th", the rest go by last digit.
fn ordinal_suffix(day: i8) -> &'static str {
    let last_two = day % 100;
    if last_two - day % 10 == 10 {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// 1-based week of the year, counting from the week of January 1.
///
/// `ceil((days_since_jan1 + jan1_weekday + 1) / 7)` where the day count
/// keeps its time-of-day fraction. Not ISO week numbering; January 1 always
/// falls in week 1 and a late December day may land in week 53.
fn week_number(tm: &Instant) -> i64 {
    let days = (tm.day_of_year() as f64 - 1.0) + tm.millisecond_of_day() as f64 / 86_400_000.0;
    ((days + tm.weekday_of_jan1() as f64 + 1.0) / 7.0).ceil() as i64
}

/// UTC offset as signed fractional hours ("-5", "+2.5").
fn offset_hours(tm: &Instant) -> String {
    let minutes = tm.offset_minutes();
    let sign = if minutes < 0 { '-' } else { '+' };
    format!("{sign}{}", minutes.abs() as f64 / 60.0)
}

/// UTC offset as a signed zero-padded HHMM ("-0500", "+0230").
fn offset_hhmm(tm: &Instant) -> String {
    let minutes = tm.offset_minutes();
    let sign = if minutes < 0 { '-' } else { '+' };
    format!("{sign}{:04}", (minutes.abs() / 60) * 100 + minutes.abs() % 60)
}

const ZONE_REGIONS: [&str; 5] = ["Pacific", "Mountain", "Central", "Eastern", "Atlantic"];
const ZONE_KINDS: [&str; 3] = ["Standard", "Daylight", "Prevailing"];

/// Best effort US zone abbreviation.
///
/// Matches the instant's zone label against a fixed catalog: 3-letter US
/// abbreviations (EST, MDT, ...), spelled out US zone names clipped to their
/// capitals, and GMT/UTC with an optional signed offset. Labels outside the
/// catalog, and instants with no label at all, fall back to a GMT form built
/// from the offset. Zone labels come from the platform, so this is
/// inherently environment dependent.
fn zone_abbreviation(tm: &Instant) -> String {
    if let Some(found) = tm.zone_label().and_then(match_zone_label) {
        return found;
    }
    format!("GMT{}", offset_hhmm(tm))
}

/// Scan a label for catalog matches; like the original, the last one wins.
fn match_zone_label(label: &str) -> Option<String> {
    let words: Vec<&str> = label.split_whitespace().collect();
    for i in (0..words.len()).rev() {
        let word = words[i].trim_matches(|c: char| !c.is_ascii_alphanumeric() && c != '+' && c != '-');

        if i >= 2
            && word == "Time"
            && ZONE_KINDS.contains(&words[i - 1])
            && ZONE_REGIONS.contains(&words[i - 2])
        {
            return Some(clip(&format!("{} {} Time", words[i - 2], words[i - 1])));
        }
        if is_us_abbreviation(word) {
            return Some(word.to_string());
        }
        if let Some(rest) = word.strip_prefix("GMT").or_else(|| word.strip_prefix("UTC")) {
            if rest.is_empty() || is_signed_hhmm(rest) {
                return Some(word.to_string());
            }
        }
    }
    None
}

/// PST, MDT, CST, EDT, APT and friends.
fn is_us_abbreviation(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 3 && b"PMCEA".contains(&b[0]) && b"SDP".contains(&b[1]) && b[2] == b'T'
}

fn is_signed_hhmm(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 5 && (b[0] == b'+' || b[0] == b'-') && b[1..].iter().all(u8::is_ascii_digit)
}

/// Drop everything but capitals, digits and signs ("Eastern Standard Time"
/// becomes "EST").
fn clip(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == '+' || *c == '-')
        .collect()
}
