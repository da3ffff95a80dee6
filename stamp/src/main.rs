//! Holds a `stamp` program: prints a moment through the format-string
//! interpreter of [`datefmt`].
//!
//! The moment defaults to now and can be set with `--date` or, line by line,
//! with `--file`. The output layout is a custom PATTERN, a named common
//! format (`--common`), or the library default. `--gmt` applies the
//! fixed-offset shift before rendering, like the original interpreter's
//! boolean argument.

use std::io::BufRead;

use datefmt::{Instant, clap_helper::Parse, flag, format};
use jiff::Zoned;

mod arg_parser;

use arg_parser::{Args, Reader, When, parse_when};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Args::parse();

    if config.list {
        print_common_formats();
        return Ok(());
    }

    let zoned = match config.when {
        When::Reader(input) => {
            if file_apply(input, config.pattern.as_deref(), config.gmt) {
                return Ok(());
            } else {
                return Err("failed to parse all lines".into());
            }
        }
        When::Given(v) => v,
        When::Now => Zoned::now(),
    };

    if config.debug {
        eprintln!(
            "output pattern: `{}`",
            config.pattern.as_deref().unwrap_or(flag::DEFAULT_PATTERN)
        );
        eprintln!("basis: {}", &zoned);
    }

    print_formatted(config.pattern.as_deref(), Instant::from(&zoned), config.gmt);

    Ok(())
}

/// Print one moment in the configured layout.
fn print_formatted(pattern: Option<&str>, tm: Instant, gmt: bool) {
    println!(
        "{}",
        match pattern {
            Some(p) => format((p, tm, gmt)),
            None => format((tm, gmt)),
        }
    );
}

/// Print every common format name with its expansion and a sample.
fn print_common_formats() {
    let now = Instant::now();
    for &(name, pattern) in flag::COMMON_FORMATS {
        println!("{name:<10} {pattern:<28} {}", format((pattern, now.clone())));
    }
}

/// Parse each line in a stream as with --date and print each resulting
/// formatted moment. Prints a warning for each value that fails to parse.
///
/// Returns false if any parsing failed.
fn file_apply(reader: Reader, pattern: Option<&str>, gmt: bool) -> bool {
    let read: &mut dyn std::io::Read = match reader {
        Reader::Stdin => &mut std::io::stdin(),
        Reader::File(path) => &mut std::fs::File::open(path).expect("cannot open the file"),
    };
    let mut buf_reader = std::io::BufReader::new(read);

    let mut ok = true;
    let mut buf = String::new();
    let now = Zoned::now();
    // 0 is the end of the file
    while buf_reader.read_line(&mut buf).expect("cannot read line") != 0 {
        match parse_when(buf.trim_end(), &now) {
            Ok(tm) => print_formatted(pattern, Instant::from(&tm), gmt),
            Err(e) => {
                eprintln!("invalid date {}", e);
                ok = false;
            }
        };
        buf.clear();
    }

    ok
}
