use std::{convert::Infallible, path::PathBuf, str::FromStr};

use clap::{
    Arg, ArgAction, ArgGroup, ArgMatches, Command, CommandFactory, FromArgMatches, command,
    error::ErrorKind,
};
use jiff::Zoned;

use datefmt::{clap_helper::*, flag};

/// Provides lines each having a date to parse.
#[derive(Debug, Clone, PartialEq)]
pub enum Reader {
    File(PathBuf),
    Stdin,
}

#[derive(Debug, PartialEq)]
pub enum When {
    /// Delay the value as far as possible.
    Now,
    /// The content of a file with one date per line.
    Reader(Reader),
    /// The given time.
    Given(Zoned),
}

#[derive(Debug, PartialEq)]
pub struct Args {
    /// Custom pattern or an expanded common format; library default if unset.
    pub pattern: Option<String>,
    pub gmt: bool,
    pub when: When,
    pub debug: bool,
    pub list: bool,
}

impl Args {
    pub const DEBUG_LONG: &str = "debug";
    pub const GMT_LONG: &str = "gmt";
    pub const DATE_LONG: &str = "date";
    pub const FILE_LONG: &str = "file";
    pub const LIST_LONG: &str = "list";
    pub const COMMON_LONG: &str = "common";
    pub const POSITIONAL_ID: &str = "pattern";

    /// The named shortcuts of the library as a clap value parser.
    pub const COMMON_PAIRS: StaticMap<&'static str> = StaticMap(flag::COMMON_FORMATS);

    pub const DATE_SETTERS_GROUP: &str = "whens";
    pub const DATE_SETTERS_ARGS: &[&str] = &[Self::DATE_LONG, Self::FILE_LONG];

    pub fn groups() -> [ArgGroup; 1] {
        [ArgGroup::new(Self::DATE_SETTERS_GROUP)
            .multiple(false)
            .args(Self::DATE_SETTERS_ARGS)]
    }

    pub fn args() -> [Arg; 7] {
        [
            Arg::new(Self::DEBUG_LONG)
                .long(Self::DEBUG_LONG)
                .help("enable minor extra logs in STDERR")
                .action(ArgAction::SetTrue),
            Arg::new(Self::GMT_LONG)
                .long(Self::GMT_LONG)
                .short('u')
                .visible_alias("utc")
                .help("shift the clock reading by its UTC offset before formatting")
                .action(ArgAction::SetTrue),
            Arg::new(Self::LIST_LONG)
                .long(Self::LIST_LONG)
                .short('l')
                .help("list the common format names with a sample of each")
                .action(ArgAction::SetTrue),
            Arg::new(Self::COMMON_LONG)
                .long(Self::COMMON_LONG)
                .short('c')
                .value_name("NAME")
                .overrides_with(Self::COMMON_LONG)
                .help("use a named common format (a custom PATTERN wins over this)")
                .value_parser(Self::COMMON_PAIRS),
            Arg::new(Self::DATE_LONG)
                .long(Self::DATE_LONG)
                .short('d')
                .overrides_with(Self::DATE_LONG)
                .help("as if `now` is the given (only the last of multiple values takes effect)"),
            Arg::new(Self::FILE_LONG)
                .long(Self::FILE_LONG)
                .short('f')
                .help("read a file or STDIN for dates (use '-' for STDIN)")
                .value_parser(|s: &str| -> Result<Reader, Infallible> {
                    Ok(if s == "-" {
                        Reader::Stdin
                    } else {
                        Reader::File(PathBuf::from_str(s)?)
                    })
                }),
            // positionals
            Arg::new(Self::POSITIONAL_ID)
                .value_name("PATTERN")
                .help("custom format, e.g. 'Y-MM-DD' (quote literal text with '...' or \"...\")"),
        ]
    }
}

impl CommandFactory for Args {
    fn command() -> Command {
        command!(/* with version, about and author */)
            .after_help(
                "Unrecognized characters in PATTERN pass through unchanged.\n\
                 See --list for the named shortcuts and the crate docs for the\n\
                 full flag table (D, DD, dddd, MM, Y, HH, ss, AA and friends).",
            )
            .args(Self::args())
            .groups(Self::groups())
    }

    fn command_for_update() -> Command {
        Self::command()
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            pattern: None,
            gmt: false,
            when: When::Now,
            debug: false,
            list: false,
        }
    }
}

impl FromArgMatches for Args {
    fn from_arg_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        let mut v = Self::default();
        v.update_from_arg_matches(matches)?;
        Ok(v)
    }

    fn update_from_arg_matches(&mut self, matches: &ArgMatches) -> Result<(), clap::Error> {
        self.debug = self.debug || matches.get_flag(Self::DEBUG_LONG);
        self.gmt = self.gmt || matches.get_flag(Self::GMT_LONG);
        self.list = self.list || matches.get_flag(Self::LIST_LONG);

        if let Some(v) = matches.get_one::<&'static str>(Self::COMMON_LONG) {
            self.pattern = Some(v.to_string());
        }

        if let Some(v) = matches.get_one::<String>(Self::DATE_LONG) {
            self.when = match parse_when(v, &Zoned::now()) {
                Ok(v) => When::Given(v),
                Err(e) => return Err(Self::error(ErrorKind::InvalidValue, e)),
            };
        } else if let Some(v) = matches.get_one::<Reader>(Self::FILE_LONG) {
            self.when = When::Reader(v.clone());
        }

        // the custom pattern beats the named one
        if let Some(v) = matches.get_one::<String>(Self::POSITIONAL_ID) {
            self.pattern = Some(v.clone());
        }

        Ok(())
    }
}

/// Parse a user-supplied date string relative to `now`, in `now`'s timezone.
pub fn parse_when(s: &str, now: &Zoned) -> Result<Zoned, String> {
    parse_datetime::parse_datetime_at_date(now.clone(), s)
        .or_else(|_| parse_datetime::parse_datetime(s))
        .map(|tm| tm.with_time_zone(now.time_zone().clone()))
        .map_err(|e| e.to_string())
}
