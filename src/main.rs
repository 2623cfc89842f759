use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};
use tracing_subscriber::EnvFilter;
use yearcal::{Calendar, Layout};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum Highlight {
    #[default]
    Nothing,
    Today,
    Date(Date),
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        year: Option<i32>,
        layout: Layout,
        highlight: Highlight,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut year: Option<i32> = None;
        let mut layout = Layout::default();
        let mut highlight = Highlight::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('v') | Arg::Long("vertical") => layout = Layout::Vertical,
                Arg::Long("layout") => layout = parser.value()?.parse()?,
                Arg::Short('t') | Arg::Long("today") => highlight = Highlight::Today,
                Arg::Long("highlight") => {
                    let value = parser.value()?.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => highlight = Highlight::Date(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                Arg::Value(value) if year.is_none() => year = Some(value.parse()?),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run {
            year,
            layout,
            highlight,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                year,
                layout,
                highlight,
            } => {
                let year = match year {
                    Some(y) => y,
                    None => local_today()?.year(),
                };
                let highlight = match highlight {
                    Highlight::Nothing => None,
                    Highlight::Today => Some(local_today()?),
                    Highlight::Date(d) => Some(d),
                };
                tracing::debug!(year, ?highlight, %layout, "building calendar");
                let cal = Calendar::new(year, highlight)
                    .with_context(|| format!("cannot lay out year {year}"))?;
                println!("{}", cal.render(layout));
                Ok(())
            }
            Command::Help => {
                println!("Usage: yearcal [<options>] [YEAR]");
                println!();
                println!("Render a whole year as aligned plain-text calendar grids");
                println!();
                println!("YEAR defaults to the current year.");
                println!();
                println!("Options:");
                println!("  -v, --vertical          Put months in columns and weekdays in rows");
                println!("      --layout <LAYOUT>   Choose \"horizontal\" (default) or \"vertical\"");
                println!("  -t, --today             Highlight today's date");
                println!("      --highlight <DATE>  Highlight the given YYYY-MM-DD date");
                println!("  -h, --help              Display this help message and exit");
                println!("  -V, --version           Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    Command::from_parser(Parser::from_env())?.run()
}

// Logs go to stderr so that stdout carries nothing but the calendar
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn local_today() -> anyhow::Result<Date> {
    Ok(OffsetDateTime::now_local()
        .context("failed to determine local date")?
        .date())
}
