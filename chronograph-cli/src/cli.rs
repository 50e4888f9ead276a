use clap::{Arg, ArgAction, Command};
use std::ffi::OsString;
use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    Arguments(clap::Error),
    NoSteps,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Arguments(err) => write!(f, "Arguments error: {}", err),
            Error::NoSteps => write!(f, "No steps given, use --step LABEL:COMMAND"),
        }
    }
}

impl std::error::Error for Error {}

/// One timed command. Parsed from `LABEL:COMMAND`, where the label is a
/// single word of letters, digits, `-`, `_` or `.`. Anything else is taken
/// whole as the command, which then doubles as the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub label: String,
    pub command: String,
}

fn is_label(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl From<&str> for Step {
    fn from(raw: &str) -> Self {
        let raw = raw.trim();

        if let Some((label, command)) = raw.split_once(':') {
            let command = command.trim();
            if is_label(label) && !command.is_empty() {
                return Step {
                    label: label.to_string(),
                    command: command.to_string(),
                };
            }
        }

        Step {
            label: raw.to_string(),
            command: raw.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct Cli {
    pub name: String,
    pub verbosity: u8,
    pub json: bool,
    pub keep_going: bool,
    pub shell: String,
    pub steps: Vec<Step>,
}

impl Cli {
    pub fn load() -> Result<Cli, Error> {
        Self::parse_from(std::env::args_os())
    }

    pub fn parse_from<I, T>(args: I) -> Result<Cli, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Command::new("chronograph")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Times a sequence of shell commands as the splits of one chronograph")
            .arg(
                Arg::new("name")
                    .long("name")
                    .short('n')
                    .help("Name shown in the report")
                    .default_value("Default"),
            )
            .arg(
                Arg::new("verbosity")
                    .long("verbosity")
                    .short('v')
                    .help("0 silent, 1 logs start and stop, 2 adds labels and split times")
                    .value_parser(clap::value_parser!(u8).range(0..=2))
                    .default_value("0"),
            )
            .arg(
                Arg::new("json")
                    .long("json")
                    .help("Print the timing data as JSON instead of a report")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("keep_going")
                    .long("keep-going")
                    .short('k')
                    .help("Keep running the remaining steps after a step fails")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("shell")
                    .long("shell")
                    .help("Shell that runs each command with -c")
                    .default_value("sh"),
            )
            .arg(
                Arg::new("step")
                    .long("step")
                    .short('s')
                    .help("Step to time, as LABEL:COMMAND")
                    .action(ArgAction::Append),
            )
            .try_get_matches_from(args)
            .map_err(Error::Arguments)?;

        let steps: Vec<Step> = matches
            .get_many::<String>("step")
            .map(|steps| steps.map(|step| Step::from(step.as_str())).collect())
            .unwrap_or_default();

        if steps.is_empty() {
            return Err(Error::NoSteps);
        }

        Ok(Cli {
            name: matches
                .get_one::<String>("name")
                .cloned()
                .unwrap_or_else(|| "Default".to_string()),
            verbosity: matches.get_one::<u8>("verbosity").copied().unwrap_or(0),
            json: matches.get_flag("json"),
            keep_going: matches.get_flag("keep_going"),
            shell: matches
                .get_one::<String>("shell")
                .cloned()
                .unwrap_or_else(|| "sh".to_string()),
            steps,
        })
    }
}
