use std::path::PathBuf;
use std::str::FromStr;

use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::errors::{Error, Result, require_parse};
use crate::extensions::enums::valid_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum CommandKind {
    Day,
    Coach,
    Week,
    Month,
    Slots,
    Check,
    Assign,
    Unassign,
    Duplicates,
    Config,
}

impl CommandKind {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::unknown(format!(
                "'{}'. Valid commands: {}",
                s.trim(),
                valid_csv::<CommandKind>()
            ))
        })
    }

    /// Flags this command accepts, each taking one value.
    fn flags(self) -> &'static [&'static str] {
        match self {
            CommandKind::Day => &["--date"],
            CommandKind::Coach => &["--coach", "--date"],
            CommandKind::Week => &["--client", "--date"],
            CommandKind::Month => &["--month"],
            CommandKind::Check => &["--coach", "--date"],
            CommandKind::Assign => &["--coach", "--client", "--slot", "--date"],
            CommandKind::Unassign => &["--id"],
            CommandKind::Slots | CommandKind::Duplicates | CommandKind::Config => &[],
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            CommandKind::Day => "day [--date DATE]",
            CommandKind::Coach => "coach --coach ID [--date DATE]",
            CommandKind::Week => "week --client ID [--date DATE]",
            CommandKind::Month => "month [--month YYYY-MM]",
            CommandKind::Slots => "slots",
            CommandKind::Check => "check --coach ID [--date DATE]",
            CommandKind::Assign => "assign --coach ID --client ID --slot SLOT [--date DATE]",
            CommandKind::Unassign => "unassign --id ID",
            CommandKind::Duplicates => "duplicates",
            CommandKind::Config => "config [set KEY VALUE]",
        }
    }
}

/// Values given after the command name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOptions {
    pub date: Option<String>,
    pub coach: Option<String>,
    pub client: Option<String>,
    pub slot: Option<String>,
    pub month: Option<String>,
    pub id: Option<String>,
    pub positional: Vec<String>,
}

impl CommandOptions {
    fn field_for(&mut self, flag: &str) -> Option<&mut Option<String>> {
        match flag {
            "--date" => Some(&mut self.date),
            "--coach" => Some(&mut self.coach),
            "--client" => Some(&mut self.client),
            "--slot" => Some(&mut self.slot),
            "--month" => Some(&mut self.month),
            "--id" => Some(&mut self.id),
            _ => None,
        }
    }

    /// The value of a required flag.
    pub fn require<'a>(
        value: &'a Option<String>,
        flag: &str,
        command: CommandKind,
    ) -> Result<&'a str> {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                Error::Parse(format!(
                    "Missing required argument {flag} for '{command}'. Usage: {}",
                    command.usage()
                ))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
    pub command: CommandKind,
    pub options: CommandOptions,
}

impl CliArgs {
    pub fn from_env() -> Result<Self> {
        Self::from_args(std::env::args().skip(1))
    }

    /// `[--config PATH] [--logs DIR] <command> [flags]`
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut config_path = PathBuf::from("config.json");
        let mut logs_dir = PathBuf::from("logs");

        let command = loop {
            let arg = require_parse(
                args.next(),
                format!("Missing command. Valid commands: {}", valid_csv::<CommandKind>()),
            )?;
            match arg.as_str() {
                "--config" => config_path = PathBuf::from(Self::next_value(&mut args, "--config")?),
                "--logs" => logs_dir = PathBuf::from(Self::next_value(&mut args, "--logs")?),
                other => break CommandKind::try_from(other)?,
            }
        };

        let options = Self::parse_options(command, args)?;
        Ok(Self {
            config_path,
            logs_dir,
            command,
            options,
        })
    }

    fn parse_options<I>(command: CommandKind, mut args: I) -> Result<CommandOptions>
    where
        I: Iterator<Item = String>,
    {
        let mut options = CommandOptions::default();
        while let Some(arg) = args.next() {
            if !arg.starts_with("--") {
                if command != CommandKind::Config {
                    return Err(Self::bad_argument(command, &arg));
                }
                options.positional.push(arg);
                continue;
            }
            if !command.flags().contains(&arg.as_str()) {
                return Err(Self::bad_argument(command, &arg));
            }
            let value = Self::next_value(&mut args, &arg)?;
            if let Some(field) = options.field_for(&arg) {
                *field = Some(value);
            }
        }
        Ok(options)
    }

    fn next_value<I>(args: &mut I, flag: &str) -> Result<String>
    where
        I: Iterator<Item = String>,
    {
        require_parse(args.next(), format!("Missing value for {flag}"))
    }

    fn bad_argument(command: CommandKind, arg: &str) -> Error {
        Error::Parse(format!(
            "Unknown argument '{arg}' for '{command}'. Usage: {}",
            command.usage()
        ))
    }
}
