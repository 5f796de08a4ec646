use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use crate::extensions::string::ToDashSeparators;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum DayOfWeek {
    #[strum(
        serialize = "mon",
        serialize = "monday",
        serialize = "mon.",
        serialize = "m",
        to_string = "MON"
    )]
    Mon,
    #[strum(
        serialize = "tue",
        serialize = "tuesday",
        serialize = "tue.",
        serialize = "t",
        to_string = "TUE"
    )]
    Tue,
    #[strum(
        serialize = "wed",
        serialize = "wednesday",
        serialize = "wed.",
        serialize = "w",
        to_string = "WED"
    )]
    Wed,
    #[strum(
        serialize = "thu",
        serialize = "thursday",
        serialize = "thu.",
        serialize = "th",
        to_string = "THU"
    )]
    Thu,
    #[strum(
        serialize = "fri",
        serialize = "friday",
        serialize = "fri.",
        serialize = "f",
        to_string = "FRI"
    )]
    Fri,
    #[strum(
        serialize = "sat",
        serialize = "saturday",
        serialize = "sat.",
        serialize = "sa",
        to_string = "SAT"
    )]
    Sat,
    #[strum(
        serialize = "sun",
        serialize = "sunday",
        serialize = "sun.",
        serialize = "su",
        to_string = "SUN"
    )]
    Sun,
}

impl DayOfWeek {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid day of the week: '{}'. Valid days: {}",
                s.trim(),
                valid_csv::<DayOfWeek>()
            ))
        })
    }

    /// Name shown as a weekly view column header.
    pub fn full_name(self) -> &'static str {
        match self {
            DayOfWeek::Mon => "Monday",
            DayOfWeek::Tue => "Tuesday",
            DayOfWeek::Wed => "Wednesday",
            DayOfWeek::Thu => "Thursday",
            DayOfWeek::Fri => "Friday",
            DayOfWeek::Sat => "Saturday",
            DayOfWeek::Sun => "Sunday",
        }
    }

    pub fn to_weekday(self) -> chrono::Weekday {
        match self {
            DayOfWeek::Mon => chrono::Weekday::Mon,
            DayOfWeek::Tue => chrono::Weekday::Tue,
            DayOfWeek::Wed => chrono::Weekday::Wed,
            DayOfWeek::Thu => chrono::Weekday::Thu,
            DayOfWeek::Fri => chrono::Weekday::Fri,
            DayOfWeek::Sat => chrono::Weekday::Sat,
            DayOfWeek::Sun => chrono::Weekday::Sun,
        }
    }
}

impl Serialize for DayOfWeek {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DayOfWeek {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<DayOfWeek, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        DayOfWeek::try_from(&s).map_err(serde::de::Error::custom)
    }
}

/// Calendar day typed in by a user. Persisted records keep their raw
/// `YYYY-MM-DD` string; this is only for CLI and config input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Date(pub NaiveDate);

#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum DateFormat {
    #[strum(serialize = "%Y-%m-%d", to_string = "%Y-%m-%d")]
    YmdDash,
    #[strum(serialize = "%m-%d-%Y", to_string = "%m-%d-%Y")]
    MdYDash,
    #[strum(serialize = "%Y/%m/%d", to_string = "%Y/%m/%d")]
    YmdSlash,
    #[strum(serialize = "%m/%d/%Y", to_string = "%m/%d/%Y")]
    MdYSlash,
    #[strum(serialize = "%m-%d", to_string = "%m-%d")]
    MdDash,
    #[strum(serialize = "%m/%d", to_string = "%m/%d")]
    MdSlash,
}

#[derive(Debug, Clone)]
struct DateParseSpec {
    input: String,
    date_format: DateFormat,
}

impl DateFormat {
    fn build_parse_spec(self, input: &str) -> DateParseSpec {
        let current_year = Local::now().date_naive().year();
        match self {
            DateFormat::YmdDash | DateFormat::YmdSlash => DateParseSpec {
                input: input.to_owned(),
                date_format: DateFormat::YmdDash,
            },
            DateFormat::MdYDash | DateFormat::MdYSlash => DateParseSpec {
                input: input.to_owned(),
                date_format: DateFormat::MdYDash,
            },
            DateFormat::MdDash | DateFormat::MdSlash => DateParseSpec {
                input: format!("{current_year}-{input}"),
                date_format: DateFormat::YmdDash,
            },
        }
    }
}

impl Date {
    pub fn usage() -> String {
        let today = Local::now().date_naive();
        let formats = DateFormat::iter()
            .map(|df| today.format(df.as_ref()).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Supported formats: {}", formats)
    }
    fn error_message(input: &str) -> String {
        format!("Invalid date format: '{}'. {}", input, Self::usage())
    }

    pub fn try_from_str(input: &str) -> Result<Self> {
        let input = input.to_dash_separators();

        for f in DateFormat::iter() {
            let spec = f.build_parse_spec(&input);
            if let Ok(date) = NaiveDate::parse_from_str(&spec.input, spec.date_format.as_ref()) {
                return Ok(Date(date));
            }
        }

        Err(Error::Parse(Self::error_message(&input)))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// A calendar month, `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn try_from_str(input: &str) -> Result<Self> {
        let input = input.to_dash_separators();
        let parsed = input.split_once('-').and_then(|(y, m)| {
            let year = y.parse::<i32>().ok()?;
            let month = m.parse::<u32>().ok()?;
            NaiveDate::from_ymd_opt(year, month, 1).map(|_| Month { year, month })
        });
        parsed.ok_or_else(|| {
            Error::Parse(format!(
                "Invalid month: '{}'. Expected format: YYYY-MM.",
                input
            ))
        })
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

impl BoolFormat {
    #[inline]
    fn to_bool(self) -> bool {
        matches!(self, BoolFormat::TextTrue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s) {
            Ok(fmt) => Ok(Bool(fmt.to_bool())),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}

/// Program a client is enrolled in. Unknown labels parse to `Other` so a
/// newly added program still renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum Program {
    #[strum(serialize = "limitless", to_string = "limitless")]
    Limitless,
    #[strum(
        serialize = "new-options",
        serialize = "new_options",
        serialize = "newoptions",
        serialize = "new options",
        to_string = "new-options"
    )]
    NewOptions,
    #[strum(serialize = "bridges", to_string = "bridges")]
    Bridges,
    #[strum(serialize = "grace", to_string = "grace")]
    Grace,
    #[strum(serialize = "other", to_string = "other")]
    Other,
}

impl Program {
    pub fn parse_lenient(s: &str) -> Self {
        Self::from_str(s.trim()).unwrap_or(Program::Other)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Program::Limitless => "Limitless",
            Program::NewOptions => "New Options",
            Program::Bridges => "Bridges",
            Program::Grace => "Grace",
            Program::Other => "Other",
        }
    }

    pub const RESET: &'static str = crate::csi!("0m");

    pub fn ansi_fg(self) -> &'static str {
        match self {
            Program::Limitless => crate::csi!("34m"),
            Program::NewOptions => crate::csi!("32m"),
            Program::Bridges => crate::csi!("33m"),
            Program::Grace => crate::csi!("35m"),
            Program::Other => crate::csi!("37m"),
        }
    }

    pub fn paint<S: AsRef<str>>(self, s: S) -> String {
        format!("{}{}{}", self.ansi_fg(), s.as_ref(), Self::RESET)
    }
}

impl Default for Program {
    fn default() -> Self {
        Program::Other
    }
}

impl Serialize for Program {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(self.as_ref())
    }
}

impl<'de> Deserialize<'de> for Program {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Program, <D as Deserializer<'de>>::Error> {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.map(|s| Program::parse_lenient(&s)).unwrap_or_default())
    }
}

/// Coach specialization. Only success coaches are booked on the general
/// schedule; grace coaches work their own program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum CoachType {
    #[strum(serialize = "success", to_string = "success")]
    Success,
    #[strum(serialize = "grace", to_string = "grace")]
    Grace,
    #[strum(serialize = "other", to_string = "other")]
    Other,
}

impl CoachType {
    pub fn parse_lenient(s: &str) -> Self {
        Self::from_str(s.trim()).unwrap_or(CoachType::Other)
    }

    pub fn is_general_population(self) -> bool {
        matches!(self, CoachType::Success)
    }
}

impl Default for CoachType {
    // Records predating the field were all success coaches.
    fn default() -> Self {
        CoachType::Success
    }
}

impl Serialize for CoachType {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(self.as_ref())
    }
}

impl<'de> Deserialize<'de> for CoachType {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<CoachType, <D as Deserializer<'de>>::Error> {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.map(|s| CoachType::parse_lenient(&s)).unwrap_or_default())
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TimeSlotKind {
    Core,
    Special,
}
