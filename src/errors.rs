use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

use crate::schedule::availability::AvailabilityStatus;

/// Errors raised by the layers around the schedule core (config, snapshot,
/// CLI and the assignment-creation path). View building itself never fails.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Parsing & Routing --------------------------------------------------
    /// Bad dates, months, flags or enum values.
    #[error("Parse error: {0}")]
    Parse(String),

    /// No command matches the first CLI argument.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // ---- Scheduling / Domain -----------------------------------------------
    /// The availability gate refused the coach for that date.
    #[error("Coach '{coach_id}' cannot be scheduled on {date}: {status}{}", reason_suffix(.reason))]
    CoachUnavailable {
        coach_id: String,
        date: String,
        status: AvailabilityStatus,
        reason: Option<String>,
    },

    /// Coach type is not eligible for the general schedule.
    #[error("Coach '{coach_id}' ({coach_type}) is not eligible for general scheduling.")]
    CoachNotEligible {
        coach_id: String,
        coach_type: String,
    },

    /// Same client already booked at this date and slot.
    #[error(
        "Client '{client_id}' is already scheduled on {date} at {time_slot} (assignment {existing_id})."
    )]
    DuplicateAssignment {
        client_id: String,
        date: String,
        time_slot: String,
        existing_id: String,
    },

    /// A referenced record does not exist in the snapshot.
    #[error("No {kind} with id '{id}'.")]
    NotFound { kind: &'static str, id: String },

    // ---- Config / Snapshot --------------------------------------------------
    /// Any issue initializing/reading config (file missing, invalid JSON, etc.)
    #[error("Config error: {0}")]
    Config(String),

    /// Snapshot file could not be read or decoded.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// IO passthrough (read/write files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn reason_suffix(reason: &Option<String>) -> String {
    match reason {
        Some(r) if !r.trim().is_empty() => format!(" ({})", r.trim()),
        _ => String::new(),
    }
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    pub fn unknown<S: Into<String>>(cmd: S) -> Self {
        Error::UnknownCommand(cmd.into())
    }
    pub fn snapshot<S: Into<String>>(msg: S) -> Self {
        Error::Snapshot(msg.into())
    }
    pub fn not_found<S: Into<String>>(kind: &'static str, id: S) -> Self {
        Error::NotFound {
            kind,
            id: id.into(),
        }
    }
}

// ----------------------- Small result helpers --------------------------------

/// Map an `Option<T>` into `Result<T, Error::Parse>` with a custom message.
pub fn require_parse<T, S: Into<String>>(opt: Option<T>, msg: S) -> Result<T> {
    opt.ok_or_else(|| Error::Parse(msg.into()))
}
