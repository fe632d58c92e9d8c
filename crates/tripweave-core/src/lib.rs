// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

pub mod config;
pub mod forms;
pub mod protocol;
pub mod session;
pub mod transport;

use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;
use tripweave_lexicon::LocationError;

pub use config::ClientConfig;
pub use forms::{BudgetLevel, CabinClass, FlightForm, HotelForm, ItineraryForm, TravelStyle};
pub use session::{ConversationSession, Form, FormResult, Submission, SubmissionState};
pub use transport::{ChatTransport, HttpTransport};

/// Shown whenever the backend could not be reached or answered badly.
pub const CONNECTIVITY_ERROR: &str =
    "Could not connect to the backend. Please ensure the server is running.";

/// Problems found in user input before anything is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Origin: {0}")]
    Origin(LocationError),
    #[error("Destination: {0}")]
    Destination(LocationError),
    #[error("Number of days must be between 1 and 60 (got {0})")]
    DaysOutOfRange(u32),
    #[error("Passengers must be between 1 and 9 (got {0})")]
    PassengersOutOfRange(u32),
    #[error("Unknown {field} \"{value}\"")]
    UnknownOption { field: &'static str, value: String },
}

/// Failures talking to the backend. None of these are retried.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Backend unreachable: {0}")]
    Unreachable(String),
    #[error("Backend returned HTTP {0}")]
    Status(u16),
    #[error("Backend sent a malformed response: {0}")]
    MalformedBody(String),
    #[error("HTTP client setup failed: {0}")]
    Client(String),
}

/// Per-user configuration directory, e.g. `~/.config/tripweave` on Linux.
pub fn get_config_root() -> PathBuf {
    ProjectDirs::from("org", "tripweave", "tripweave")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".tripweave"))
}
