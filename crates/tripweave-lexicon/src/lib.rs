// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Text understanding for TripWeave: turning what people type into airport
//! codes, and turning what the backend prints back into flight records.

pub mod flight_line;
pub mod geo;

pub use flight_line::{Baggage, Endpoint, FlightRecord, RawFlightResult};
pub use geo::{resolve, resolve_code, IataCode, LocationError, ResolutionResult};
