// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! The three search forms and the backend messages derived from them.

use crate::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tripweave_lexicon::{resolve_code, IataCode};

pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 60;
pub const MIN_PASSENGERS: u32 = 1;
pub const MAX_PASSENGERS: u32 = 9;

/// Answer to the backend's final "shall I plan this?" question.
const CONFIRMATION: &str = "yes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelStyle {
    Relaxed,
    #[default]
    Balanced,
    Packed,
}

impl TravelStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelStyle::Relaxed => "relaxed",
            TravelStyle::Balanced => "balanced",
            TravelStyle::Packed => "packed",
        }
    }
}

impl FromStr for TravelStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relaxed" => Ok(TravelStyle::Relaxed),
            "balanced" => Ok(TravelStyle::Balanced),
            "packed" => Ok(TravelStyle::Packed),
            _ => Err(ValidationError::UnknownOption {
                field: "travel style",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl BudgetLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetLevel::Low => "low",
            BudgetLevel::Medium => "medium",
            BudgetLevel::High => "high",
        }
    }
}

impl FromStr for BudgetLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(BudgetLevel::Low),
            "medium" => Ok(BudgetLevel::Medium),
            "high" => Ok(BudgetLevel::High),
            _ => Err(ValidationError::UnknownOption {
                field: "budget level",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            CabinClass::Economy => "economy",
            CabinClass::PremiumEconomy => "premium_economy",
            CabinClass::Business => "business",
            CabinClass::First => "first",
        }
    }
}

impl FromStr for CabinClass {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['-', ' '], "_");
        match key.as_str() {
            "economy" => Ok(CabinClass::Economy),
            "premium_economy" | "premium" => Ok(CabinClass::PremiumEconomy),
            "business" => Ok(CabinClass::Business),
            "first" | "first_class" => Ok(CabinClass::First),
            _ => Err(ValidationError::UnknownOption {
                field: "cabin class",
                value: s.to_string(),
            }),
        }
    }
}

macro_rules! display_as_str {
    ($($t:ty),*) => {
        $(impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(TravelStyle, BudgetLevel, CabinClass);

/// Inputs for the guided itinerary dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryForm {
    pub days: u32,
    pub destination: String,
    pub style: TravelStyle,
    pub budget: BudgetLevel,
}

impl ItineraryForm {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            days: 3,
            destination: destination.into(),
            style: TravelStyle::default(),
            budget: BudgetLevel::default(),
        }
    }

    /// The five answers, in the order the backend asks for them: day count,
    /// destination, style, budget, confirmation.
    pub fn turns(&self) -> Result<Vec<String>, ValidationError> {
        let destination = self.destination.trim();
        if destination.is_empty() {
            return Err(ValidationError::MissingField("Destination"));
        }
        if !(MIN_DAYS..=MAX_DAYS).contains(&self.days) {
            return Err(ValidationError::DaysOutOfRange(self.days));
        }
        Ok(vec![
            self.days.to_string(),
            destination.to_string(),
            self.style.as_str().to_string(),
            self.budget.as_str().to_string(),
            CONFIRMATION.to_string(),
        ])
    }
}

/// One-way flight search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightForm {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub passengers: u32,
    pub cabin: CabinClass,
}

/// A flight form after both ends resolved to airport codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightQuery {
    pub origin: IataCode,
    pub destination: IataCode,
    pub text: String,
}

impl FlightForm {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_date: NaiveDate,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            departure_date,
            passengers: 1,
            cabin: CabinClass::default(),
        }
    }

    /// Resolves origin then destination; the first failure is reported.
    pub fn query(&self) -> Result<FlightQuery, ValidationError> {
        let origin = resolve_code(&self.origin).map_err(ValidationError::Origin)?;
        let destination = resolve_code(&self.destination).map_err(ValidationError::Destination)?;
        if !(MIN_PASSENGERS..=MAX_PASSENGERS).contains(&self.passengers) {
            return Err(ValidationError::PassengersOutOfRange(self.passengers));
        }

        log::info!(
            "Resolved flight endpoints — origin={:?}→{} destination={:?}→{}",
            self.origin,
            origin,
            self.destination,
            destination
        );

        let text = format!(
            "Find flights from {} to {} departing on {} for {} passenger(s) in {} class",
            origin,
            destination,
            self.departure_date.format("%Y-%m-%d"),
            self.passengers,
            self.cabin
        );
        Ok(FlightQuery {
            origin,
            destination,
            text,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelForm {
    pub destination: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl HotelForm {
    pub fn query(&self) -> Result<String, ValidationError> {
        let destination = self.destination.trim();
        if destination.is_empty() {
            return Err(ValidationError::MissingField("Destination"));
        }
        Ok(format!(
            "Find hotels in {} for check-in on {} and check-out on {}",
            destination,
            self.check_in.format("%Y-%m-%d"),
            self.check_out.format("%Y-%m-%d")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripweave_lexicon::LocationError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_itinerary_turns() {
        let form = ItineraryForm {
            days: 4,
            destination: "  Jaipur ".to_string(),
            style: TravelStyle::Packed,
            budget: BudgetLevel::Low,
        };
        assert_eq!(
            form.turns().unwrap(),
            vec!["4", "Jaipur", "packed", "low", "yes"]
        );
    }

    #[test]
    fn test_itinerary_defaults() {
        let form = ItineraryForm::new("Goa");
        assert_eq!(form.turns().unwrap(), vec!["3", "Goa", "balanced", "medium", "yes"]);
    }

    #[test]
    fn test_itinerary_requires_destination() {
        let err = ItineraryForm::new("   ").turns().unwrap_err();
        assert_eq!(err, ValidationError::MissingField("Destination"));
        assert_eq!(err.to_string(), "Destination is required");
    }

    #[test]
    fn test_itinerary_day_range() {
        let mut form = ItineraryForm::new("Rome");
        form.days = 0;
        assert_eq!(form.turns(), Err(ValidationError::DaysOutOfRange(0)));
        form.days = 61;
        assert_eq!(form.turns(), Err(ValidationError::DaysOutOfRange(61)));
        form.days = 60;
        assert!(form.turns().is_ok());
    }

    #[test]
    fn test_flight_query_text() {
        let mut form = FlightForm::new("Delhi", "bombay", date(2026, 11, 3));
        form.passengers = 2;
        form.cabin = CabinClass::PremiumEconomy;
        let q = form.query().unwrap();
        assert_eq!(q.origin.as_str(), "DEL");
        assert_eq!(q.destination.as_str(), "BOM");
        assert_eq!(
            q.text,
            "Find flights from DEL to BOM departing on 2026-11-03 for 2 passenger(s) in premium_economy class"
        );
    }

    #[test]
    fn test_flight_query_reports_origin_first() {
        let form = FlightForm::new("Atlantis", "", date(2026, 1, 1));
        let err = form.query().unwrap_err();
        assert_eq!(
            err,
            ValidationError::Origin(LocationError::UnknownLocation("Atlantis".to_string()))
        );
        assert!(err.to_string().starts_with("Origin: Unable to find airport code"));
    }

    #[test]
    fn test_flight_query_blank_destination() {
        let form = FlightForm::new("LHR", "  ", date(2026, 1, 1));
        let err = form.query().unwrap_err();
        assert_eq!(err.to_string(), "Destination: Location is required");
    }

    #[test]
    fn test_flight_passenger_range() {
        let mut form = FlightForm::new("LHR", "CDG", date(2026, 1, 1));
        form.passengers = 10;
        assert_eq!(form.query(), Err(ValidationError::PassengersOutOfRange(10)));
    }

    #[test]
    fn test_hotel_query_text() {
        let form = HotelForm {
            destination: "Lisbon".to_string(),
            check_in: date(2026, 5, 1),
            check_out: date(2026, 5, 4),
        };
        assert_eq!(
            form.query().unwrap(),
            "Find hotels in Lisbon for check-in on 2026-05-01 and check-out on 2026-05-04"
        );
    }

    #[test]
    fn test_option_tokens() {
        assert_eq!("Relaxed".parse::<TravelStyle>(), Ok(TravelStyle::Relaxed));
        assert_eq!("HIGH".parse::<BudgetLevel>(), Ok(BudgetLevel::High));
        assert_eq!("premium economy".parse::<CabinClass>(), Ok(CabinClass::PremiumEconomy));
        assert_eq!("first-class".parse::<CabinClass>(), Ok(CabinClass::First));
        assert!("lavish".parse::<BudgetLevel>().is_err());
        assert_eq!(CabinClass::Business.to_string(), "business");
    }
}
