// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

const DELIMITER: char = '|';
const ARROW: char = '→';
const ASCII_ARROW: &str = "->";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoint {
    pub airport: String,
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Baggage {
    pub checked: Option<String>,
    pub cabin: Option<String>,
}

/// One flight offer. Every field except `raw_text` may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightRecord {
    pub flight_number: String,
    pub departure: Endpoint,
    pub arrival: Endpoint,
    pub duration: String,
    pub stops: u32,
    /// Display string; currency and format depend on the upstream provider.
    #[serde(deserialize_with = "lenient_price")]
    pub price: String,
    pub cabin: String,
    #[serde(alias = "rawString")]
    pub raw_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baggage: Option<Baggage>,
}

impl FlightRecord {
    /// Parses a backend line such as
    /// `AI 123 | DEL 10:30 → BOM 12:45 | Duration: 2h 15m | Stops: 0 | Price: INR 5000 | Cabin: ECONOMY`.
    ///
    /// Each segment is extracted on its own and falls back to empty/zero, so a
    /// damaged line still yields a usable record.
    pub fn parse(line: &str) -> Self {
        if !line.contains(DELIMITER) {
            log::debug!("Flight line has no delimiters; keeping raw text only — line={:?}", line);
            return Self::unstructured(line);
        }

        let parts: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
        let segment = |i: usize| parts.get(i).copied().unwrap_or("");

        let (departure, arrival) = parse_route(segment(1));

        Self {
            flight_number: segment(0).to_string(),
            departure,
            arrival,
            duration: strip_label(segment(2), "Duration:").to_string(),
            stops: parse_stops(segment(3)),
            price: strip_label(segment(4), "Price:").to_string(),
            cabin: strip_label(segment(5), "Cabin:").to_string(),
            raw_text: line.to_string(),
            baggage: None,
        }
    }

    pub fn unstructured(line: &str) -> Self {
        Self {
            raw_text: line.to_string(),
            ..Self::default()
        }
    }

    /// False when nothing identifies the flight and only `raw_text` is worth showing.
    pub fn is_structured(&self) -> bool {
        !self.flight_number.is_empty()
    }

    pub fn stops_label(&self) -> String {
        match self.stops {
            0 => "Non-stop".to_string(),
            1 => "1 stop".to_string(),
            n => format!("{} stops", n),
        }
    }
}

/// A `flight_results` entry as the backend sends it: a pre-formatted line,
/// or anything else JSON can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawFlightResult {
    Line(String),
    Other(Value),
}

impl RawFlightResult {
    /// Objects are decoded field by field; whatever can't be recognised keeps
    /// its JSON text in `raw_text` so there is always something to show.
    pub fn into_record(self) -> FlightRecord {
        let value = match self {
            RawFlightResult::Line(line) => return FlightRecord::parse(&line),
            RawFlightResult::Other(value) => value,
        };
        let text = value.to_string();
        match serde_json::from_value::<FlightRecord>(value) {
            Ok(mut record) => {
                if record.raw_text.is_empty() && !record.is_structured() {
                    record.raw_text = text;
                }
                record
            }
            Err(e) => {
                log::debug!("Flight entry not decodable as a record — error={} entry={}", e, text);
                FlightRecord::unstructured(&text)
            }
        }
    }
}

/// Accepts `"INR 5000"`, a bare number, or `{"amount": ..., "currency": ...}`.
fn lenient_price<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(Value::Object(map)) => {
            let part = |key: &str| match map.get(key) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
            };
            format!("{} {}", part("currency"), part("amount"))
                .trim()
                .to_string()
        }
        Some(other) => other.to_string(),
    })
}

/// Drops a leading `label` (ASCII case-insensitive) and trims the rest.
fn strip_label<'a>(segment: &'a str, label: &str) -> &'a str {
    match segment.get(..label.len()) {
        Some(head) if head.eq_ignore_ascii_case(label) => segment[label.len()..].trim(),
        _ => segment.trim(),
    }
}

/// Leading digits only; "2 stops" is 2, "many" is 0.
fn parse_stops(segment: &str) -> u32 {
    let value = strip_label(segment, "Stops:");
    let digits: String = value.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<u32>().unwrap_or(0)
}

fn parse_route(route: &str) -> (Endpoint, Endpoint) {
    let split = route
        .split_once(ARROW)
        .or_else(|| route.split_once(ASCII_ARROW));
    match split {
        Some((from, to)) => (parse_endpoint(from), parse_endpoint(to)),
        None => (parse_endpoint(route), Endpoint::default()),
    }
}

fn parse_endpoint(half: &str) -> Endpoint {
    let mut words = half.split_whitespace();
    Endpoint {
        airport: words.next().unwrap_or("").to_string(),
        time: words.next().unwrap_or("").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str =
        "AI 123 | DEL 10:30 → BOM 12:45 | Duration: 2h 15m | Stops: 0 | Price: INR 5000 | Cabin: ECONOMY";

    #[test]
    fn test_parse_full_line() {
        let r = FlightRecord::parse(SAMPLE);
        assert_eq!(r.flight_number, "AI 123");
        assert_eq!(r.departure.airport, "DEL");
        assert_eq!(r.departure.time, "10:30");
        assert_eq!(r.arrival.airport, "BOM");
        assert_eq!(r.arrival.time, "12:45");
        assert_eq!(r.duration, "2h 15m");
        assert_eq!(r.stops, 0);
        assert_eq!(r.price, "INR 5000");
        assert_eq!(r.cabin, "ECONOMY");
        assert_eq!(r.raw_text, SAMPLE);
        assert!(r.is_structured());
    }

    #[test]
    fn test_parse_no_delimiters() {
        let r = FlightRecord::parse("not a valid line");
        assert_eq!(r, FlightRecord::unstructured("not a valid line"));
        assert!(r.flight_number.is_empty());
        assert_eq!(r.stops, 0);
        assert!(!r.is_structured());
    }

    #[test]
    fn test_parse_non_numeric_stops() {
        let r = FlightRecord::parse("AI 1 | DEL 10:30 → BOM 12:45 | Duration: 2h | Stops: many | Price: 1 | Cabin: X");
        assert_eq!(r.stops, 0);
        let r = FlightRecord::parse("AI 1 | DEL 10:30 → BOM 12:45 | Duration: 2h | Stops: two | Price: 1 | Cabin: X");
        assert_eq!(r.stops, 0);
    }

    #[test]
    fn test_parse_leading_stop_digits() {
        let r = FlightRecord::parse("LH 400 | FRA 10:00 → JFK 13:00 | Duration: 9h | Stops: 2 stops");
        assert_eq!(r.stops, 2);
        assert_eq!(r.price, "");
        assert_eq!(r.cabin, "");
    }

    #[test]
    fn test_route_without_arrow() {
        let r = FlightRecord::parse("BA 9 | LHR 09:00 | Duration: 11h");
        assert_eq!(r.departure.airport, "LHR");
        assert_eq!(r.departure.time, "09:00");
        assert_eq!(r.arrival, Endpoint::default());
        assert_eq!(r.duration, "11h");
    }

    #[test]
    fn test_route_with_ascii_arrow() {
        let r = FlightRecord::parse("UA 1 | SFO 08:00 -> SIN 16:00");
        assert_eq!(r.arrival.airport, "SIN");
        assert_eq!(r.arrival.time, "16:00");
    }

    #[test]
    fn test_labels_missing() {
        let r = FlightRecord::parse("EK 5 | DXB 02:00 → LHR 06:30 | 7h 30m | 1 | AED 2100 | BUSINESS");
        assert_eq!(r.duration, "7h 30m");
        assert_eq!(r.stops, 1);
        assert_eq!(r.price, "AED 2100");
        assert_eq!(r.cabin, "BUSINESS");
    }

    #[test]
    fn test_stops_label() {
        let mut r = FlightRecord::default();
        assert_eq!(r.stops_label(), "Non-stop");
        r.stops = 1;
        assert_eq!(r.stops_label(), "1 stop");
        r.stops = 3;
        assert_eq!(r.stops_label(), "3 stops");
    }

    #[test]
    fn test_raw_result_variants() {
        let items: Vec<RawFlightResult> = serde_json::from_str(
            r#"[
                "AI 123 | DEL 10:30 → BOM 12:45 | Duration: 2h 15m | Stops: 0 | Price: INR 5000 | Cabin: ECONOMY",
                {"flight_number": "QR 1", "departure": {"airport": "DOH", "time": "01:00"}, "stops": 1, "baggage": {"checked": "2 x 23kg"}},
                42
            ]"#,
        )
        .unwrap();
        let records: Vec<FlightRecord> = items.into_iter().map(RawFlightResult::into_record).collect();

        assert_eq!(records[0].arrival.airport, "BOM");
        assert_eq!(records[1].flight_number, "QR 1");
        assert_eq!(records[1].departure.airport, "DOH");
        assert_eq!(records[1].arrival, Endpoint::default());
        assert_eq!(records[1].stops, 1);
        assert_eq!(
            records[1].baggage.as_ref().and_then(|b| b.checked.as_deref()),
            Some("2 x 23kg")
        );
        assert_eq!(records[2].raw_text, "42");
        assert!(!records[2].is_structured());
    }

    #[test]
    fn test_provider_object_with_price_and_baggage() {
        let item: RawFlightResult = serde_json::from_str(
            r#"{
                "airline": "AI",
                "flight_number": "AI 101",
                "departure": {"airport": "DEL", "time": "06:10"},
                "arrival": {"airport": "BOM", "time": "08:25"},
                "duration": "2h 15m",
                "stops": 0,
                "price": {"amount": "5000.00", "currency": "INR"},
                "cabin": "ECONOMY",
                "baggage": {"checked": "15 kg", "cabin": "7 kg"}
            }"#,
        )
        .unwrap();
        let r = item.into_record();
        assert!(r.is_structured());
        assert_eq!(r.flight_number, "AI 101");
        assert_eq!(r.arrival.time, "08:25");
        assert_eq!(r.price, "INR 5000.00");
        assert_eq!(r.stops_label(), "Non-stop");
        let baggage = r.baggage.unwrap();
        assert_eq!(baggage.checked.as_deref(), Some("15 kg"));
        assert_eq!(baggage.cabin.as_deref(), Some("7 kg"));
    }

    #[test]
    fn test_price_shapes() {
        let r: FlightRecord = serde_json::from_str(r#"{"price": 312.5}"#).unwrap();
        assert_eq!(r.price, "312.5");
        let r: FlightRecord = serde_json::from_str(r#"{"price": {"amount": 99}}"#).unwrap();
        assert_eq!(r.price, "99");
        let r: FlightRecord = serde_json::from_str(r#"{"price": null}"#).unwrap();
        assert_eq!(r.price, "");
    }

    #[test]
    fn test_unrecognised_object_keeps_its_json() {
        let item: RawFlightResult =
            serde_json::from_str(r#"{"airline":"AI","flightNumber":"AI 9"}"#).unwrap();
        let r = item.into_record();
        assert!(!r.is_structured());
        assert_eq!(r.raw_text, r#"{"airline":"AI","flightNumber":"AI 9"}"#);
    }

    #[test]
    fn test_object_with_bad_field_type_keeps_its_json() {
        let item: RawFlightResult =
            serde_json::from_str(r#"{"flight_number":"AI 9","stops":"two"}"#).unwrap();
        let r = item.into_record();
        assert!(!r.is_structured());
        assert_eq!(r.raw_text, r#"{"flight_number":"AI 9","stops":"two"}"#);
    }

    #[test]
    fn test_record_accepts_legacy_raw_string_key() {
        let r: FlightRecord = serde_json::from_str(r#"{"rawString": "free text"}"#).unwrap();
        assert_eq!(r.raw_text, "free text");
    }
}
