// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::forms::{FlightForm, HotelForm, ItineraryForm};
use crate::protocol::{ChatReply, DayPlan, HotelResult};
use crate::transport::ChatTransport;
use crate::{ValidationError, CONNECTIVITY_ERROR};
use log::{debug, info, warn};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use tripweave_lexicon::{FlightRecord, RawFlightResult};

const NO_RESPONSE: &str = "No response received";
const NO_TURNS: &str = "Nothing to send";

/// A logical form. Each one has its own in-flight guard and result state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    Itinerary,
    Flights,
    Hotels,
    Chat,
}

impl Form {
    pub const ALL: [Form; 4] = [Form::Itinerary, Form::Flights, Form::Hotels, Form::Chat];

    fn index(self) -> usize {
        match self {
            Form::Itinerary => 0,
            Form::Flights => 1,
            Form::Hotels => 2,
            Form::Chat => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Form::Itinerary => "itinerary",
            Form::Flights => "flights",
            Form::Hotels => "hotels",
            Form::Chat => "chat",
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a successful submission leaves behind for display.
#[derive(Debug, Clone, PartialEq)]
pub enum FormResult {
    Itinerary {
        narration: Option<String>,
        days: Vec<DayPlan>,
    },
    Flights {
        flights: Vec<FlightRecord>,
        /// As typed by the user, not the resolved codes.
        origin: String,
        destination: String,
    },
    Hotels {
        narration: Option<String>,
        hotels: Vec<HotelResult>,
    },
    Chat {
        content: String,
        itinerary: Option<Vec<DayPlan>>,
        flights: Vec<FlightRecord>,
        hotels: Vec<HotelResult>,
    },
}

impl FormResult {
    /// Maps a reply onto the result shape of `form`, ignoring fields that form doesn't show.
    ///
    /// A reply carries no record of what the user typed, so `Flights` comes
    /// back with empty `origin`/`destination` labels; `search_flights` fills them.
    pub fn from_reply(form: Form, reply: ChatReply) -> Self {
        match form {
            Form::Itinerary => FormResult::Itinerary {
                narration: reply.text().map(str::to_string),
                days: reply.itinerary.unwrap_or_default(),
            },
            Form::Flights => FormResult::Flights {
                flights: parse_flights(reply.flight_results),
                origin: String::new(),
                destination: String::new(),
            },
            Form::Hotels => FormResult::Hotels {
                narration: reply.text().map(str::to_string),
                hotels: reply.hotel_results,
            },
            Form::Chat => FormResult::Chat {
                content: reply.text().unwrap_or(NO_RESPONSE).to_string(),
                itinerary: reply.itinerary,
                flights: parse_flights(reply.flight_results),
                hotels: reply.hotel_results,
            },
        }
    }
}

fn parse_flights(raw: Vec<RawFlightResult>) -> Vec<FlightRecord> {
    raw.into_iter().map(RawFlightResult::into_record).collect()
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Succeeded(FormResult),
    Failed(String),
}

/// Outcome of one call to a submit method.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Another submission for the same form was still outstanding; nothing was sent.
    Dropped,
    Succeeded(FormResult),
    Failed(String),
}

#[derive(Default)]
struct FormSlot {
    in_flight: AtomicBool,
    state: Mutex<SubmissionState>,
}

impl FormSlot {
    fn set_state(&self, state: SubmissionState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }
}

/// Clears the form's in-flight flag when dropped, whatever path the submission took.
/// A form left `InFlight` by a cancelled future goes back to `Idle`.
struct InFlightGuard<'a> {
    slot: &'a FormSlot,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        // Still InFlight here means the submission future was dropped before `finish`.
        let mut state = self.slot.state.lock().unwrap_or_else(PoisonError::into_inner);
        if matches!(*state, SubmissionState::InFlight) {
            debug!("Submission abandoned before a reply arrived; form back to idle");
            *state = SubmissionState::Idle;
        }
        drop(state);
        self.slot.in_flight.store(false, Ordering::Release);
    }
}

/// Drives the chat backend on behalf of the forms.
///
/// At most one request per form is outstanding at any time; a submission that
/// arrives while its form is busy is dropped, not queued. Forms don't block
/// each other.
pub struct ConversationSession<T> {
    transport: T,
    slots: [FormSlot; 4],
}

impl<T: ChatTransport> ConversationSession<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            slots: Default::default(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn state(&self, form: Form) -> SubmissionState {
        self.slot(form)
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_in_flight(&self, form: Form) -> bool {
        self.slot(form).in_flight.load(Ordering::Acquire)
    }

    /// Sends `query` as a single turn. For flights, prefer
    /// [`search_flights`](Self::search_flights), which also labels the result.
    pub async fn submit_single_turn(&self, form: Form, query: &str) -> Submission {
        self.run(form, &[query.to_string()], |reply| {
            FormResult::from_reply(form, reply)
        })
        .await
    }

    /// Sends each turn only after the previous reply arrived. Only the last
    /// reply is kept; the first failure ends the sequence.
    pub async fn submit_guided_sequence(&self, form: Form, turns: &[String]) -> Submission {
        self.run(form, turns, |reply| FormResult::from_reply(form, reply))
            .await
    }

    /// Walks the backend's itinerary dialogue with the form's answers.
    pub async fn plan_itinerary(&self, form: &ItineraryForm) -> Result<Submission, ValidationError> {
        let turns = form.turns()?;
        Ok(self.submit_guided_sequence(Form::Itinerary, &turns).await)
    }

    pub async fn search_flights(&self, form: &FlightForm) -> Result<Submission, ValidationError> {
        let query = form.query()?;
        let (origin, destination) = (form.origin.clone(), form.destination.clone());
        let submission = self
            .run(Form::Flights, &[query.text], move |reply| FormResult::Flights {
                flights: parse_flights(reply.flight_results),
                origin,
                destination,
            })
            .await;
        Ok(submission)
    }

    pub async fn search_hotels(&self, form: &HotelForm) -> Result<Submission, ValidationError> {
        let query = form.query()?;
        Ok(self.submit_single_turn(Form::Hotels, &query).await)
    }

    /// Free-form message from the chat box.
    pub async fn chat(&self, message: &str) -> Result<Submission, ValidationError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ValidationError::MissingField("Message"));
        }
        debug!("{} — form=chat", loading_label(message));
        Ok(self.submit_single_turn(Form::Chat, message).await)
    }

    fn slot(&self, form: Form) -> &FormSlot {
        &self.slots[form.index()]
    }

    fn try_acquire(&self, form: Form) -> Option<InFlightGuard<'_>> {
        let slot = self.slot(form);
        slot.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        slot.set_state(SubmissionState::InFlight);
        Some(InFlightGuard { slot })
    }

    async fn run<F>(&self, form: Form, turns: &[String], map: F) -> Submission
    where
        F: FnOnce(ChatReply) -> FormResult,
    {
        let Some(guard) = self.try_acquire(form) else {
            warn!("Submission dropped; previous request still in flight — form={}", form);
            return Submission::Dropped;
        };

        info!("Submitting — form={} turns={}", form, turns.len());
        let mut last_reply = None;
        for (i, turn) in turns.iter().enumerate() {
            debug!("Sending turn — form={} turn={}/{}", form, i + 1, turns.len());
            match self.transport.send(turn).await {
                Ok(reply) => last_reply = Some(reply),
                Err(e) => {
                    warn!(
                        "Turn failed; remaining turns skipped — form={} turn={}/{} error={}",
                        form,
                        i + 1,
                        turns.len(),
                        e
                    );
                    return finish(guard, Submission::Failed(CONNECTIVITY_ERROR.to_string()));
                }
            }
        }

        let outcome = match last_reply {
            Some(reply) => Submission::Succeeded(map(reply)),
            None => Submission::Failed(NO_TURNS.to_string()),
        };
        info!(
            "Submission finished — form={} ok={}",
            form,
            matches!(outcome, Submission::Succeeded(_))
        );
        finish(guard, outcome)
    }
}

/// Records the outcome while the guard is still held, then releases it.
fn finish(guard: InFlightGuard<'_>, outcome: Submission) -> Submission {
    let state = match &outcome {
        Submission::Succeeded(result) => Some(SubmissionState::Succeeded(result.clone())),
        Submission::Failed(message) => Some(SubmissionState::Failed(message.clone())),
        Submission::Dropped => None,
    };
    if let Some(state) = state {
        guard.slot.set_state(state);
    }
    drop(guard);
    outcome
}

/// Placeholder text shown while a chat message is pending.
pub fn loading_label(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    if lower.contains("flight") {
        "Searching flights..."
    } else if lower.contains("hotel") {
        "Finding hotels..."
    } else if lower.contains("trip") || lower.contains("travel") {
        "Planning your trip..."
    } else {
        "Searching..."
    }
}
