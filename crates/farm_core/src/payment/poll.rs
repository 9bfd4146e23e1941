//! Payment completion polling.
//!
//! **States:** `AwaitingPayment -> Confirmed | TimedOut | Failed | Cancelled`
//!
//! **Rules:**
//! - A `Paid` observation confirms, even one that lands after the deadline.
//! - Past the deadline, any other observation or a tick times the poll out.
//! - `max_consecutive_errors` fetch errors in a row fail the poll; any
//!   successful fetch resets the run.
//! - Terminal states ignore every further event. Never panics.
//!
//! Time is injected via `_at` methods for deterministic testing.

use std::time::{Duration, Instant};

use crate::booking::PaymentStatus;

/// Polling cadence and limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSettings {
    pub interval: Duration,
    pub timeout: Duration,
    pub max_consecutive_errors: u32,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(3),
            timeout: Duration::from_secs(15 * 60),
            max_consecutive_errors: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PollState {
    AwaitingPayment,
    Confirmed,
    TimedOut,
    Failed,
    Cancelled,
}

impl PollState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, PollState::AwaitingPayment)
    }
}

/// Result of one payment-status fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollObservation {
    Status(PaymentStatus),
    FetchError(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollTransition {
    Transitioned { from: PollState, to: PollState },
    /// Still awaiting payment after this event.
    Waiting { consecutive_errors: u32 },
    Ignored { current: PollState, reason: &'static str },
}

/// Poll tracking one booking's online payment.
#[derive(Debug, Clone)]
pub struct PaymentPoll {
    booking_id: String,
    settings: PollSettings,
    state: PollState,
    started_at: Instant,
    last_poll_at: Option<Instant>,
    consecutive_errors: u32,
    polls_total: u64,
    last_error: Option<String>,
}

impl PaymentPoll {
    pub fn start(booking_id: impl Into<String>, settings: PollSettings) -> Self {
        Self::start_at(booking_id, settings, Instant::now())
    }

    pub fn start_at(booking_id: impl Into<String>, settings: PollSettings, now: Instant) -> Self {
        Self {
            booking_id: booking_id.into(),
            settings,
            state: PollState::AwaitingPayment,
            started_at: now,
            last_poll_at: None,
            consecutive_errors: 0,
            polls_total: 0,
            last_error: None,
        }
    }

    pub fn booking_id(&self) -> &str {
        &self.booking_id
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    pub fn polls_total(&self) -> u64 {
        self.polls_total
    }

    pub fn consecutive_errors(&self) -> u32 {
        self.consecutive_errors
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// `None` when the timeout reaches past what `Instant` can represent; such
    /// a poll never times out.
    pub fn deadline(&self) -> Option<Instant> {
        self.started_at.checked_add(self.settings.timeout)
    }

    fn is_past_deadline(&self, now: Instant) -> bool {
        self.deadline().is_some_and(|deadline| now >= deadline)
    }

    /// When the next fetch should happen; `None` once terminal.
    pub fn next_poll_at(&self) -> Option<Instant> {
        if self.state.is_terminal() {
            return None;
        }
        Some(self.last_poll_at.unwrap_or(self.started_at) + self.settings.interval)
    }

    pub fn is_due(&self) -> bool {
        self.is_due_at(Instant::now())
    }

    pub fn is_due_at(&self, now: Instant) -> bool {
        self.next_poll_at().is_some_and(|at| now >= at)
    }

    pub fn observe(&mut self, observation: PollObservation) -> PollTransition {
        self.observe_at(Instant::now(), observation)
    }

    /// Apply the result of a payment-status fetch made at `now`.
    pub fn observe_at(&mut self, now: Instant, observation: PollObservation) -> PollTransition {
        if self.state.is_terminal() {
            return self.ignored("poll already finished");
        }
        self.polls_total += 1;
        self.last_poll_at = Some(now);

        match observation {
            PollObservation::Status(PaymentStatus::Paid) => {
                self.consecutive_errors = 0;
                self.transition(PollState::Confirmed)
            }
            _ if self.is_past_deadline(now) => self.transition(PollState::TimedOut),
            PollObservation::Status(_) => {
                self.consecutive_errors = 0;
                PollTransition::Waiting {
                    consecutive_errors: 0,
                }
            }
            PollObservation::FetchError(reason) => {
                self.consecutive_errors += 1;
                tracing::debug!(
                    "PaymentPollFetchError booking_id={} consecutive={} reason={}",
                    self.booking_id,
                    self.consecutive_errors,
                    reason
                );
                self.last_error = Some(reason);
                if self.consecutive_errors >= self.settings.max_consecutive_errors {
                    self.transition(PollState::Failed)
                } else {
                    PollTransition::Waiting {
                        consecutive_errors: self.consecutive_errors,
                    }
                }
            }
        }
    }

    pub fn tick(&mut self) -> PollTransition {
        self.tick_at(Instant::now())
    }

    /// Timer tick without a fetch; times the poll out once past the deadline.
    pub fn tick_at(&mut self, now: Instant) -> PollTransition {
        if self.state.is_terminal() {
            return self.ignored("poll already finished");
        }
        if self.is_past_deadline(now) {
            return self.transition(PollState::TimedOut);
        }
        PollTransition::Waiting {
            consecutive_errors: self.consecutive_errors,
        }
    }

    /// Stop polling (page closed, user navigated away).
    pub fn cancel(&mut self) -> PollTransition {
        if self.state.is_terminal() {
            return self.ignored("poll already finished");
        }
        self.transition(PollState::Cancelled)
    }

    fn transition(&mut self, to: PollState) -> PollTransition {
        let from = self.state;
        self.state = to;
        PollTransition::Transitioned { from, to }
    }

    fn ignored(&self, reason: &'static str) -> PollTransition {
        PollTransition::Ignored {
            current: self.state,
            reason,
        }
    }
}
