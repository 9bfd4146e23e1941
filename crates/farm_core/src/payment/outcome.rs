//! Payment method and the gateway's return-page outcome.

use std::time::Duration;

/// Default time the success page stays up before closing itself.
pub const SUCCESS_AUTO_CLOSE: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    /// Hosted checkout; the booking is confirmed by polling its payment status.
    Online,
    /// Paid at the venue; confirmation is an administrative action.
    Cash,
}

impl PaymentMethod {
    pub fn requires_polling(self) -> bool {
        matches!(self, PaymentMethod::Online)
    }
}

/// Outcome reported by the gateway's `status` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedirectOutcome {
    Succeeded,
    Cancelled,
    Failed,
}

impl RedirectOutcome {
    /// `success` and `cancelled` are recognized; anything else, including a
    /// missing parameter, reads as a failure.
    pub fn from_query(status: Option<&str>) -> Self {
        match status {
            Some("success") => RedirectOutcome::Succeeded,
            Some("cancelled") => RedirectOutcome::Cancelled,
            _ => RedirectOutcome::Failed,
        }
    }

    /// Only a successful payment closes the page on its own, after
    /// `success_delay`; failure messages stay up.
    pub fn auto_close_after(self, success_delay: Duration) -> Option<Duration> {
        match self {
            RedirectOutcome::Succeeded => Some(success_delay),
            RedirectOutcome::Cancelled | RedirectOutcome::Failed => None,
        }
    }
}
