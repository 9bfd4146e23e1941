//! Booking records as delivered by the booking store, their status vocabulary,
//! the external lifecycle graph, customer-initiated actions, and the event
//! order priced at booking time.

pub mod actions;
pub mod lifecycle;
pub mod order;
pub mod record;
pub mod status;

pub use actions::{BookingActionError, can_cancel, can_request_refund, cancel, request_refund};
pub use lifecycle::BookingLifecycle;
pub use order::{CustomOrder, EventPackage, ItemCategory, OrderError, OrderItem, OrderSelection};
pub use record::BookingRecord;
pub use status::{BookingStatus, PaymentStatus};
