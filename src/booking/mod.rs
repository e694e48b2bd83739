pub mod calendar;
pub mod draft;

pub use calendar::MonthCursor;
pub use draft::{BookingDraft, CheckoutHandoff, Quote, SERVICE_FEE_RATE};
