use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

/// Service fee applied on top of the nightly subtotal
pub const SERVICE_FEE_RATE: f64 = 0.12;

/// Derived price breakdown for the current date selection, in whole yen.
///
/// The subtotal is the canonical value; fee and total are always derived
/// from it, never reverse-derived from a rounded total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub nights: u32,
    pub subtotal: i64,
    pub service_fee: i64,
    pub total: i64,
}

/// Payload handed to the checkout flow once dates are chosen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutHandoff {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub guests: u32,
    pub total_price: i64,
}

/// Transient booking state for a single villa's detail view.
///
/// Dates may be toggled in any order and need not be contiguous; the
/// selection count is treated as the number of nights, and checkout hands
/// off the chronological min/max of whatever was picked.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    selected_dates: BTreeSet<NaiveDate>,
    guests: u32,
    capacity: u32,
}

impl BookingDraft {
    /// New draft for a villa with the given guest capacity.
    /// The guest picker starts at 2, clamped into `[1, capacity]`.
    pub fn new(capacity: u32) -> Self {
        let capacity = capacity.max(1);
        Self {
            selected_dates: BTreeSet::new(),
            guests: 2u32.clamp(1, capacity),
            capacity,
        }
    }

    pub fn guests(&self) -> u32 {
        self.guests
    }

    pub fn selected_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.selected_dates.iter().copied()
    }

    pub fn nights(&self) -> u32 {
        self.selected_dates.len() as u32
    }

    pub fn is_selected(&self, cell: Option<NaiveDate>) -> bool {
        cell.map(|date| self.selected_dates.contains(&date))
            .unwrap_or(false)
    }

    /// Select the date if it isn't selected, deselect it if it is.
    /// Padding cells (`None`) are ignored.
    pub fn toggle_date(&mut self, cell: Option<NaiveDate>) {
        let Some(date) = cell else { return };
        if !self.selected_dates.remove(&date) {
            self.selected_dates.insert(date);
        }
    }

    /// Adjust the guest count, silently clamping into `[1, capacity]`
    pub fn adjust_guests(&mut self, delta: i32) {
        let adjusted = i64::from(self.guests) + i64::from(delta);
        self.guests = adjusted.clamp(1, i64::from(self.capacity)) as u32;
    }

    /// Price breakdown for the current selection
    pub fn quote(&self, price_per_night: i64) -> Quote {
        let nights = self.nights();
        let subtotal = i64::from(nights) * price_per_night;
        let service_fee = (subtotal as f64 * SERVICE_FEE_RATE).round() as i64;
        Quote {
            nights,
            subtotal,
            service_fee,
            total: subtotal + service_fee,
        }
    }

    /// Checkout payload, or `None` while no dates are selected
    pub fn checkout_handoff(&self, price_per_night: i64) -> Option<CheckoutHandoff> {
        let start_date = *self.selected_dates.first()?;
        let end_date = *self.selected_dates.last()?;
        Some(CheckoutHandoff {
            start_date,
            end_date,
            guests: self.guests,
            total_price: self.quote(price_per_night).total,
        })
    }
}
