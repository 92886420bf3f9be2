//! Calendar projection of scheduled appointments.
//!
//! Events are derived from the store on demand and never stored. The view
//! state (granularity and anchor date) is independent of order data.

use crate::order::domain::{Order, OrderId, OrderNumber};
use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, Utc};

/// One appointment shown on the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    /// Order the appointment belongs to.
    pub order_id: OrderId,
    /// Display label, e.g. `Order 0003: 10:00`.
    pub label: String,
    /// Appointment start.
    pub start: DateTime<Utc>,
    /// Appointment end; equal to the start.
    pub end: DateTime<Utc>,
    /// Snapshot of the backing order.
    pub order: Order,
}

/// Builds the event label from the order number and the appointment time.
#[must_use]
pub fn event_label(number: OrderNumber, appointment: DateTime<Utc>) -> String {
    format!("Order {number}: {}", appointment.format("%H:%M"))
}

/// Emits one event per order with an appointment, in store order.
#[must_use]
pub fn project(orders: &[Order]) -> Vec<CalendarEvent> {
    orders
        .iter()
        .filter_map(|order| {
            order.appointment().map(|appointment| CalendarEvent {
                order_id: order.id(),
                label: event_label(order.number(), appointment),
                start: appointment,
                end: appointment,
                order: order.clone(),
            })
        })
        .collect()
}

/// Returns the projected events that fall inside the view's visible range.
#[must_use]
pub fn events_in_view(orders: &[Order], view: &CalendarView) -> Vec<CalendarEvent> {
    let (from, until) = view.visible_range();
    project(orders)
        .into_iter()
        .filter(|event| event.start >= from && event.start < until)
        .collect()
}

/// Time span covered by one calendar page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CalendarGranularity {
    /// A calendar month.
    #[default]
    Month,
    /// Monday to Sunday.
    Week,
    /// A single day.
    Day,
}

/// Toolbar navigation actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarNavigation {
    /// One page back.
    Previous,
    /// Jump to the page containing today.
    Today,
    /// One page forward.
    Next,
}

/// Transient calendar view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    granularity: CalendarGranularity,
    anchor: NaiveDate,
}

impl CalendarView {
    /// Creates a month view containing `anchor`.
    #[must_use]
    pub fn starting_at(anchor: NaiveDate) -> Self {
        Self {
            granularity: CalendarGranularity::default(),
            anchor,
        }
    }

    /// Returns the current granularity.
    #[must_use]
    pub const fn granularity(&self) -> CalendarGranularity {
        self.granularity
    }

    /// Returns the date the current page is anchored on.
    #[must_use]
    pub const fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Switches granularity, keeping the anchor date.
    pub const fn set_granularity(&mut self, granularity: CalendarGranularity) {
        self.granularity = granularity;
    }

    /// Moves the view one page or back to today.
    ///
    /// Steps that would leave the supported date range keep the view where
    /// it is.
    pub fn navigate(&mut self, navigation: CalendarNavigation, today: NaiveDate) {
        let moved = match (navigation, self.granularity) {
            (CalendarNavigation::Today, _) => Some(today),
            (CalendarNavigation::Previous, CalendarGranularity::Month) => {
                self.anchor.checked_sub_months(Months::new(1))
            }
            (CalendarNavigation::Next, CalendarGranularity::Month) => {
                self.anchor.checked_add_months(Months::new(1))
            }
            (CalendarNavigation::Previous, CalendarGranularity::Week) => {
                self.anchor.checked_sub_days(Days::new(7))
            }
            (CalendarNavigation::Next, CalendarGranularity::Week) => {
                self.anchor.checked_add_days(Days::new(7))
            }
            (CalendarNavigation::Previous, CalendarGranularity::Day) => {
                self.anchor.checked_sub_days(Days::new(1))
            }
            (CalendarNavigation::Next, CalendarGranularity::Day) => {
                self.anchor.checked_add_days(Days::new(1))
            }
        };
        if let Some(anchor) = moved {
            self.anchor = anchor;
        }
    }

    /// Returns the half-open UTC interval `[from, until)` shown by the view.
    #[must_use]
    pub fn visible_range(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let (first, days) = match self.granularity {
            CalendarGranularity::Month => {
                let first = self
                    .anchor
                    .checked_sub_days(Days::new(u64::from(self.anchor.day0())))
                    .unwrap_or(self.anchor);
                let following = first
                    .checked_add_months(Months::new(1))
                    .unwrap_or(NaiveDate::MAX);
                return (start_of(first), start_of(following));
            }
            CalendarGranularity::Week => {
                let offset = u64::from(self.anchor.weekday().num_days_from_monday());
                (
                    self.anchor
                        .checked_sub_days(Days::new(offset))
                        .unwrap_or(self.anchor),
                    7,
                )
            }
            CalendarGranularity::Day => (self.anchor, 1),
        };
        let until = first
            .checked_add_days(Days::new(days))
            .unwrap_or(NaiveDate::MAX);
        (start_of(first), start_of(until))
    }
}

fn start_of(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
