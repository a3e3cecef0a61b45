//! Lottery ticket sampling.
//!
//! Tickets are drawn without replacement from a bounded range. Invalid
//! requests are a soft failure: the public entry point returns an empty
//! ticket and logs the reason at `debug` level.

use rand::SeedableRng;
use rand::seq::IteratorRandom;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::debug;

/// Smallest number that may appear on a ticket.
pub const TICKET_MIN: i64 = 1;

/// Largest number that may appear on a ticket.
pub const TICKET_MAX: i64 = 1000;

/// Reasons a ticket request cannot produce a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TicketRejection {
    /// The lower bound is below [`TICKET_MIN`].
    #[error("minimum {min} is below {TICKET_MIN}")]
    MinTooSmall {
        /// Requested lower bound.
        min: i64,
    },
    /// The upper bound is above [`TICKET_MAX`].
    #[error("maximum {max} is above {TICKET_MAX}")]
    MaxTooLarge {
        /// Requested upper bound.
        max: i64,
    },
    /// The bounds do not describe a range of at least two numbers.
    #[error("minimum {min} is not below maximum {max}")]
    EmptyRange {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },
    /// More numbers were requested than the range holds.
    #[error("cannot draw {quantity} distinct numbers from {available}")]
    QuantityTooLarge {
        /// Requested number of draws.
        quantity: usize,
        /// Size of the range.
        available: u64,
    },
}

/// A validated ticket request.
///
/// # Example
///
/// ```
/// use munge_kit::{TicketBounds, TicketRejection};
///
/// assert!(TicketBounds::new(1, 49, 6).is_ok());
/// assert_eq!(
///     TicketBounds::new(0, 10, 5),
///     Err(TicketRejection::MinTooSmall { min: 0 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketBounds {
    min: i64,
    max: i64,
    quantity: usize,
}

impl TicketBounds {
    /// Validates the bounds and quantity of a ticket request.
    ///
    /// # Errors
    ///
    /// Returns the first [`TicketRejection`] that applies, checked in the
    /// order lower bound, upper bound, range, quantity.
    pub fn new(min: i64, max: i64, quantity: usize) -> Result<Self, TicketRejection> {
        if min < TICKET_MIN {
            return Err(TicketRejection::MinTooSmall { min });
        }
        if max > TICKET_MAX {
            return Err(TicketRejection::MaxTooLarge { max });
        }
        if min >= max {
            return Err(TicketRejection::EmptyRange { min, max });
        }
        // Both bounds sit inside 1..=1000 here, so the span is positive.
        let available = max.abs_diff(min) + 1;
        if !u64::try_from(quantity).is_ok_and(|wanted| wanted <= available) {
            return Err(TicketRejection::QuantityTooLarge {
                quantity,
                available,
            });
        }
        Ok(Self { min, max, quantity })
    }

    /// Draws the ticket with the supplied RNG, sorted ascending.
    #[must_use]
    pub fn draw(&self, rng: &mut ChaCha8Rng) -> Vec<i64> {
        let mut numbers = (self.min..=self.max).choose_multiple(rng, self.quantity);
        numbers.sort_unstable();
        numbers
    }
}

/// Draws `quantity` distinct numbers from `min..=max`, sorted ascending.
///
/// When `seed` is provided the draw is reproducible; otherwise the RNG is
/// seeded from the operating system. Invalid requests yield an empty
/// vector.
///
/// # Example
///
/// ```
/// use munge_kit::get_numbers_ticket;
///
/// let ticket = get_numbers_ticket(1, 49, 6, Some(7));
/// assert_eq!(ticket.len(), 6);
/// assert!(ticket.windows(2).all(|pair| pair[0] < pair[1]));
/// assert_eq!(ticket, get_numbers_ticket(1, 49, 6, Some(7)));
///
/// assert!(get_numbers_ticket(1, 10, 11, None).is_empty());
/// ```
#[must_use]
pub fn get_numbers_ticket(min: i64, max: i64, quantity: usize, seed: Option<u64>) -> Vec<i64> {
    let bounds = match TicketBounds::new(min, max, quantity) {
        Ok(bounds) => bounds,
        Err(rejection) => {
            debug!(min, max, quantity, reason = %rejection, "ticket request rejected");
            return Vec::new();
        }
    };

    let mut rng = seed.map_or_else(ChaCha8Rng::from_os_rng, ChaCha8Rng::seed_from_u64);
    bounds.draw(&mut rng)
}
