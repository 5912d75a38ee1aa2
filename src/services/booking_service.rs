use chrono::Utc;
use log::{error, info, warn};
use rand::{distributions::Alphanumeric, Rng};
use std::sync::Arc;
use validator::{Validate, ValidationErrors};

use crate::db::store::{blocking, Store, StoreError};
use crate::models::addon::AddOnCatalog;
use crate::models::bookings::{Booking, BookingInput, BookingStatus};
use crate::services::payment::interface::{PaymentError, PaymentOperations, PaymentRequest};
use crate::services::pricing_service::PricingService;

const REFERENCE_LENGTH: usize = 9;

#[derive(Debug)]
pub enum BookingError {
    Validation(ValidationErrors),
    InvalidStayDates,
    RoomNotFound(String),
    OccupancyExceeded { requested: u32, maximum: u32 },
    UnknownAddOn(String),
    Payment(PaymentError),
    Store(StoreError),
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingError::Validation(err) => write!(f, "Invalid booking: {}", err),
            BookingError::InvalidStayDates => write!(f, "Check-out must be after check-in"),
            BookingError::RoomNotFound(id) => write!(f, "Room not found: {}", id),
            BookingError::OccupancyExceeded { requested, maximum } => write!(
                f,
                "Room sleeps at most {} adults, {} requested",
                maximum, requested
            ),
            BookingError::UnknownAddOn(id) => write!(f, "Unknown add-on: {}", id),
            BookingError::Payment(err) => write!(f, "{}", err),
            BookingError::Store(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for BookingError {}

impl From<StoreError> for BookingError {
    fn from(err: StoreError) -> Self {
        BookingError::Store(err)
    }
}

impl From<PaymentError> for BookingError {
    fn from(err: PaymentError) -> Self {
        BookingError::Payment(err)
    }
}

pub fn generate_reference() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(REFERENCE_LENGTH)
        .map(char::from)
        .collect::<String>()
        .to_uppercase()
}

/// Checkout flow: validate, price, take payment, record.
pub struct BookingService<'a, P> {
    store: &'a Arc<Store>,
    catalog: &'a AddOnCatalog,
    payments: &'a P,
}

impl<'a, P: PaymentOperations> BookingService<'a, P> {
    pub fn new(store: &'a Arc<Store>, catalog: &'a AddOnCatalog, payments: &'a P) -> Self {
        Self {
            store,
            catalog,
            payments,
        }
    }

    pub async fn create_booking(&self, input: BookingInput) -> Result<Booking, BookingError> {
        input.validate().map_err(BookingError::Validation)?;

        if input.check_out <= input.check_in {
            return Err(BookingError::InvalidStayDates);
        }

        let room = self
            .store
            .room(&input.room_id)?
            .ok_or_else(|| BookingError::RoomNotFound(input.room_id.clone()))?;

        if input.adults > room.max_occupancy {
            return Err(BookingError::OccupancyExceeded {
                requested: input.adults,
                maximum: room.max_occupancy,
            });
        }

        let add_ons = self
            .catalog
            .select(input.add_ons.as_slice())
            .map_err(BookingError::UnknownAddOn)?;

        let rates = self.store.rates()?;
        let quote = PricingService::quote(
            &room,
            input.check_in,
            input.check_out,
            input.adults,
            input.children,
            &rates,
            &add_ons,
        );

        let reference = generate_reference();
        let receipt = self
            .payments
            .charge(&PaymentRequest {
                reference: reference.clone(),
                email: input.email.clone(),
                amount: quote.grand_total,
            })
            .await
            .map_err(|err| {
                warn!("Payment for booking {} failed: {}", reference, err);
                err
            })?;

        let booking = Booking {
            id: reference,
            room_id: room.id,
            guest_name: input.guest_name,
            email: input.email,
            check_in: input.check_in,
            check_out: input.check_out,
            adults: input.adults,
            children: input.children,
            total_amount: receipt.amount,
            status: BookingStatus::Confirmed,
            add_ons: input.add_ons,
            created_at: Utc::now(),
        };

        let record = booking.clone();
        if let Err(err) = blocking(self.store, move |store| store.add_booking(record)).await {
            error!("Payment {} taken but booking not saved: {}", booking.id, err);
            return Err(err.into());
        }

        info!(
            "Booking {} confirmed: room {}, {} nights, total {:.2}",
            booking.id, booking.room_id, quote.nights, booking.total_amount
        );

        Ok(booking)
    }
}
