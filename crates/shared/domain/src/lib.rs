//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the shop catalog entities, the booking rules and the validators that turn
//! raw JSON input into typed values.

pub mod booking;
pub mod constants;
pub mod error;
pub mod operator;
pub mod service;
pub mod shop;
pub mod slot;
pub mod time;
pub mod validation;

pub use booking::{Booking, BookingRequest, NewBooking};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use operator::{NewOperator, Operator};
pub use service::{NewService, Service};
pub use shop::{NewShop, Shop};
pub use slot::{Slot, SlotQuery};
pub use time::DayRange;
