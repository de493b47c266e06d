//! # ensemble-time
//!
//! Which hourly samples belong to a local-time slot.
//!
//! A state variable (temperature, cloud cover) sampled at 18:00 describes
//! 18:00. An accumulated variable (precipitation, sunshine) sampled at 18:00
//! describes 17:00–18:00. Slot selection must shift accordingly.

pub mod interpretation;
pub mod slot;

pub use interpretation::{time_interpretation_mode, InterpretationMode};
pub use slot::{hour_in_slot, relevant_hour_indices, slot_hour_indices};
