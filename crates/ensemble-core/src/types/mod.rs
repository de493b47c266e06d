//! Shared data model. Everything here is constructed fresh per call and
//! carries no state beyond it.

pub mod parameter;
pub mod sample;
pub mod severity;
pub mod time_slot;

pub use parameter::{Parameter, ParameterKind};
pub use sample::{Ensemble, ModelSample};
pub use severity::SeverityGroup;
pub use time_slot::{RawTimeSlot, TimeSlot};

/// A WMO-style categorical weather code (0–99).
pub type WmoCode = u16;
