use serde::{Deserialize, Serialize};

use crate::constants::{HOURS_PER_DAY, TRANCHE_HOURS};
use crate::errors::{ConsensusError, ConsensusResult};

/// A local-clock slot `[start_hour, end_hour)`.
///
/// `end_hour` is exclusive and may be smaller than `start_hour` when the slot
/// wraps past midnight (e.g. 18 → 0). `start_hour == end_hour` denotes a full day.
///
/// Deserialization goes through [`TimeSlot::new`], so a slot read from a
/// settings file carries the same range guarantee as one built in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeSlot")]
pub struct TimeSlot {
    start_hour: u8,
    end_hour: u8,
}

/// Unchecked wire shape of a [`TimeSlot`].
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawTimeSlot {
    pub start_hour: u8,
    pub end_hour: u8,
}

impl TryFrom<RawTimeSlot> for TimeSlot {
    type Error = ConsensusError;

    fn try_from(raw: RawTimeSlot) -> ConsensusResult<Self> {
        Self::new(raw.start_hour, raw.end_hour)
    }
}

impl TimeSlot {
    pub fn new(start_hour: u8, end_hour: u8) -> ConsensusResult<Self> {
        if start_hour >= HOURS_PER_DAY || end_hour >= HOURS_PER_DAY {
            return Err(ConsensusError::InvalidTimeSlot {
                start: start_hour,
                end: end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u8 {
        self.start_hour
    }

    /// Exclusive end hour.
    pub fn end_hour(&self) -> u8 {
        self.end_hour
    }

    /// True when the slot crosses midnight.
    pub fn wraps(&self) -> bool {
        self.start_hour > self.end_hour
    }

    /// Slot length in hours (24 for a full-day slot).
    pub fn len_hours(&self) -> u8 {
        let day = u16::from(HOURS_PER_DAY);
        let span = (u16::from(self.end_hour) + day - u16::from(self.start_hour)) % day;
        if span == 0 {
            HOURS_PER_DAY
        } else {
            span as u8
        }
    }

    /// The four 6-hour tranches of a day: 00–06, 06–12, 12–18, 18–00.
    pub fn standard_tranches() -> [TimeSlot; 4] {
        let t = TRANCHE_HOURS;
        [
            TimeSlot { start_hour: 0, end_hour: t },
            TimeSlot { start_hour: t, end_hour: 2 * t },
            TimeSlot { start_hour: 2 * t, end_hour: 3 * t },
            TimeSlot { start_hour: 3 * t, end_hour: 0 },
        ]
    }
}
