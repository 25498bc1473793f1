//! Employee DTOs and shift metadata.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Shift assignment options offered by the edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    Day,
    Night,
    Rotational,
}

impl ShiftType {
    /// Wire identifier used by the update endpoint.
    pub fn id(self) -> &'static str {
        match self {
            ShiftType::Day => "day",
            ShiftType::Night => "night",
            ShiftType::Rotational => "rotational",
        }
    }

    /// Human-readable label for select options.
    pub fn label(self) -> &'static str {
        match self {
            ShiftType::Day => "Day",
            ShiftType::Night => "Night",
            ShiftType::Rotational => "Rotational",
        }
    }

    /// All selectable shifts, in display order.
    pub fn all() -> &'static [ShiftType] {
        &[ShiftType::Day, ShiftType::Night, ShiftType::Rotational]
    }
}

/// Working-time nature options. Only one value exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NatureOfTime {
    Flexible,
}

impl NatureOfTime {
    pub fn label(self) -> &'static str {
        match self {
            NatureOfTime::Flexible => "Flexible",
        }
    }
}

/// An employee row as loaded into the edit modal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: String,
    pub name: String,
    pub number: u32,
    /// Grace period before a check-in counts as late, free-form (e.g. "15m").
    pub buffer_time: String,
    pub shift_type: ShiftType,
    pub nature_of_time: NatureOfTime,
    pub check_in: NaiveTime,
    pub check_out: NaiveTime,
}
