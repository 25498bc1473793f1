//! Attendance records, summary counts, and search filtering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily attendance outcome for one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    OnTime,
    Late,
    FullDay,
    HalfDay,
}

impl AttendanceStatus {
    /// Label as shown in reports and exports.
    pub fn label(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::OnTime => "On Time",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::FullDay => "Full Day",
            AttendanceStatus::HalfDay => "Half Day",
        }
    }

    /// Whether the employee showed up at all that day.
    pub fn is_present(self) -> bool {
        !matches!(self, AttendanceStatus::Absent)
    }
}

/// One attendance row, the record shape consumed by the export service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub employee_name: String,
    pub employee_number: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Dashboard summary counts, as served by the stats endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    pub total_employees: u32,
    pub present_count: u32,
    pub absent_count: u32,
    pub on_time_count: u32,
    pub late_count: u32,
    pub full_day_count: u32,
    pub half_day_count: u32,
}

/// One stat card on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub count: u32,
}

impl AttendanceSummary {
    /// Derive summary counts from a day's records.
    ///
    /// `total_employees` is the roster size, which can exceed the number of
    /// records when some employees have no entry for the day.
    pub fn from_records(records: &[AttendanceRecord], total_employees: u32) -> Self {
        let mut summary = Self {
            total_employees,
            ..Default::default()
        };

        for record in records {
            if record.status.is_present() {
                summary.present_count += 1;
            }
            match record.status {
                AttendanceStatus::Absent => summary.absent_count += 1,
                AttendanceStatus::OnTime => summary.on_time_count += 1,
                AttendanceStatus::Late => summary.late_count += 1,
                AttendanceStatus::FullDay => summary.full_day_count += 1,
                AttendanceStatus::HalfDay => summary.half_day_count += 1,
                AttendanceStatus::Present => {}
            }
        }

        summary
    }

    /// Card label/count pairs, in dashboard display order.
    pub fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard { label: "Total Employees", count: self.total_employees },
            StatCard { label: "Present Employees", count: self.present_count },
            StatCard { label: "Absent Employees", count: self.absent_count },
            StatCard { label: "On Time Employees", count: self.on_time_count },
            StatCard { label: "Late Employees", count: self.late_count },
            StatCard { label: "Full Day Employees", count: self.full_day_count },
            StatCard { label: "Half Day Employees", count: self.half_day_count },
        ]
    }
}

/// Case-insensitive substring search over employee name and number.
pub fn filter_records<'a>(records: &'a [AttendanceRecord], search_term: &str) -> Vec<&'a AttendanceRecord> {
    let term = search_term.trim().to_lowercase();
    if term.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|r| r.employee_name.to_lowercase().contains(&term) || r.employee_number.contains(&term))
        .collect()
}
