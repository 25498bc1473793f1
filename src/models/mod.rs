//! Data models for employees and attendance records.

pub mod attendance;
pub mod employee;

pub use attendance::{AttendanceRecord, AttendanceStatus, AttendanceSummary, filter_records};
pub use employee::{EmployeeRecord, NatureOfTime, ShiftType};
