//! Employee edit form state.
//!
//! The original modal kept each field in its own mutable slot; here the whole
//! form is one value object mutated only through explicit transitions, so each
//! transition can be tested on its own. The submission path carries an
//! explicit request state to block a second submission while one is in
//! flight.

use crate::client::{ApiClient, UpdateEmployeeRequest};
use crate::clock::{Meridiem, WallClockTime};
use crate::error::{AppError, Result};
use crate::models::employee::{EmployeeRecord, NatureOfTime, ShiftType};
use tracing::{info, warn};

/// Submission lifecycle for one open form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    InFlight,
    Done,
}

/// State of the employee edit modal.
#[derive(Debug, Clone)]
pub struct EditForm {
    employee_id: String,
    name: String,
    number: u32,
    buffer_time: String,
    shift_type: ShiftType,
    nature_of_time: NatureOfTime,
    in_time: WallClockTime,
    out_time: WallClockTime,
    request_state: RequestState,
    open: bool,
}

impl EditForm {
    /// Open the form for an employee, decomposing the stored 24-hour check
    /// times into 12-hour fields.
    pub fn open(employee: &EmployeeRecord) -> Self {
        Self {
            employee_id: employee.id.clone(),
            name: employee.name.clone(),
            number: employee.number,
            buffer_time: employee.buffer_time.clone(),
            shift_type: employee.shift_type,
            nature_of_time: employee.nature_of_time,
            in_time: WallClockTime::from_naive(employee.check_in),
            out_time: WallClockTime::from_naive(employee.check_out),
            request_state: RequestState::Idle,
            open: true,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn request_state(&self) -> RequestState {
        self.request_state
    }

    pub fn in_time(&self) -> WallClockTime {
        self.in_time
    }

    pub fn out_time(&self) -> WallClockTime {
        self.out_time
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_number(&mut self, number: u32) {
        self.number = number;
    }

    pub fn set_buffer_time(&mut self, buffer_time: impl Into<String>) {
        self.buffer_time = buffer_time.into();
    }

    pub fn set_shift_type(&mut self, shift_type: ShiftType) {
        self.shift_type = shift_type;
    }

    pub fn set_nature_of_time(&mut self, nature: NatureOfTime) {
        self.nature_of_time = nature;
    }

    /// Apply a check-in field edit. On a validation error the previous value
    /// is kept and the error is returned for the caller to display.
    pub fn set_in_time(&mut self, raw: &str) -> Result<()> {
        self.in_time = WallClockTime::parse_clock_input(raw, self.in_time.meridiem)?;
        Ok(())
    }

    /// Apply a check-out field edit, same contract as [`set_in_time`].
    ///
    /// [`set_in_time`]: EditForm::set_in_time
    pub fn set_out_time(&mut self, raw: &str) -> Result<()> {
        self.out_time = WallClockTime::parse_clock_input(raw, self.out_time.meridiem)?;
        Ok(())
    }

    pub fn set_in_meridiem(&mut self, meridiem: Meridiem) {
        self.in_time = self.in_time.apply_meridiem(meridiem);
    }

    pub fn set_out_meridiem(&mut self, meridiem: Meridiem) {
        self.out_time = self.out_time.apply_meridiem(meridiem);
    }

    /// Build the update request body and mark the form in flight.
    ///
    /// Fails with [`AppError::SubmissionInFlight`] while a previous submission
    /// has not finished. The body runs the authoritative clock conversion on
    /// the stored fields.
    pub fn begin_submission(&mut self) -> Result<UpdateEmployeeRequest> {
        if self.request_state == RequestState::InFlight {
            return Err(AppError::SubmissionInFlight);
        }
        self.request_state = RequestState::InFlight;

        Ok(UpdateEmployeeRequest {
            employee_id: self.employee_id.clone(),
            employee_name: self.name.clone(),
            employee_number: self.number,
            buffer_time: self.buffer_time.clone(),
            shift_type: self.shift_type,
            nature_of_time: self.nature_of_time,
            in_time: self.in_time.to_canonical().to_hms_string(),
            out_time: self.out_time.to_canonical().to_hms_string(),
        })
    }

    /// Record the submission outcome.
    ///
    /// The modal closes and the in-flight flag clears regardless of outcome;
    /// a failed update leaves the user on the list view with a notification,
    /// not back in the form.
    pub fn finish_submission(&mut self, success: bool) {
        if !success {
            warn!("Employee update failed for {id}", id = self.employee_id);
        }
        self.request_state = RequestState::Done;
        self.open = false;
    }

    /// Full submission flow: build the body, PUT it, record the outcome.
    pub async fn submit(&mut self, client: &ApiClient) -> Result<()> {
        let request = self.begin_submission()?;
        let result = client.update_employee(&request).await;
        self.finish_submission(result.is_ok());
        if result.is_ok() {
            info!("Employee {id} updated", id = self.employee_id);
        }
        result
    }
}
