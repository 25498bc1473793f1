//! Dashboard API HTTP client.

use crate::error::{AppError, Result};
use crate::models::employee::{NatureOfTime, ShiftType};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Body of the `PUT /api/update-employee` request.
///
/// `in_time`/`out_time` are 24-hour `"HH:MM:SS"` strings produced by the
/// canonical clock conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    pub employee_id: String,
    pub employee_name: String,
    pub employee_number: u32,
    pub buffer_time: String,
    pub shift_type: ShiftType,
    pub nature_of_time: NatureOfTime,
    pub in_time: String,
    pub out_time: String,
}

/// Response envelope from the update endpoint.
#[derive(Debug, Deserialize)]
struct UpdateEmployeeResponse {
    status: String,
}

/// Attendance dashboard REST client.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - The server URL (e.g., "http://localhost:3000")
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, 30)
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Push an employee update.
    ///
    /// Succeeds only on HTTP 200 with a `{"status":"success"}` body; any other
    /// outcome is an error for the caller to surface as a notification. No
    /// retries are attempted.
    pub async fn update_employee(&self, request: &UpdateEmployeeRequest) -> Result<()> {
        let url = format!("{base}/api/update-employee", base = self.base_url);

        tracing::info!(
            "Updating employee {id} ({in_time} - {out_time})",
            id = request.employee_id,
            in_time = request.in_time,
            out_time = request.out_time
        );

        let response = self.client.put(&url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(AppError::UpdateRejected(format!(
                "unexpected status {status}",
                status = response.status()
            )));
        }

        let body: UpdateEmployeeResponse = response
            .json()
            .await
            .map_err(|e| AppError::parse(format!("Invalid update response: {e}")))?;

        if body.status != "success" {
            return Err(AppError::UpdateRejected(body.status));
        }

        Ok(())
    }

    /// Test connection to the server.
    pub async fn test_connection(&self) -> Result<bool> {
        let url = format!("{base}/", base = self.base_url);
        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }
}
