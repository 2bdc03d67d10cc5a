use crate::config::{AppConfig, DataSource};
use crate::shared::api_utils::api_url;
use contracts::domain::a001_attendance::{sample, AttendanceRecord};
use contracts::shared::api_endpoints::{ADMIN_ATTENDANCE, EMPLOYEE_ATTENDANCE};
use contracts::shared::calendar::YearMonth;
use gloo_net::http::Request;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct MonthQuery {
    /// Serialized as YYYY-MM
    month: YearMonth,
}

fn month_query(month: YearMonth) -> String {
    serde_qs::to_string(&MonthQuery { month }).unwrap_or_default()
}

async fn get_records(url: &str) -> Result<Vec<AttendanceRecord>, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Attendance of the whole team (admin view)
pub async fn fetch_team_attendance(config: &AppConfig) -> Result<Vec<AttendanceRecord>, String> {
    match config.data_source {
        DataSource::Sample => Ok(sample::team_records()),
        DataSource::Api => get_records(&api_url(config.port, ADMIN_ATTENDANCE)).await,
    }
}

/// Attendance log of the current employee for one month
pub async fn fetch_my_attendance(
    config: &AppConfig,
    month: YearMonth,
) -> Result<Vec<AttendanceRecord>, String> {
    match config.data_source {
        DataSource::Sample => Ok(sample::personal_log()),
        DataSource::Api => {
            let url = format!(
                "{}?{}",
                api_url(config.port, EMPLOYEE_ATTENDANCE),
                month_query(month)
            );
            get_records(&url).await
        }
    }
}
