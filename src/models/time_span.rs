//! Logged work intervals

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{hhmm, parse_date, parse_time};
use crate::{
    error::{AppError, AppResult},
    tracking::time_span::duration_hours,
};

/// A concrete worked interval on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeSpan {
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "08:00")]
    pub time_from: NaiveTime,
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "12:30")]
    pub time_to: NaiveTime,
    #[serde(default)]
    pub description: String,
}

impl TimeSpan {
    /// Duration in hours, never negative
    pub fn duration_hours(&self) -> f64 {
        duration_hours(self.time_from, self.time_to)
    }
}

/// Log time span request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimeSpan {
    /// Work date (YYYY-MM-DD)
    pub date: String,
    /// Start time (HH:MM)
    pub time_from: String,
    /// End time (HH:MM)
    pub time_to: String,
    pub description: Option<String>,
}

impl CreateTimeSpan {
    /// Parse the request, rejecting spans that do not end after they start
    pub fn into_time_span(self) -> AppResult<TimeSpan> {
        let date = parse_date("date", &self.date)?;
        let time_from = parse_time("timeFrom", &self.time_from)?;
        let time_to = parse_time("timeTo", &self.time_to)?;
        if time_to <= time_from {
            return Err(AppError::Validation(
                "timeTo must be after timeFrom".to_string(),
            ));
        }
        Ok(TimeSpan {
            date,
            time_from,
            time_to,
            description: self.description.unwrap_or_default(),
        })
    }
}
