//! Person model and hour totals

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::{not_blank, PersonId};
use crate::error::AppResult;

/// Club mail domain used when a person is registered without an email
pub const DEFAULT_EMAIL_DOMAIN: &str = "rk-schmalegg.de";

/// A registered volunteer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Hours entered outside of any tracked event (e.g. spreadsheet import)
    #[serde(default)]
    pub manual_hours: f64,
}

impl Person {
    /// Build a person from a validated creation request
    pub fn new(id: PersonId, data: CreatePerson) -> AppResult<Self> {
        data.validate()?;
        let first_name = data.first_name.trim().to_string();
        let last_name = data.last_name.trim().to_string();
        let email = data
            .email
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| {
                format!(
                    "{}.{}@{}",
                    first_name.to_lowercase(),
                    last_name.to_lowercase(),
                    DEFAULT_EMAIL_DOMAIN
                )
            });
        Ok(Self {
            id,
            first_name,
            last_name,
            email: Some(email),
            phone: data.phone.filter(|p| !p.is_empty()),
            manual_hours: data.manual_hours.unwrap_or(0.0),
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Apply an update to contact fields and manual hours
    pub fn apply(&mut self, data: UpdatePerson) -> AppResult<()> {
        data.validate()?;
        if let Some(email) = data.email {
            self.email = Some(email).filter(|e| !e.is_empty());
        }
        if let Some(phone) = data.phone {
            self.phone = Some(phone).filter(|p| !p.is_empty());
        }
        if let Some(hours) = data.manual_hours {
            self.manual_hours = hours;
        }
        Ok(())
    }
}

/// Create person request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePerson {
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,
    #[validate(custom(function = "not_blank"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(range(min = 0.0, message = "Manual hours cannot be negative"))]
    pub manual_hours: Option<f64>,
}

/// Update person request (contact fields and manual hours only)
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePerson {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(range(min = 0.0, message = "Manual hours cannot be negative"))]
    pub manual_hours: Option<f64>,
}

/// Aggregated worked hours of a person
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonHours {
    /// Accepted hours, plus manual hours when no year filter applies
    pub total_hours: f64,
    pub approved_hours: f64,
}

/// Hours of one person in the overview listing
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonHoursSummary {
    pub person_id: PersonId,
    pub full_name: String,
    pub total_hours: f64,
    pub approved_hours: f64,
}

/// Query parameters for hour totals
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct HoursQuery {
    /// Restrict to units dated in this calendar year
    pub year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn request(first: &str, last: &str) -> CreatePerson {
        CreatePerson {
            first_name: first.to_string(),
            last_name: last.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_person_defaults() {
        let p = Person::new(7, request(" Maria ", "Weber")).unwrap();
        assert_eq!(p.full_name(), "Maria Weber");
        assert_eq!(p.manual_hours, 0.0);
        assert_eq!(p.email.as_deref(), Some("maria.weber@rk-schmalegg.de"));
    }

    #[test]
    fn test_explicit_email_is_kept() {
        let mut data = request("Maria", "Weber");
        data.email = Some("m.weber@example.org".into());
        let p = Person::new(7, data).unwrap();
        assert_eq!(p.email.as_deref(), Some("m.weber@example.org"));
    }

    #[test]
    fn test_rejects_missing_name() {
        let err = Person::new(1, request("", "Weber")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_rejects_blank_names() {
        let err = Person::new(1, request("   ", "\t")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(Person::new(1, request("Maria", "  ")).is_err());
    }

    #[test]
    fn test_rejects_bad_email_and_negative_hours() {
        let mut data = request("Anna", "Schmidt");
        data.email = Some("not-an-email".into());
        assert!(Person::new(1, data).is_err());

        let mut data = request("Anna", "Schmidt");
        data.manual_hours = Some(-2.0);
        assert!(Person::new(1, data).is_err());
    }

    #[test]
    fn test_apply_update() {
        let mut p = Person::new(1, request("Lisa", "Wagner")).unwrap();
        p.apply(UpdatePerson {
            phone: Some("+49 175 1234567".into()),
            manual_hours: Some(12.5),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(p.phone.as_deref(), Some("+49 175 1234567"));
        assert_eq!(p.manual_hours, 12.5);
        assert_eq!(p.first_name, "Lisa");
    }
}
