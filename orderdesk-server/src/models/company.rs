//! Company records
//!
//! Field names on the wire keep the upper-case column names clients
//! already send (`COMPANY_NAME`, `COMPANY_CITY`).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A company row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Company {
    #[schema(example = "123456")]
    pub company_id: String,
    #[schema(example = "Apple")]
    pub company_name: String,
    #[schema(example = "Charlotte")]
    pub company_city: String,
}

/// Request body for create, full update and partial update.
///
/// A missing field and an explicit `null` are both "undefined".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CompanyInput {
    #[serde(default)]
    #[schema(example = "Apple")]
    pub company_name: Option<String>,
    #[serde(default)]
    #[schema(example = "Charlotte")]
    pub company_city: Option<String>,
}

/// Company fields with every undefined value replaced by its default
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyFields {
    pub company_name: String,
    pub company_city: String,
}

impl CompanyInput {
    /// Fill undefined fields with the empty string.
    pub fn defaulted(self) -> CompanyFields {
        CompanyFields {
            company_name: self.company_name.unwrap_or_default(),
            company_city: self.company_city.unwrap_or_default(),
        }
    }

    /// True when the body names no field at all.
    pub fn is_empty(&self) -> bool {
        self.company_name.is_none() && self.company_city.is_none()
    }
}

impl Company {
    pub fn new(company_id: impl Into<String>, fields: CompanyFields) -> Self {
        Self {
            company_id: company_id.into(),
            company_name: fields.company_name,
            company_city: fields.company_city,
        }
    }

    /// Overwrite only the fields present in `patch`.
    pub fn apply(&mut self, patch: &CompanyInput) {
        if let Some(name) = &patch.company_name {
            self.company_name = name.clone();
        }
        if let Some(city) = &patch.company_city {
            self.company_city = city.clone();
        }
    }
}
