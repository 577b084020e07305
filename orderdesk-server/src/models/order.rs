//! Order records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// An order row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Order {
    #[schema(example = 200100)]
    pub ord_num: i64,
    #[schema(example = 230)]
    pub ord_amount: f64,
    #[schema(example = 150)]
    pub advance_amount: f64,
    /// Free-form date string, stored as sent
    #[schema(example = "2008-01-08T00:00:00.000Z")]
    pub ord_date: String,
    #[schema(example = "C12315")]
    pub cust_code: String,
    #[schema(example = "A123")]
    pub agent_code: String,
    #[schema(example = "SOD")]
    pub ord_description: String,
}

/// Request body for create, full update and partial update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct OrderInput {
    #[serde(default)]
    #[schema(example = 230)]
    pub ord_amount: Option<f64>,
    #[serde(default)]
    #[schema(example = 150)]
    pub advance_amount: Option<f64>,
    #[serde(default)]
    #[schema(example = "2008-01-08T00:00:00.000Z")]
    pub ord_date: Option<String>,
    #[serde(default)]
    #[schema(example = "C12315")]
    pub cust_code: Option<String>,
    #[serde(default)]
    #[schema(example = "A123")]
    pub agent_code: Option<String>,
    #[serde(default)]
    #[schema(example = "SOD")]
    pub ord_description: Option<String>,
}

/// Order fields with every undefined value replaced by its default
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFields {
    pub ord_amount: f64,
    pub advance_amount: f64,
    pub ord_date: String,
    pub cust_code: String,
    pub agent_code: String,
    pub ord_description: String,
}

impl OrderInput {
    /// Fill undefined amounts with `0` and undefined strings with `""`.
    pub fn defaulted(self) -> OrderFields {
        OrderFields {
            ord_amount: self.ord_amount.unwrap_or(0.0),
            advance_amount: self.advance_amount.unwrap_or(0.0),
            ord_date: self.ord_date.unwrap_or_default(),
            cust_code: self.cust_code.unwrap_or_default(),
            agent_code: self.agent_code.unwrap_or_default(),
            ord_description: self.ord_description.unwrap_or_default(),
        }
    }

    /// True when the body names no field at all.
    pub fn is_empty(&self) -> bool {
        self.ord_amount.is_none()
            && self.advance_amount.is_none()
            && self.ord_date.is_none()
            && self.cust_code.is_none()
            && self.agent_code.is_none()
            && self.ord_description.is_none()
    }
}

impl Order {
    pub fn new(ord_num: i64, fields: OrderFields) -> Self {
        Self {
            ord_num,
            ord_amount: fields.ord_amount,
            advance_amount: fields.advance_amount,
            ord_date: fields.ord_date,
            cust_code: fields.cust_code,
            agent_code: fields.agent_code,
            ord_description: fields.ord_description,
        }
    }

    /// Overwrite only the fields present in `patch`.
    pub fn apply(&mut self, patch: &OrderInput) {
        if let Some(amount) = patch.ord_amount {
            self.ord_amount = amount;
        }
        if let Some(advance) = patch.advance_amount {
            self.advance_amount = advance;
        }
        if let Some(date) = &patch.ord_date {
            self.ord_date = date.clone();
        }
        if let Some(cust) = &patch.cust_code {
            self.cust_code = cust.clone();
        }
        if let Some(agent) = &patch.agent_code {
            self.agent_code = agent.clone();
        }
        if let Some(desc) = &patch.ord_description {
            self.ord_description = desc.clone();
        }
    }
}
