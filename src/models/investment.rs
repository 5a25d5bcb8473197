use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of sales-automation tooling an investment pays for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Crm,
    Email,
    Analytics,
    Chatbot,
    Other,
}

impl std::fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolCategory::Crm => write!(f, "crm"),
            ToolCategory::Email => write!(f, "email"),
            ToolCategory::Analytics => write!(f, "analytics"),
            ToolCategory::Chatbot => write!(f, "chatbot"),
            ToolCategory::Other => write!(f, "other"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentStatus {
    Active,
    Inactive,
    Pending,
}

impl Default for InvestmentStatus {
    fn default() -> Self {
        InvestmentStatus::Active
    }
}

/// A tool purchase being tracked for return on investment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investment {
    pub id: Uuid,
    pub tool_name: String,
    pub cost: f64,
    pub implementation_date: NaiveDate,
    pub expected_benefits: String,
    pub category: ToolCategory,
    pub status: InvestmentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvestment {
    pub tool_name: String,
    pub cost: f64,
    pub implementation_date: NaiveDate,
    #[serde(default)]
    pub expected_benefits: String,
    pub category: ToolCategory,
    #[serde(default)]
    pub status: InvestmentStatus,
}

/// Full replacement of the mutable fields; id and created_at are immutable
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInvestment {
    pub tool_name: String,
    pub cost: f64,
    pub implementation_date: NaiveDate,
    pub expected_benefits: String,
    pub category: ToolCategory,
    pub status: InvestmentStatus,
}
