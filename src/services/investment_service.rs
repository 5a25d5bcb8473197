use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{CreateInvestment, Investment, UpdateInvestment};
use crate::store::{self, DataStore};

fn validate_name(tool_name: &str) -> Result<(), AppError> {
    if tool_name.trim().is_empty() {
        return Err(AppError::Validation("Tool name cannot be empty".into()));
    }
    Ok(())
}

fn validate_cost(cost: f64) -> Result<(), AppError> {
    if !cost.is_finite() || cost < 0.0 {
        return Err(AppError::Validation("Cost must be a non-negative number".into()));
    }
    Ok(())
}

pub fn create(store: &DataStore, input: CreateInvestment) -> Result<Investment, AppError> {
    validate_name(&input.tool_name)?;
    validate_cost(input.cost)?;

    let investment = Investment {
        id: Uuid::new_v4(),
        tool_name: input.tool_name.trim().to_string(),
        cost: input.cost,
        implementation_date: input.implementation_date,
        expected_benefits: input.expected_benefits.trim().to_string(),
        category: input.category,
        status: input.status,
        created_at: Utc::now(),
    };
    store::investments::insert(store, investment)
}

pub fn fetch_all(store: &DataStore) -> Vec<Investment> {
    store::investments::all(store)
}

pub fn fetch_one(store: &DataStore, id: Uuid) -> Result<Investment, AppError> {
    store::investments::find(store, id)
        .ok_or(AppError::NotFound("Investment not found".to_string()))
}

pub fn update(store: &DataStore, id: Uuid, input: UpdateInvestment) -> Result<Investment, AppError> {
    validate_name(&input.tool_name)?;
    validate_cost(input.cost)?;
    store::investments::update(store, id, input)?
        .ok_or(AppError::NotFound("Investment not found".to_string()))
}

pub fn delete(store: &DataStore, id: Uuid) -> Result<(), AppError> {
    if store::investments::remove(store, id)? {
        Ok(())
    } else {
        Err(AppError::NotFound("Investment not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvestmentStatus, ToolCategory};
    use chrono::NaiveDate;

    fn input(name: &str, cost: f64) -> CreateInvestment {
        CreateInvestment {
            tool_name: name.to_string(),
            cost,
            implementation_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            expected_benefits: "  less admin work  ".to_string(),
            category: ToolCategory::Chatbot,
            status: InvestmentStatus::Active,
        }
    }

    #[test]
    fn create_trims_text_fields_and_assigns_identity() {
        let store = DataStore::in_memory();
        let created = create(&store, input("  Acme Bot  ", 2000.0)).unwrap();

        assert_eq!(created.tool_name, "Acme Bot");
        assert_eq!(created.expected_benefits, "less admin work");
        assert_eq!(fetch_one(&store, created.id).unwrap().id, created.id);
    }

    #[test]
    fn create_rejects_blank_name_and_bad_cost() {
        let store = DataStore::in_memory();

        assert!(matches!(
            create(&store, input("   ", 100.0)),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            create(&store, input("Acme", -5.0)),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            create(&store, input("Acme", f64::NAN)),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn missing_investment_maps_to_not_found() {
        let store = DataStore::in_memory();
        assert!(matches!(
            fetch_one(&store, Uuid::new_v4()),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            delete(&store, Uuid::new_v4()),
            Err(AppError::NotFound(_))
        ));
    }
}
