pub mod analysis_service;
pub mod investment_service;
pub mod prioritizer;
pub mod roi;
pub mod rules;
pub mod sales_service;
pub mod timeseries;
pub mod trend;
