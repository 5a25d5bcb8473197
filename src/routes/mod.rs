pub(crate) mod analysis;
pub(crate) mod health;
pub(crate) mod history;
pub(crate) mod investments;
pub(crate) mod recommendations;
pub(crate) mod sales_data;
