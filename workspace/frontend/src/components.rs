pub mod customers;
pub mod dashboard;
pub mod kpi_card;
pub mod layout;
pub mod sales;
pub mod settings;
