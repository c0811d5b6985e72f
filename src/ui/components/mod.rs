pub mod field;
pub mod kpi_card;
pub mod toast;
