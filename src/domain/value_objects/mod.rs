pub mod enums;
pub mod months;
pub mod revenue_distribution;
pub mod revenue_reports;
pub mod revenue_settings;
