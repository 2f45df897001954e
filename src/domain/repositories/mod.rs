pub mod developers;
pub mod revenue_distribution;
pub mod revenue_reports;
pub mod revenue_settings;
pub mod revenue_source;
