pub mod developer_earnings;
pub mod developers;
pub mod distribution_logs;
pub mod payouts;
pub mod revenue;
pub mod revenue_settings;
