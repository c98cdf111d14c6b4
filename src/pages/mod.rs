pub mod analytics;
pub mod data_flow;
pub mod error_logs;
pub mod not_found;
pub mod overview;
pub mod system_flow;
