//! Literal sample data shown by the dashboard pages.

/// Recent inter-service requests.
pub mod activity;
pub mod analytics;
/// Error log records.
pub mod errors;
/// Service topology.
pub mod topology;

pub use activity::{FLOW_LOG, FlowLogEntry};
pub use analytics::{
	ANALYTICS_METRICS, ENDPOINTS, PERFORMANCE, SYSTEM_HEALTH, TRAFFIC, group_thousands,
};
pub use errors::{ERROR_LOG, ErrorRecord, Severity};
pub use topology::{reference_topology, status_counts};
