/// Recent flow log list.
pub mod activity_log;
pub mod charts;
/// Error record modal.
pub mod error_detail;
pub mod flow_canvas;
/// Navigation rail.
pub mod sidebar;
