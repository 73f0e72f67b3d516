// Storage keys and limits for the recent-task tracker
pub const RECENT_TASKS_KEY: &str = "recentTasks";
pub const RECENT_TASKS_LIMIT: usize = 10;

// Uploads larger than this are rejected client-side (matches the server's
// MAX_CONTENT_LENGTH).
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

// Notification timings (milliseconds)
pub const DEFAULT_TOAST_MS: u32 = 3000;
pub const TOAST_EXIT_MS: u32 = 300;

// Fixed element / attribute names shared with the server templates
pub const SPINNER_ID: &str = "globalSpinner";
pub const ANIMATION_STYLE_ID: &str = "workx-animations";
pub const TOOLTIP_ATTR: &str = "data-tooltip";
pub const TOOLTIP_CLASS: &str = "tooltip";
pub const TOOLTIP_GAP_PX: f64 = 5.0;

// Endpoints
pub const PRICE_ENDPOINT: &str = "/api/calculate_price";
pub const CREATE_TASK_ENDPOINT: &str = "/api/create_task";
pub const MY_ORDERS_ENDPOINT: &str = "/api/user/my_orders";
pub const AVAILABLE_TASKS_ENDPOINT: &str = "/api/writer/available_tasks";
pub const WRITER_TASKS_ENDPOINT: &str = "/api/writer/my_tasks";
pub const CLAIM_TASK_ENDPOINT: &str = "/api/writer/claim_task";
pub const MARK_COMPLETE_ENDPOINT: &str = "/api/writer/mark_complete";

/// Message used when a failed response carries no `error` field.
pub const FALLBACK_ERROR_MESSAGE: &str = "Request failed";
