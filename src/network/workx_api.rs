//! Typed wrappers around the WorkX server routes.

use serde_json::Value;
use web_sys::FormData;

use super::api_client::ApiClient;
use super::transport::HttpTransport;
use crate::alerts::AlertSink;
use crate::constants::{
    AVAILABLE_TASKS_ENDPOINT, CLAIM_TASK_ENDPOINT, CREATE_TASK_ENDPOINT, MARK_COMPLETE_ENDPOINT,
    MY_ORDERS_ENDPOINT, PRICE_ENDPOINT, WRITER_TASKS_ENDPOINT,
};
use crate::error::ApiError;
use crate::models::{
    Ack, CreatedTask, OrdersEnvelope, PriceQuote, PriceRequest, TaskRef, TaskSummary,
    TasksEnvelope,
};
use crate::recent_tasks::RecentTasks;
use crate::storage::KeyValueStore;

impl<T: HttpTransport> ApiClient<T> {
    pub async fn calculate_price(&self, work_type: &str, pages: &str) -> Result<PriceQuote, ApiError> {
        let body = PriceRequest {
            work_type: work_type.to_string(),
            pages: parse_page_count(pages),
        };
        self.post_as(PRICE_ENDPOINT, &body).await
    }

    pub async fn task_summary(&self, task_id: &str) -> Result<TaskSummary, ApiError> {
        self.get_as(&format!("/api/user/task/{}", task_id)).await
    }

    pub async fn my_orders(&self) -> Result<Vec<Value>, ApiError> {
        let env: OrdersEnvelope = self.get_as(MY_ORDERS_ENDPOINT).await?;
        Ok(env.orders)
    }

    pub async fn available_tasks(&self) -> Result<Vec<Value>, ApiError> {
        let env: TasksEnvelope = self.get_as(AVAILABLE_TASKS_ENDPOINT).await?;
        Ok(env.tasks)
    }

    pub async fn writer_tasks(&self) -> Result<Vec<Value>, ApiError> {
        let env: TasksEnvelope = self.get_as(WRITER_TASKS_ENDPOINT).await?;
        Ok(env.tasks)
    }

    /// Returns the server's confirmation message.
    pub async fn claim_task(&self, task_id: &str) -> Result<String, ApiError> {
        let ack: Ack = self.post_as(CLAIM_TASK_ENDPOINT, &TaskRef { task_id }).await?;
        Ok(ack.message)
    }

    pub async fn mark_complete(&self, task_id: &str) -> Result<String, ApiError> {
        let ack: Ack = self.post_as(MARK_COMPLETE_ENDPOINT, &TaskRef { task_id }).await?;
        Ok(ack.message)
    }

    /// Multipart order creation; returns the new task id.
    pub async fn create_task(&self, form: FormData) -> Result<String, ApiError> {
        let data = self.post_form(CREATE_TASK_ENDPOINT, form).await?;
        let created: CreatedTask = serde_json::from_value(data).map_err(ApiError::Decode)?;
        Ok(created.task_id)
    }
}

/// Price lookup for the pricing page. Any failure is shown to the user as
/// an alert and collapses to `None`.
pub async fn quote_price<T, A>(api: &ApiClient<T>, alerts: &A, work_type: &str, pages: &str) -> Option<PriceQuote>
where
    T: HttpTransport,
    A: AlertSink + ?Sized,
{
    match api.calculate_price(work_type, pages).await {
        Ok(quote) => Some(quote),
        Err(e) => {
            alerts.alert(&format!("Failed to calculate price: {}", e));
            None
        }
    }
}

/// Fetch a task for display and remember it as recently viewed.
pub async fn view_task<T, S>(api: &ApiClient<T>, recent: &RecentTasks<S>, task_id: &str) -> Result<TaskSummary, ApiError>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    let summary = api.task_summary(task_id).await?;
    if !recent.record(&summary.task_id) {
        tracing::warn!(task_id = %summary.task_id, "could not record recent task");
    }
    Ok(summary)
}

/// Integer coercion used for page counts: leading whitespace, an optional
/// sign, then as many digits as are present (`"12 pages"` is 12). A `0x`
/// prefix switches to hexadecimal. Returns `None` when no digits lead.
pub fn parse_page_count(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
