use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lifecycle labels used by the WorkX server. Labels are matched exactly
/// as the server writes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    Assigned,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Delivered,
}

impl TaskStatus {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Pending" => Some(Self::Pending),
            "Assigned" => Some(Self::Assigned),
            "In Progress" => Some(Self::InProgress),
            "Completed" => Some(Self::Completed),
            "Delivered" => Some(Self::Delivered),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Assigned => "Assigned",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Delivered => "Delivered",
        }
    }

    /// Badge class. Delivered work is shown the same as completed work.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Pending => "status-pending",
            Self::Assigned => "status-assigned",
            Self::InProgress => "status-in-progress",
            Self::Completed | Self::Delivered => "status-completed",
        }
    }
}

/// Body of `POST /api/calculate_price`. A page count that does not parse
/// is sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRequest {
    pub work_type: String,
    pub pages: Option<i64>,
}

/// Whatever the pricing endpoint answered, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceQuote(pub Value);

impl PriceQuote {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

/// Public view of a task returned by `GET /api/user/task/<id>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub task_id: String,
    pub work_type: String,
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub final_price: Option<f64>,
    pub status: String,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub has_result: bool,
    #[serde(default)]
    pub result_file: Option<String>,
}

impl TaskSummary {
    pub fn status(&self) -> Option<TaskStatus> {
        TaskStatus::from_label(&self.status)
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TaskRef<'a> {
    pub task_id: &'a str,
}

/// `{ "success": true, "message": "..." }` acknowledgements.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Ack {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreatedTask {
    pub task_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OrdersEnvelope {
    #[serde(default)]
    pub orders: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TasksEnvelope {
    #[serde(default)]
    pub tasks: Vec<Value>,
}
