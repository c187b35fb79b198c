use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    /// Live demo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Source repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

/// 送往 `POST /api/contact` 的內容
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    /// 選填，留空時照原樣送出空字串
    pub subject: String,
    pub message: String,
}

/// `POST /api/contact` 回應中的狀態標記
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReply {
    pub status: Option<String>,
}

impl From<&serde_json::Value> for ContactReply {
    fn from(body: &serde_json::Value) -> Self {
        Self {
            status: body
                .get("status")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string),
        }
    }
}

impl ContactReply {
    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some("ok")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Pending,
    Succeeded(String),
    Failed(String),
}

impl SubmissionResult {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionResult::Pending)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionResult::Pending => None,
            SubmissionResult::Succeeded(msg) | SubmissionResult::Failed(msg) => Some(msg),
        }
    }
}
