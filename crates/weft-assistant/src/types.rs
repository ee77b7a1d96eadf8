use serde::{Deserialize, Serialize};

/// Role a turn is attributed to on the remote side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteRole {
    User,
    Assistant,
}

impl RemoteRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteRole::User => "user",
            RemoteRole::Assistant => "assistant",
        }
    }
}

/// A message as stored in the remote context.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteMessage {
    pub id: String,
    pub role: String,
    pub created_at: i64,
    #[serde(default)]
    pub content: Vec<RemoteContent>,
}

impl RemoteMessage {
    /// Concatenated text of all text content blocks.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| block.text.as_ref().map(|t| t.value.as_str()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: Option<RemoteText>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteText {
    pub value: String,
}

/// Handle to an assistant run started on a remote context.
#[derive(Debug, Clone, Deserialize)]
pub struct RunHandle {
    pub id: String,
    pub status: String,
}

/// Pagination and ordering options for listing remote messages.
#[derive(Debug, Clone, Default)]
pub struct ListMessagesParams {
    pub limit: Option<u32>,
    pub order: Option<String>,
    pub after: Option<String>,
}

impl ListMessagesParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(ref order) = self.order {
            query.push(("order", order.clone()));
        }
        if let Some(ref after) = self.after {
            query.push(("after", after.clone()));
        }
        query
    }
}
