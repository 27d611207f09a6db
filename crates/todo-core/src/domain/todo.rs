//! Todo Entity
//!
//! A task owned by the signed-in user; storage and lifecycle are server-side.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::entity::{Entity, FormMode};
use super::validation::FieldErrors;

/// Todo status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    Active,
    Inactive,
    Completed,
}

impl TodoStatus {
    pub const ALL: [TodoStatus; 3] = [TodoStatus::Inactive, TodoStatus::Active, TodoStatus::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Active => "active",
            TodoStatus::Inactive => "inactive",
            TodoStatus::Completed => "completed",
        }
    }

    /// Label shown in the status select
    pub fn label(&self) -> &'static str {
        match self {
            TodoStatus::Active => "Active",
            TodoStatus::Inactive => "In-Active",
            TodoStatus::Completed => "Completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "active" => Some(TodoStatus::Active),
            "inactive" => Some(TodoStatus::Inactive),
            "completed" => Some(TodoStatus::Completed),
            _ => None,
        }
    }
}

/// User a todo belongs to, as embedded by the list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// A todo as returned by `/todo/list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TodoStatus,
    /// Creator of the todo
    #[serde(rename = "user", default)]
    pub owner: Option<Owner>,
}

impl Todo {
    /// Name shown in the "created by" column
    pub fn owner_name(&self) -> &str {
        self.owner.as_ref().map_or("", |owner| owner.name.as_str())
    }
}

/// Raw values of the create/edit todo form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFields {
    pub title: String,
    pub description: String,
    /// Empty until a status is picked
    pub status: String,
}

/// Body of `/todo/create` and `/todo/update/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoInput {
    pub title: String,
    pub description: String,
    pub status: TodoStatus,
}

impl Entity for Todo {
    type Fields = TodoFields;
    type Input = TodoInput;

    const KIND: &'static str = "todo";
    const LABEL: &'static str = "Todo";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.title, &self.description, self.status.as_str()]
    }

    fn to_fields(&self) -> TodoFields {
        TodoFields {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status.as_str().to_string(),
        }
    }

    // Both forms share one rule set.
    fn validate(fields: &TodoFields, _mode: FormMode) -> Result<TodoInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        let title = errors.require("title", &fields.title, "Title is required");
        let description = errors.require("description", &fields.description, "Description is required");
        let status = errors
            .require("status", &fields.status, "Status is required")
            .and_then(|raw| {
                let parsed = TodoStatus::parse(raw);
                if parsed.is_none() {
                    errors.insert("status", "Status is required");
                }
                parsed
            });

        match (title, description, status) {
            (Some(title), Some(description), Some(status)) if errors.is_empty() => Ok(TodoInput {
                title: title.to_string(),
                description: description.to_string(),
                status,
            }),
            _ => Err(errors),
        }
    }
}

/// Shorten `text` to `limit` characters, appending "..." when cut.
pub fn truncate_text(text: &str, limit: usize) -> Cow<'_, str> {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}
