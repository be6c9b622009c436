//! Data Transfer Objects for API requests and responses.
//!
//! Wire field names are fixed by existing clients (`todo` for the task
//! description, `staff_id`, ...). Requests carry the full record; an omitted
//! `id` reads as 0. Like any serde-derived struct, a request may also arrive
//! as a JSON array holding the fields in declaration order.

use serde::{Deserialize, Serialize};

use crate::domain::{RecordId, Task, Timestamp, User};

// =============================================================================
// Task DTOs
// =============================================================================

/// Request body for `POST /todo` and `PATCH /todo`.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoRequest {
    /// Ignored on create; selects the record on update.
    #[serde(default)]
    pub id: RecordId,
    /// Task description.
    pub todo: String,
    /// Scheduled date-time.
    pub date: Timestamp,
    /// Completion flag.
    pub done: bool,
}

impl From<TodoRequest> for Task {
    fn from(request: TodoRequest) -> Self {
        Self::new(request.todo, request.date, request.done).with_id(request.id)
    }
}

/// Response body for a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoResponse {
    /// Task ID.
    pub id: RecordId,
    /// Task description.
    pub todo: String,
    /// Scheduled date-time.
    pub date: Timestamp,
    /// Completion flag.
    pub done: bool,
}

impl From<Task> for TodoResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            todo: task.description,
            date: task.date,
            done: task.done,
        }
    }
}

// =============================================================================
// User DTOs
// =============================================================================

/// Request body for `POST /user` and `PATCH /user`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRequest {
    /// Ignored on create; selects the record on update.
    #[serde(default)]
    pub id: RecordId,
    /// External staff identifier.
    pub staff_id: String,
    /// Display name.
    pub name: String,
    /// Creation time; the current local time when omitted.
    #[serde(default = "Timestamp::now")]
    pub created: Timestamp,
    /// Join time.
    pub joined: Timestamp,
    /// Whether the account is active.
    pub enabled: bool,
    /// Contact address.
    pub email: String,
}

impl From<UserRequest> for User {
    fn from(request: UserRequest) -> Self {
        Self {
            id: request.id,
            staff_id: request.staff_id,
            name: request.name,
            created: request.created,
            joined: request.joined,
            enabled: request.enabled,
            email: request.email,
        }
    }
}

/// Response body for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: RecordId,
    /// External staff identifier.
    pub staff_id: String,
    /// Display name.
    pub name: String,
    /// Creation time.
    pub created: Timestamp,
    /// Join time.
    pub joined: Timestamp,
    /// Whether the account is active.
    pub enabled: bool,
    /// Contact address.
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            staff_id: user.staff_id,
            name: user.name,
            created: user.created,
            joined: user.joined,
            enabled: user.enabled,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn todo_request_defaults_missing_id_to_zero() {
        let request: TodoRequest = serde_json::from_str(
            r#"{"todo": "Write report", "date": "2024-10-01T09:00:00Z", "done": false}"#,
        )
        .unwrap();

        let task = Task::from(request);

        assert_eq!(task.id, 0);
        assert_eq!(task.description, "Write report");
        assert_eq!(task.date, Timestamp::from_parts(2024, 10, 1, 9, 0).unwrap());
    }

    #[rstest]
    #[case(r#"{"todo": "x", "date": "2024-10-01T09:00:00", "done": "no"}"#)]
    #[case(r#"{"todo": "x", "done": true}"#)]
    #[case(r#"{"id": "one", "todo": "x", "date": "2024-10-01T09:00:00", "done": true}"#)]
    fn todo_request_rejects_wrong_shape(#[case] body: &str) {
        assert!(serde_json::from_str::<TodoRequest>(body).is_err());
    }

    #[rstest]
    fn todo_response_uses_wire_names() {
        let task = Task::new(
            "Plan retreat",
            Timestamp::from_parts(2024, 11, 19, 14, 30).unwrap(),
            true,
        )
        .with_id(50);

        let json = serde_json::to_value(TodoResponse::from(task)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 50,
                "todo": "Plan retreat",
                "date": "2024-11-19T14:30:00",
                "done": true
            })
        );
    }

    #[rstest]
    fn user_request_defaults_created_to_now() {
        let before = Timestamp::now();
        let request: UserRequest = serde_json::from_str(
            r#"{
                "staff_id": "STF051",
                "name": "Zed Quinn",
                "joined": "2024-01-01T09:00:00",
                "enabled": true,
                "email": "zed.quinn@company.com"
            }"#,
        )
        .unwrap();
        let after = Timestamp::now();

        assert_eq!(request.id, 0);
        assert!(before <= request.created && request.created <= after);
    }

    #[rstest]
    fn user_round_trips_through_dtos() {
        let request: UserRequest = serde_json::from_str(
            r#"{
                "id": 3,
                "staff_id": "STF003",
                "name": "Carol White",
                "created": "2023-02-10T11:15:00",
                "joined": "2023-03-01T11:15:00",
                "enabled": false,
                "email": "carol.white@company.com"
            }"#,
        )
        .unwrap();

        let json = serde_json::to_value(UserResponse::from(User::from(request))).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "staff_id": "STF003",
                "name": "Carol White",
                "created": "2023-02-10T11:15:00",
                "joined": "2023-03-01T11:15:00",
                "enabled": false,
                "email": "carol.white@company.com"
            })
        );
    }
}
