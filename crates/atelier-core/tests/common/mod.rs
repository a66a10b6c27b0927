use serde_json::{json, Value};

/// Timeline row in the wire shape of the status feed.
pub fn timeline_entry(id: u64, name: &str, order: i64, progress: u8, is_done: bool) -> Value {
    json!({
        "milestone": { "id": id, "name": name, "sequenceOrder": order },
        "progress": progress,
        "isDone": is_done,
    })
}

/// Task-detail milestone whose tasks all carry the given statuses in order.
pub fn task_details(id: u64, order: i64, statuses: &[&str]) -> Value {
    let tasks: Vec<Value> = statuses
        .iter()
        .enumerate()
        .map(|(index, status)| {
            json!({
                "id": format!("{id}-{}", index + 1),
                "name": format!("Task {}", index + 1),
                "sequenceOrder": index + 1,
                "detail": { "status": status },
            })
        })
        .collect();
    json!({ "id": id, "sequenceOrder": order, "tasks": tasks })
}

/// Full snapshot document text.
pub fn snapshot_json(timeline: Vec<Value>, details: Vec<Value>) -> String {
    json!({
        "orderItemId": 1001,
        "timeline": timeline,
        "taskDetails": details,
    })
    .to_string()
}
