//! Launch checklist generation and item toggling.

use serde::{Deserialize, Serialize};

use crate::blueprint::Priority;
use crate::error::CoreError;

/// One task as stored in `projects.checklist`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub task: String,
    pub category: String,
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
}

const BASE_TASKS: [(&str, &str, Priority); 10] = [
    ("Define core MVP features", "Product", Priority::High),
    ("Create user personas", "Research", Priority::High),
    ("Design wireframes", "Design", Priority::High),
    ("Set up development environment", "Development", Priority::High),
    ("Build core functionality", "Development", Priority::High),
    ("User testing with 10 people", "Testing", Priority::Medium),
    ("Set up analytics tracking", "Analytics", Priority::Medium),
    ("Create landing page", "Marketing", Priority::Medium),
    ("Prepare launch strategy", "Marketing", Priority::Medium),
    ("Set up customer support", "Operations", Priority::Low),
];

/// The standard launch checklist, every task open.
///
/// Ids are `task-0` through `task-9` so regenerating a checklist yields the
/// same ids.
pub fn generate_launch_checklist() -> Vec<ChecklistItem> {
    BASE_TASKS
        .iter()
        .enumerate()
        .map(|(index, (task, category, priority))| ChecklistItem {
            id: format!("task-{index}"),
            task: task.to_string(),
            category: category.to_string(),
            priority: *priority,
            completed: false,
        })
        .collect()
}

/// Return a copy of `items` with only the matching item's `completed` flag
/// replaced.
pub fn set_item_completed(
    items: &[ChecklistItem],
    item_id: &str,
    completed: bool,
) -> Result<Vec<ChecklistItem>, CoreError> {
    if !items.iter().any(|item| item.id == item_id) {
        return Err(CoreError::not_found("Checklist item", item_id));
    }

    Ok(items
        .iter()
        .map(|item| {
            if item.id == item_id {
                ChecklistItem {
                    completed,
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect())
}

/// Count of completed items, for progress displays.
pub fn completed_count(items: &[ChecklistItem]) -> usize {
    items.iter().filter(|item| item.completed).count()
}
