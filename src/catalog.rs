//! Declarative endpoint catalog
//!
//! Every exported API operation is one row here: a name, an HTTP verb, a
//! path template, and whether the endpoint paginates. The per-endpoint
//! surface of the platform is data, not logic: a single generic dispatch
//! function in [`crate::client`] consumes these rows, so adding an
//! operation means adding a row, not a method body.

use crate::types::Method;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Metadata for one API endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Stable lookup name, `resource.operation`
    pub name: &'static str,
    /// HTTP verb
    pub method: Method,
    /// Path template with `{{ param }}` placeholders
    pub path: &'static str,
    /// Whether responses carry `has_more`/`page_token` pagination metadata
    pub paginated: bool,
}

const fn get(name: &'static str, path: &'static str) -> Endpoint {
    Endpoint {
        name,
        method: Method::GET,
        path,
        paginated: false,
    }
}

const fn list(name: &'static str, path: &'static str) -> Endpoint {
    Endpoint {
        name,
        method: Method::GET,
        path,
        paginated: true,
    }
}

const fn post(name: &'static str, path: &'static str) -> Endpoint {
    Endpoint {
        name,
        method: Method::POST,
        path,
        paginated: false,
    }
}

const fn patch(name: &'static str, path: &'static str) -> Endpoint {
    Endpoint {
        name,
        method: Method::PATCH,
        path,
        paginated: false,
    }
}

const fn delete(name: &'static str, path: &'static str) -> Endpoint {
    Endpoint {
        name,
        method: Method::DELETE,
        path,
        paginated: false,
    }
}

/// Task endpoints
pub const TASK_ENDPOINTS: &[Endpoint] = &[
    post("task.create", "/task/v2/tasks"),
    get("task.get", "/task/v2/tasks/{{ task_guid }}"),
    patch("task.patch", "/task/v2/tasks/{{ task_guid }}"),
    delete("task.delete", "/task/v2/tasks/{{ task_guid }}"),
    list("task.list", "/task/v2/tasks"),
    post("task.add_members", "/task/v2/tasks/{{ task_guid }}/add_members"),
    post(
        "task.remove_members",
        "/task/v2/tasks/{{ task_guid }}/remove_members",
    ),
    post(
        "task.add_reminders",
        "/task/v2/tasks/{{ task_guid }}/add_reminders",
    ),
    post(
        "task.remove_reminders",
        "/task/v2/tasks/{{ task_guid }}/remove_reminders",
    ),
    post(
        "task.add_dependencies",
        "/task/v2/tasks/{{ task_guid }}/add_dependencies",
    ),
    post(
        "task.remove_dependencies",
        "/task/v2/tasks/{{ task_guid }}/remove_dependencies",
    ),
    post(
        "task.add_tasklist",
        "/task/v2/tasks/{{ task_guid }}/add_tasklist",
    ),
    post(
        "task.remove_tasklist",
        "/task/v2/tasks/{{ task_guid }}/remove_tasklist",
    ),
    list("task.tasklists", "/task/v2/tasks/{{ task_guid }}/tasklists"),
    post("task.subtask.create", "/task/v2/tasks/{{ task_guid }}/subtasks"),
    list("task.subtask.list", "/task/v2/tasks/{{ task_guid }}/subtasks"),
];

/// Tasklist endpoints
pub const TASKLIST_ENDPOINTS: &[Endpoint] = &[
    post("tasklist.create", "/task/v2/tasklists"),
    get("tasklist.get", "/task/v2/tasklists/{{ tasklist_guid }}"),
    patch("tasklist.patch", "/task/v2/tasklists/{{ tasklist_guid }}"),
    delete("tasklist.delete", "/task/v2/tasklists/{{ tasklist_guid }}"),
    list("tasklist.list", "/task/v2/tasklists"),
    list(
        "tasklist.tasks",
        "/task/v2/tasklists/{{ tasklist_guid }}/tasks",
    ),
    post(
        "tasklist.add_members",
        "/task/v2/tasklists/{{ tasklist_guid }}/add_members",
    ),
    post(
        "tasklist.remove_members",
        "/task/v2/tasklists/{{ tasklist_guid }}/remove_members",
    ),
];

/// Tasklist section endpoints
pub const SECTION_ENDPOINTS: &[Endpoint] = &[
    post("section.create", "/task/v2/sections"),
    get("section.get", "/task/v2/sections/{{ section_guid }}"),
    patch("section.patch", "/task/v2/sections/{{ section_guid }}"),
    delete("section.delete", "/task/v2/sections/{{ section_guid }}"),
    list("section.list", "/task/v2/sections"),
    list("section.tasks", "/task/v2/sections/{{ section_guid }}/tasks"),
];

/// Comment endpoints
pub const COMMENT_ENDPOINTS: &[Endpoint] = &[
    post("comment.create", "/task/v2/comments"),
    get("comment.get", "/task/v2/comments/{{ comment_id }}"),
    patch("comment.patch", "/task/v2/comments/{{ comment_id }}"),
    delete("comment.delete", "/task/v2/comments/{{ comment_id }}"),
    list("comment.list", "/task/v2/comments"),
];

/// Attachment endpoints (upload is multipart and out of scope)
pub const ATTACHMENT_ENDPOINTS: &[Endpoint] = &[
    list("attachment.list", "/task/v2/attachments"),
    get("attachment.get", "/task/v2/attachments/{{ attachment_guid }}"),
    delete(
        "attachment.delete",
        "/task/v2/attachments/{{ attachment_guid }}",
    ),
];

/// Custom field endpoints
pub const CUSTOM_FIELD_ENDPOINTS: &[Endpoint] = &[
    post("custom_field.create", "/task/v2/custom_fields"),
    get(
        "custom_field.get",
        "/task/v2/custom_fields/{{ custom_field_guid }}",
    ),
    patch(
        "custom_field.patch",
        "/task/v2/custom_fields/{{ custom_field_guid }}",
    ),
    list("custom_field.list", "/task/v2/custom_fields"),
    post(
        "custom_field.add",
        "/task/v2/custom_fields/{{ custom_field_guid }}/add",
    ),
    post(
        "custom_field.remove",
        "/task/v2/custom_fields/{{ custom_field_guid }}/remove",
    ),
    post(
        "custom_field.option.create",
        "/task/v2/custom_fields/{{ custom_field_guid }}/options",
    ),
    patch(
        "custom_field.option.patch",
        "/task/v2/custom_fields/{{ custom_field_guid }}/options/{{ option_guid }}",
    ),
];

/// All endpoint families
pub const FAMILIES: &[&[Endpoint]] = &[
    TASK_ENDPOINTS,
    TASKLIST_ENDPOINTS,
    SECTION_ENDPOINTS,
    COMMENT_ENDPOINTS,
    ATTACHMENT_ENDPOINTS,
    CUSTOM_FIELD_ENDPOINTS,
];

/// Lookup index over all endpoint families
static ENDPOINT_INDEX: LazyLock<HashMap<&'static str, &'static Endpoint>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for family in FAMILIES {
        for endpoint in *family {
            let previous = m.insert(endpoint.name, endpoint);
            assert!(previous.is_none(), "duplicate endpoint name");
        }
    }
    m
});

/// Look up an endpoint by name
pub fn find(name: &str) -> Option<&'static Endpoint> {
    ENDPOINT_INDEX.get(name).copied()
}

/// Iterate over all endpoints
pub fn all() -> impl Iterator<Item = &'static Endpoint> {
    FAMILIES.iter().flat_map(|family| family.iter())
}
