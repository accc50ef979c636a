//! Typed resource handles
//!
//! Thin views over [`Client`](crate::client::Client): each method is one
//! catalog row away from the generic dispatcher. Payloads stay opaque
//! JSON; this crate does not model the platform's per-resource schemas.

use crate::client::Client;
use crate::error::Result;
use crate::http::RequestConfig;
use crate::pagination::PageStream;
use crate::template::PathParams;
use crate::types::{JsonObject, JsonValue};

macro_rules! handle {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            client: &'a Client,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(client: &'a Client) -> Self {
                Self { client }
            }
        }
    };
}

fn guid(key: &'static str, value: &str) -> PathParams {
    PathParams::new().set(key, value)
}

// ============================================================================
// Tasks
// ============================================================================

handle!(Tasks);

impl Tasks<'_> {
    pub async fn create(&self, body: JsonValue) -> Result<JsonObject> {
        self.client
            .call("task.create", &PathParams::new(), RequestConfig::new().json(body))
            .await
    }

    pub async fn get(&self, task_guid: &str) -> Result<JsonObject> {
        self.client
            .call("task.get", &guid("task_guid", task_guid), RequestConfig::new())
            .await
    }

    pub async fn patch(&self, task_guid: &str, body: JsonValue) -> Result<JsonObject> {
        self.client
            .call(
                "task.patch",
                &guid("task_guid", task_guid),
                RequestConfig::new().json(body),
            )
            .await
    }

    pub async fn delete(&self, task_guid: &str) -> Result<JsonObject> {
        self.client
            .call("task.delete", &guid("task_guid", task_guid), RequestConfig::new())
            .await
    }

    /// Lazy page stream over all tasks visible to the caller
    pub fn list(&self, request: RequestConfig) -> Result<PageStream> {
        self.client.list("task.list", &PathParams::new(), request)
    }

    /// Tasklists a task belongs to
    pub fn tasklists(&self, task_guid: &str, request: RequestConfig) -> Result<PageStream> {
        self.client
            .list("task.tasklists", &guid("task_guid", task_guid), request)
    }

    pub async fn create_subtask(&self, task_guid: &str, body: JsonValue) -> Result<JsonObject> {
        self.client
            .call(
                "task.subtask.create",
                &guid("task_guid", task_guid),
                RequestConfig::new().json(body),
            )
            .await
    }

    pub fn subtasks(&self, task_guid: &str, request: RequestConfig) -> Result<PageStream> {
        self.client
            .list("task.subtask.list", &guid("task_guid", task_guid), request)
    }

    pub async fn add_members(&self, task_guid: &str, body: JsonValue) -> Result<JsonObject> {
        self.mutate("task.add_members", task_guid, body).await
    }

    pub async fn remove_members(&self, task_guid: &str, body: JsonValue) -> Result<JsonObject> {
        self.mutate("task.remove_members", task_guid, body).await
    }

    pub async fn add_reminders(&self, task_guid: &str, body: JsonValue) -> Result<JsonObject> {
        self.mutate("task.add_reminders", task_guid, body).await
    }

    pub async fn remove_reminders(&self, task_guid: &str, body: JsonValue) -> Result<JsonObject> {
        self.mutate("task.remove_reminders", task_guid, body).await
    }

    pub async fn add_dependencies(&self, task_guid: &str, body: JsonValue) -> Result<JsonObject> {
        self.mutate("task.add_dependencies", task_guid, body).await
    }

    pub async fn remove_dependencies(&self, task_guid: &str, body: JsonValue) -> Result<JsonObject> {
        self.mutate("task.remove_dependencies", task_guid, body).await
    }

    pub async fn add_tasklist(&self, task_guid: &str, body: JsonValue) -> Result<JsonObject> {
        self.mutate("task.add_tasklist", task_guid, body).await
    }

    pub async fn remove_tasklist(&self, task_guid: &str, body: JsonValue) -> Result<JsonObject> {
        self.mutate("task.remove_tasklist", task_guid, body).await
    }

    async fn mutate(
        &self,
        endpoint: &str,
        task_guid: &str,
        body: JsonValue,
    ) -> Result<JsonObject> {
        self.client
            .call(
                endpoint,
                &guid("task_guid", task_guid),
                RequestConfig::new().json(body),
            )
            .await
    }
}

// ============================================================================
// Tasklists
// ============================================================================

handle!(Tasklists);

impl Tasklists<'_> {
    pub async fn create(&self, body: JsonValue) -> Result<JsonObject> {
        self.client
            .call(
                "tasklist.create",
                &PathParams::new(),
                RequestConfig::new().json(body),
            )
            .await
    }

    pub async fn get(&self, tasklist_guid: &str) -> Result<JsonObject> {
        self.client
            .call(
                "tasklist.get",
                &guid("tasklist_guid", tasklist_guid),
                RequestConfig::new(),
            )
            .await
    }

    pub async fn patch(&self, tasklist_guid: &str, body: JsonValue) -> Result<JsonObject> {
        self.client
            .call(
                "tasklist.patch",
                &guid("tasklist_guid", tasklist_guid),
                RequestConfig::new().json(body),
            )
            .await
    }

    pub async fn delete(&self, tasklist_guid: &str) -> Result<JsonObject> {
        self.client
            .call(
                "tasklist.delete",
                &guid("tasklist_guid", tasklist_guid),
                RequestConfig::new(),
            )
            .await
    }

    pub fn list(&self, request: RequestConfig) -> Result<PageStream> {
        self.client.list("tasklist.list", &PathParams::new(), request)
    }

    /// Tasks within a tasklist
    pub fn tasks(&self, tasklist_guid: &str, request: RequestConfig) -> Result<PageStream> {
        self.client
            .list("tasklist.tasks", &guid("tasklist_guid", tasklist_guid), request)
    }

    pub async fn add_members(&self, tasklist_guid: &str, body: JsonValue) -> Result<JsonObject> {
        self.client
            .call(
                "tasklist.add_members",
                &guid("tasklist_guid", tasklist_guid),
                RequestConfig::new().json(body),
            )
            .await
    }

    pub async fn remove_members(&self, tasklist_guid: &str, body: JsonValue) -> Result<JsonObject> {
        self.client
            .call(
                "tasklist.remove_members",
                &guid("tasklist_guid", tasklist_guid),
                RequestConfig::new().json(body),
            )
            .await
    }
}

// ============================================================================
// Sections
// ============================================================================

handle!(Sections);

impl Sections<'_> {
    pub async fn create(&self, body: JsonValue) -> Result<JsonObject> {
        self.client
            .call(
                "section.create",
                &PathParams::new(),
                RequestConfig::new().json(body),
            )
            .await
    }

    pub async fn get(&self, section_guid: &str) -> Result<JsonObject> {
        self.client
            .call(
                "section.get",
                &guid("section_guid", section_guid),
                RequestConfig::new(),
            )
            .await
    }

    pub async fn patch(&self, section_guid: &str, body: JsonValue) -> Result<JsonObject> {
        self.client
            .call(
                "section.patch",
                &guid("section_guid", section_guid),
                RequestConfig::new().json(body),
            )
            .await
    }

    pub async fn delete(&self, section_guid: &str) -> Result<JsonObject> {
        self.client
            .call(
                "section.delete",
                &guid("section_guid", section_guid),
                RequestConfig::new(),
            )
            .await
    }

    /// Sections of a resource; filter with query params (`resource_type`,
    /// `resource_id`)
    pub fn list(&self, request: RequestConfig) -> Result<PageStream> {
        self.client.list("section.list", &PathParams::new(), request)
    }

    pub fn tasks(&self, section_guid: &str, request: RequestConfig) -> Result<PageStream> {
        self.client
            .list("section.tasks", &guid("section_guid", section_guid), request)
    }
}

// ============================================================================
// Comments
// ============================================================================

handle!(Comments);

impl Comments<'_> {
    pub async fn create(&self, body: JsonValue) -> Result<JsonObject> {
        self.client
            .call(
                "comment.create",
                &PathParams::new(),
                RequestConfig::new().json(body),
            )
            .await
    }

    pub async fn get(&self, comment_id: &str) -> Result<JsonObject> {
        self.client
            .call(
                "comment.get",
                &guid("comment_id", comment_id),
                RequestConfig::new(),
            )
            .await
    }

    pub async fn patch(&self, comment_id: &str, body: JsonValue) -> Result<JsonObject> {
        self.client
            .call(
                "comment.patch",
                &guid("comment_id", comment_id),
                RequestConfig::new().json(body),
            )
            .await
    }

    pub async fn delete(&self, comment_id: &str) -> Result<JsonObject> {
        self.client
            .call(
                "comment.delete",
                &guid("comment_id", comment_id),
                RequestConfig::new(),
            )
            .await
    }

    /// Comments on a resource; filter with query params (`resource_type`,
    /// `resource_id`)
    pub fn list(&self, request: RequestConfig) -> Result<PageStream> {
        self.client.list("comment.list", &PathParams::new(), request)
    }
}

// ============================================================================
// Attachments
// ============================================================================

handle!(Attachments);

impl Attachments<'_> {
    pub async fn get(&self, attachment_guid: &str) -> Result<JsonObject> {
        self.client
            .call(
                "attachment.get",
                &guid("attachment_guid", attachment_guid),
                RequestConfig::new(),
            )
            .await
    }

    pub async fn delete(&self, attachment_guid: &str) -> Result<JsonObject> {
        self.client
            .call(
                "attachment.delete",
                &guid("attachment_guid", attachment_guid),
                RequestConfig::new(),
            )
            .await
    }

    pub fn list(&self, request: RequestConfig) -> Result<PageStream> {
        self.client
            .list("attachment.list", &PathParams::new(), request)
    }
}

// ============================================================================
// Custom fields
// ============================================================================

handle!(CustomFields);

impl CustomFields<'_> {
    pub async fn create(&self, body: JsonValue) -> Result<JsonObject> {
        self.client
            .call(
                "custom_field.create",
                &PathParams::new(),
                RequestConfig::new().json(body),
            )
            .await
    }

    pub async fn get(&self, custom_field_guid: &str) -> Result<JsonObject> {
        self.client
            .call(
                "custom_field.get",
                &guid("custom_field_guid", custom_field_guid),
                RequestConfig::new(),
            )
            .await
    }

    pub async fn patch(&self, custom_field_guid: &str, body: JsonValue) -> Result<JsonObject> {
        self.client
            .call(
                "custom_field.patch",
                &guid("custom_field_guid", custom_field_guid),
                RequestConfig::new().json(body),
            )
            .await
    }

    pub fn list(&self, request: RequestConfig) -> Result<PageStream> {
        self.client
            .list("custom_field.list", &PathParams::new(), request)
    }

    /// Attach the field to a resource
    pub async fn add(&self, custom_field_guid: &str, body: JsonValue) -> Result<JsonObject> {
        self.client
            .call(
                "custom_field.add",
                &guid("custom_field_guid", custom_field_guid),
                RequestConfig::new().json(body),
            )
            .await
    }

    /// Detach the field from a resource
    pub async fn remove(&self, custom_field_guid: &str, body: JsonValue) -> Result<JsonObject> {
        self.client
            .call(
                "custom_field.remove",
                &guid("custom_field_guid", custom_field_guid),
                RequestConfig::new().json(body),
            )
            .await
    }

    pub async fn create_option(
        &self,
        custom_field_guid: &str,
        body: JsonValue,
    ) -> Result<JsonObject> {
        self.client
            .call(
                "custom_field.option.create",
                &guid("custom_field_guid", custom_field_guid),
                RequestConfig::new().json(body),
            )
            .await
    }

    pub async fn patch_option(
        &self,
        custom_field_guid: &str,
        option_guid: &str,
        body: JsonValue,
    ) -> Result<JsonObject> {
        let params = PathParams::new()
            .set("custom_field_guid", custom_field_guid)
            .set("option_guid", option_guid);
        self.client
            .call(
                "custom_field.option.patch",
                &params,
                RequestConfig::new().json(body),
            )
            .await
    }
}
