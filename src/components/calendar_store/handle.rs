use super::actor::{CalendarStoreActor, CalendarStoreActorHandle};
use super::CalendarSource;
use crate::components::calendar::{CalendarEvent, CalendarSnapshot, User};
use crate::error::AssistantResult;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Handle for interacting with the calendar store actor
#[derive(Clone)]
pub struct CalendarStoreHandle {
    actor_handle: CalendarStoreActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl CalendarStoreHandle {
    /// Create a new CalendarStoreHandle and spawn the actor
    pub fn new(snapshot: CalendarSnapshot) -> Self {
        // Create the actor and get its handle
        let (mut actor, handle) = CalendarStoreActor::new(snapshot);

        // Spawn a task to run the actor
        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Swap in a freshly loaded snapshot
    pub async fn replace_snapshot(&self, snapshot: CalendarSnapshot) -> AssistantResult<()> {
        self.actor_handle.replace_snapshot(snapshot).await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> AssistantResult<()> {
        self.actor_handle.shutdown().await
    }
}

#[async_trait]
impl CalendarSource for CalendarStoreHandle {
    async fn list_events_in_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AssistantResult<Vec<CalendarEvent>> {
        self.actor_handle.list_events_in_range(start, end).await
    }

    async fn list_active_users(&self) -> AssistantResult<Vec<User>> {
        self.actor_handle.list_active_users().await
    }
}
