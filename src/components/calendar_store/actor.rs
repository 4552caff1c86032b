use crate::components::calendar::{has_conflict, CalendarEvent, CalendarSnapshot, TimeWindow, User};
use crate::error::{calendar_store_error, AssistantResult};
use chrono::NaiveDateTime;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The calendar store actor that owns the current snapshot
pub struct CalendarStoreActor {
    snapshot: CalendarSnapshot,
    command_rx: mpsc::Receiver<CalendarStoreCommand>,
}

/// Commands that can be sent to the calendar store actor
pub enum CalendarStoreCommand {
    ListEventsInRange(
        NaiveDateTime,
        NaiveDateTime,
        mpsc::Sender<AssistantResult<Vec<CalendarEvent>>>,
    ),
    ListActiveUsers(mpsc::Sender<AssistantResult<Vec<User>>>),
    ReplaceSnapshot(CalendarSnapshot, mpsc::Sender<AssistantResult<()>>),
    Shutdown,
}

/// Handle for communicating with the calendar store actor
#[derive(Clone)]
pub struct CalendarStoreActorHandle {
    command_tx: mpsc::Sender<CalendarStoreCommand>,
}

impl CalendarStoreActorHandle {
    /// Events overlapping `[start, end)`
    pub async fn list_events_in_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AssistantResult<Vec<CalendarEvent>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(CalendarStoreCommand::ListEventsInRange(start, end, response_tx))
            .await
            .map_err(|e| calendar_store_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| calendar_store_error("Response channel closed"))?
    }

    /// Users that can be proposed as participants
    pub async fn list_active_users(&self) -> AssistantResult<Vec<User>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(CalendarStoreCommand::ListActiveUsers(response_tx))
            .await
            .map_err(|e| calendar_store_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| calendar_store_error("Response channel closed"))?
    }

    /// Swap in a freshly loaded snapshot
    pub async fn replace_snapshot(&self, snapshot: CalendarSnapshot) -> AssistantResult<()> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(CalendarStoreCommand::ReplaceSnapshot(snapshot, response_tx))
            .await
            .map_err(|e| calendar_store_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| calendar_store_error("Response channel closed"))?
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> AssistantResult<()> {
        let _ = self.command_tx.send(CalendarStoreCommand::Shutdown).await;
        Ok(())
    }
}

impl CalendarStoreActor {
    /// Create a new actor and return its handle
    pub fn new(snapshot: CalendarSnapshot) -> (Self, CalendarStoreActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);

        let actor = Self {
            snapshot,
            command_rx,
        };

        let handle = CalendarStoreActorHandle { command_tx };

        (actor, handle)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!(
            "Calendar store actor started with {} events and {} users",
            self.snapshot.events.len(),
            self.snapshot.users.len()
        );

        // Process commands
        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                CalendarStoreCommand::ListEventsInRange(start, end, response_tx) => {
                    let result = self.events_in_range(start, end);
                    let _ = response_tx.send(result).await;
                }
                CalendarStoreCommand::ListActiveUsers(response_tx) => {
                    let users = self
                        .snapshot
                        .users
                        .iter()
                        .filter(|user| user.active)
                        .cloned()
                        .collect();
                    let _ = response_tx.send(Ok(users)).await;
                }
                CalendarStoreCommand::ReplaceSnapshot(snapshot, response_tx) => {
                    info!("Replacing calendar snapshot ({} events)", snapshot.events.len());
                    self.snapshot = snapshot;
                    let _ = response_tx.send(Ok(())).await;
                }
                CalendarStoreCommand::Shutdown => {
                    info!("Calendar store actor shutting down");
                    break;
                }
            }
        }

        info!("Calendar store actor shut down");
    }

    fn events_in_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AssistantResult<Vec<CalendarEvent>> {
        let range = TimeWindow::new(start, end).ok_or_else(|| {
            calendar_store_error(&format!("Invalid range: {} is not before {}", start, end))
        })?;

        let events: Vec<CalendarEvent> = self
            .snapshot
            .events
            .iter()
            .filter(|event| has_conflict(&range, &event.window()))
            .cloned()
            .collect();

        debug!("{} events between {} and {}", events.len(), start, end);
        Ok(events)
    }
}
