use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::id::{AppId, WindowId};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    WindowOpened { window: WindowId, app: AppId },
    WindowClosed(WindowId),
    WindowFocused(WindowId),
    WindowMinimized(WindowId),
    WindowRestored(WindowId),
    StartMenuOpened,
    StartMenuClosed,
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}
