use std::time::Duration;

pub const SLIDE_IN_DELAY: Duration = Duration::from_millis(100);
pub const AUTO_DISMISS_AFTER: Duration = Duration::from_millis(5_000);
pub const SLIDE_OUT_DURATION: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "#00ff88",
            Self::Error => "#ff0080",
            Self::Info => "#0080ff",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Error => "fa-exclamation-circle",
            Self::Info => "fa-info-circle",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Inserted off-screen.
    Entering,
    Shown,
    /// Sliding out; removed once the slide-out finishes.
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub phase: Phase,
}

impl Notification {
    pub fn on_screen(&self) -> bool {
        self.phase == Phase::Shown
    }
}

/// Single-slot presenter. Showing a new notification drops the current one
/// outright; timers that fire for a dropped id are ignored.
#[derive(Clone, Debug, Default)]
pub struct Notifications {
    current: Option<Notification>,
    next_id: u64,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        self.current = Some(Notification {
            id,
            message: message.into(),
            severity,
            phase: Phase::Entering,
        });
        id
    }

    pub fn reveal(&mut self, id: NotificationId) -> bool {
        match self.current.as_mut() {
            Some(notification) if notification.id == id && notification.phase == Phase::Entering => {
                notification.phase = Phase::Shown;
                true
            }
            _ => false,
        }
    }

    /// Starts the slide-out. Returns `false` when `id` is no longer current or
    /// is already leaving, so the caller does not schedule a second removal.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match self.current.as_mut() {
            Some(notification) if notification.id == id && notification.phase != Phase::Leaving => {
                notification.phase = Phase::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: NotificationId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
