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

    pub fn class_name(self) -> String {
        format!("notification-{}", self.as_str())
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Error => "linear-gradient(135deg, #ff4757, #ff6b7a)",
            Self::Success | Self::Info => "linear-gradient(135deg, #00d4ff, #7b68ee)",
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
    /// Mounted off-screen; slides in on the next frame.
    Entering,
    Shown,
    /// Sliding out; removed once the exit transition ends.
    Leaving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub phase: Phase,
}

impl Notification {
    pub fn is_on_screen(&self) -> bool {
        self.phase == Phase::Shown
    }
}

/// Live notifications in creation order. Instances are independent: no dedup, no cap.
#[derive(Clone, Debug, Default)]
pub struct NotificationCenter {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn emit(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        self.items.push(Notification {
            id,
            message: message.into(),
            severity,
            phase: Phase::Entering,
        });
        id
    }

    pub fn mark_shown(&mut self, id: NotificationId) -> bool {
        match self.get_mut(id) {
            Some(notification) if notification.phase == Phase::Entering => {
                notification.phase = Phase::Shown;
                true
            }
            _ => false,
        }
    }

    /// Starts the exit transition. Already-leaving or removed notifications are left alone.
    pub fn begin_dismiss(&mut self, id: NotificationId) -> bool {
        match self.get_mut(id) {
            Some(notification) if notification.phase != Phase::Leaving => {
                notification.phase = Phase::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|notification| notification.id != id);
        self.items.len() != before
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|notification| notification.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn get_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.items.iter_mut().find(|notification| notification.id == id)
    }
}
