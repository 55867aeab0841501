use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Info,
    Destructive,
}

/// A dismissable message shown to the user after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            variant: Variant::Info,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: "Error".into(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

/// Pending notifications, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    queue: Vec<Notification>,
}

impl Notifications {
    pub fn push(&mut self, notification: Notification) {
        self.queue.push(notification);
    }

    pub fn take(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_drains_in_order() {
        let mut n = Notifications::default();
        n.push(Notification::info("Task added", "\"A\" has been added to the list"));
        n.push(Notification::error("Unable to delete the task, please try again"));
        let drained = n.take();
        assert_eq!(drained.len(), 2);
        assert!(!drained[0].is_error());
        assert!(drained[1].is_error());
        assert_eq!(drained[1].title, "Error");
        assert!(n.take().is_empty());
    }
}
