//! Modal dialog state for the task views.
//!
//! Dialogs only collect intent. The data operation fires from the caller on
//! submit/confirm, and the create dialog stays open until the controller
//! reports success.

use chrono::NaiveDate;

use crate::core::task::{NewTask, TaskId};

/// Fields of the "Add New Task" dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTaskForm {
    pub title: String,
    pub description: String,
    pub date: Option<NaiveDate>,
}

impl NewTaskForm {
    pub fn to_candidate(&self) -> NewTask {
        NewTask::new(self.title.clone(), self.description.clone(), self.date)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CreateDialog {
    #[default]
    Closed,
    Open(NewTaskForm),
}

impl CreateDialog {
    /// Open with an empty form.
    pub fn open(&mut self) {
        *self = Self::Open(NewTaskForm::default());
    }

    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }

    /// Close after a successful create.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn form(&self) -> Option<&NewTaskForm> {
        match self {
            Self::Open(form) => Some(form),
            Self::Closed => None,
        }
    }

    fn form_mut(&mut self) -> Option<&mut NewTaskForm> {
        match self {
            Self::Open(form) => Some(form),
            Self::Closed => None,
        }
    }

    /// Returns false when the dialog is closed.
    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        self.form_mut().map(|f| f.title = title.into()).is_some()
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> bool {
        self.form_mut()
            .map(|f| f.description = description.into())
            .is_some()
    }

    pub fn set_date(&mut self, date: NaiveDate) -> bool {
        self.form_mut().map(|f| f.date = Some(date)).is_some()
    }

    /// The candidate to create, if the dialog is open. The dialog stays open.
    pub fn submit(&self) -> Option<NewTask> {
        self.form().map(NewTaskForm::to_candidate)
    }
}

/// The "Delete Task" confirmation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteConfirm {
    #[default]
    Closed,
    Pending(TaskId),
}

impl DeleteConfirm {
    pub fn ask(&mut self, id: TaskId) {
        *self = Self::Pending(id);
    }

    /// Yield the id to delete and close at once.
    pub fn confirm(&mut self) -> Option<TaskId> {
        match std::mem::take(self) {
            Self::Pending(id) => Some(id),
            Self::Closed => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_ignored_while_closed() {
        let mut dialog = CreateDialog::default();
        assert!(!dialog.set_title("A"));
        assert_eq!(dialog.submit(), None);
    }

    #[test]
    fn submit_keeps_dialog_open() {
        let mut dialog = CreateDialog::default();
        dialog.open();
        dialog.set_title("B");
        dialog.set_description("d");
        dialog.set_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        let candidate = dialog.submit().unwrap();
        assert_eq!(candidate.title, "B");
        assert!(!candidate.completed);
        assert!(dialog.is_open());

        dialog.close();
        assert!(!dialog.is_open());
    }

    #[test]
    fn reopen_starts_empty() {
        let mut dialog = CreateDialog::default();
        dialog.open();
        dialog.set_title("draft");
        dialog.cancel();
        dialog.open();
        assert_eq!(dialog.form(), Some(&NewTaskForm::default()));
    }

    #[test]
    fn confirm_yields_id_once() {
        let mut confirm = DeleteConfirm::default();
        confirm.ask(3);
        assert_eq!(confirm.confirm(), Some(3));
        assert_eq!(confirm.confirm(), None);
    }

    #[test]
    fn cancel_discards_pending_delete() {
        let mut confirm = DeleteConfirm::default();
        confirm.ask(3);
        confirm.cancel();
        assert_eq!(confirm.confirm(), None);
    }
}
