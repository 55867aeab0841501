use std::collections::HashMap;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use taskman::TaskListController;
use taskman::api::TaskService;
use taskman::core::task::TaskId;
use taskman::form::{CreateDialog, DeleteConfirm};

use crate::message::{Command, Message, USAGE};
use crate::pages::task_list::task_list_view;

const NO_FORM: &str = "No task form is open, type `new` first";

/// A service call in flight, resolving to the message that reports it.
pub type Operation = LocalBoxFuture<'static, Message>;

pub enum Action {
    None,
    Perform(Operation),
    Quit,
}

pub struct TaskApp<S> {
    controller: Rc<TaskListController<S>>,
    create_dialog: CreateDialog,
    delete_confirm: DeleteConfirm,
    /// Checkbox values shown for rows whose toggle is still in flight.
    optimistic: HashMap<TaskId, bool>,
    output: Vec<String>,
}

impl<S: TaskService + 'static> TaskApp<S> {
    pub fn new(service: S) -> Self {
        Self {
            controller: Rc::new(TaskListController::new(service)),
            create_dialog: CreateDialog::default(),
            delete_confirm: DeleteConfirm::default(),
            optimistic: HashMap::new(),
            output: Vec::new(),
        }
    }

    pub fn load(&self) -> Operation {
        let controller = self.controller.clone();
        async move { Message::Loaded(controller.load().await) }.boxed_local()
    }

    fn say(&mut self, line: impl Into<String>) {
        self.output.push(line.into());
    }

    pub fn view(&self) -> String {
        task_list_view(
            &self.controller.tasks(),
            self.controller.load_state(),
            &self.optimistic,
        )
    }

    fn show_list(&mut self) {
        let view = self.view();
        self.say(view);
    }

    /// Lines to print since the last call, followed by pending
    /// notifications. Printing a notification dismisses it.
    pub fn take_output(&mut self) -> Vec<String> {
        for n in self.controller.take_notifications() {
            self.output.push(format!("[{}] {}", n.title, n.description));
        }
        std::mem::take(&mut self.output)
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Command(command) => return self.command(command),
            Message::Invalid(e) => {
                if !e.is_empty() {
                    self.say(e);
                }
            }
            Message::Loaded(_) => self.show_list(),
            Message::Created(result) => {
                if result.is_ok() {
                    self.create_dialog.close();
                    self.show_list();
                }
            }
            Message::StatusChanged(id, _) => {
                self.optimistic.remove(&id);
                self.show_list();
            }
            Message::Deleted(_, result) => {
                if result.is_ok() {
                    self.show_list();
                }
            }
        }
        Action::None
    }

    fn command(&mut self, command: Command) -> Action {
        match command {
            Command::List => self.show_list(),
            Command::Reload => return Action::Perform(self.load()),

            Command::OpenNewTaskForm => {
                self.create_dialog.open();
                self.say("Add New Task: set `title`, `desc` and `due`, then `save`");
            }
            Command::FormTitle(title) => {
                if !self.create_dialog.set_title(title) {
                    self.say(NO_FORM);
                }
            }
            Command::FormDescription(description) => {
                if !self.create_dialog.set_description(description) {
                    self.say(NO_FORM);
                }
            }
            Command::FormDate(date) => {
                if !self.create_dialog.set_date(date) {
                    self.say(NO_FORM);
                }
            }
            Command::SubmitNewTask => match self.create_dialog.submit() {
                Some(candidate) => {
                    let controller = self.controller.clone();
                    return Action::Perform(
                        async move { Message::Created(controller.create(candidate).await) }
                            .boxed_local(),
                    );
                }
                None => self.say(NO_FORM),
            },
            Command::CloseNewTaskForm => self.create_dialog.cancel(),

            Command::MarkCompleted(id) => return self.set_completed(id, true),
            Command::MarkPending(id) => return self.set_completed(id, false),

            Command::AskDelete(id) => {
                self.delete_confirm.ask(id);
                self.say(format!(
                    "Delete task {}? This action cannot be undone. (yes/no)",
                    id
                ));
            }
            Command::ConfirmDelete => match self.delete_confirm.confirm() {
                Some(id) => {
                    let controller = self.controller.clone();
                    return Action::Perform(
                        async move { Message::Deleted(id, controller.delete(id).await) }
                            .boxed_local(),
                    );
                }
                None => self.say("Nothing to confirm"),
            },
            Command::CancelDelete => self.delete_confirm.cancel(),

            Command::Help => self.say(USAGE),
            Command::Quit => return Action::Quit,
        }
        Action::None
    }

    fn set_completed(&mut self, id: TaskId, completed: bool) -> Action {
        self.optimistic.insert(id, completed);
        self.show_list();
        let controller = self.controller.clone();
        Action::Perform(
            async move { Message::StatusChanged(id, controller.set_completed(id, completed).await) }
                .boxed_local(),
        )
    }
}
