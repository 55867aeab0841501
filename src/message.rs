use chrono::NaiveDate;

use taskman::Result;
use taskman::core::task::{Task, TaskId};

/// A user command, parsed from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Reload,

    // Task capture form
    OpenNewTaskForm,
    FormTitle(String),
    FormDescription(String),
    FormDate(NaiveDate),
    SubmitNewTask,
    CloseNewTaskForm,

    // Task status
    MarkCompleted(TaskId),
    MarkPending(TaskId),

    // Delete confirmation
    AskDelete(TaskId),
    ConfirmDelete,
    CancelDelete,

    Help,
    Quit,
}

#[derive(Debug)]
pub enum Message {
    Command(Command),
    Invalid(String),

    // Operation outcomes
    Loaded(Result<()>),
    Created(Result<Task>),
    StatusChanged(TaskId, Result<Task>),
    Deleted(TaskId, Result<()>),
}

pub const USAGE: &str = "\
Commands:
  list                 show tasks
  reload               fetch tasks again
  new                  open the new task form
  title <text>         set the form title
  desc <text>          set the form description
  due <yyyy-mm-dd>     set the form due date
  save                 create the task
  cancel               close the form
  done <id>            mark as completed
  undo <id>            mark as pending
  rm <id>              delete (asks for confirmation)
  yes | no             answer the delete confirmation
  help                 this text
  quit";

impl Message {
    pub fn parse(line: &str) -> Self {
        match parse_command(line) {
            Ok(cmd) => Self::Command(cmd),
            Err(e) => Self::Invalid(e),
        }
    }
}

fn parse_id(arg: &str) -> std::result::Result<TaskId, String> {
    arg.trim()
        .parse()
        .map_err(|_| format!("Not a task id: {:?}", arg.trim()))
}

fn parse_command(line: &str) -> std::result::Result<Command, String> {
    let line = line.trim_start();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line.trim_end(), ""),
    };

    match word {
        "list" | "ls" => Ok(Command::List),
        "reload" => Ok(Command::Reload),
        "new" | "add" => Ok(Command::OpenNewTaskForm),
        "title" => Ok(Command::FormTitle(rest.to_string())),
        "desc" => Ok(Command::FormDescription(rest.to_string())),
        "due" => NaiveDate::parse_from_str(rest.trim(), "%Y-%m-%d")
            .map(Command::FormDate)
            .map_err(|_| "Dates are entered as yyyy-mm-dd".to_string()),
        "save" => Ok(Command::SubmitNewTask),
        "cancel" => Ok(Command::CloseNewTaskForm),
        "done" => parse_id(rest).map(Command::MarkCompleted),
        "undo" => parse_id(rest).map(Command::MarkPending),
        "rm" | "delete" => parse_id(rest).map(Command::AskDelete),
        "yes" | "y" => Ok(Command::ConfirmDelete),
        "no" | "n" => Ok(Command::CancelDelete),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "" => Err(String::new()),
        other => Err(format!("Unknown command {:?}, type `help`", other)),
    }
}
