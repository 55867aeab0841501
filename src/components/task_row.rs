use taskman::core::task::Task;

const INDENT: &str = "        ";

/// One task, with the checkbox drawn from `checked` rather than the task,
/// so a pending toggle can show before the service answers.
pub fn task_row(task: &Task, checked: bool) -> String {
    let mark = if checked { "[x]" } else { "[ ]" };
    let mut out = format!("{} {:>3}  {}", mark, task.id, task.display_title());

    if let Some(description) = task.description.as_deref().filter(|d| !d.is_empty()) {
        out.push('\n');
        out.push_str(INDENT);
        out.push_str(description);
    }
    if let Some(date) = task.date {
        out.push('\n');
        out.push_str(INDENT);
        out.push_str(&date.format("%Y-%m-%d").to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn bare_task_is_one_line() {
        let task = Task {
            id: 1,
            title: "A".into(),
            description: None,
            date: None,
            completed: false,
        };
        assert_eq!(task_row(&task, false), "[ ]   1  A");
    }

    #[test]
    fn details_go_on_following_lines() {
        let task = Task {
            id: 12,
            title: String::new(),
            description: Some("d".into()),
            date: NaiveDate::from_ymd_opt(2024, 1, 1),
            completed: true,
        };
        assert_eq!(
            task_row(&task, true),
            "[x]  12  Untitled Task\n        d\n        2024-01-01"
        );
    }
}
