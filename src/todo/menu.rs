use std::io::{self, BufRead, Write};

use super::list::{Filter, TaskList};
use super::storage::StorageError;

const BANNER: &str = "==================================================";

/// Drives the numbered menu over the given streams until the user picks
/// exit. Persistence problems are printed as warnings and the loop carries
/// on; only an I/O failure on the streams themselves ends the session early.
pub fn run<R: BufRead, W: Write>(
    list: &mut TaskList,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        print_menu(out)?;
        let choice = prompt(input, out, "Your choice (1-9): ")?;

        match choice.as_str() {
            "1" => add_task(list, input, out)?,
            "2" => render_list(list, out, Filter::All)?,
            "3" => set_completed(list, input, out, true)?,
            "4" => set_completed(list, input, out, false)?,
            "5" => delete_task(list, input, out)?,
            "6" => clear_completed(list, out)?,
            "7" => render_list(list, out, Filter::Completed)?,
            "8" => render_list(list, out, Filter::Pending)?,
            "9" => {
                writeln!(out, "Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice!")?,
        }
    }
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", BANNER)?;
    writeln!(out, "TO-DO LIST APP")?;
    writeln!(out, "{}", BANNER)?;
    writeln!(out, "1. Add task")?;
    writeln!(out, "2. List tasks")?;
    writeln!(out, "3. Complete task")?;
    writeln!(out, "4. Reopen task")?;
    writeln!(out, "5. Delete task")?;
    writeln!(out, "6. Clear completed")?;
    writeln!(out, "7. Show completed only")?;
    writeln!(out, "8. Show pending only")?;
    writeln!(out, "9. Exit")?;
    writeln!(out, "{}", BANNER)
}

/// Writes the prompt, flushes and reads one trimmed line. A closed input
/// stream is an error rather than a silent empty answer, so a piped session
/// that runs out of script does not spin forever.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<String> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(line.trim().to_string())
}

fn add_task<R: BufRead, W: Write>(
    list: &mut TaskList,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let description = prompt(input, out, "Task description: ")?;
    let priority = prompt(input, out, "Priority (high/medium/low) [normal]: ")?;
    let priority = if priority.is_empty() {
        None
    } else {
        Some(priority)
    };

    match list.add(description, priority) {
        Ok(task) => writeln!(out, "✓ {} task added!", task.description),
        Err(err) => report_save_error(out, &err),
    }
}

fn set_completed<R: BufRead, W: Write>(
    list: &mut TaskList,
    input: &mut R,
    out: &mut W,
    completed: bool,
) -> io::Result<()> {
    let (view, ask) = if completed {
        (Filter::Pending, "Task ID to complete: ")
    } else {
        (Filter::Completed, "Task ID to reopen: ")
    };
    render_list(list, out, view)?;

    let Some(id) = read_id(input, out, ask)? else {
        return Ok(());
    };

    match list.set_completed(id, completed) {
        Ok(Some(task)) if completed => writeln!(out, "✓ '{}' task completed!", task.description),
        Ok(Some(task)) => writeln!(out, "✗ '{}' task marked as not completed!", task.description),
        Ok(None) => writeln!(out, "Task not found!"),
        Err(err) => report_save_error(out, &err),
    }
}

fn delete_task<R: BufRead, W: Write>(
    list: &mut TaskList,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    render_list(list, out, Filter::All)?;

    let Some(id) = read_id(input, out, "Task ID to delete: ")? else {
        return Ok(());
    };

    match list.remove(id) {
        Ok(Some(task)) => writeln!(out, "✗ '{}' task deleted!", task.description),
        Ok(None) => writeln!(out, "Task not found!"),
        Err(err) => report_save_error(out, &err),
    }
}

fn clear_completed<W: Write>(list: &mut TaskList, out: &mut W) -> io::Result<()> {
    match list.clear_completed() {
        Ok(removed) => writeln!(out, "{} completed tasks cleared!", removed),
        Err(err) => report_save_error(out, &err),
    }
}

/// Reads a task id. A non-numeric answer prints `Invalid ID!` and returns
/// `None`; the menu loop itself serves as the re-prompt.
fn read_id<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<u64>> {
    let raw = prompt(input, out, text)?;
    match raw.parse::<u64>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            writeln!(out, "Invalid ID!")?;
            Ok(None)
        }
    }
}

/// Renders the filtered table. An entirely empty list prints `No tasks
/// yet!` instead; a non-empty list whose filtered view has no rows still
/// prints the banner.
fn render_list<W: Write>(list: &TaskList, out: &mut W, filter: Filter) -> io::Result<()> {
    if list.is_empty() {
        writeln!(out, "No tasks yet!")?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{}", BANNER)?;
    writeln!(out, "TO-DO LIST")?;
    writeln!(out, "{}", BANNER)?;
    for task in list.list(filter) {
        let status = if task.completed { "✓" } else { "✗" };
        writeln!(
            out,
            "{:2}. {} {} [{}] - {}",
            task.id, status, task.description, task.priority, task.category
        )?;
    }
    Ok(())
}

fn report_save_error<W: Write>(out: &mut W, err: &StorageError) -> io::Result<()> {
    log::warn!("task list change was not saved: {}", err);
    writeln!(out, "Warning: could not save the task list: {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::storage::{MemoryStore, TaskStore};
    use crate::todo::task::Task;

    fn empty_list() -> TaskList {
        TaskList::open(Box::new(MemoryStore::new())).unwrap()
    }

    fn run_script(list: &mut TaskList, script: &str) -> String {
        let mut input = io::Cursor::new(script.to_string());
        let mut out = Vec::new();
        run(list, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_add_then_exit() {
        let mut list = empty_list();
        let output = run_script(&mut list, "1\nBuy milk\nhigh\n9\n");

        assert!(output.contains("Task description: "));
        assert!(output.contains("✓ Buy milk task added!"));
        assert!(output.contains("Goodbye!"));
        assert_eq!(list.len(), 1);
        assert_eq!(list.tasks()[0].priority, "high");
    }

    #[test]
    fn test_blank_priority_defaults() {
        let mut list = empty_list();
        run_script(&mut list, "1\nBuy milk\n\n9\n");
        assert_eq!(list.tasks()[0].priority, "normal");
    }

    #[test]
    fn test_listing_an_empty_list() {
        let mut list = empty_list();
        let output = run_script(&mut list, "2\n9\n");
        assert!(output.contains("No tasks yet!"));
        assert!(!output.contains("TO-DO LIST\n"));
    }

    #[test]
    fn test_complete_and_reopen() {
        let mut list = empty_list();
        list.add("Buy milk".to_string(), None).unwrap();

        let output = run_script(&mut list, "3\n1\n9\n");
        assert!(output.contains("Task ID to complete: "));
        assert!(output.contains("✓ 'Buy milk' task completed!"));
        assert!(list.tasks()[0].completed);

        let output = run_script(&mut list, "4\n1\n9\n");
        assert!(output.contains("✗ 'Buy milk' task marked as not completed!"));
        assert!(!list.tasks()[0].completed);
    }

    #[test]
    fn test_delete_prints_not_found_once() {
        let mut list = empty_list();
        list.add("one".to_string(), None).unwrap();
        list.add("two".to_string(), None).unwrap();

        let output = run_script(&mut list, "5\n42\n9\n");
        assert_eq!(output.matches("Task not found!").count(), 1);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_invalid_id_returns_to_the_menu() {
        let mut list = empty_list();
        list.add("one".to_string(), None).unwrap();

        let output = run_script(&mut list, "3\nabc\n9\n");
        assert!(output.contains("Invalid ID!"));
        assert!(output.contains("Goodbye!"));
        assert!(!list.tasks()[0].completed);
    }

    #[test]
    fn test_invalid_menu_choice() {
        let mut list = empty_list();
        let output = run_script(&mut list, "0\n9\n");
        assert!(output.contains("Invalid choice!"));
    }

    #[test]
    fn test_clear_completed_reports_count() {
        let mut list = empty_list();
        for i in 0..3 {
            list.add(format!("task {}", i), None).unwrap();
        }
        list.set_completed(1, true).unwrap();
        list.set_completed(3, true).unwrap();

        let output = run_script(&mut list, "6\n9\n");
        assert!(output.contains("2 completed tasks cleared!"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_filtered_view_of_a_nonempty_list_may_have_no_rows() {
        let mut list = empty_list();
        list.add("walk dog".to_string(), None).unwrap();

        let output = run_script(&mut list, "7\n9\n");
        assert!(output.contains("TO-DO LIST\n"));
        assert!(!output.contains("walk dog ["));
    }

    #[test]
    fn test_save_failure_warns_and_continues() {
        struct FailingStore;

        impl TaskStore for FailingStore {
            fn load(&self) -> Result<Vec<Task>, StorageError> {
                Ok(Vec::new())
            }

            fn save(&self, _tasks: &[Task]) -> Result<(), StorageError> {
                Err(StorageError::Storage("disk full".to_string()))
            }
        }

        let mut list = TaskList::open(Box::new(FailingStore)).unwrap();
        let output = run_script(&mut list, "1\nBuy milk\n\n9\n");

        assert!(output.contains("Warning: could not save the task list:"));
        assert!(output.contains("Goodbye!"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_exhausted_input_is_an_error() {
        let mut list = empty_list();
        let mut input = io::Cursor::new("1\nBuy milk\n".to_string());
        let mut out = Vec::new();

        let err = run(&mut list, &mut input, &mut out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
