//! Interactive console menu
//!
//! Prompt/response loop that collects task fields and dispatches to the
//! store. The loop is generic over its input and output streams so tests can
//! drive it with scripted sessions; the binary hands it locked stdin/stdout.
//!
//! Conflict notifications are not printed here: the store delivers them
//! through its registered sinks when an insertion is rejected.

use crate::schedule::{Priority, Task, TaskStore};
use std::io::{self, BufRead, Write};

/// Run the menu loop until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(
    store: &mut TaskStore,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        write_menu(output)?;
        let Some(choice) = read_line(input)? else {
            break;
        };

        match choice.as_str() {
            "1" => add_task(store, input, output)?,
            "2" => remove_task(store, input, output)?,
            "3" => view_all(store, output)?,
            "4" => edit_task(store, input, output)?,
            "5" => mark_completed(store, input, output)?,
            "6" => view_by_priority(store, input, output)?,
            "0" => {
                writeln!(output, "Exiting. Goodbye!")?;
                break;
            }
            "" => continue,
            _ => writeln!(output, "Invalid choice.")?,
        }
    }
    Ok(())
}

fn write_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "\n=== Astronaut Daily Schedule Organizer ===")?;
    writeln!(output, "1) Add Task")?;
    writeln!(output, "2) Remove Task (by description)")?;
    writeln!(output, "3) View All Tasks")?;
    writeln!(output, "4) Edit Task (by description)")?;
    writeln!(output, "5) Mark Task Completed (by description)")?;
    writeln!(output, "6) View Tasks by Priority")?;
    writeln!(output, "0) Exit")?;
    write!(output, "Choose an option: ")?;
    output.flush()
}

/// Read one trimmed line; `None` means end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;
    read_line(input)
}

fn add_task<R: BufRead, W: Write>(
    store: &mut TaskStore,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(description) = prompt(input, output, "Description: ")? else {
        return Ok(());
    };
    let Some(start) = prompt(input, output, "Start time (HH:mm): ")? else {
        return Ok(());
    };
    let Some(end) = prompt(input, output, "End time (HH:mm): ")? else {
        return Ok(());
    };
    let Some(priority) = prompt(input, output, "Priority (High/Medium/Low): ")? else {
        return Ok(());
    };

    match Task::from_input(&description, &start, &end, &priority) {
        Ok(task) => {
            // On rejection the sinks report the conflict; nothing to add here
            if store.add_task(task).is_ok() {
                writeln!(output, "Task added successfully. No conflicts.")?;
            }
        }
        Err(e) => writeln!(output, "Error: {e}")?,
    }
    Ok(())
}

fn remove_task<R: BufRead, W: Write>(
    store: &mut TaskStore,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(description) = prompt(input, output, "Description of task to remove: ")? else {
        return Ok(());
    };
    match store.remove_task(&description) {
        Ok(_) => writeln!(output, "Task removed successfully.")?,
        Err(e) => writeln!(output, "Error: {e}")?,
    }
    Ok(())
}

fn view_all<W: Write>(store: &TaskStore, output: &mut W) -> io::Result<()> {
    let tasks = store.tasks_by_start();
    if tasks.is_empty() {
        writeln!(output, "No tasks scheduled for the day.")?;
        return Ok(());
    }
    for task in tasks {
        writeln!(output, "{task}")?;
    }
    Ok(())
}

fn edit_task<R: BufRead, W: Write>(
    store: &mut TaskStore,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(old_description) = prompt(input, output, "Description of task to edit: ")? else {
        return Ok(());
    };
    let Some(description) = prompt(input, output, "New description: ")? else {
        return Ok(());
    };
    let Some(start) = prompt(input, output, "New start time (HH:mm): ")? else {
        return Ok(());
    };
    let Some(end) = prompt(input, output, "New end time (HH:mm): ")? else {
        return Ok(());
    };
    let Some(priority) = prompt(input, output, "New priority (High/Medium/Low): ")? else {
        return Ok(());
    };

    match Task::from_input(&description, &start, &end, &priority) {
        Ok(replacement) => match store.edit_task(&old_description, replacement) {
            Ok(()) => writeln!(output, "Task updated successfully.")?,
            Err(e) => writeln!(output, "Error: {e}")?,
        },
        Err(e) => writeln!(output, "Error: {e}")?,
    }
    Ok(())
}

fn mark_completed<R: BufRead, W: Write>(
    store: &mut TaskStore,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(description) = prompt(input, output, "Description of task to mark completed: ")?
    else {
        return Ok(());
    };
    match store.mark_completed(&description) {
        Ok(()) => writeln!(output, "Task marked as completed.")?,
        Err(e) => writeln!(output, "Error: {e}")?,
    }
    Ok(())
}

fn view_by_priority<R: BufRead, W: Write>(
    store: &TaskStore,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(token) = prompt(input, output, "Enter priority (High/Medium/Low): ")? else {
        return Ok(());
    };
    let priority: Priority = match token.parse() {
        Ok(priority) => priority,
        Err(e) => {
            writeln!(output, "Error: {e}")?;
            return Ok(());
        }
    };

    let tasks = store.tasks_with_priority(priority);
    if tasks.is_empty() {
        writeln!(output, "No tasks with priority {priority}.")?;
        return Ok(());
    }
    for task in tasks {
        writeln!(output, "{task}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(store: &mut TaskStore, script: &str) -> String {
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        run(store, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_add_and_view_session() {
        let mut store = TaskStore::new();
        let transcript = run_session(
            &mut store,
            "1\nExercise\n07:00\n08:00\nLow\n3\n0\n",
        );

        assert!(transcript.contains("Task added successfully. No conflicts."));
        assert!(transcript.contains("07:00 - 08:00: Exercise [LOW]"));
        assert!(transcript.contains("Exiting. Goodbye!"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_invalid_time_reported() {
        let mut store = TaskStore::new();
        let transcript = run_session(&mut store, "1\nExercise\n7:00\n08:00\nLow\n0\n");

        assert!(transcript.contains("Error: invalid time '7:00'"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_conflicting_add_is_not_reported_as_success() {
        let mut store = TaskStore::new();
        let transcript = run_session(
            &mut store,
            "1\nExercise\n07:00\n08:00\nLow\n1\nReport\n08:00\n09:00\nMedium\n0\n",
        );

        // One success line for Exercise, none for the rejected Report
        assert_eq!(
            transcript.matches("Task added successfully").count(),
            1
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_and_not_found() {
        let mut store = TaskStore::new();
        store
            .add_task(Task::from_input("Exercise", "07:00", "08:00", "Low").unwrap())
            .unwrap();

        let transcript = run_session(&mut store, "2\nexercise\n2\nLunch\n0\n");
        assert!(transcript.contains("Task removed successfully."));
        assert!(transcript.contains("Error: no task found matching \"Lunch\""));
        assert!(store.is_empty());
    }

    #[test]
    fn test_view_empty_store() {
        let mut store = TaskStore::new();
        let transcript = run_session(&mut store, "3\n0\n");
        assert!(transcript.contains("No tasks scheduled for the day."));
    }

    #[test]
    fn test_view_by_priority_session() {
        let mut store = TaskStore::new();
        store
            .add_task(Task::from_input("Exercise", "07:00", "08:00", "High").unwrap())
            .unwrap();

        let transcript = run_session(&mut store, "6\nhigh\n6\nlow\n6\nwhenever\n0\n");
        assert!(transcript.contains("07:00 - 08:00: Exercise [HIGH]"));
        assert!(transcript.contains("No tasks with priority LOW."));
        assert!(transcript.contains("Error: invalid priority 'whenever'"));
    }

    #[test]
    fn test_edit_and_mark_completed_session() {
        let mut store = TaskStore::new();
        store
            .add_task(Task::from_input("Exercise", "07:00", "08:00", "Low").unwrap())
            .unwrap();

        let transcript = run_session(
            &mut store,
            "4\nExercise\nMorning Run\n06:00\n06:45\nHigh\n5\nMorning Run\n3\n0\n",
        );

        assert!(transcript.contains("Task updated successfully."));
        assert!(transcript.contains("Task marked as completed."));
        assert!(transcript.contains("06:00 - 06:45: Morning Run [HIGH] (Completed)"));
    }

    #[test]
    fn test_invalid_choice_and_eof() {
        let mut store = TaskStore::new();
        // No trailing "0": the loop ends on end of input
        let transcript = run_session(&mut store, "9\n");
        assert!(transcript.contains("Invalid choice."));
        assert!(!transcript.contains("Goodbye"));
    }
}
