//! Integration tests for the schedule library and menu loop
//!
//! These tests exercise the public API the way the binary does: build a
//! store, register a sink, and drive a full day of operations. Unit tests
//! for individual functions live in the respective module files.

use astroday::cli::menu;
use astroday::schedule::{ConflictSink, Priority, ScheduleError, Task, TaskStore};
use std::io::Cursor;
use std::sync::{Arc, Mutex};

/// Sink that collects messages behind a lock so the test can read them
/// after handing the sink to the store.
struct CollectingSink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl ConflictSink for CollectingSink {
    fn on_conflict(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[test]
fn test_full_day_of_schedule_management() {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let mut store = TaskStore::new();
    store.add_sink(Box::new(CollectingSink {
        messages: Arc::clone(&messages),
    }));

    // Plan the morning
    store
        .add_task(Task::from_input("Morning Exercise", "07:00", "08:00", "High").unwrap())
        .unwrap();
    store
        .add_task(Task::from_input("Team Meeting", "09:00", "10:00", "Medium").unwrap())
        .unwrap();
    store
        .add_task(Task::from_input("Lunch Break", "12:00", "13:00", "Low").unwrap())
        .unwrap();

    store
        .add_task(Task::from_input("Training Session", "16:00", "17:00", "High").unwrap())
        .unwrap();

    // A boundary-touching task is rejected and reported through the sink
    let err = store
        .add_task(Task::from_input("Crew Sync", "10:00", "11:00", "Medium").unwrap())
        .unwrap_err();
    assert_eq!(
        err,
        ScheduleError::Conflict {
            existing: "Team Meeting".to_string()
        }
    );
    {
        let recorded = messages.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert!(recorded[0].contains("\"Team Meeting\""));
    }

    // Adjust the day: move lunch, finish the workout
    store
        .edit_task(
            "lunch break",
            Task::from_input("Lunch Break", "12:30", "13:15", "Low").unwrap(),
        )
        .unwrap();
    store.mark_completed("MORNING EXERCISE").unwrap();
    store.remove_task("Training Session").unwrap();

    let view: Vec<String> = store.tasks_by_start().iter().map(|t| t.to_string()).collect();
    assert_eq!(
        view,
        [
            "07:00 - 08:00: Morning Exercise [HIGH] (Completed)",
            "09:00 - 10:00: Team Meeting [MEDIUM]",
            "12:30 - 13:15: Lunch Break [LOW]",
        ]
    );

    let high: Vec<&str> = store
        .tasks_with_priority(Priority::High)
        .iter()
        .map(|t| t.description.as_str())
        .collect();
    assert_eq!(high, ["Morning Exercise"]);
}

#[test]
fn test_menu_session_transcript() {
    let mut store = TaskStore::new();

    let script = "\
1\nExercise\n07:00\n08:00\nLow\n\
1\nReport\n08:00\n09:00\nMedium\n\
1\nReport\n08:01\n09:00\nMedium\n\
3\n\
6\nmedium\n\
0\n";
    let mut input = Cursor::new(script.to_string());
    let mut output = Vec::new();
    menu::run(&mut store, &mut input, &mut output).unwrap();
    let transcript = String::from_utf8(output).unwrap();

    // The boundary-touching second insertion was rejected; the retry with a
    // one-minute gap succeeded
    assert_eq!(transcript.matches("Task added successfully").count(), 2);
    assert_eq!(store.len(), 2);

    assert!(transcript.contains("07:00 - 08:00: Exercise [LOW]"));
    assert!(transcript.contains("08:01 - 09:00: Report [MEDIUM]"));
    assert!(transcript.contains("Exiting. Goodbye!"));
}

#[test]
fn test_store_rejects_every_overlap_shape() {
    let mut store = TaskStore::new();
    store
        .add_task(Task::from_input("Anchor", "10:00", "12:00", "Medium").unwrap())
        .unwrap();

    let overlapping = [
        ("09:00", "10:00"), // touches the start boundary
        ("12:00", "13:00"), // touches the end boundary
        ("09:30", "10:30"), // overlaps the front
        ("11:30", "12:30"), // overlaps the back
        ("10:30", "11:30"), // contained
        ("09:00", "13:00"), // containing
    ];
    for (start, end) in overlapping {
        let err = store
            .add_task(Task::from_input("Probe", start, end, "Low").unwrap())
            .unwrap_err();
        assert!(
            matches!(err, ScheduleError::Conflict { .. }),
            "expected conflict for {start}-{end}"
        );
        assert_eq!(store.len(), 1);
    }

    store
        .add_task(Task::from_input("Before", "08:00", "09:59", "Low").unwrap())
        .unwrap();
    store
        .add_task(Task::from_input("After", "12:01", "13:00", "Low").unwrap())
        .unwrap();
    assert_eq!(store.len(), 3);
}
