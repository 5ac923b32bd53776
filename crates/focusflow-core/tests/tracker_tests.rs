mod common;

use common::create_test_tracker;
use focusflow_core::{
    models::{SortKey, StatusFilter, TaskFilter, TaskSort},
    NewCategory, NewTask, Phase, Priority, Settings, TaskPatch, TaskQuery, Tracker,
};
use jiff::civil::date;

/// Ticks through the current phase and returns the number of completions seen.
fn finish_phase(tracker: &mut Tracker) -> usize {
    tracker.start();
    let seconds = tracker.timer().remaining();
    (0..seconds)
        .filter(|_| tracker.tick().completion.is_some())
        .count()
}

#[test]
fn test_single_task_auto_check_workflow() {
    let mut tracker = create_test_tracker(Settings {
        auto_check_tasks: true,
        ..Default::default()
    });
    let id = tracker
        .add_task(NewTask::titled("T1").with_estimate(1))
        .map(|task| task.id)
        .expect("Failed to add task");
    tracker.set_active_task(Some(id));

    assert_eq!(finish_phase(&mut tracker), 1);

    let task = tracker.tasks().get_task(id).expect("task exists");
    assert!(task.completed);
    assert_eq!(task.completed_pomodoros, 1);
    assert_eq!(tracker.timer().phase(), Phase::ShortBreak);
    assert_eq!(tracker.timer().session(), 1);
}

#[test]
fn test_two_full_cycles() {
    let mut tracker = create_test_tracker(Settings::default());
    let mut phases = Vec::new();
    for _ in 0..16 {
        phases.push(tracker.timer().phase());
        assert_eq!(finish_phase(&mut tracker), 1);
    }

    let cycle = [
        Phase::Work,
        Phase::ShortBreak,
        Phase::Work,
        Phase::ShortBreak,
        Phase::Work,
        Phase::ShortBreak,
        Phase::Work,
        Phase::LongBreak,
    ];
    assert_eq!(&phases[..8], &cycle);
    assert_eq!(&phases[8..], &cycle);
    assert_eq!(tracker.timer().session(), 0);
    assert_eq!(tracker.stats().total_focus_minutes, 8);
}

#[test]
fn test_custom_total_sessions() {
    let mut tracker = focusflow_core::TrackerBuilder::new()
        .with_settings(Settings {
            durations: focusflow_core::Durations {
                work: 1,
                short_break: 1,
                long_break: 1,
            },
            ..Default::default()
        })
        .with_total_sessions(2)
        .build();

    finish_phase(&mut tracker);
    assert_eq!(tracker.timer().phase(), Phase::ShortBreak);
    finish_phase(&mut tracker);
    finish_phase(&mut tracker);
    assert_eq!(tracker.timer().phase(), Phase::LongBreak);
    assert_eq!(tracker.timer().session(), 2);
}

#[test]
fn test_working_through_a_task_list() {
    let mut tracker = create_test_tracker(Settings {
        auto_check_tasks: true,
        auto_switch_tasks: true,
        ..Default::default()
    });
    let writing = tracker
        .add_category(NewCategory::named("Writing"))
        .map(|category| category.id)
        .expect("Failed to add category");
    tracker.add_task(NewTask::titled("Outline").with_category(writing));
    tracker.add_task(
        NewTask::titled("Draft")
            .with_category(writing)
            .with_estimate(2)
            .with_priority(Priority::High),
    );
    tracker.add_task(NewTask::titled("Email editor"));
    tracker.set_active_task(Some(1));

    // Outline takes one pomodoro, Draft two.
    for _ in 0..3 {
        finish_phase(&mut tracker);
        finish_phase(&mut tracker);
    }

    let completed: Vec<u64> = tracker
        .query_tasks(&TaskQuery {
            filter: TaskFilter {
                status: StatusFilter::Completed,
                ..Default::default()
            },
            ..Default::default()
        })
        .iter()
        .map(|task| task.id)
        .collect();
    assert_eq!(completed, vec![1, 2]);
    assert_eq!(tracker.tasks().active_task_id(), Some(3));

    let stats = tracker.stats();
    assert_eq!(stats.total_pomodoros, 3);
    assert_eq!(stats.completed_tasks, 2);
    assert!((stats.completion_rate - 200.0 / 3.0).abs() < 1e-9);

    // Deleting the category takes both writing tasks with it.
    let (_, removed) = tracker.delete_category(writing).expect("category exists");
    assert_eq!(removed, 2);
    assert_eq!(tracker.stats().total_tasks, 1);
    assert_eq!(tracker.tasks().get_task(3).map(|task| task.order), Some(0));
}

#[test]
fn test_manual_edits_and_reordering() {
    let mut tracker = create_test_tracker(Settings::default());
    for title in ["a", "b", "c", "d"] {
        tracker.add_task(NewTask::titled(title));
    }
    tracker.reorder_tasks(&[4, 3, 2, 1]);
    tracker.move_task(1, 1);

    let by_order: Vec<&str> = tracker
        .query_tasks(&TaskQuery::default())
        .iter()
        .map(|task| task.title.as_str())
        .collect();
    assert_eq!(by_order, vec!["d", "a", "c", "b"]);

    tracker.update_task(
        3,
        TaskPatch {
            priority: Some(Priority::High),
            due_date: Some(Some(date(2030, 1, 1))),
            ..Default::default()
        },
    );
    let by_priority: Vec<u64> = tracker
        .query_tasks(&TaskQuery {
            sort: TaskSort {
                by: SortKey::Priority,
                direction: "desc".parse().unwrap(),
            },
            ..Default::default()
        })
        .iter()
        .map(|task| task.id)
        .collect();
    assert_eq!(by_priority[0], 3);
}

#[test]
fn test_weekly_window_in_stats() {
    let mut tracker = create_test_tracker(Settings::default());
    tracker.add_focus_minutes_on(date(2024, 6, 3), 30);
    tracker.add_focus_minutes_on(date(2024, 6, 9), 45);
    tracker.add_focus_minutes_on(date(2024, 6, 9), 15);

    let stats = tracker.stats_on(date(2024, 6, 9));
    assert_eq!(stats.weekly.len(), 7);
    assert_eq!(stats.weekly[0].date, date(2024, 6, 3));
    assert_eq!(stats.weekly[0].focus_minutes, 30);
    assert_eq!(stats.weekly[6].focus_minutes, 60);
    assert_eq!(stats.total_focus_minutes, 90);
    assert_eq!(stats.completion_rate, 0.0);
    assert!(stats.to_string().contains("1h 30m"));
}
