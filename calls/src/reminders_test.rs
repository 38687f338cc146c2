use super::*;
use crate::optimistic::Pending;

fn reminder(id: &str, due_at: &str, status: ReminderStatus) -> Reminder {
    Reminder {
        id: id.to_owned(),
        call_id: format!("call-{id}"),
        due_at: due_at.to_owned(),
        status,
        title: format!("Rappeler {id}"),
        ..Reminder::default()
    }
}

fn now() -> DateTime<Utc> {
    parse_timestamp("2024-05-01T12:00:00Z").unwrap()
}

#[test]
fn sort_puts_pending_first_by_due_time() {
    let mut items = vec![
        reminder("done", "2024-04-01T08:00:00Z", ReminderStatus::Done),
        reminder("late", "2024-05-01T18:00:00Z", ReminderStatus::Pending),
        reminder("early", "2024-05-01T09:00:00Z", ReminderStatus::Pending),
        reminder("canceled", "2024-01-01", ReminderStatus::Canceled),
    ];
    sort_for_display(&mut items);
    let ids = items.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["early", "late", "done", "canceled"]);
}

#[test]
fn overdue_only_counts_pending_past_due() {
    let items = vec![
        reminder("past", "2024-05-01T09:00:00Z", ReminderStatus::Pending),
        reminder("future", "2024-05-01T18:00:00Z", ReminderStatus::Pending),
        reminder("done", "2024-04-01T08:00:00Z", ReminderStatus::Done),
        reminder("unparseable", "tomorrow", ReminderStatus::Pending),
    ];
    let late = overdue(&items, now());
    assert_eq!(late.len(), 1);
    assert_eq!(late[0].id, "past");
    assert_eq!(pending_count(&items), 3);
}

#[test]
fn mark_done_is_optimistic_and_revertible() {
    let mut items = vec![reminder("a", "2024-05-01", ReminderStatus::Pending)];
    let pending = Pending::apply(&mut items, ReminderAction::MarkDone("a".to_owned()));
    assert_eq!(items[0].status, ReminderStatus::Done);
    pending.settle(&mut items, &Err(()));
    assert_eq!(items[0].status, ReminderStatus::Pending);
}

#[test]
fn delete_removes_matching_reminder() {
    let mut items = vec![
        reminder("a", "2024-05-01", ReminderStatus::Pending),
        reminder("b", "2024-05-02", ReminderStatus::Pending),
    ];
    ReminderAction::Delete("a".to_owned()).apply(&mut items);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "b");
}

#[test]
fn failed_delete_restores_only_its_reminder() {
    let mut items = vec![
        reminder("a", "2024-05-01", ReminderStatus::Pending),
        reminder("b", "2024-05-02", ReminderStatus::Pending),
        reminder("c", "2024-05-03", ReminderStatus::Pending),
    ];
    let first = Pending::apply(&mut items, ReminderAction::Delete("a".to_owned()));
    let second = Pending::apply(&mut items, ReminderAction::Delete("b".to_owned()));

    second.settle::<()>(&mut items, &Ok(()));
    first.settle(&mut items, &Err("refused"));

    assert_eq!(items.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["a", "c"]);
}

#[test]
fn failed_done_keeps_a_reload_that_landed_in_flight() {
    let mut items = vec![reminder("a", "2024-05-01", ReminderStatus::Pending)];
    let pending = Pending::apply(&mut items, ReminderAction::MarkDone("a".to_owned()));
    items.push(reminder("new", "2024-05-04", ReminderStatus::Pending));

    pending.settle(&mut items, &Err(()));

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].status, ReminderStatus::Pending);
}
