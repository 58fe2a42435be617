use super::*;
use shared::domain::{
    InvoiceStatus, ScheduleDraft, ScheduleId, ScheduleKind, StudentDraft, StudentId,
};

struct Constant;

impl IdGenerator for Constant {
    fn next_id(&mut self) -> String {
        "same".to_string()
    }
}

fn amit() -> Command {
    Command::AddStudent(StudentDraft {
        name: "Amit".into(),
        email: "a@x.com".into(),
        ..StudentDraft::default()
    })
}

#[test]
fn held_snapshot_is_not_affected_by_later_dispatch() {
    let mut store = Store::with_generator(Snapshot::default(), SequentialIds::default());
    let before = store.snapshot();
    let after = store.dispatch(amit());

    assert!(before.students.is_empty());
    assert_eq!(after.students.len(), 1);
    assert_eq!(store.snapshot().students.len(), 1);
}

#[test]
fn not_found_keeps_the_same_snapshot() {
    let mut store = Store::default();
    let before = store.snapshot();
    let (after, outcome) =
        store.dispatch_with_outcome(Command::DeleteStudent(StudentId::from("ghost")));

    assert!(outcome.is_not_found());
    assert!(Arc::ptr_eq(&before, &after));
}

#[test]
fn colliding_generator_still_yields_distinct_ids() {
    let mut store = Store::with_generator(Snapshot::default(), Constant);
    for _ in 0..4 {
        store.dispatch(amit());
    }
    let snapshot = store.snapshot();
    let mut ids: Vec<_> = snapshot.students.iter().map(|s| s.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn deleted_ids_are_not_reissued() {
    let mut store = Store::with_generator(Snapshot::default(), Constant);
    let (_, first) = store.dispatch_with_outcome(amit());
    let first_id = first.created_id().expect("created").to_string();
    store.dispatch(Command::DeleteStudent(StudentId::new(first_id.clone())));

    let (_, second) = store.dispatch_with_outcome(amit());
    assert_ne!(second.created_id(), Some(first_id.as_str()));
}

#[test]
fn seed_ids_are_reserved() {
    let seed = Snapshot::sample(chrono::NaiveDate::from_ymd_opt(2025, 1, 10).expect("date"));
    let mut store = Store::with_generator(seed, SequentialIds::new("sch"));
    let (snapshot, outcome) = store.dispatch_with_outcome(Command::AddSchedule(ScheduleDraft {
        date: "2025-01-10".into(),
        kind: ScheduleKind::Exam,
        title: "Physics Quiz".into(),
        batch_id: None,
    }));

    // sch-1 and sch-2 belong to the seed
    assert_eq!(outcome.created_id(), Some("sch-3"));
    assert_eq!(snapshot.schedule.len(), 3);
}

#[test]
fn sample_seed_has_unique_ids_and_a_dangling_invoice() {
    let seed = Snapshot::sample(chrono::NaiveDate::from_ymd_opt(2025, 1, 10).expect("date"));
    assert_eq!(seed.clone().normalized(), seed);
    assert_eq!(seed.students.len(), 3);

    let invoice = &seed.invoices[0];
    assert_eq!(invoice.status, InvoiceStatus::Pending);
    assert_eq!(invoice.due_date, "2025-01-10");
    assert!(seed.invoice_student(invoice).is_none());
    assert_eq!(
        display_or_blank(seed.invoice_student(invoice), |s| s.name.as_str()),
        ""
    );
}

#[test]
fn normalized_drops_repeated_ids() {
    let mut seed = Snapshot::sample(chrono::NaiveDate::from_ymd_opt(2025, 1, 10).expect("date"));
    let mut copy = seed.students[2].clone();
    copy.batch_id = Some("B-3".into());
    seed.students.push(copy);

    let normalized = seed.normalized();
    assert_eq!(normalized.students.len(), 3);
    assert_eq!(normalized.students[2].batch_id.as_deref(), Some("B-1"));
}

#[test]
fn batch_lookups_resolve_weak_references() {
    let mut seed = Snapshot::sample(chrono::NaiveDate::from_ymd_opt(2025, 1, 10).expect("date"));
    let batch = seed.batch("b1").expect("b1").clone();
    assert_eq!(seed.batch_teacher(&batch).map(|t| t.name.as_str()), Some("Rahul Verma"));
    assert_eq!(seed.batch_course(&batch).map(|c| c.title.as_str()), Some("JEE Foundation"));

    seed.teachers.clear();
    assert!(seed.batch_teacher(&batch).is_none());
}

#[test]
fn schedule_lookup_follows_add_and_delete() {
    let mut store = Store::with_generator(Snapshot::default(), SequentialIds::new("sch"));
    let (snapshot, outcome) = store.dispatch_with_outcome(Command::AddSchedule(ScheduleDraft {
        date: "2025-01-10".into(),
        kind: ScheduleKind::Class,
        title: "Maths - Algebra".into(),
        batch_id: None,
    }));
    let id = outcome.created_id().expect("created").to_string();
    let item = snapshot.schedule_item(&id).expect("added item");
    assert_eq!(item.kind, ScheduleKind::Class);
    assert_eq!(item.title, "Maths - Algebra");

    let after = store.dispatch(Command::DeleteSchedule(ScheduleId::new(id.clone())));
    assert!(after.schedule_item(&id).is_none());
    assert!(snapshot.schedule_item(&id).is_some());
}
