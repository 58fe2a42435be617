use super::*;
use crate::ids::SequentialIds;
use shared::domain::{
    BatchDraft, CourseDraft, InvoiceStatus, ScheduleDraft, ScheduleKind, Student, StudentDraft,
};

fn allocator() -> IdAllocator {
    IdAllocator::new(SequentialIds::new("t"))
}

fn student(id: &str, name: &str) -> Student {
    Student {
        id: StudentId::from(id),
        name: name.into(),
        email: format!("{name}@example.com"),
        phone: None,
        batch_id: None,
        room: None,
        join_date: None,
    }
}

#[test]
fn add_prepends_with_allocated_id() {
    let mut state = Snapshot::default();
    state.students.push(student("old", "Old"));
    let mut ids = allocator();

    let (next, outcome) = reduce(
        &state,
        Command::AddStudent(StudentDraft {
            name: "Amit".into(),
            email: "a@x.com".into(),
            ..StudentDraft::default()
        }),
        &mut ids,
    );

    assert_eq!(outcome, DispatchOutcome::Created { id: "t-1".into() });
    assert_eq!(next.students.len(), 2);
    assert_eq!(next.students[0].id.as_str(), "t-1");
    assert_eq!(next.students[1].id.as_str(), "old");
    // input snapshot is untouched
    assert_eq!(state.students.len(), 1);
}

#[test]
fn update_replaces_whole_record() {
    let mut state = Snapshot::default();
    state.students = vec![
        Student {
            phone: Some("123".into()),
            ..student("s1", "Asha")
        },
        student("s2", "Ravi"),
    ];

    let replacement = student("s1", "Asha K");
    let (next, outcome) = reduce(
        &state,
        Command::UpdateStudent(replacement.clone()),
        &mut allocator(),
    );

    assert_eq!(outcome, DispatchOutcome::Applied);
    assert_eq!(next.students[0], replacement);
    assert!(next.students[0].phone.is_none());
    assert_eq!(next.students[1], state.students[1]);
}

#[test]
fn delete_removes_every_match() {
    let mut state = Snapshot::default();
    state.students = vec![student("dup", "A"), student("keep", "B"), student("dup", "C")];

    let (next, outcome) = reduce(
        &state,
        Command::DeleteStudent(StudentId::from("dup")),
        &mut allocator(),
    );

    assert_eq!(outcome, DispatchOutcome::Applied);
    assert_eq!(next.students.len(), 1);
    assert_eq!(next.students[0].id.as_str(), "keep");
}

#[test]
fn unknown_ids_leave_state_equal() {
    let mut state = Snapshot::sample(chrono::NaiveDate::from_ymd_opt(2025, 1, 10).expect("date"));
    state.students.push(student("s9", "Extra"));

    let commands = vec![
        Command::UpdateStudent(student("missing", "Nobody")),
        Command::DeleteStudent(StudentId::from("missing")),
        Command::DeleteSchedule(ScheduleId::from("missing")),
        Command::UpdateInvoiceStatus {
            id: InvoiceId::from("missing"),
            status: InvoiceStatus::Paid,
        },
        Command::AssignBatchTeacher {
            batch_id: BatchId::from("missing"),
            teacher_id: Some(TeacherId::from("t1")),
        },
        Command::DeleteTeacher(TeacherId::from("missing")),
    ];

    for command in commands {
        let (next, outcome) = reduce(&state, command, &mut allocator());
        assert_eq!(outcome, DispatchOutcome::NotFound);
        assert_eq!(next, state);
    }
}

#[test]
fn assign_touches_only_teacher_field() {
    let mut state = Snapshot::default();
    state.batches.push(BatchDraft {
        name: "Batch A".into(),
        course_id: Some(CourseId::from("c1")),
        teacher_id: Some(TeacherId::from("t1")),
    }
    .into_record(BatchId::from("b1")));

    let (cleared, _) = reduce(
        &state,
        Command::AssignBatchTeacher {
            batch_id: BatchId::from("b1"),
            teacher_id: None,
        },
        &mut allocator(),
    );
    let batch = &cleared.batches[0];
    assert!(batch.teacher_id.is_none());
    assert_eq!(batch.name, "Batch A");
    assert_eq!(batch.course_id, Some(CourseId::from("c1")));
}

#[test]
fn every_add_command_creates_in_its_collection() {
    let state = Snapshot::default();
    let mut ids = allocator();

    let (state, _) = reduce(
        &state,
        Command::AddCourse(CourseDraft {
            title: "JEE".into(),
            description: None,
        }),
        &mut ids,
    );
    let (state, _) = reduce(
        &state,
        Command::AddSchedule(ScheduleDraft {
            date: "2025-01-10".into(),
            kind: ScheduleKind::Class,
            title: "Algebra".into(),
            batch_id: None,
        }),
        &mut ids,
    );

    assert_eq!(state.courses.len(), 1);
    assert_eq!(state.schedule.len(), 1);
    assert_ne!(state.courses[0].id.as_str(), state.schedule[0].id.as_str());
}

#[test]
fn teacher_add_then_update() {
    let mut ids = allocator();
    let (state, outcome) = reduce(
        &Snapshot::default(),
        Command::AddTeacher(shared::domain::TeacherDraft {
            name: "Rahul Verma".into(),
            email: "rahul@center.com".into(),
            subject: Some("Mathematics".into()),
            ..Default::default()
        }),
        &mut ids,
    );
    let id = TeacherId::new(outcome.created_id().expect("created"));

    let mut updated = state.teachers[0].clone();
    updated.subject = Some("Statistics".into());
    updated.room = Some("104".into());
    let (state, outcome) = reduce(&state, Command::UpdateTeacher(updated.clone()), &mut ids);

    assert_eq!(outcome, DispatchOutcome::Applied);
    assert_eq!(state.teachers.len(), 1);
    assert_eq!(state.teachers[0].id, id);
    assert_eq!(state.teachers[0], updated);
}
