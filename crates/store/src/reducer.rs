use shared::{
    domain::{
        AttendanceId, BatchId, CourseId, InvoiceId, PerformanceId, Record, ScheduleId, StudentId,
        TeacherId,
    },
    protocol::{Command, DispatchOutcome},
};

use crate::{ids::IdAllocator, snapshot::Snapshot};

/// Computes the snapshot that follows `command`. Total over the command set: an unknown id
/// leaves the snapshot as it was and reports `NotFound`.
pub fn reduce(
    state: &Snapshot,
    command: Command,
    ids: &mut IdAllocator,
) -> (Snapshot, DispatchOutcome) {
    let mut next = state.clone();
    let outcome = match command {
        Command::AddStudent(draft) => {
            let id = ids.allocate(&next.students);
            next.students.insert(0, draft.into_record(StudentId::new(id.clone())));
            DispatchOutcome::Created { id }
        }
        Command::UpdateStudent(student) => {
            let id = student.id.clone();
            replace_where(&mut next.students, id.as_str(), |_| student.clone())
        }
        Command::DeleteStudent(id) => remove_where(&mut next.students, id.as_str()),
        Command::AddTeacher(draft) => {
            let id = ids.allocate(&next.teachers);
            next.teachers.insert(0, draft.into_record(TeacherId::new(id.clone())));
            DispatchOutcome::Created { id }
        }
        Command::UpdateTeacher(teacher) => {
            let id = teacher.id.clone();
            replace_where(&mut next.teachers, id.as_str(), |_| teacher.clone())
        }
        Command::DeleteTeacher(id) => remove_where(&mut next.teachers, id.as_str()),
        Command::AddCourse(draft) => {
            let id = ids.allocate(&next.courses);
            next.courses.insert(0, draft.into_record(CourseId::new(id.clone())));
            DispatchOutcome::Created { id }
        }
        Command::AddBatch(draft) => {
            let id = ids.allocate(&next.batches);
            next.batches.insert(0, draft.into_record(BatchId::new(id.clone())));
            DispatchOutcome::Created { id }
        }
        Command::AssignBatchTeacher {
            batch_id,
            teacher_id,
        } => replace_where(&mut next.batches, batch_id.as_str(), |batch| {
            let mut batch = batch.clone();
            batch.teacher_id = teacher_id.clone();
            batch
        }),
        Command::AddSchedule(draft) => {
            let id = ids.allocate(&next.schedule);
            next.schedule.insert(0, draft.into_record(ScheduleId::new(id.clone())));
            DispatchOutcome::Created { id }
        }
        Command::DeleteSchedule(id) => remove_where(&mut next.schedule, id.as_str()),
        Command::AddInvoice(draft) => {
            let id = ids.allocate(&next.invoices);
            next.invoices.insert(0, draft.into_record(InvoiceId::new(id.clone())));
            DispatchOutcome::Created { id }
        }
        Command::UpdateInvoiceStatus { id, status } => {
            replace_where(&mut next.invoices, id.as_str(), |invoice| {
                let mut invoice = invoice.clone();
                invoice.status = status;
                invoice
            })
        }
        Command::AddAttendance(draft) => {
            let id = ids.allocate(&next.attendance);
            next.attendance.insert(0, draft.into_record(AttendanceId::new(id.clone())));
            DispatchOutcome::Created { id }
        }
        Command::AddPerformance(draft) => {
            let id = ids.allocate(&next.performance);
            next.performance.insert(0, draft.into_record(PerformanceId::new(id.clone())));
            DispatchOutcome::Created { id }
        }
    };

    (next, outcome)
}

/// Full-record replacement of every entry whose id matches.
fn replace_where<T: Record>(
    items: &mut [T],
    id: &str,
    replace: impl Fn(&T) -> T,
) -> DispatchOutcome {
    let mut matched = false;
    for item in items.iter_mut() {
        if item.record_id() == id {
            let replacement = replace(item);
            *item = replacement;
            matched = true;
        }
    }
    if matched {
        DispatchOutcome::Applied
    } else {
        DispatchOutcome::NotFound
    }
}

fn remove_where<T: Record>(items: &mut Vec<T>, id: &str) -> DispatchOutcome {
    let before = items.len();
    items.retain(|item| item.record_id() != id);
    if items.len() < before {
        DispatchOutcome::Applied
    } else {
        DispatchOutcome::NotFound
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
