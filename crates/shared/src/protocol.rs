use serde::{Deserialize, Serialize};

use crate::domain::{
    AttendanceDraft, BatchDraft, BatchId, CourseDraft, InvoiceDraft, InvoiceId, InvoiceStatus,
    PerformanceDraft, ScheduleDraft, ScheduleId, Student, StudentDraft, StudentId, Teacher,
    TeacherDraft, TeacherId,
};

/// A request for one state transition, encoded as `{ "type": ..., "payload": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    AddStudent(StudentDraft),
    UpdateStudent(Student),
    DeleteStudent(StudentId),
    AddTeacher(TeacherDraft),
    UpdateTeacher(Teacher),
    DeleteTeacher(TeacherId),
    AddCourse(CourseDraft),
    AddBatch(BatchDraft),
    #[serde(rename_all = "camelCase")]
    AssignBatchTeacher {
        batch_id: BatchId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        teacher_id: Option<TeacherId>,
    },
    AddSchedule(ScheduleDraft),
    DeleteSchedule(ScheduleId),
    AddInvoice(InvoiceDraft),
    UpdateInvoiceStatus {
        id: InvoiceId,
        status: InvoiceStatus,
    },
    AddAttendance(AttendanceDraft),
    AddPerformance(PerformanceDraft),
}

impl Command {
    pub fn kind(&self) -> &'static str {
        match self {
            Command::AddStudent(_) => "ADD_STUDENT",
            Command::UpdateStudent(_) => "UPDATE_STUDENT",
            Command::DeleteStudent(_) => "DELETE_STUDENT",
            Command::AddTeacher(_) => "ADD_TEACHER",
            Command::UpdateTeacher(_) => "UPDATE_TEACHER",
            Command::DeleteTeacher(_) => "DELETE_TEACHER",
            Command::AddCourse(_) => "ADD_COURSE",
            Command::AddBatch(_) => "ADD_BATCH",
            Command::AssignBatchTeacher { .. } => "ASSIGN_BATCH_TEACHER",
            Command::AddSchedule(_) => "ADD_SCHEDULE",
            Command::DeleteSchedule(_) => "DELETE_SCHEDULE",
            Command::AddInvoice(_) => "ADD_INVOICE",
            Command::UpdateInvoiceStatus { .. } => "UPDATE_INVOICE_STATUS",
            Command::AddAttendance(_) => "ADD_ATTENDANCE",
            Command::AddPerformance(_) => "ADD_PERFORMANCE",
        }
    }
}

/// What a dispatch did. The snapshot is unchanged whenever this is `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DispatchOutcome {
    Created { id: String },
    Applied,
    NotFound,
}

impl DispatchOutcome {
    pub fn created_id(&self) -> Option<&str> {
        match self {
            DispatchOutcome::Created { id } => Some(id),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DispatchOutcome::NotFound)
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
