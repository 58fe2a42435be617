use shared::{
    error::ApiError,
    protocol::{Command, DispatchOutcome},
};
use store::Store;
use tracing::{debug, info};

mod export;
mod listing;
mod reports;

pub use export::{invoice_document, InvoiceDocument, InvoiceLine};
pub use listing::{
    batch_rows, list_students, list_teachers, schedule_for_date, BatchRow, Page, StudentQuery,
    DEFAULT_PAGE_SIZE,
};
pub use reports::{
    attendance_report, dashboard_stats, finance_summary, performance_report, AttendanceQuery,
    AttendanceReport, DashboardStats, FinanceSummary, InvoiceRow, PerformancePoint,
    PerformanceReport, StatusTotal,
};

/// Validates `command`, then hands it to the store.
pub fn submit(store: &mut Store, command: Command) -> Result<DispatchOutcome, ApiError> {
    validate_command(&command).inspect_err(|error| {
        info!(kind = command.kind(), message = %error.message, "command rejected");
    })?;
    let kind = command.kind();
    let (_, outcome) = store.dispatch_with_outcome(command);
    debug!(kind, ?outcome, "command submitted");
    Ok(outcome)
}

/// Presence checks only; formats are never inspected.
pub fn validate_command(command: &Command) -> Result<(), ApiError> {
    match command {
        Command::AddStudent(draft) => {
            require("name", &draft.name)?;
            require("email", &draft.email)
        }
        Command::UpdateStudent(student) => {
            require("id", student.id.as_str())?;
            require("name", &student.name)?;
            require("email", &student.email)
        }
        Command::AddTeacher(draft) => {
            require("name", &draft.name)?;
            require("email", &draft.email)
        }
        Command::UpdateTeacher(teacher) => {
            require("id", teacher.id.as_str())?;
            require("name", &teacher.name)?;
            require("email", &teacher.email)
        }
        Command::DeleteStudent(id) => require("id", id.as_str()),
        Command::DeleteTeacher(id) => require("id", id.as_str()),
        Command::AddCourse(draft) => require("title", &draft.title),
        Command::AddBatch(draft) => require("name", &draft.name),
        Command::AssignBatchTeacher { batch_id, .. } => require("batchId", batch_id.as_str()),
        Command::AddSchedule(draft) => {
            require("title", &draft.title)?;
            require("date", &draft.date)
        }
        Command::DeleteSchedule(id) => require("id", id.as_str()),
        Command::AddInvoice(draft) => {
            require("studentId", draft.student_id.as_str())?;
            if draft.amount == 0.0 || draft.amount.is_nan() {
                return Err(ApiError::validation("amount is required"));
            }
            Ok(())
        }
        Command::UpdateInvoiceStatus { id, .. } => require("id", id.as_str()),
        Command::AddAttendance(draft) => {
            require("studentId", draft.student_id.as_str())?;
            require("date", &draft.date)
        }
        Command::AddPerformance(draft) => {
            require("studentId", draft.student_id.as_str())?;
            require("date", &draft.date)
        }
    }
}

fn require(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{field} is required")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
