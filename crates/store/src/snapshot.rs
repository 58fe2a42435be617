use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shared::domain::{
    Attendance, Batch, Course, Invoice, Performance, Record, ScheduleItem, Student, Teacher,
};
use tracing::warn;

/// All eight collections at one point in time. Newest records come first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub teachers: Vec<Teacher>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub batches: Vec<Batch>,
    #[serde(default)]
    pub schedule: Vec<ScheduleItem>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    #[serde(default)]
    pub attendance: Vec<Attendance>,
    #[serde(default)]
    pub performance: Vec<Performance>,
}

fn find<'a, T: Record>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.record_id() == id)
}

impl Snapshot {
    pub fn student(&self, id: &str) -> Option<&Student> {
        find(&self.students, id)
    }

    pub fn teacher(&self, id: &str) -> Option<&Teacher> {
        find(&self.teachers, id)
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        find(&self.courses, id)
    }

    pub fn batch(&self, id: &str) -> Option<&Batch> {
        find(&self.batches, id)
    }

    pub fn schedule_item(&self, id: &str) -> Option<&ScheduleItem> {
        find(&self.schedule, id)
    }

    pub fn invoice(&self, id: &str) -> Option<&Invoice> {
        find(&self.invoices, id)
    }

    pub fn batch_course(&self, batch: &Batch) -> Option<&Course> {
        batch
            .course_id
            .as_ref()
            .and_then(|id| self.course(id.as_str()))
    }

    pub fn batch_teacher(&self, batch: &Batch) -> Option<&Teacher> {
        batch
            .teacher_id
            .as_ref()
            .and_then(|id| self.teacher(id.as_str()))
    }

    pub fn invoice_student(&self, invoice: &Invoice) -> Option<&Student> {
        self.student(invoice.student_id.as_str())
    }

    /// Every id in every collection, used to seed id allocation.
    pub fn all_ids(&self) -> impl Iterator<Item = &str> {
        self.students
            .iter()
            .map(Record::record_id)
            .chain(self.teachers.iter().map(Record::record_id))
            .chain(self.courses.iter().map(Record::record_id))
            .chain(self.batches.iter().map(Record::record_id))
            .chain(self.schedule.iter().map(Record::record_id))
            .chain(self.invoices.iter().map(Record::record_id))
            .chain(self.attendance.iter().map(Record::record_id))
            .chain(self.performance.iter().map(Record::record_id))
    }

    /// Drops records whose id repeats an earlier one in the same collection.
    pub fn normalized(self) -> Self {
        Self {
            students: dedupe("students", self.students),
            teachers: dedupe("teachers", self.teachers),
            courses: dedupe("courses", self.courses),
            batches: dedupe("batches", self.batches),
            schedule: dedupe("schedule", self.schedule),
            invoices: dedupe("invoices", self.invoices),
            attendance: dedupe("attendance", self.attendance),
            performance: dedupe("performance", self.performance),
        }
    }
}

fn dedupe<T: Record>(collection: &str, items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| {
            let fresh = seen.insert(item.record_id().to_string());
            if !fresh {
                warn!(collection, id = item.record_id(), "dropping duplicate record id");
            }
            fresh
        })
        .collect()
}

/// Blank for a missing reference, as the dashboard tables render it.
pub fn display_or_blank<T>(value: Option<&T>, label: impl Fn(&T) -> &str) -> String {
    value.map(|v| label(v).to_string()).unwrap_or_default()
}
