use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

id_newtype!(StudentId);
id_newtype!(TeacherId);
id_newtype!(CourseId);
id_newtype!(BatchId);
id_newtype!(ScheduleId);
id_newtype!(InvoiceId);
id_newtype!(AttendanceId);
id_newtype!(PerformanceId);

/// Anything held in a store collection, keyed by an opaque string id.
pub trait Record {
    fn record_id(&self) -> &str;
}

macro_rules! record_impl {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                fn record_id(&self) -> &str {
                    self.id.as_str()
                }
            }
        )*
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleKind {
    Class,
    Exam,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 3] = [
        InvoiceStatus::Paid,
        InvoiceStatus::Pending,
        InvoiceStatus::Overdue,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Overdue => "overdue",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Free-text batch label such as `B-1`; not checked against `Batch` ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
}

impl StudentDraft {
    pub fn into_record(self, id: StudentId) -> Student {
        Student {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            batch_id: self.batch_id,
            room: self.room,
            join_date: self.join_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Display label of the batch the teacher runs, e.g. `Batch A`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDraft {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

impl TeacherDraft {
    pub fn into_record(self, id: TeacherId) -> Teacher {
        Teacher {
            id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            batch_id: self.batch_id,
            room: self.room,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CourseDraft {
    pub fn into_record(self, id: CourseId) -> Course {
        Course {
            id,
            title: self.title,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub id: BatchId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<CourseId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<TeacherId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<CourseId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<TeacherId>,
}

impl BatchDraft {
    pub fn into_record(self, id: BatchId) -> Batch {
        Batch {
            id,
            name: self.name,
            course_id: self.course_id,
            teacher_id: self.teacher_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub id: ScheduleId,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    #[serde(rename = "type")]
    pub kind: ScheduleKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<BatchId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDraft {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: ScheduleKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<BatchId>,
}

impl ScheduleDraft {
    pub fn into_record(self, id: ScheduleId) -> ScheduleItem {
        ScheduleItem {
            id,
            date: self.date,
            kind: self.kind,
            title: self.title,
            batch_id: self.batch_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    pub student_id: StudentId,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub due_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub student_id: StudentId,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub due_date: String,
}

impl InvoiceDraft {
    pub fn into_record(self, id: InvoiceId) -> Invoice {
        Invoice {
            id,
            student_id: self.student_id,
            amount: self.amount,
            status: self.status,
            due_date: self.due_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: AttendanceId,
    pub student_id: StudentId,
    pub date: String,
    pub present: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDraft {
    pub student_id: StudentId,
    pub date: String,
    pub present: bool,
}

impl AttendanceDraft {
    pub fn into_record(self, id: AttendanceId) -> Attendance {
        Attendance {
            id,
            student_id: self.student_id,
            date: self.date,
            present: self.present,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub id: PerformanceId,
    pub student_id: StudentId,
    pub date: String,
    pub marks: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceDraft {
    pub student_id: StudentId,
    pub date: String,
    pub marks: f64,
}

impl PerformanceDraft {
    pub fn into_record(self, id: PerformanceId) -> Performance {
        Performance {
            id,
            student_id: self.student_id,
            date: self.date,
            marks: self.marks,
        }
    }
}

record_impl!(
    Student,
    Teacher,
    Course,
    Batch,
    ScheduleItem,
    Invoice,
    Attendance,
    Performance,
);
