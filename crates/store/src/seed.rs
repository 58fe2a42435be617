use chrono::NaiveDate;
use shared::domain::{
    Batch, BatchId, Course, CourseId, Invoice, InvoiceId, InvoiceStatus, ScheduleId, ScheduleItem,
    ScheduleKind, Student, StudentId, Teacher, TeacherId,
};

use crate::snapshot::Snapshot;

impl Snapshot {
    /// The sample records the dashboard starts with. Schedule items and the
    /// open invoice are dated `today`.
    pub fn sample(today: NaiveDate) -> Self {
        let today = today.format("%Y-%m-%d").to_string();

        Self {
            students: vec![
                sample_student("1", "John Doe", "B-1", "R-101", "john@example.com", "9876543210", "13-08-2025"),
                sample_student("2", "Jane Smith", "B-2", "R-102", "jane@example.com", "9876543211", "05-08-2025"),
                sample_student("3", "Michael Johnson", "B-1", "R-103", "michael@example.com", "9876543212", "24-07-2025"),
            ],
            teachers: vec![
                Teacher {
                    id: TeacherId::from("t1"),
                    name: "Rahul Verma".into(),
                    email: "rahul@center.com".into(),
                    subject: Some("Mathematics".into()),
                    batch_id: Some("Batch A".into()),
                    room: Some("102".into()),
                },
                Teacher {
                    id: TeacherId::from("t2"),
                    name: "Neha Kapoor".into(),
                    email: "neha@center.com".into(),
                    subject: Some("Physics".into()),
                    batch_id: Some("Batch B".into()),
                    room: Some("103".into()),
                },
            ],
            courses: vec![
                Course {
                    id: CourseId::from("c1"),
                    title: "JEE Foundation".into(),
                    description: None,
                },
                Course {
                    id: CourseId::from("c2"),
                    title: "NEET Crash Course".into(),
                    description: None,
                },
            ],
            batches: vec![
                Batch {
                    id: BatchId::from("b1"),
                    name: "Batch A".into(),
                    course_id: Some(CourseId::from("c1")),
                    teacher_id: Some(TeacherId::from("t1")),
                },
                Batch {
                    id: BatchId::from("b2"),
                    name: "Batch B".into(),
                    course_id: Some(CourseId::from("c2")),
                    teacher_id: Some(TeacherId::from("t2")),
                },
            ],
            schedule: vec![
                ScheduleItem {
                    id: ScheduleId::from("sch-1"),
                    date: today.clone(),
                    kind: ScheduleKind::Class,
                    title: "Maths - Algebra".into(),
                    batch_id: Some(BatchId::from("b1")),
                },
                ScheduleItem {
                    id: ScheduleId::from("sch-2"),
                    date: today.clone(),
                    kind: ScheduleKind::Exam,
                    title: "Physics Quiz".into(),
                    batch_id: Some(BatchId::from("b2")),
                },
            ],
            // `b1-student` has no matching student record
            invoices: vec![Invoice {
                id: InvoiceId::from("inv-1"),
                student_id: StudentId::from("b1-student"),
                amount: 5000.0,
                status: InvoiceStatus::Pending,
                due_date: today,
            }],
            attendance: Vec::new(),
            performance: Vec::new(),
        }
    }
}

fn sample_student(
    id: &str,
    name: &str,
    batch: &str,
    room: &str,
    email: &str,
    phone: &str,
    join_date: &str,
) -> Student {
    Student {
        id: StudentId::from(id),
        name: name.into(),
        email: email.into(),
        phone: Some(phone.into()),
        batch_id: Some(batch.into()),
        room: Some(room.into()),
        join_date: Some(join_date.into()),
    }
}
