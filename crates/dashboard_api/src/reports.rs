use std::collections::BTreeMap;

use serde::Serialize;
use shared::domain::{Attendance, InvoiceId, InvoiceStatus, StudentId};
use store::{display_or_blank, Snapshot};

#[derive(Debug, Clone, Default)]
pub struct AttendanceQuery {
    pub date: Option<String>,
    pub student_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceReport {
    pub rows: Vec<Attendance>,
    pub present: usize,
    pub absent: usize,
    /// Percentage of present rows; `None` with no rows.
    pub rate: Option<f64>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn percent(part: usize, whole: usize) -> Option<f64> {
    (whole > 0).then(|| part as f64 * 100.0 / whole as f64)
}

pub fn attendance_report(snapshot: &Snapshot, query: &AttendanceQuery) -> AttendanceReport {
    let date = non_empty(&query.date);
    let student = non_empty(&query.student_id);

    let rows: Vec<Attendance> = snapshot
        .attendance
        .iter()
        .filter(|a| date.map_or(true, |d| a.date == d))
        .filter(|a| student.map_or(true, |s| a.student_id.as_str() == s))
        .cloned()
        .collect();
    let present = rows.iter().filter(|a| a.present).count();

    AttendanceReport {
        present,
        absent: rows.len() - present,
        rate: percent(present, rows.len()),
        rows,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformancePoint {
    pub date: String,
    pub marks: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    /// Average marks per date, oldest first.
    pub points: Vec<PerformancePoint>,
    pub overall: Option<f64>,
}

pub fn performance_report(snapshot: &Snapshot, student_id: Option<&str>) -> PerformanceReport {
    let mut by_date: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    let mut sum = 0.0;
    let mut count = 0usize;

    for entry in snapshot
        .performance
        .iter()
        .filter(|p| student_id.map_or(true, |s| p.student_id.as_str() == s))
    {
        let slot = by_date.entry(entry.date.as_str()).or_insert((0.0, 0));
        slot.0 += entry.marks;
        slot.1 += 1;
        sum += entry.marks;
        count += 1;
    }

    PerformanceReport {
        points: by_date
            .into_iter()
            .map(|(date, (total, n))| PerformancePoint {
                date: date.to_string(),
                marks: total / n as f64,
            })
            .collect(),
        overall: (count > 0).then(|| sum / count as f64),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRow {
    pub id: InvoiceId,
    pub student_id: StudentId,
    /// Blank when the student no longer exists.
    pub student_name: String,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub due_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusTotal {
    pub status: InvoiceStatus,
    pub count: usize,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    pub rows: Vec<InvoiceRow>,
    pub totals: Vec<StatusTotal>,
    pub collected: f64,
}

pub fn finance_summary(snapshot: &Snapshot) -> FinanceSummary {
    let rows: Vec<InvoiceRow> = snapshot
        .invoices
        .iter()
        .map(|invoice| InvoiceRow {
            id: invoice.id.clone(),
            student_id: invoice.student_id.clone(),
            student_name: display_or_blank(snapshot.invoice_student(invoice), |s| {
                s.name.as_str()
            }),
            amount: invoice.amount,
            status: invoice.status,
            due_date: invoice.due_date.clone(),
        })
        .collect();

    let totals: Vec<StatusTotal> = InvoiceStatus::ALL
        .iter()
        .map(|status| {
            let matching = rows.iter().filter(|r| r.status == *status);
            StatusTotal {
                status: *status,
                count: matching.clone().count(),
                amount: matching.map(|r| r.amount).sum(),
            }
        })
        .collect();
    let collected = totals
        .iter()
        .find(|t| t.status == InvoiceStatus::Paid)
        .map_or(0.0, |t| t.amount);

    FinanceSummary {
        rows,
        totals,
        collected,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_students: usize,
    pub total_teachers: usize,
    pub total_courses: usize,
    pub total_batches: usize,
    pub collected_revenue: f64,
    /// Pending plus overdue.
    pub outstanding_amount: f64,
    pub attendance_rate: Option<f64>,
}

pub fn dashboard_stats(snapshot: &Snapshot) -> DashboardStats {
    let finance = finance_summary(snapshot);
    let outstanding_amount = finance
        .totals
        .iter()
        .filter(|t| t.status != InvoiceStatus::Paid)
        .map(|t| t.amount)
        .sum();
    let attendance = attendance_report(snapshot, &AttendanceQuery::default());

    DashboardStats {
        total_students: snapshot.students.len(),
        total_teachers: snapshot.teachers.len(),
        total_courses: snapshot.courses.len(),
        total_batches: snapshot.batches.len(),
        collected_revenue: finance.collected,
        outstanding_amount,
        attendance_rate: attendance.rate,
    }
}

#[cfg(test)]
#[path = "tests/reports_tests.rs"]
mod tests;
