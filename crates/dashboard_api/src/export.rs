use serde::Serialize;
use shared::{
    domain::{InvoiceId, InvoiceStatus},
    error::ApiError,
};
use store::Snapshot;

const DOCUMENT_TITLE: &str = "Coaching Center - Invoice";
const TUITION_LINE: &str = "Tuition Fee";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    pub description: String,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub due_date: String,
}

/// A single invoice joined with its student, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDocument {
    pub title: String,
    pub invoice_id: InvoiceId,
    /// Student name, or the raw student id when the student is gone.
    pub student: String,
    pub lines: Vec<InvoiceLine>,
}

impl InvoiceDocument {
    pub fn file_name(&self) -> String {
        format!("invoice-{}.csv", self.invoice_id)
    }

    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", csv_quote(&self.title)));
        out.push_str(&format!("Invoice ID,{}\n", csv_quote(self.invoice_id.as_str())));
        out.push_str(&format!("Student,{}\n", csv_quote(&self.student)));
        out.push_str("Description,Amount,Status,Due Date\n");
        for line in &self.lines {
            out.push_str(&format!(
                "{},{},{},{}\n",
                csv_quote(&line.description),
                line.amount,
                line.status,
                csv_quote(&line.due_date)
            ));
        }
        out
    }
}

pub fn invoice_document(snapshot: &Snapshot, invoice_id: &str) -> Result<InvoiceDocument, ApiError> {
    let invoice = snapshot
        .invoice(invoice_id)
        .ok_or_else(|| ApiError::not_found(format!("invoice {invoice_id} not found")))?;
    let student = snapshot
        .invoice_student(invoice)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| invoice.student_id.to_string());

    Ok(InvoiceDocument {
        title: DOCUMENT_TITLE.to_string(),
        invoice_id: invoice.id.clone(),
        student,
        lines: vec![InvoiceLine {
            description: TUITION_LINE.to_string(),
            amount: invoice.amount,
            status: invoice.status,
            due_date: invoice.due_date.clone(),
        }],
    })
}

fn csv_quote(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
#[path = "tests/export_tests.rs"]
mod tests;
