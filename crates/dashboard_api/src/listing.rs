use serde::Serialize;
use shared::domain::{BatchId, ScheduleItem, Student, Teacher};
use store::{display_or_blank, Snapshot};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone)]
pub struct StudentQuery {
    pub search: String,
    /// Exact batch label; empty or `All` disables the filter.
    pub batch: Option<String>,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
}

impl Default for StudentQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            batch: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
    /// 1-based position of the first row, 0 when the page holds no rows.
    pub from: usize,
    pub to: usize,
}

impl<T: Clone> Page<T> {
    fn slice(matches: &[T], page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let page = page.max(1);
        let total = matches.len();
        let start = (page - 1).saturating_mul(page_size);
        let rows: Vec<T> = matches.iter().skip(start).take(page_size).cloned().collect();
        let (from, to) = if start >= total {
            (0, 0)
        } else {
            (start + 1, start.saturating_add(page_size).min(total))
        };

        Self {
            rows,
            page,
            page_count: total.div_ceil(page_size),
            total,
            from,
            to,
        }
    }

    /// "1 to 10 of 24", as shown under the table.
    pub fn range_label(&self) -> String {
        format!("{} to {} of {}", self.from, self.to, self.total)
    }
}

pub fn list_students(snapshot: &Snapshot, query: &StudentQuery) -> Page<Student> {
    let needle = query.search.to_lowercase();
    let batch = query
        .batch
        .as_deref()
        .filter(|b| !b.is_empty() && *b != "All");

    let matches: Vec<Student> = snapshot
        .students
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .filter(|s| batch.map_or(true, |b| s.batch_id.as_deref() == Some(b)))
        .cloned()
        .collect();

    Page::slice(&matches, query.page, query.page_size)
}

pub fn list_teachers<'a>(snapshot: &'a Snapshot, search: &str) -> Vec<&'a Teacher> {
    let needle = search.to_lowercase();
    snapshot
        .teachers
        .iter()
        .filter(|t| {
            t.name.to_lowercase().contains(&needle)
                || t.subject
                    .as_deref()
                    .is_some_and(|s| s.to_lowercase().contains(&needle))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRow {
    pub id: BatchId,
    pub name: String,
    pub course_title: String,
    pub teacher_name: String,
}

pub fn batch_rows(snapshot: &Snapshot) -> Vec<BatchRow> {
    snapshot
        .batches
        .iter()
        .map(|batch| BatchRow {
            id: batch.id.clone(),
            name: batch.name.clone(),
            course_title: display_or_blank(snapshot.batch_course(batch), |c| c.title.as_str()),
            teacher_name: display_or_blank(snapshot.batch_teacher(batch), |t| t.name.as_str()),
        })
        .collect()
}

pub fn schedule_for_date<'a>(snapshot: &'a Snapshot, date: &str) -> Vec<&'a ScheduleItem> {
    snapshot
        .schedule
        .iter()
        .filter(|item| item.date == date)
        .collect()
}

#[cfg(test)]
#[path = "tests/listing_tests.rs"]
mod tests;
