use chrono::{DateTime, Utc};

use super::rows::{CourseRow, JobRow};

/// Composite key: a later date always outranks a higher salary.
/// Missing dates sort as the earliest instant, missing salaries as 0.
fn job_key(row: &JobRow) -> (DateTime<Utc>, u64) {
    (
        row.date.unwrap_or(DateTime::<Utc>::MIN_UTC),
        row.salary_max.unwrap_or(0),
    )
}

/// Newest first, then highest salary. Stable, so already-sorted input is unchanged.
pub fn sort_rows(mut rows: Vec<JobRow>) -> Vec<JobRow> {
    rows.sort_by(|a, b| job_key(b).cmp(&job_key(a)));
    rows
}

/// Newest first; undated rows last
pub fn sort_course_rows(mut rows: Vec<CourseRow>) -> Vec<CourseRow> {
    rows.sort_by(|a, b| {
        let a = a.date.unwrap_or(DateTime::<Utc>::MIN_UTC);
        let b = b.date.unwrap_or(DateTime::<Utc>::MIN_UTC);
        b.cmp(&a)
    });
    rows
}
