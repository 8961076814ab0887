//! Plain-text tables for the terminal

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use jobwatch_core::{CourseRow, JobRow};

const TITLE_WIDTH: usize = 48;
const SOURCE_WIDTH: usize = 24;

pub fn render_jobs(rows: &[JobRow]) -> String {
    let header = ["Date", "Title", "Source", "Salary(max)", "Visa?", "Link"];
    let body = rows
        .iter()
        .map(|row| {
            vec![
                short_date(&row.date_iso()),
                truncate(&row.title, TITLE_WIDTH),
                truncate(&row.source, SOURCE_WIDTH),
                row.salary_max.map(format_salary).unwrap_or_default(),
                if row.visa_hint { "yes".to_string() } else { String::new() },
                row.link.clone(),
            ]
        })
        .collect::<Vec<_>>();

    render_table(&header, &body)
}

pub fn render_courses(rows: &[CourseRow]) -> String {
    let header = ["Date", "Title", "Source", "Link"];
    let body = rows
        .iter()
        .map(|row| {
            vec![
                short_date(&row.date_iso()),
                truncate(&row.title, TITLE_WIDTH),
                truncate(&row.source, SOURCE_WIDTH),
                row.link.clone(),
            ]
        })
        .collect::<Vec<_>>();

    render_table(&header, &body)
}

fn render_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    push_line(&mut out, &header, &widths);

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);

    for row in rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let last = cells.len().saturating_sub(1);
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        out.push_str(cell);
        if i < last {
            out.push_str(&" ".repeat(width - cell.width() + 2));
        }
    }
    out.push('\n');
}

/// "2024-01-15T09:30:00+00:00" -> "2024-01-15"
fn short_date(iso: &str) -> String {
    iso.get(..10).unwrap_or(iso).to_string()
}

/// 65000 -> "£65,000"
fn format_salary(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("£{}", grouped)
}

/// Collapse whitespace runs (including newlines and tabs) to single spaces, then
/// cut to at most `max` display columns, ending with "..." when shortened
fn truncate(text: &str, max: usize) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.width() <= max {
        return text;
    }

    let budget = max.saturating_sub(3);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    format!("{}...", out)
}
