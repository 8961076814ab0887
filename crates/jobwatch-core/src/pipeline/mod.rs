//! Fetch → extract → filter → sort, one stateless pass per run

mod filter;
mod rows;
mod runner;
mod sort;

pub use filter::{FeedLists, FilterConfig};
pub use rows::{build_course_rows, build_rows, CourseRow, JobRow};
pub use runner::{run_pipeline, RunOutput};
pub use sort::{sort_course_rows, sort_rows};

/// Shown instead of the jobs table when nothing survived the filters
pub const NO_MATCHES_MESSAGE: &str =
    "No matches yet. Try lowering the salary floor or adding more feeds.";

/// Shown instead of the courses table when no course feed produced entries
pub const NO_COURSES_MESSAGE: &str =
    "No courses, calls for papers or fellowships found. Add feeds under [feeds] courses in the config file.";

/// Must accompany any display of `JobRow::visa_hint`
pub const VISA_HINT_CAPTION: &str =
    "Visa flag is heuristic based on common keywords; verify in the ad/org site.";
