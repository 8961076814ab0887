pub mod config;
pub mod error;
pub mod extract;
pub mod feed;
pub mod pipeline;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use pipeline::{
    run_pipeline, CourseRow, FeedLists, FilterConfig, JobRow, RunOutput, NO_COURSES_MESSAGE,
    NO_MATCHES_MESSAGE, VISA_HINT_CAPTION,
};
