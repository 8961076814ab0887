use std::sync::Arc;

use anyhow::Result;

use jobwatch_core::{
    feed::FeedFetcher, run_pipeline, AppConfig, FeedLists, FilterConfig, NO_COURSES_MESSAGE,
    NO_MATCHES_MESSAGE, VISA_HINT_CAPTION,
};

use crate::render::{render_courses, render_jobs};
use crate::SearchArgs;

pub async fn run(config: &AppConfig, args: SearchArgs) -> Result<()> {
    let filter = filter_from_args(config, &args);
    let lists = feed_lists(config, &args);

    let fetcher = Arc::new(FeedFetcher::new(&config.sync)?);
    let output = run_pipeline(fetcher, &lists, &filter, config.sync.concurrency).await;

    if args.json {
        println!("{}", output.to_json()?);
        return Ok(());
    }

    println!("Jobs (salary >= £{} and matching keywords)\n", filter.min_salary);
    if output.is_empty_jobs() {
        println!("{}", NO_MATCHES_MESSAGE);
    } else {
        print!("{}", render_jobs(&output.jobs));
        println!("\n{}", VISA_HINT_CAPTION);
    }

    println!("\nCourses, calls for papers and fellowships\n");
    if output.courses.is_empty() {
        println!("{}", NO_COURSES_MESSAGE);
    } else {
        print!("{}", render_courses(&output.courses));
    }

    Ok(())
}

/// CLI flags override the config file's [filter] section
fn filter_from_args(config: &AppConfig, args: &SearchArgs) -> FilterConfig {
    let min_salary = args.min_salary.unwrap_or(config.filter.min_salary);
    let extra_feeds = args.extra_feeds.as_deref().unwrap_or("");

    let filter = match args.keywords.as_deref() {
        Some(raw) => FilterConfig::from_raw(min_salary, raw, extra_feeds),
        None => FilterConfig::new(min_salary, &config.filter.keywords)
            .with_extra_feeds(extra_feeds.lines()),
    };

    filter.with_extra_feeds(&args.feeds)
}

fn feed_lists(config: &AppConfig, args: &SearchArgs) -> FeedLists {
    let mut courses = config.feeds.courses.clone();
    courses.extend(args.course_feeds.iter().cloned());
    FeedLists::new(config.feeds.jobs.clone(), courses)
}
