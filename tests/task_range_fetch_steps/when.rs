//! When steps for date-range retrieval BDD scenarios.

use super::world::{FetchWorld, run_async};
use rstest_bdd_macros::when;
use todoist_bridge::task::services::TaskRangeFetcher;

fn fetch(world: &mut FetchWorld, start: &str, end: &str, include_completed: bool) {
    let fetcher = if world.has_token {
        TaskRangeFetcher::new(world.source.clone())
    } else {
        TaskRangeFetcher::unconfigured()
    };
    let outcome = run_async(fetcher.fetch_tasks(start, end, include_completed));
    world.last_outcome = Some(outcome);
}

#[when(r#"tasks are fetched from "{start}" to "{end}" including completed tasks"#)]
fn fetch_including_completed(world: &mut FetchWorld, start: String, end: String) {
    fetch(world, &start, &end, true);
}

#[when(r#"tasks are fetched from "{start}" to "{end}" excluding completed tasks"#)]
fn fetch_excluding_completed(world: &mut FetchWorld, start: String, end: String) {
    fetch(world, &start, &end, false);
}
