//! Given steps for date-range retrieval BDD scenarios.

use super::world::{FetchWorld, task_record};
use rstest_bdd_macros::given;

#[given(r#"an active task "{id}""#)]
fn active_task(world: &mut FetchWorld, id: String) -> Result<(), eyre::Report> {
    world
        .source
        .push_active_page(vec![task_record(&id, false, None)?])
        .map_err(|err| eyre::eyre!("seed active page: {err}"))
}

#[given(r#"a recurring active task "{id}""#)]
fn recurring_active_task(world: &mut FetchWorld, id: String) -> Result<(), eyre::Report> {
    world
        .source
        .push_active_page(vec![task_record(&id, true, None)?])
        .map_err(|err| eyre::eyre!("seed active page: {err}"))
}

#[given(r#"a completed task "{id}" with source URL "{url}""#)]
fn completed_task(world: &mut FetchWorld, id: String, url: String) -> Result<(), eyre::Report> {
    world
        .source
        .push_completed_page(vec![task_record(&id, false, Some(&url))?])
        .map_err(|err| eyre::eyre!("seed completed page: {err}"))
}

#[given(r#"the active source fails with "{message}""#)]
fn active_source_fails(world: &mut FetchWorld, message: String) -> Result<(), eyre::Report> {
    world
        .source
        .fail_active_at(0, message)
        .map_err(|err| eyre::eyre!("script active failure: {err}"))
}

#[given(r#"the completed source fails with "{message}""#)]
fn completed_source_fails(world: &mut FetchWorld, message: String) -> Result<(), eyre::Report> {
    world
        .source
        .fail_completed_at(0, message)
        .map_err(|err| eyre::eyre!("script completed failure: {err}"))
}

#[given("no Todoist token has been supplied")]
fn no_token(world: &mut FetchWorld) {
    world.has_token = false;
}
