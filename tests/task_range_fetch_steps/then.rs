//! Then steps for date-range retrieval BDD scenarios.

use super::world::FetchWorld;
use rstest_bdd_macros::then;
use todoist_bridge::task::domain::RawTask;

#[then(r#"the returned task ids are "{ids}""#)]
fn returned_ids(world: &FetchWorld, ids: String) -> Result<(), eyre::Report> {
    let mut expected: Vec<String> = ids.split(',').map(|id| id.trim().to_owned()).collect();
    let mut actual: Vec<String> = world
        .outcome()?
        .tasks()
        .iter()
        .filter_map(RawTask::id)
        .collect();
    expected.sort();
    actual.sort();

    if actual != expected {
        return Err(eyre::eyre!("expected task ids {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"task "{id}" has URL "{url}""#)]
fn task_has_url(world: &FetchWorld, id: String, url: String) -> Result<(), eyre::Report> {
    let task = world
        .outcome()?
        .tasks()
        .iter()
        .find(|task| task.id().as_deref() == Some(id.as_str()))
        .ok_or_else(|| eyre::eyre!("task {id} was not returned"))?;

    if task.url() != Some(url.as_str()) {
        return Err(eyre::eyre!("expected URL {url}, found {:?}", task.url()));
    }
    Ok(())
}

#[then("no tasks are returned")]
fn no_tasks(world: &FetchWorld) -> Result<(), eyre::Report> {
    let count = world.outcome()?.tasks().len();
    if count != 0 {
        return Err(eyre::eyre!("expected no tasks, found {count}"));
    }
    Ok(())
}

#[then("no error is reported")]
fn no_error(world: &FetchWorld) -> Result<(), eyre::Report> {
    if let Some(message) = world.outcome()?.error_message() {
        return Err(eyre::eyre!("unexpected error: {message}"));
    }
    Ok(())
}

#[then(r#"the error message is "{message}""#)]
fn error_message_is(world: &FetchWorld, message: String) -> Result<(), eyre::Report> {
    let actual = world.outcome()?.error_message();
    if actual.as_deref() != Some(message.as_str()) {
        return Err(eyre::eyre!("expected error {message:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the error message contains "{text}""#)]
fn error_message_contains(world: &FetchWorld, text: String) -> Result<(), eyre::Report> {
    let actual = world
        .outcome()?
        .error_message()
        .ok_or_else(|| eyre::eyre!("expected an error message"))?;
    if !actual.contains(&text) {
        return Err(eyre::eyre!(
            "expected error containing {text:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then("the completed source was not queried")]
fn completed_not_queried(world: &FetchWorld) -> Result<(), eyre::Report> {
    let calls = world
        .source
        .completed_calls()
        .map_err(|err| eyre::eyre!("read completed calls: {err}"))?;
    if calls != 0 {
        return Err(eyre::eyre!("expected no completed calls, found {calls}"));
    }
    Ok(())
}

#[then("no source was queried")]
fn no_source_queried(world: &FetchWorld) -> Result<(), eyre::Report> {
    let active = world
        .source
        .active_calls()
        .map_err(|err| eyre::eyre!("read active calls: {err}"))?;
    let completed = world
        .source
        .completed_calls()
        .map_err(|err| eyre::eyre!("read completed calls: {err}"))?;
    if active + completed != 0 {
        return Err(eyre::eyre!(
            "expected no source calls, found {active} active and {completed} completed"
        ));
    }
    Ok(())
}
