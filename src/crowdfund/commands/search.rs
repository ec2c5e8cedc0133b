use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Project;
use crate::store::DataStore;
use chrono::NaiveDate;

const NO_PROJECTS: &str = "No projects found!";

/// Projects matching `keep`, in storage order. `miss` is reported when
/// projects exist but none match; an empty dataset gets the plain message.
fn filter<S, F>(store: &S, keep: F, miss: String) -> Result<CmdResult>
where
    S: DataStore,
    F: Fn(&Project) -> bool,
{
    let data = store.load()?;
    let mut result = CmdResult::default();
    if data.projects.is_empty() {
        result.add_message(CmdMessage::info(NO_PROJECTS));
        return Ok(result);
    }

    let found: Vec<Project> = data.projects.into_iter().filter(keep).collect();
    if found.is_empty() {
        result.add_message(CmdMessage::info(miss));
    }
    Ok(result.with_listed_projects(found))
}

pub fn by_start_date<S: DataStore>(store: &S, date: NaiveDate) -> Result<CmdResult> {
    filter(
        store,
        |p| p.start_date == date,
        format!("No projects started on {}", date),
    )
}

pub fn by_end_date<S: DataStore>(store: &S, date: NaiveDate) -> Result<CmdResult> {
    filter(
        store,
        |p| p.end_date == date,
        format!("No projects will end on {}", date),
    )
}
