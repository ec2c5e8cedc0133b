use crate::commands::helpers::{ensure_title_free, select_project};
use crate::commands::{CmdMessage, CmdResult, ProjectUpdate};
use crate::error::{CrowdfundError, Result};
use crate::model::{Dataset, User};
use crate::store::DataStore;
use crate::validation::{date_after, parse_target, require_details, require_title, valid_date};

/// Blank and missing inputs both mean "keep the current value".
fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Checks a replacement title for the project currently called `current`.
/// Keeping the same title is allowed. Returns the trimmed title.
pub fn check_title(dataset: &Dataset, user: &User, title: &str, current: &str) -> Result<String> {
    let title = require_title(title)?;
    ensure_title_free(dataset, user.id, &title, Some(current))?;
    Ok(title)
}

/// Applies `update` to one of `user`'s projects.
///
/// Only supplied fields are validated. The stored project is located by its
/// pre-edit `(owner, title)` key, so a rename replaces the same record.
pub fn run<S: DataStore>(store: &mut S, user: &User, update: &ProjectUpdate) -> Result<CmdResult> {
    let mut data = store.load()?;
    let original = select_project(&data, user.id, update.index)?;
    let mut project = original.clone();

    if let Some(title) = supplied(&update.title) {
        project.title = check_title(&data, user, title, &original.title)?;
    }
    if let Some(details) = supplied(&update.details) {
        project.details = require_details(details)?;
    }
    if let Some(target) = supplied(&update.total_target) {
        project.total_target = parse_target(target)?;
    }

    let new_start = supplied(&update.start_date).map(valid_date).transpose()?;
    let new_end = supplied(&update.end_date).map(valid_date).transpose()?;
    if new_start.is_some() || new_end.is_some() {
        project.start_date = new_start.unwrap_or(project.start_date);
        project.end_date = new_end.unwrap_or(project.end_date);
        date_after(project.end_date, project.start_date)?;
    }

    let position = data
        .position_of(user.id, &original.title)
        .ok_or_else(|| {
            CrowdfundError::NotFound(format!("Project '{}' not found", original.title))
        })?;
    data.projects[position] = project.clone();
    store.save(&data)?;

    log::info!(
        "event=project_edit status=ok user_id={} from={:?} to={:?}",
        user.id,
        original.title,
        project.title
    );
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Project '{}' updated successfully!",
        project.title
    )));
    Ok(result.with_affected_projects(vec![project]))
}
