use crate::commands::helpers::select_project;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ProjectIndex;
use crate::model::User;
use crate::store::DataStore;

/// Removes one of `user`'s projects once `confirmed`.
///
/// Without confirmation nothing is written and `affected_projects` is empty.
pub fn run<S: DataStore>(
    store: &mut S,
    user: &User,
    index: ProjectIndex,
    confirmed: bool,
) -> Result<CmdResult> {
    let mut data = store.load()?;
    let project = select_project(&data, user.id, index)?;
    let mut result = CmdResult::default();

    if !confirmed {
        result.add_message(CmdMessage::warning("Deletion cancelled."));
        return Ok(result);
    }

    data.projects.retain(|p| !p.has_key(user.id, &project.title));
    store.save(&data)?;

    log::info!(
        "event=project_delete status=ok user_id={} title={:?}",
        user.id,
        project.title
    );
    result.add_message(CmdMessage::success(format!(
        "Project '{}' has been deleted successfully!",
        project.title
    )));
    Ok(result.with_affected_projects(vec![project]))
}
