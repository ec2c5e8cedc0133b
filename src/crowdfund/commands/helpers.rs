use crate::error::{CrowdfundError, Result};
use crate::index::{index_projects, ProjectIndex};
use crate::model::{Dataset, Project};

/// Resolves a user's project number against `dataset`.
pub fn select_project(dataset: &Dataset, user_id: u64, index: ProjectIndex) -> Result<Project> {
    let indexed = index_projects(dataset, user_id);
    if indexed.is_empty() {
        return Err(CrowdfundError::NotFound("You have no projects".to_string()));
    }

    indexed
        .into_iter()
        .find(|dp| dp.index == index)
        .map(|dp| dp.project)
        .ok_or_else(|| CrowdfundError::NotFound(format!("Invalid project number {}", index)))
}

/// Fails if the user already owns a project called `title`, other than `except`.
pub fn ensure_title_free(
    dataset: &Dataset,
    user_id: u64,
    title: &str,
    except: Option<&str>,
) -> Result<()> {
    let taken = dataset
        .projects_of(user_id)
        .iter()
        .any(|p| p.title == title && Some(p.title.as_str()) != except);

    if taken {
        return Err(CrowdfundError::Duplicate(format!(
            "Project '{}' already exists! Enter another one",
            title
        )));
    }
    Ok(())
}
