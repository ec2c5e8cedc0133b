//! # Project Numbering
//!
//! Projects have no id of their own. When a user edits or deletes one, they
//! pick it by its position in **their own** project list, numbered from 1 in
//! storage order:
//!
//! ```text
//! storage:  [A(user 0), B(user 1), C(user 0)]
//! user 0:   1. A   2. C
//! user 1:   1. B
//! ```
//!
//! The number is only meaningful against the dataset it was computed from.
//! Once resolved, the project is addressed by `(owner_user_id, title)`.

use crate::model::{Dataset, Project};
use crate::validation::ValidationError;
use std::str::FromStr;

/// A 1-based position in one user's project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectIndex(pub usize);

impl std::fmt::Display for ProjectIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProjectIndex {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(ProjectIndex(n)),
            _ => Err(ValidationError::InvalidSelector(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayProject {
    pub project: Project,
    pub index: ProjectIndex,
}

/// Numbers the projects owned by `user_id`, keeping storage order.
pub fn index_projects(dataset: &Dataset, user_id: u64) -> Vec<DisplayProject> {
    dataset
        .projects_of(user_id)
        .into_iter()
        .enumerate()
        .map(|(i, project)| DisplayProject {
            project: project.clone(),
            index: ProjectIndex(i + 1),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_project;

    #[test]
    fn parses_positive_integers() {
        assert_eq!("1".parse::<ProjectIndex>().unwrap(), ProjectIndex(1));
        assert_eq!(" 12 ".parse::<ProjectIndex>().unwrap(), ProjectIndex(12));
    }

    #[test]
    fn rejects_zero_and_non_integers() {
        assert!("0".parse::<ProjectIndex>().is_err());
        assert!("-1".parse::<ProjectIndex>().is_err());
        assert_eq!(
            "two".parse::<ProjectIndex>(),
            Err(ValidationError::InvalidSelector("two".into()))
        );
    }

    #[test]
    fn numbers_only_the_owners_projects() {
        let data = Dataset {
            users: vec![],
            projects: vec![
                sample_project(0, "A", "2025-01-01", "2025-02-01"),
                sample_project(1, "B", "2025-01-01", "2025-02-01"),
                sample_project(0, "C", "2025-01-01", "2025-02-01"),
            ],
        };

        let indexed = index_projects(&data, 0);
        let titles: Vec<_> = indexed
            .iter()
            .map(|dp| (dp.index.0, dp.project.title.as_str()))
            .collect();
        assert_eq!(titles, vec![(1, "A"), (2, "C")]);

        assert_eq!(index_projects(&data, 1)[0].project.title, "B");
        assert!(index_projects(&data, 7).is_empty());
    }
}
