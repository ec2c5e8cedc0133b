use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Lists every project of every user, in storage order.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let projects = store.load()?.projects;
    let mut result = CmdResult::default();
    if projects.is_empty() {
        result.add_message(CmdMessage::info("No projects found!"));
    }
    Ok(result.with_listed_projects(projects))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_projects_of_all_users_in_order() {
        let store = StoreFixture::new()
            .with_users(2)
            .with_project(1, "B", "2025-01-01", "2025-02-01")
            .with_project(0, "A", "2025-01-01", "2025-02-01")
            .store;

        let result = run(&store).unwrap();
        let titles: Vec<_> = result
            .listed_projects
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["B", "A"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_store_reports_no_projects() {
        let result = run(&InMemoryStore::new()).unwrap();
        assert!(result.listed_projects.is_empty());
        assert_eq!(result.messages[0].content, "No projects found!");
    }
}
