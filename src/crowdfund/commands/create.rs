use crate::commands::helpers::ensure_title_free;
use crate::commands::{CmdMessage, CmdResult, ProjectDraft};
use crate::error::Result;
use crate::model::{Dataset, Project, User};
use crate::store::DataStore;
use crate::validation::{date_after, parse_target, require_details, require_title, valid_date};
use chrono::NaiveDate;

/// Checks a title for a new project: non-empty and not already used by `user`.
/// Returns the trimmed title.
pub fn check_title(dataset: &Dataset, user: &User, title: &str) -> Result<String> {
    let title = require_title(title)?;
    ensure_title_free(dataset, user.id, &title, None)?;
    Ok(title)
}

/// Creates a project for `user` starting on `today`.
pub fn run<S: DataStore>(
    store: &mut S,
    user: &User,
    draft: ProjectDraft,
    today: NaiveDate,
) -> Result<CmdResult> {
    let mut data = store.load()?;

    let title = check_title(&data, user, &draft.title)?;
    let details = require_details(&draft.details)?;
    let total_target = parse_target(&draft.total_target)?;
    let end_date = valid_date(&draft.end_date)?;
    date_after(end_date, today)?;

    let project = Project {
        owner_user_id: user.id,
        title,
        details,
        total_target,
        start_date: today,
        end_date,
    };
    data.projects.push(project.clone());
    store.save(&data)?;

    log::info!(
        "event=project_create status=ok user_id={} title={:?}",
        user.id,
        project.title
    );
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Project {} added successfully!",
        project.title
    )));
    Ok(result.with_affected_projects(vec![project]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::search;
    use crate::error::CrowdfundError;
    use crate::store::memory::fixtures::{date, StoreFixture};
    use crate::validation::ValidationError;

    fn draft(title: &str, end: &str) -> ProjectDraft {
        ProjectDraft {
            title: title.into(),
            details: "Clean water for the village".into(),
            total_target: "25000".into(),
            end_date: end.into(),
        }
    }

    #[test]
    fn creates_project_starting_today() {
        let fixture = StoreFixture::new().with_users(1);
        let user = fixture.user(0);
        let mut store = fixture.store;
        let today = date("2025-05-01");

        let result = run(&mut store, &user, draft("Well", "2025-06-01"), today).unwrap();
        let project = &result.affected_projects[0];
        assert_eq!(project.start_date, today);
        assert_eq!(project.total_target, 25000.0);
        assert_eq!(project.owner_user_id, 0);

        let found = search::by_end_date(&store, date("2025-06-01")).unwrap();
        assert_eq!(found.listed_projects, vec![project.clone()]);
    }

    #[test]
    fn end_date_must_follow_today() {
        let fixture = StoreFixture::new().with_users(1);
        let user = fixture.user(0);
        let mut store = fixture.store;
        let today = date("2025-05-01");

        for end in ["2025-05-01", "2025-04-30"] {
            let err = run(&mut store, &user, draft("Well", end), today).unwrap_err();
            assert!(matches!(
                err,
                CrowdfundError::Validation(ValidationError::EndNotAfterStart { .. })
            ));
        }
        assert!(store.load().unwrap().projects.is_empty());
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn titles_are_unique_per_user_only() {
        let fixture = StoreFixture::new()
            .with_users(2)
            .with_project(1, "Well", "2025-01-01", "2025-12-01");
        let user = fixture.user(0);
        let mut store = fixture.store;
        let today = date("2025-05-01");

        run(&mut store, &user, draft("Well", "2025-06-01"), today).unwrap();
        let err = run(&mut store, &user, draft(" Well ", "2025-06-01"), today).unwrap_err();
        assert!(matches!(err, CrowdfundError::Duplicate(_)));
        assert_eq!(store.load().unwrap().projects.len(), 2);
    }

    #[test]
    fn rejects_blank_and_malformed_fields() {
        let fixture = StoreFixture::new().with_users(1);
        let user = fixture.user(0);
        let mut store = fixture.store;
        let today = date("2025-05-01");

        let err = run(&mut store, &user, draft("  ", "2025-06-01"), today).unwrap_err();
        assert!(matches!(
            err,
            CrowdfundError::Validation(ValidationError::EmptyTitle)
        ));

        let mut no_details = draft("Well", "2025-06-01");
        no_details.details = "".into();
        assert!(matches!(
            run(&mut store, &user, no_details, today).unwrap_err(),
            CrowdfundError::Validation(ValidationError::EmptyDetails)
        ));

        let mut bad_target = draft("Well", "2025-06-01");
        bad_target.total_target = "a lot".into();
        assert!(matches!(
            run(&mut store, &user, bad_target, today).unwrap_err(),
            CrowdfundError::Validation(ValidationError::InvalidTarget(_))
        ));

        assert!(matches!(
            run(&mut store, &user, draft("Well", "June 1st"), today).unwrap_err(),
            CrowdfundError::Validation(ValidationError::InvalidDate(_))
        ));
    }
}
