use super::print::{
    print_error, print_heading, print_menu, print_messages, print_project_choices, print_projects,
};
use super::prompt::{Console, Reply};
use crowdfund::api::{
    today, CmdMessage, CmdResult, CrowdfundApi, ProjectDraft, ProjectUpdate, Registration,
    CANCEL_TOKEN,
};
use crowdfund::error::Result;
use crowdfund::index::DisplayProject;
use crowdfund::model::User;
use crowdfund::store::DataStore;
use crowdfund::validation::{
    confirm_password, date_after, parse_target, require_details, valid_date, valid_password,
    valid_phone,
};
use std::io::BufRead;

const MAIN_MENU: &[&str] = &["Register", "Login", "Exit"];
const USER_MENU: &[&str] = &[
    "Create Project",
    "View all Projects",
    "Edit a project",
    "Delete a project",
    "Search by start date",
    "Search by end date",
    "Logout",
];
const CHOOSE: &str = "Choose an option: ";
const INVALID_OPTION: &str = "Invalid option, try again!";

/// Which project date a search matches on.
#[derive(Debug, Clone, Copy)]
enum DateField {
    Start,
    End,
}

/// The interactive console session.
pub(super) struct Menu<'a, S: DataStore, R> {
    api: &'a mut CrowdfundApi<S>,
    console: Console<R>,
}

impl<'a, S: DataStore, R: BufRead> Menu<'a, S, R> {
    pub(super) fn new(api: &'a mut CrowdfundApi<S>, console: Console<R>) -> Self {
        Self { api, console }
    }

    pub(super) fn run(&mut self) -> Result<()> {
        loop {
            print_menu("Crowd-Funding App", MAIN_MENU);
            let Some(choice) = self.console.read_line(CHOOSE)? else {
                return Ok(());
            };
            match choice.trim() {
                "1" => self.register()?,
                "2" => {
                    if let Some(user) = self.login()? {
                        self.session(&user)?;
                    }
                }
                "3" => {
                    println!("Goodbye!");
                    return Ok(());
                }
                _ => print_invalid_option(),
            }
            if self.console.is_closed() {
                return Ok(());
            }
        }
    }

    fn session(&mut self, user: &User) -> Result<()> {
        loop {
            print_menu(&format!("Logged in as {}", user.full_name()), USER_MENU);
            let Some(choice) = self.console.read_line(CHOOSE)? else {
                return Ok(());
            };
            match choice.trim() {
                "1" => self.create_project(user)?,
                "2" => self.list_projects()?,
                "3" => self.edit_project(user)?,
                "4" => self.delete_project(user)?,
                "5" => self.search(DateField::Start)?,
                "6" => self.search(DateField::End)?,
                "7" => return Ok(()),
                _ => print_invalid_option(),
            }
            if self.console.is_closed() {
                return Ok(());
            }
        }
    }

    /// Shows the outcome of a core call. Recoverable failures are printed and
    /// swallowed; anything else ends the session.
    fn report(&self, result: Result<CmdResult>) -> Result<Option<CmdResult>> {
        match result {
            Ok(result) => {
                print_messages(&result.messages);
                Ok(Some(result))
            }
            Err(e) if e.is_recoverable() => {
                print_error(&e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn cancelled(&self) -> Result<()> {
        print_messages(&self.api.abort().messages);
        Ok(())
    }

    fn register(&mut self) -> Result<()> {
        print_heading(&cancel_hint("Registering a new account"));

        let Reply::Text(first_name) = self.console.ask("Enter your first name: ")? else {
            return self.cancelled();
        };
        let Reply::Text(last_name) = self.console.ask("Enter your last name: ")? else {
            return self.cancelled();
        };

        let api = &*self.api;
        let Some(email) = self.console.ask_until("Enter your email: ", |s| {
            api.check_email(s)?;
            Ok(s.to_string())
        })?
        else {
            return self.cancelled();
        };

        println!(
            "Passwords need at least 8 characters, an uppercase letter, a digit and a special character."
        );
        let Some(password) = self.console.ask_secret_until("Enter password: ", |s| {
            valid_password(s)?;
            Ok(s.to_string())
        })?
        else {
            return self.cancelled();
        };
        let Some(confirmation) = self.console.ask_secret_until("Confirm password: ", |s| {
            confirm_password(&password, s)?;
            Ok(s.to_string())
        })?
        else {
            return self.cancelled();
        };

        let Some(phone) = self.console.ask_until("Enter your phone number: ", |s| {
            valid_phone(s)?;
            Ok(s.to_string())
        })?
        else {
            return self.cancelled();
        };

        let form = Registration {
            first_name,
            last_name,
            email,
            password,
            confirm_password: confirmation,
            phone,
        };
        let result = self.api.register(form);
        self.report(result)?;
        Ok(())
    }

    fn login(&mut self) -> Result<Option<User>> {
        let Reply::Text(email) = self.console.ask("Enter email: ")? else {
            self.cancelled()?;
            return Ok(None);
        };
        let Reply::Text(password) = self.console.ask_secret("Enter password: ")? else {
            self.cancelled()?;
            return Ok(None);
        };

        let result = self.api.login(&email, &password);
        Ok(self.report(result)?.and_then(|r| r.user))
    }

    fn create_project(&mut self, user: &User) -> Result<()> {
        print_heading(&cancel_hint("Creating a new project"));

        let api = &*self.api;
        let Some(title) = self
            .console
            .ask_until("Enter your project's title: ", |s| api.check_title(user, s))?
        else {
            return self.cancelled();
        };
        let Some(details) = self
            .console
            .ask_until("Enter your project details: ", |s| Ok(require_details(s)?))?
        else {
            return self.cancelled();
        };
        let Some(total_target) =
            self.console
                .ask_until("Enter your project total target: ", |s| {
                    parse_target(s)?;
                    Ok(s.trim().to_string())
                })?
        else {
            return self.cancelled();
        };

        let start = today();
        println!("Your project campaign starts on {}.", start);
        let Some(end_date) = self
            .console
            .ask_until("Enter end date (YYYY-MM-DD): ", |s| {
                date_after(valid_date(s)?, start)?;
                Ok(s.trim().to_string())
            })?
        else {
            return self.cancelled();
        };

        let draft = ProjectDraft {
            title,
            details,
            total_target,
            end_date,
        };
        let result = self.api.create_project(user, draft);
        self.report(result)?;
        Ok(())
    }

    fn list_projects(&mut self) -> Result<()> {
        let result = self.api.list_projects();
        if let Some(result) = self.report(result)? {
            print_projects(&result.listed_projects);
        }
        Ok(())
    }

    /// Shows the user's projects and reads a valid project number.
    /// `None` when there is nothing to pick or the user cancelled.
    fn choose_project(&mut self, user: &User, action: &str) -> Result<Option<DisplayProject>> {
        let projects = self.api.user_projects(user)?;
        if projects.is_empty() {
            println!("You have no projects");
            return Ok(None);
        }

        print_heading(&cancel_hint(&format!("{} a project", action)));
        print_project_choices(&projects);
        let api = &*self.api;
        let prompt = format!("Enter your project number to {}: ", action.to_lowercase());
        let selected = self
            .console
            .ask_until(&prompt, |s| api.select_project(user, s))?;
        if selected.is_none() {
            self.cancelled()?;
        }
        Ok(selected)
    }

    fn edit_project(&mut self, user: &User) -> Result<()> {
        let Some(DisplayProject {
            project: current,
            index,
        }) = self.choose_project(user, "Edit")?
        else {
            return Ok(());
        };
        let keep = "(Press Enter to keep current)";

        let api = &*self.api;
        let Some(title) = self.console.ask_until(
            &format!("Enter your project's title {}: ", keep),
            |s| {
                if s.trim().is_empty() {
                    return Ok(String::new());
                }
                api.check_new_title(user, s, &current.title)
            },
        )?
        else {
            return self.cancelled();
        };
        let Reply::Text(details) = self
            .console
            .ask(&format!("Enter your project details {}: ", keep))?
        else {
            return self.cancelled();
        };
        let Some(total_target) = self.console.ask_until(
            &format!("Enter your project total target {}: ", keep),
            |s| {
                if !s.trim().is_empty() {
                    parse_target(s)?;
                }
                Ok(s.to_string())
            },
        )?
        else {
            return self.cancelled();
        };
        let Some(start) = self.console.ask_until(
            &format!("Enter start date (YYYY-MM-DD) {}: ", keep),
            |s| {
                if s.trim().is_empty() {
                    return Ok(current.start_date);
                }
                Ok(valid_date(s)?)
            },
        )?
        else {
            return self.cancelled();
        };
        println!("Your project campaign starts on {}.", start);
        let Some(end_date) = self.console.ask_until(
            &format!("Enter end date (YYYY-MM-DD) {}: ", keep),
            |s| {
                let end = if s.trim().is_empty() {
                    current.end_date
                } else {
                    valid_date(s)?
                };
                date_after(end, start)?;
                Ok(s.to_string())
            },
        )?
        else {
            return self.cancelled();
        };

        let mut update = ProjectUpdate::new(index)
            .title(title)
            .details(details)
            .total_target(total_target)
            .end_date(end_date);
        if start != current.start_date {
            update = update.start_date(start.to_string());
        }

        let result = self.api.edit_project(user, &update);
        self.report(result)?;
        Ok(())
    }

    fn delete_project(&mut self, user: &User) -> Result<()> {
        let Some(selected) = self.choose_project(user, "Delete")? else {
            return Ok(());
        };

        let answer = self
            .console
            .read_line(&format!(
                "Are you sure you want to delete '{}'? (y/n): ",
                selected.project.title
            ))?
            .unwrap_or_default();
        let confirmed = answer.trim().eq_ignore_ascii_case("y");

        let result = self
            .api
            .delete_project(user, &selected.index.to_string(), confirmed);
        self.report(result)?;
        Ok(())
    }

    fn search(&mut self, field: DateField) -> Result<()> {
        let prompt = match field {
            DateField::Start => "Enter start date to search by (YYYY-MM-DD): ",
            DateField::End => "Enter end date to search by (YYYY-MM-DD): ",
        };
        let Some(date) = self.console.ask_until(prompt, |s| {
            valid_date(s)?;
            Ok(s.trim().to_string())
        })?
        else {
            return self.cancelled();
        };

        let result = match field {
            DateField::Start => self.api.find_by_start_date(&date),
            DateField::End => self.api.find_by_end_date(&date),
        };
        if let Some(result) = self.report(result)? {
            print_projects(&result.listed_projects);
        }
        Ok(())
    }
}

fn cancel_hint(heading: &str) -> String {
    format!(
        "{} (Enter '{}' at any step to return to the menu)",
        heading, CANCEL_TOKEN
    )
}

fn print_invalid_option() {
    print_messages(&[CmdMessage::error(INVALID_OPTION)]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crowdfund::store::memory::InMemoryStore;
    use std::io::Cursor;

    const REGISTER_ANN: &str = "1\nAnn\nLee\nann@mail.com\nAbcdefg1!\nAbcdefg1!\n01012345678\n";
    const LOGIN_ANN: &str = "2\nann@mail.com\nAbcdefg1!\n";

    fn run_script(api: &mut CrowdfundApi<InMemoryStore>, script: &str) {
        let console = Console::new(Cursor::new(script.as_bytes().to_vec()), false);
        Menu::new(api, console).run().unwrap();
    }

    fn in_days(days: i64) -> String {
        (today() + Duration::days(days)).to_string()
    }

    #[test]
    fn registers_with_retries() {
        let mut api = CrowdfundApi::new(InMemoryStore::new());
        let script = "1\nAnn\nLee\nbad-email\nann@mail.com\nweak\nAbcdefg1!\nnope\nAbcdefg1!\n123\n01012345678\n3\n";
        run_script(&mut api, script);

        let data = api.store().load().unwrap();
        assert_eq!(data.users.len(), 1);
        assert_eq!(data.users[0].email, "ann@mail.com");
        assert_eq!(data.users[0].phone, "01012345678");
    }

    #[test]
    fn cancel_during_registration_saves_nothing() {
        let mut api = CrowdfundApi::new(InMemoryStore::new());
        run_script(&mut api, "1\nAnn\nLee\n0\n3\n");
        assert_eq!(api.store().saves(), 0);
    }

    #[test]
    fn create_edit_and_delete_through_the_menu() {
        let mut api = CrowdfundApi::new(InMemoryStore::new());
        let end = in_days(30);
        let later = in_days(60);
        let script = format!(
            "{REGISTER_ANN}{LOGIN_ANN}\
             1\nWell\nClean water\n5000\n{end}\n\
             3\n1\nDeep Well\n\n\n\n{later}\n\
             2\n7\n3\n"
        );
        run_script(&mut api, &script);

        let data = api.store().load().unwrap();
        assert_eq!(data.projects.len(), 1);
        let project = &data.projects[0];
        assert_eq!(project.title, "Deep Well");
        assert_eq!(project.details, "Clean water");
        assert_eq!(project.total_target, 5000.0);
        assert_eq!(project.start_date, today());
        assert_eq!(project.end_date.to_string(), later);

        let script = format!("{LOGIN_ANN}4\n1\nn\n4\n1\ny\n7\n3\n");
        run_script(&mut api, &script);
        assert!(api.store().load().unwrap().projects.is_empty());
    }

    #[test]
    fn edit_reprompts_for_a_taken_title() {
        let mut api = CrowdfundApi::new(InMemoryStore::new());
        let end = in_days(30);
        let script = format!(
            "{REGISTER_ANN}{LOGIN_ANN}\
             1\nWell\nClean water\n5000\n{end}\n\
             1\nClinic\nBeds\n800\n{end}\n\
             3\n1\nClinic\nDeep Well\nDeeper water\n\n\n\n\
             7\n3\n"
        );
        run_script(&mut api, &script);

        let data = api.store().load().unwrap();
        let titles: Vec<&str> = data.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Deep Well", "Clinic"]);
        assert_eq!(data.projects[0].details, "Deeper water");
        assert_eq!(data.projects[0].total_target, 5000.0);
    }

    #[test]
    fn cancel_during_create_saves_nothing() {
        let mut api = CrowdfundApi::new(InMemoryStore::new());
        run_script(&mut api, &format!("{REGISTER_ANN}3\n"));
        let saves = api.store().saves();

        run_script(&mut api, &format!("{LOGIN_ANN}1\nWell\n0\n7\n3\n"));
        assert_eq!(api.store().saves(), saves);
        assert!(api.store().load().unwrap().projects.is_empty());
    }

    #[test]
    fn failed_login_returns_to_main_menu() {
        let mut api = CrowdfundApi::new(InMemoryStore::new());
        run_script(&mut api, "2\nghost@mail.com\nAbcdefg1!\n9\n3\n");
        assert_eq!(api.store().saves(), 0);
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let mut api = CrowdfundApi::new(InMemoryStore::new());
        run_script(&mut api, &format!("{REGISTER_ANN}{LOGIN_ANN}1\nWell"));
        assert!(api.store().load().unwrap().projects.is_empty());
    }
}
