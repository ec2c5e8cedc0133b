use crate::index::ProjectIndex;
use crate::model::{Project, User};

pub mod create;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod login;
pub mod register;
pub mod search;

/// Input that aborts whatever operation is being collected.
pub const CANCEL_TOKEN: &str = "0";

pub fn is_cancel(input: &str) -> bool {
    input.trim() == CANCEL_TOKEN
}

/// The no-op outcome of an aborted operation. Nothing is loaded or saved.
pub fn abort() -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Operation cancelled."));
    result
}

/// How the presentation layer should style a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// User-facing outcome text attached to a [`CmdResult`].
#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        let content = content.into();
        Self { level, content }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, content)
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub user: Option<User>,
    pub affected_projects: Vec<Project>,
    pub listed_projects: Vec<Project>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_affected_projects(mut self, projects: Vec<Project>) -> Self {
        self.affected_projects = projects;
        self
    }

    pub fn with_listed_projects(mut self, projects: Vec<Project>) -> Self {
        self.listed_projects = projects;
        self
    }
}

/// Raw registration form, as collected by the caller.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
}

/// Raw fields for a new project. The start date is always today.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub title: String,
    pub details: String,
    pub total_target: String,
    pub end_date: String,
}

/// Changes to one of the user's projects. `None` or blank keeps the current value.
#[derive(Debug, Clone)]
pub struct ProjectUpdate {
    pub index: ProjectIndex,
    pub title: Option<String>,
    pub details: Option<String>,
    pub total_target: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ProjectUpdate {
    pub fn new(index: ProjectIndex) -> Self {
        Self {
            index,
            title: None,
            details: None,
            total_target: None,
            start_date: None,
            end_date: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn total_target(mut self, total_target: impl Into<String>) -> Self {
        self.total_target = Some(total_target.into());
        self
    }

    pub fn start_date(mut self, start_date: impl Into<String>) -> Self {
        self.start_date = Some(start_date.into());
        self
    }

    pub fn end_date(mut self, end_date: impl Into<String>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }
}
