//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every account and project operation, whatever UI drives it.
//!
//! The API:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (selector strings to [`ProjectIndex`], date strings
//!   to dates, the system clock to "today")
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no console I/O and holds no dataset between calls: each call loads
//! the store, and mutating calls write it back before returning.
//!
//! `CrowdfundApi<S: DataStore>` is generic over the storage backend:
//! - Production: `CrowdfundApi<FileStore>`
//! - Testing: `CrowdfundApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::index::{index_projects, DisplayProject, ProjectIndex};
use crate::model::User;
use crate::store::DataStore;
use crate::validation::valid_date;
use chrono::{Local, NaiveDate};

pub struct CrowdfundApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> CrowdfundApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn register(&mut self, form: Registration) -> Result<CmdResult> {
        commands::register::run(&mut self.store, form)
    }

    /// Format and uniqueness check for an email, ahead of a full registration.
    pub fn check_email(&self, email: &str) -> Result<()> {
        let data = self.store.load()?;
        commands::register::check_email(&data, email)
    }

    pub fn login(&self, email: &str, password: &str) -> Result<CmdResult> {
        commands::login::run(&self.store, email, password)
    }

    pub fn create_project(&mut self, user: &User, draft: ProjectDraft) -> Result<CmdResult> {
        commands::create::run(&mut self.store, user, draft, today())
    }

    /// Title check for a new project, ahead of a full create.
    pub fn check_title(&self, user: &User, title: &str) -> Result<String> {
        let data = self.store.load()?;
        commands::create::check_title(&data, user, title)
    }

    /// Title check for renaming the project currently called `current`.
    pub fn check_new_title(&self, user: &User, title: &str, current: &str) -> Result<String> {
        let data = self.store.load()?;
        commands::edit::check_title(&data, user, title, current)
    }

    /// The user's own projects, numbered the way edit and delete expect.
    pub fn user_projects(&self, user: &User) -> Result<Vec<DisplayProject>> {
        let data = self.store.load()?;
        Ok(index_projects(&data, user.id))
    }

    /// Resolves a project number typed by the user against their current list.
    pub fn select_project(&self, user: &User, selector: &str) -> Result<DisplayProject> {
        let index: ProjectIndex = selector.parse()?;
        let data = self.store.load()?;
        let project = commands::helpers::select_project(&data, user.id, index)?;
        Ok(DisplayProject { project, index })
    }

    pub fn edit_project(&mut self, user: &User, update: &ProjectUpdate) -> Result<CmdResult> {
        commands::edit::run(&mut self.store, user, update)
    }

    pub fn delete_project(
        &mut self,
        user: &User,
        selector: &str,
        confirmed: bool,
    ) -> Result<CmdResult> {
        let index: ProjectIndex = selector.parse()?;
        commands::delete::run(&mut self.store, user, index, confirmed)
    }

    pub fn list_projects(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn find_by_start_date(&self, date: &str) -> Result<CmdResult> {
        let date = valid_date(date)?;
        commands::search::by_start_date(&self.store, date)
    }

    pub fn find_by_end_date(&self, date: &str) -> Result<CmdResult> {
        let date = valid_date(date)?;
        commands::search::by_end_date(&self.store, date)
    }

    /// Abandons the operation being collected. The store is not touched.
    pub fn abort(&self) -> CmdResult {
        commands::abort()
    }
}

/// The system clock's local date, used as every new project's start date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub use commands::{
    is_cancel, CmdMessage, CmdResult, MessageLevel, ProjectDraft, ProjectUpdate, Registration,
    CANCEL_TOKEN,
};
