use super::DataStore;
use crate::error::Result;
use crate::model::Dataset;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    dataset: Dataset,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dataset(dataset: Dataset) -> Self {
        Self { dataset, saves: 0 }
    }

    /// Number of times `save` has been called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Dataset> {
        Ok(self.dataset.clone())
    }

    fn save(&mut self, dataset: &Dataset) -> Result<()> {
        self.dataset = dataset.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Project, User};
    use chrono::NaiveDate;

    pub const PASSWORD: &str = "Abcdefg1!";

    pub fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, crate::validation::DATE_FORMAT).unwrap()
    }

    pub fn sample_user(id: u64, email: &str) -> User {
        User {
            id,
            first_name: "Test".to_string(),
            last_name: format!("User{}", id),
            email: email.to_string(),
            password: PASSWORD.to_string(),
            phone: "01012345678".to_string(),
        }
    }

    pub fn sample_project(owner: u64, title: &str, start: &str, end: &str) -> Project {
        Project {
            owner_user_id: owner,
            title: title.to_string(),
            details: format!("Details for {}", title),
            total_target: 1000.0,
            start_date: date(start),
            end_date: date(end),
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` users with ids `0..count` and emails `user{id}@mail.com`.
        pub fn with_users(mut self, count: usize) -> Self {
            let mut data = self.store.load().unwrap();
            for _ in 0..count {
                let id = data.users.len() as u64;
                data.users.push(sample_user(id, &format!("user{}@mail.com", id)));
            }
            self.store = InMemoryStore::with_dataset(data);
            self
        }

        pub fn with_project(mut self, owner: u64, title: &str, start: &str, end: &str) -> Self {
            let mut data = self.store.load().unwrap();
            data.projects.push(sample_project(owner, title, start, end));
            self.store = InMemoryStore::with_dataset(data);
            self
        }

        pub fn user(&self, id: u64) -> User {
            self.store
                .load()
                .unwrap()
                .users
                .into_iter()
                .find(|u| u.id == id)
                .unwrap()
        }
    }
}
