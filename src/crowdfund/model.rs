use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered account.
///
/// Field names on disk are the short legacy ones (`fname`, `lname`), so
/// files written by earlier versions of the app load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(rename = "fname")]
    pub first_name: String,
    #[serde(rename = "lname")]
    pub last_name: String,
    pub email: String,
    // Plain text, compared byte for byte at login.
    pub password: String,
    pub phone: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A crowdfunding campaign owned by one user.
///
/// Projects have no id of their own: `(owner_user_id, title)` is the key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "user_id")]
    pub owner_user_id: u64,
    pub title: String,
    pub details: String,
    pub total_target: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Project {
    pub fn is_owned_by(&self, user_id: u64) -> bool {
        self.owner_user_id == user_id
    }

    pub fn has_key(&self, user_id: u64, title: &str) -> bool {
        self.owner_user_id == user_id && self.title == title
    }
}

/// The whole persisted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Dataset {
    pub fn email_taken(&self, email: &str) -> bool {
        self.users.iter().any(|u| u.email == email)
    }

    /// Projects owned by `user_id`, in storage order.
    pub fn projects_of(&self, user_id: u64) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.is_owned_by(user_id))
            .collect()
    }

    pub fn position_of(&self, user_id: u64, title: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.has_key(user_id, title))
    }
}
