use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CrowdfundError, Result};
use crate::store::DataStore;

/// Finds the first user whose email and password both match exactly.
///
/// A wrong email and a wrong password produce the same error.
pub fn run<S: DataStore>(store: &S, email: &str, password: &str) -> Result<CmdResult> {
    let data = store.load()?;

    let user = data
        .users
        .into_iter()
        .find(|u| u.email == email && u.password == password);

    match user {
        Some(user) => {
            log::info!("event=user_login status=ok user_id={}", user.id);
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!(
                "Welcome, {}!",
                user.full_name()
            )));
            Ok(result.with_user(user))
        }
        None => {
            log::info!("event=user_login status=rejected");
            Err(CrowdfundError::NotFound(
                "Invalid email or password!".to_string(),
            ))
        }
    }
}
