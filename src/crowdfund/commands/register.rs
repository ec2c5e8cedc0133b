use crate::commands::{CmdMessage, CmdResult, Registration};
use crate::error::{CrowdfundError, Result};
use crate::model::{Dataset, User};
use crate::store::DataStore;
use crate::validation::{confirm_password, valid_email, valid_password, valid_phone};

/// Checks an email's format and that no account uses it yet.
pub fn check_email(dataset: &Dataset, email: &str) -> Result<()> {
    valid_email(email)?;
    if dataset.email_taken(email) {
        return Err(CrowdfundError::Duplicate(
            "Email already exists! Enter another one".to_string(),
        ));
    }
    Ok(())
}

pub fn run<S: DataStore>(store: &mut S, form: Registration) -> Result<CmdResult> {
    let mut data = store.load()?;

    check_email(&data, &form.email)?;
    valid_password(&form.password)?;
    confirm_password(&form.password, &form.confirm_password)?;
    valid_phone(&form.phone)?;

    let user = User {
        id: data.users.len() as u64,
        first_name: form.first_name,
        last_name: form.last_name,
        email: form.email,
        password: form.password.trim().to_string(),
        phone: form.phone,
    };
    data.users.push(user.clone());
    store.save(&data)?;

    log::info!("event=user_register status=ok user_id={}", user.id);
    let mut result = CmdResult::default().with_user(user);
    result.add_message(CmdMessage::success("You registered successfully!"));
    Ok(result)
}
