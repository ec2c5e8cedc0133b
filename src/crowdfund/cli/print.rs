use colored::Colorize;
use crowdfund::api::{CmdMessage, MessageLevel};
use crowdfund::error::CrowdfundError;
use crowdfund::index::DisplayProject;
use crowdfund::model::Project;

const RULE_WIDTH: usize = 40;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_error(error: &CrowdfundError) {
    print_messages(&[CmdMessage::error(error.to_string())]);
}

pub(super) fn print_heading(text: &str) {
    println!("\n{}", text.bold());
}

pub(super) fn print_menu(title: &str, options: &[&str]) {
    print_heading(title);
    for (i, option) in options.iter().enumerate() {
        println!("{}. {}", i + 1, option);
    }
}

/// Numbered titles of the user's own projects, as used by edit and delete.
pub(super) fn print_project_choices(projects: &[DisplayProject]) {
    print_heading("Your Projects:");
    for dp in projects {
        println!("{}. {}", dp.index.to_string().yellow(), dp.project.title);
    }
}

pub(super) fn print_projects(projects: &[Project]) {
    if projects.is_empty() {
        return;
    }

    let rule = "-".repeat(RULE_WIDTH);
    println!("{}", rule.dimmed());
    for project in projects {
        println!("{} {}", "Title:".bold(), project.title);
        println!("{} {}", "Details:".bold(), project.details);
        println!(
            "{} {}",
            "Total Target:".bold(),
            format_amount(project.total_target)
        );
        println!("{} {}", "Start Date:".bold(), project.start_date);
        println!("{} {}", "End Date:".bold(), project.end_date);
        println!("{}", rule.dimmed());
    }
}

fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_have_two_decimals() {
        assert_eq!(format_amount(5000.0), "5000.00");
        assert_eq!(format_amount(12.5), "12.50");
    }
}
