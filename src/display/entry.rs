//! Vault entry display formatting
//!
//! Formats entries for terminal output in table and detail views.

use crate::vault::Entry;

const MASK: &str = "********";

/// Format a list of entries as a table
///
/// Passwords are never shown in the list view.
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries found.".to_string();
    }

    let title_width = entries
        .iter()
        .map(|e| e.title.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let user_width = entries
        .iter()
        .map(|e| e.username.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<title_width$}  {:<user_width$}  {}\n",
        "Title",
        "Username",
        "Notes",
        title_width = title_width,
        user_width = user_width,
    ));

    output.push_str(&format!(
        "{:-<title_width$}  {:-<user_width$}  {:-<5}\n",
        "",
        "",
        "",
        title_width = title_width,
        user_width = user_width,
    ));

    for entry in entries {
        output.push_str(&format!(
            "{:<title_width$}  {:<user_width$}  {}\n",
            entry.title,
            entry.username,
            entry.notes,
            title_width = title_width,
            user_width = user_width,
        ));
    }

    let noun = if entries.len() == 1 { "entry" } else { "entries" };
    output.push_str(&format!("\n{} {}", entries.len(), noun));
    output
}

/// Format a single entry, masking the password unless asked otherwise
pub fn format_entry_detail(entry: &Entry, show_password: bool) -> String {
    let password = if show_password {
        entry.password.as_str()
    } else {
        MASK
    };

    let mut output = String::new();
    output.push_str(&format!("Title:    {}\n", entry.title));
    output.push_str(&format!("Username: {}\n", entry.username));
    output.push_str(&format!("Password: {}\n", password));
    if !entry.notes.is_empty() {
        output.push_str(&format!("Notes:    {}\n", entry.notes));
    }
    output
}
