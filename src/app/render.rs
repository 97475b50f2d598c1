//! Plain-text rendering of view-models for the console.

use crate::auth::Notice;
use crate::view::{AuthFormView, FieldView, ProfileView};

/// Render the heading, error and footer of an auth form.
///
/// Inputs are collected by prompts, so fields are not listed here.
pub fn auth_form(view: &AuthFormView) -> Vec<String> {
    let mut lines = vec![String::new(), format!("=== {} ===", view.title)];

    if let Some(ref error) = view.error {
        lines.push(format!("! {error}"));
    }

    if let Some(ref hint) = view.hint {
        lines.push(String::new());
        lines.push("Mock Credentials".to_string());
        lines.push(format!("  Email: {}", hint.email));
        lines.push(format!("  Password: {}", hint.password));
    }

    lines.push(String::new());
    lines.push(format!(
        "{} {} ({})",
        view.alternate.prompt, view.alternate.label, view.alternate.route
    ));
    lines.push("Type /quit to exit.".to_string());
    lines
}

/// Prompt text for an input.
pub fn field_prompt(field: &FieldView) -> String {
    format!("{} ({}): ", field.label, field.placeholder)
}

/// Prompt text for a profile input, showing the current value.
pub fn edit_prompt(field: &FieldView) -> String {
    format!("{} [{}]: ", field.label, field.value)
}

/// Render the read-only profile.
pub fn profile(view: &ProfileView) -> Vec<String> {
    let mut lines = vec![String::new(), "=== Profile ===".to_string()];
    lines.push(format!("Picture: {}", view.picture));
    for (label, value) in &view.rows {
        lines.push(format!("{label}: {value}"));
    }
    lines.push(String::new());
    lines.push("[E] Edit Profile  [L] Logout  [Q] Quit".to_string());
    lines
}

/// Render the heading of the profile edit form.
pub fn profile_form_header() -> Vec<String> {
    vec![
        String::new(),
        "=== Edit Profile ===".to_string(),
        "Press Enter to keep a value.".to_string(),
    ]
}

/// Render a notice.
pub fn notice(notice: &Notice) -> String {
    format!("* {}", notice.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{LoginController, MockCredentialStore, RegistrationController};
    use crate::user::UserRecord;
    use crate::view::ProfileFormView;
    use std::time::Duration;

    #[test]
    fn test_login_form_with_hint() {
        let view = AuthFormView::login(
            &LoginController::new(),
            MockCredentialStore::default().hint(),
        );
        let lines = auth_form(&view);

        assert!(lines.contains(&"=== Login ===".to_string()));
        assert!(lines.contains(&"  Email: test@example.com".to_string()));
        assert!(lines.contains(&"Don't have an account? Sign up (/register)".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with('!')));
    }

    #[test]
    fn test_register_form_with_error() {
        let mut controller = RegistrationController::new();
        let _ = controller.begin_submit();

        let lines = auth_form(&AuthFormView::register(&controller));
        assert!(lines.contains(&"! Please fill in all fields".to_string()));
        assert!(lines.contains(&"Already have an account? Sign in (/login)".to_string()));
        assert!(!lines.iter().any(|l| l == "Mock Credentials"));
    }

    #[test]
    fn test_prompts() {
        let user = UserRecord::new("A", "a@b.com", "password123", "1");
        let view = ProfileFormView::new(&user);
        assert_eq!(edit_prompt(&view.fields[0]), "Full Name [A]: ");

        let login = AuthFormView::login(&LoginController::new(), None);
        assert_eq!(field_prompt(&login.fields[0]), "Email (your@email.com): ");
    }

    #[test]
    fn test_profile_lines() {
        let user = UserRecord::new("A", "", "password123", "1");
        let lines = profile(&ProfileView::new(&user));
        assert!(lines.contains(&"Name: A".to_string()));
        assert!(lines.contains(&"Email: Not set".to_string()));
    }

    #[test]
    fn test_notice_line() {
        let line = notice(&Notice::account_created(Duration::ZERO));
        assert_eq!(line, "* Account created successfully!");
    }
}
