//! View-models handed to the rendering layer.
//!
//! A renderer only needs these structs: what to show, which fields exist,
//! the current error and whether input is disabled. Visual form is up to the
//! renderer.

use crate::auth::{
    CredentialHint, LoginController, ProfileController, ProfileMode, RegistrationController,
    LOGIN_FIELDS, PROFILE_FIELDS, REGISTRATION_FIELDS,
};
use crate::route::Route;
use crate::user::{Field, UserRecord};

/// Placeholder for empty profile values.
pub const NOT_SET: &str = "Not set";

/// Picture shown when the user has no profile picture.
pub const DEFAULT_AVATAR: &str = "assets/default-user.jpg";

/// Which auth form is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormType {
    /// Login form.
    Login,
    /// Registration form.
    Register,
}

/// One input of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    /// Field identifier.
    pub field: Field,
    /// Label text.
    pub label: &'static str,
    /// Current draft value.
    pub value: String,
    /// Placeholder shown when empty.
    pub placeholder: &'static str,
    /// Whether the value must be masked.
    pub secret: bool,
}

impl FieldView {
    fn new(field: Field, draft: &UserRecord) -> Self {
        Self {
            field,
            label: field.label(),
            value: draft.get(field).to_string(),
            placeholder: placeholder(field),
            secret: field.is_secret(),
        }
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "John Doe",
        Field::Email => "your@email.com",
        Field::Password => "••••••••",
        Field::Phone => "+91 1234567890",
        Field::ProfilePictureUrl => "https://",
    }
}

/// Link to the other auth form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    /// Text before the link.
    pub prompt: &'static str,
    /// Link text.
    pub label: &'static str,
    /// Link target.
    pub route: Route,
}

/// Login or registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFormView {
    /// Form type.
    pub form_type: FormType,
    /// Heading.
    pub title: &'static str,
    /// Inputs in display order.
    pub fields: Vec<FieldView>,
    /// Error of the last attempt.
    pub error: Option<String>,
    /// Inputs and submit are disabled.
    pub busy: bool,
    /// Submit button text.
    pub submit_label: &'static str,
    /// Link to the other form.
    pub alternate: LinkView,
    /// Mock credentials to display on the login form.
    pub hint: Option<CredentialHint>,
}

impl AuthFormView {
    /// Build the login form view.
    pub fn login(controller: &LoginController, hint: Option<CredentialHint>) -> Self {
        Self {
            form_type: FormType::Login,
            title: "Login",
            fields: LOGIN_FIELDS
                .iter()
                .map(|&f| FieldView::new(f, controller.draft()))
                .collect(),
            error: controller.error().map(ToString::to_string),
            busy: false,
            submit_label: "Sign in",
            alternate: LinkView {
                prompt: "Don't have an account?",
                label: "Sign up",
                route: Route::Register,
            },
            hint,
        }
    }

    /// Build the registration form view.
    pub fn register(controller: &RegistrationController) -> Self {
        let busy = controller.is_busy();
        Self {
            form_type: FormType::Register,
            title: "Create your account",
            fields: REGISTRATION_FIELDS
                .iter()
                .map(|&f| FieldView::new(f, controller.draft()))
                .collect(),
            error: controller.error().map(ToString::to_string),
            busy,
            submit_label: if busy {
                "Please wait..."
            } else {
                "Create account"
            },
            alternate: LinkView {
                prompt: "Already have an account?",
                label: "Sign in",
                route: Route::Login,
            },
            hint: None,
        }
    }
}

/// Read-only profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    /// Picture URL, or [`DEFAULT_AVATAR`].
    pub picture: String,
    /// `(label, value)` rows; empty values read [`NOT_SET`].
    pub rows: Vec<(&'static str, String)>,
}

impl ProfileView {
    /// Build the view of `user`.
    pub fn new(user: &UserRecord) -> Self {
        let row = |label, value: &str| {
            let value = if value.is_empty() { NOT_SET } else { value };
            (label, value.to_string())
        };

        Self {
            picture: user
                .profile_picture_url
                .clone()
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
            rows: vec![
                row("Name", &user.name),
                row("Email", &user.email),
                row("Phone", &user.phone),
            ],
        }
    }
}

/// Profile edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFormView {
    /// Inputs in display order.
    pub fields: Vec<FieldView>,
}

impl ProfileFormView {
    /// Build the form for `draft`.
    pub fn new(draft: &UserRecord) -> Self {
        Self {
            fields: PROFILE_FIELDS
                .iter()
                .map(|&f| FieldView::new(f, draft))
                .collect(),
        }
    }
}

/// What the profile screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileScreenView {
    /// Viewing mode.
    View(ProfileView),
    /// Editing mode.
    Form(ProfileFormView),
}

impl ProfileScreenView {
    /// Build the view for a controller; `None` when there is no user.
    pub fn from_controller(controller: &ProfileController) -> Option<Self> {
        let user = controller.user()?;
        match (controller.mode(), controller.draft()) {
            (ProfileMode::Editing, Some(draft)) => Some(Self::Form(ProfileFormView::new(draft))),
            _ => Some(Self::View(ProfileView::new(user))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{MockCredentialStore, ProfileActivation, SessionHolder, SessionStore};
    use crate::storage::MemoryStorage;

    #[test]
    fn test_login_view() {
        let mut controller = LoginController::new();
        controller.set(Field::Email, "test@example.com");

        let view = AuthFormView::login(&controller, MockCredentialStore::default().hint());

        assert_eq!(view.form_type, FormType::Login);
        assert_eq!(view.submit_label, "Sign in");
        assert_eq!(view.fields.len(), 2);
        assert_eq!(view.fields[0].value, "test@example.com");
        assert!(view.fields[1].secret);
        assert_eq!(view.alternate.route, Route::Register);
        assert_eq!(
            view.hint.map(|h| h.email).as_deref(),
            Some("test@example.com")
        );
    }

    #[test]
    fn test_register_view_busy() {
        let mut controller = RegistrationController::new();
        controller.set(Field::Name, "A");
        controller.set(Field::Email, "a@b");
        controller.set(Field::Password, "password123");
        controller.set(Field::Phone, "1");

        let idle = AuthFormView::register(&controller);
        assert!(!idle.busy);
        assert_eq!(idle.submit_label, "Create account");
        assert_eq!(idle.fields.len(), 4);
        assert_eq!(idle.fields[0].field, Field::Name);

        let _pending = controller.begin_submit().unwrap();
        let busy = AuthFormView::register(&controller);
        assert!(busy.busy);
        assert_eq!(busy.submit_label, "Please wait...");
    }

    #[test]
    fn test_register_view_error() {
        let mut controller = RegistrationController::new();
        let _ = controller.begin_submit();

        let view = AuthFormView::register(&controller);
        assert_eq!(view.error.as_deref(), Some("Please fill in all fields"));
    }

    #[test]
    fn test_profile_view_fallbacks() {
        let user = UserRecord::new("", "a@b.com", "password123", "");
        let view = ProfileView::new(&user);

        assert_eq!(view.picture, DEFAULT_AVATAR);
        assert_eq!(
            view.rows,
            vec![
                ("Name", NOT_SET.to_string()),
                ("Email", "a@b.com".to_string()),
                ("Phone", NOT_SET.to_string()),
            ]
        );
    }

    #[test]
    fn test_profile_view_picture() {
        let user = UserRecord::new("A", "a@b.com", "x", "1").with_profile_picture("me.png");
        assert_eq!(ProfileView::new(&user).picture, "me.png");
    }

    #[test]
    fn test_profile_screen_modes() {
        let mut session = SessionHolder::new(MemoryStorage::new());
        session
            .set(&UserRecord::new("A", "a@b.com", "password123", "1"))
            .unwrap();

        let ProfileActivation::Ready(mut controller) = ProfileController::activate(&session) else {
            panic!("expected a ready controller");
        };

        assert!(matches!(
            ProfileScreenView::from_controller(&controller),
            Some(ProfileScreenView::View(_))
        ));

        controller.edit();
        let Some(ProfileScreenView::Form(form)) = ProfileScreenView::from_controller(&controller)
        else {
            panic!("expected the edit form");
        };
        assert_eq!(form.fields.len(), 3);
        assert_eq!(form.fields[2].field, Field::Phone);

        controller.logout(&mut session).unwrap();
        assert_eq!(ProfileScreenView::from_controller(&controller), None);
    }
}
