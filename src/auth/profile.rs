//! Profile flow controller for userdesk.
//!
//! The profile screen is only reachable with a current user. Entry goes
//! through [`ProfileController::activate`], which returns a redirect instead
//! of a controller when the session is empty.

use tracing::{debug, info};

use crate::auth::flow::FlowError;
use crate::auth::session::SessionStore;
use crate::route::Route;
use crate::user::{Field, UserRecord};
use crate::Result;

/// Fields editable on the profile form, in display order.
pub const PROFILE_FIELDS: &[Field] = &[Field::Name, Field::Email, Field::Phone];

/// Mode of the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMode {
    /// Read-only view of the current user.
    Viewing,
    /// Form editing a draft copy of the current user.
    Editing,
}

/// Result of entering the profile flow.
#[derive(Debug)]
pub enum ProfileActivation {
    /// No current user; navigate away and render nothing.
    Redirect(Route),
    /// A user is present; the controller starts in [`ProfileMode::Viewing`].
    Ready(ProfileController),
}

/// Read the current user, failing with [`FlowError::SessionAbsent`].
pub fn require_user<S>(session: &S) -> std::result::Result<UserRecord, FlowError>
where
    S: SessionStore + ?Sized,
{
    session.get().ok_or(FlowError::SessionAbsent)
}

/// Controller owning the profile screen state.
#[derive(Debug, Clone)]
pub struct ProfileController {
    /// Current user; `None` after logout.
    user: Option<UserRecord>,
    /// Draft while editing.
    draft: Option<UserRecord>,
}

impl ProfileController {
    /// Enter the profile flow.
    ///
    /// Reads the session once. An empty session yields
    /// `Redirect(Route::Login)`.
    pub fn activate<S>(session: &S) -> ProfileActivation
    where
        S: SessionStore + ?Sized,
    {
        match require_user(session) {
            Ok(user) => {
                debug!(email = %user.email, "Profile activated");
                ProfileActivation::Ready(Self {
                    user: Some(user),
                    draft: None,
                })
            }
            Err(_) => {
                debug!("Profile requested without session, redirecting to login");
                ProfileActivation::Redirect(Route::Login)
            }
        }
    }

    /// Re-run the session guard after the session may have changed.
    ///
    /// Returns the redirect target when the session is gone. Otherwise the
    /// displayed record is refreshed from the session; an open draft is kept.
    pub fn revalidate<S>(&mut self, session: &S) -> Option<Route>
    where
        S: SessionStore + ?Sized,
    {
        match require_user(session) {
            Ok(user) => {
                self.user = Some(user);
                None
            }
            Err(_) => {
                self.user = None;
                self.draft = None;
                Some(Route::Login)
            }
        }
    }

    /// Current user, or `None` after logout.
    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    /// Draft being edited.
    pub fn draft(&self) -> Option<&UserRecord> {
        self.draft.as_ref()
    }

    /// Current mode.
    pub fn mode(&self) -> ProfileMode {
        if self.draft.is_some() {
            ProfileMode::Editing
        } else {
            ProfileMode::Viewing
        }
    }

    /// Switch to editing with a fresh copy of the current user.
    ///
    /// No-op when already editing or logged out.
    pub fn edit(&mut self) {
        if self.draft.is_none() {
            self.draft = self.user.clone();
        }
    }

    /// Update a draft field. Ignored outside of editing.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        if let Some(draft) = self.draft.as_mut() {
            draft.set(field, value);
        }
    }

    /// Commit the draft to the session and return to viewing.
    ///
    /// The whole draft replaces the stored record. On a storage failure the
    /// controller stays in editing with the draft intact.
    pub fn save<S>(&mut self, session: &mut S) -> Result<()>
    where
        S: SessionStore + ?Sized,
    {
        let Some(draft) = self.draft.as_ref() else {
            return Ok(());
        };

        session.set(draft)?;

        info!(email = %draft.email, name = %draft.name, "Profile updated");
        self.user = self.draft.take();
        Ok(())
    }

    /// Discard the draft and return to viewing. The session is not touched.
    pub fn cancel(&mut self) {
        if self.draft.take().is_some() {
            debug!("Profile edit cancelled");
        }
    }

    /// Clear the session and drop the current user.
    ///
    /// Returns the route to navigate to.
    pub fn logout<S>(&mut self, session: &mut S) -> Result<Route>
    where
        S: SessionStore + ?Sized,
    {
        session.clear()?;

        if let Some(user) = self.user.take() {
            info!(email = %user.email, "User logged out");
        }
        self.draft = None;
        Ok(Route::Login)
    }
}
