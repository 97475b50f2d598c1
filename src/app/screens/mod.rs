//! Screen modules for userdesk.
//!
//! Each screen owns one flow controller for as long as it is displayed and
//! returns where to go next.

mod common;
mod login;
mod profile;
mod register;

pub use common::{ConsoleSession, Input, ScreenContext};
pub use login::LoginScreen;
pub use profile::ProfileScreen;
pub use register::RegisterScreen;

use crate::route::Route;

/// Result of a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenResult {
    /// Show another screen.
    Navigate(Route),
    /// Leave the application.
    Quit,
}
