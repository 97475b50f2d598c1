//! Logical navigation targets.

use std::fmt;
use std::str::FromStr;

/// Screen a flow can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Login form.
    #[default]
    Login,
    /// Registration form.
    Register,
    /// Profile view/edit.
    Profile,
}

impl Route {
    /// Path of the route.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Profile => "/profile",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('/').to_lowercase().as_str() {
            "login" => Ok(Route::Login),
            "register" => Ok(Route::Register),
            "profile" => Ok(Route::Profile),
            _ => Err(format!("unknown route: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(Route::Register.path(), "/register");
        assert_eq!(Route::Profile.to_string(), "/profile");
    }

    #[test]
    fn test_parse() {
        assert_eq!("/login".parse::<Route>(), Ok(Route::Login));
        assert_eq!("register".parse::<Route>(), Ok(Route::Register));
        assert_eq!(" /Profile ".parse::<Route>(), Ok(Route::Profile));
        assert!("/admin".parse::<Route>().is_err());
    }
}
