use std::fmt;
use std::str::FromStr;

use crate::error::MarketError;
use crate::models::{Role, User};

/// Navigable pages of the marketplace
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Properties,
    PropertyDetail(String),
    Login,
    Register,
    Dashboard,
    MyProperties,
    Admin,
}

const ANY_SIGNED_IN: &[Role] = &[];
const OWNERS: &[Role] = &[Role::Owner];
const ADMINS: &[Role] = &[Role::Admin];

/// What the guard decided for a navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// Session still loading; nothing can be decided yet
    Pending,
    Redirect(Route),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Properties => "/properties".to_string(),
            Route::PropertyDetail(id) => format!("/property/{id}"),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::MyProperties => "/my-properties".to_string(),
            Route::Admin => "/admin".to_string(),
        }
    }

    /// `None` for public pages, `Some(&[])` for any signed-in user.
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Route::Dashboard => Some(ANY_SIGNED_IN),
            Route::MyProperties => Some(OWNERS),
            Route::Admin => Some(ADMINS),
            _ => None,
        }
    }

    pub fn guard(&self, user: Option<&User>, loading: bool) -> Access {
        let Some(roles) = self.allowed_roles() else {
            return Access::Granted;
        };
        if loading {
            return Access::Pending;
        }
        match user {
            None => Access::Redirect(Route::Login),
            Some(user) if !roles.is_empty() && !roles.contains(&user.role) => {
                Access::Redirect(Route::Dashboard)
            }
            Some(_) => Access::Granted,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = MarketError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim_end_matches('/');
        let route = match trimmed {
            "" => Route::Home,
            "/properties" => Route::Properties,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/dashboard" => Route::Dashboard,
            "/my-properties" => Route::MyProperties,
            "/admin" => Route::Admin,
            other => match other.strip_prefix("/property/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::PropertyDetail(id.to_string()),
                _ => return Err(MarketError::InvalidRoute(path.to_string())),
            },
        };
        Ok(route)
    }
}
