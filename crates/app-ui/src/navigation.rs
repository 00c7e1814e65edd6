//! Navigation shells
//!
//! The app has two stack groups: the auth flow shown before sign-in and the
//! post-auth group of secondary screens. This module declares those groups
//! and provides a per-group navigation stack.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors that can occur while navigating
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// Path does not name a known screen
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// Route belongs to a different group than the stack
    #[error("Route {route} is not part of the {group} group")]
    WrongGroup {
        /// Offending route
        route: Route,
        /// Group of the stack
        group: RouteGroup,
    },
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, NavigationError>;

// =============================================================================
// Route Definitions
// =============================================================================

/// Stack group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteGroup {
    /// Sign-in flow
    Auth,
    /// Screens reachable after sign-in
    PostAuth,
}

impl RouteGroup {
    /// Directory-style group name
    pub fn name(&self) -> &'static str {
        match self {
            RouteGroup::Auth => "auth",
            RouteGroup::PostAuth => "post-auth",
        }
    }

    /// Screens of this group, in declaration order
    pub fn routes(&self) -> &'static [Route] {
        match self {
            RouteGroup::Auth => &[Route::SignIn, Route::SignUp, Route::ForgotPassword],
            RouteGroup::PostAuth => &[Route::Notifications, Route::PrivacyPolicy],
        }
    }
}

impl fmt::Display for RouteGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Screens declared by the shells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    /// Sign in
    SignIn,
    /// Create an account
    SignUp,
    /// Password reset
    ForgotPassword,
    /// Notification list
    Notifications,
    /// Privacy policy
    PrivacyPolicy,
}

impl Route {
    /// Screen name within its group
    pub fn name(&self) -> &'static str {
        match self {
            Route::SignIn => "sign-in",
            Route::SignUp => "sign-up",
            Route::ForgotPassword => "forgot-password",
            Route::Notifications => "notifications",
            Route::PrivacyPolicy => "privacy-policy",
        }
    }

    /// Group the screen is declared in
    pub fn group(&self) -> RouteGroup {
        match self {
            Route::SignIn | Route::SignUp | Route::ForgotPassword => RouteGroup::Auth,
            Route::Notifications | Route::PrivacyPolicy => RouteGroup::PostAuth,
        }
    }

    /// Full path, e.g. `/(auth)/sign-in`
    pub fn path(&self) -> String {
        format!("/({})/{}", self.group().name(), self.name())
    }

    /// Parse a full path or a bare screen name
    pub fn from_path(path: &str) -> Result<Self> {
        let trimmed = path.trim_matches('/');
        let (group, name) = match trimmed.split_once('/') {
            Some((group, name)) => {
                let group = group.trim_start_matches('(').trim_end_matches(')');
                (Some(group), name)
            }
            None => (None, trimmed),
        };

        let route = [RouteGroup::Auth, RouteGroup::PostAuth]
            .iter()
            .filter(|g| group.map_or(true, |name| g.name() == name))
            .flat_map(|g| g.routes().iter())
            .find(|r| r.name() == name)
            .copied();

        route.ok_or_else(|| NavigationError::UnknownRoute(path.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

// =============================================================================
// Stack Shells
// =============================================================================

/// Options for one screen in a shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenOptions {
    /// Screen
    pub route: Route,
    /// Whether the native header is shown
    pub header_shown: bool,
}

/// Declared stack of screens for one group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackShell {
    /// Group
    pub group: RouteGroup,
    /// Screens in declaration order
    pub screens: Vec<ScreenOptions>,
}

impl StackShell {
    /// Shell for a group with headers hidden
    pub fn new(group: RouteGroup) -> Self {
        Self {
            group,
            screens: group
                .routes()
                .iter()
                .map(|&route| ScreenOptions {
                    route,
                    header_shown: false,
                })
                .collect(),
        }
    }

    /// Auth shell
    pub fn auth() -> Self {
        Self::new(RouteGroup::Auth)
    }

    /// Post-auth shell
    pub fn post_auth() -> Self {
        Self::new(RouteGroup::PostAuth)
    }

    /// Whether the shell declares a route
    pub fn contains(&self, route: Route) -> bool {
        self.screens.iter().any(|s| s.route == route)
    }

    /// Initial route
    pub fn initial_route(&self) -> Route {
        self.group.routes()[0]
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Navigation stack within one shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Group the stack belongs to
    group: RouteGroup,
    /// Current entry
    current: StackEntry,
    /// Entries below the current one (bottom to top)
    history: Vec<StackEntry>,
}

impl NavigationStack {
    /// Create a stack at a shell's initial route
    pub fn new(shell: &StackShell) -> Self {
        Self {
            group: shell.group,
            current: StackEntry::new(shell.initial_route()),
            history: Vec::new(),
        }
    }

    fn check(&self, route: Route) -> Result<()> {
        if route.group() != self.group {
            return Err(NavigationError::WrongGroup {
                route,
                group: self.group,
            });
        }
        Ok(())
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) -> Result<()> {
        self.check(route)?;
        tracing::debug!(%route, "Push");
        let previous = std::mem::replace(&mut self.current, StackEntry::new(route));
        self.history.push(previous);
        Ok(())
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        match self.history.pop() {
            Some(entry) => {
                self.current = entry;
                true
            }
            None => false,
        }
    }

    /// Replace the top route
    pub fn replace(&mut self, route: Route) -> Result<()> {
        self.check(route)?;
        self.current = StackEntry::new(route);
        Ok(())
    }

    /// Reset to a single route
    pub fn reset(&mut self, route: Route) -> Result<()> {
        self.check(route)?;
        self.history.clear();
        self.current = StackEntry::new(route);
        Ok(())
    }

    /// Get the current (top) route
    pub fn current(&self) -> Route {
        self.current.route
    }

    /// Get the current stack entry
    pub fn current_entry(&self) -> &StackEntry {
        &self.current
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.history.len() + 1
    }
}
