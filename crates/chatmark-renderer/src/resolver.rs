//! Entity lookups for mentions.
//!
//! The renderer asks an [`EntityResolver`] for the display name of each
//! mentioned channel, role, and user. Every method defaults to `None`, so
//! implementors provide only the lookups they support; a missing resolver
//! and a resolver miss both render the raw mention form.

use std::collections::HashMap;

/// A resolved channel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Channel {
    /// Channel name, without the leading `#`.
    pub name: String,
}

/// A resolved role.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Role {
    /// Role name, without the leading `@`.
    pub name: String,
}

/// A resolved user.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct User {
    /// Username, without the leading `@`.
    pub username: String,
}

/// Lookup from entity ids to display records.
///
/// Lookups are synchronous: the renderer resolves each mention before
/// emitting it, so output always follows document order.
pub trait EntityResolver {
    /// Resolve a channel by id.
    fn channel(&self, _id: &str) -> Option<Channel> {
        None
    }

    /// Resolve a role by id.
    fn role(&self, _id: &str) -> Option<Role> {
        None
    }

    /// Resolve a user by id.
    fn user(&self, _id: &str) -> Option<User> {
        None
    }
}

/// In-memory resolver backed by hash maps.
///
/// # Example
///
/// ```
/// use chatmark_renderer::{EntityResolver, MapResolver};
///
/// let resolver = MapResolver::new()
///     .with_channel("1", "general")
///     .with_user("42", "ada");
///
/// assert_eq!(resolver.user("42").unwrap().username, "ada");
/// assert!(resolver.role("7").is_none());
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapResolver {
    channels: HashMap<String, Channel>,
    roles: HashMap<String, Role>,
    users: HashMap<String, User>,
}

impl MapResolver {
    /// Create an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a channel.
    #[must_use]
    pub fn with_channel(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.channels
            .insert(id.into(), Channel { name: name.into() });
        self
    }

    /// Add a role.
    #[must_use]
    pub fn with_role(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.roles.insert(id.into(), Role { name: name.into() });
        self
    }

    /// Add a user.
    #[must_use]
    pub fn with_user(mut self, id: impl Into<String>, username: impl Into<String>) -> Self {
        self.users.insert(
            id.into(),
            User {
                username: username.into(),
            },
        );
        self
    }

    /// Whether the resolver holds no entities.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty() && self.roles.is_empty() && self.users.is_empty()
    }
}

impl EntityResolver for MapResolver {
    fn channel(&self, id: &str) -> Option<Channel> {
        self.channels.get(id).cloned()
    }

    fn role(&self, id: &str) -> Option<Role> {
        self.roles.get(id).cloned()
    }

    fn user(&self, id: &str) -> Option<User> {
        self.users.get(id).cloned()
    }
}
