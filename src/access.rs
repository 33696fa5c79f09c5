//! Role gate boundary.
//!
//! Rendering layers decide whether the CRM and board screens are shown at
//! all by asking an [`AccessGate`]. The core never consults the gate; it is
//! defined here so callers share one role vocabulary.

use crate::crm::domain::ParseVariantError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role held by a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access, including configuration.
    Admin,
    /// Manages teams and their boards.
    Manager,
    /// Regular team member.
    Member,
    /// Read-only access.
    Viewer,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Member => "member",
            Self::Viewer => "viewer",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseVariantError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "member" => Ok(Self::Member),
            "viewer" => Ok(Self::Viewer),
            _ => Err(ParseVariantError::new("role", value)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicate deciding whether a role may open a screen.
#[cfg_attr(test, mockall::automock)]
pub trait AccessGate: Send + Sync {
    /// Returns `true` when `role` is allowed through the gate.
    fn permits(&self, role: Role) -> bool;
}

/// Gate that admits a fixed set of roles.
///
/// # Examples
///
/// ```
/// use crmboard::access::{AccessGate, Role, RoleSet};
///
/// let gate = RoleSet::new([Role::Admin, Role::Manager]);
/// assert!(gate.permits(Role::Manager));
/// assert!(!gate.permits(Role::Viewer));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet(Vec<Role>);

impl RoleSet {
    /// Creates a gate admitting the given roles.
    #[must_use]
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        let mut admitted: Vec<Role> = roles.into_iter().collect();
        admitted.sort_unstable();
        admitted.dedup();
        Self(admitted)
    }

    /// Creates a gate admitting every role.
    #[must_use]
    pub fn everyone() -> Self {
        Self::new([Role::Admin, Role::Manager, Role::Member, Role::Viewer])
    }

    /// Returns the admitted roles in privilege order.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.0
    }
}

impl AccessGate for RoleSet {
    fn permits(&self, role: Role) -> bool {
        self.0.binary_search(&role).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::{AccessGate, MockAccessGate, Role, RoleSet};
    use rstest::rstest;

    fn can_open_board(gate: &dyn AccessGate, role: Role) -> bool {
        gate.permits(role)
    }

    #[rstest]
    #[case(Role::Admin, true)]
    #[case(Role::Manager, true)]
    #[case(Role::Member, false)]
    #[case(Role::Viewer, false)]
    fn role_set_admits_listed_roles(#[case] role: Role, #[case] expected: bool) {
        let gate = RoleSet::new([Role::Manager, Role::Admin, Role::Manager]);
        assert_eq!(gate.permits(role), expected);
        assert_eq!(gate.roles(), [Role::Admin, Role::Manager]);
    }

    #[rstest]
    fn everyone_admits_every_role() {
        let gate = RoleSet::everyone();
        assert!(
            [Role::Admin, Role::Manager, Role::Member, Role::Viewer]
                .into_iter()
                .all(|role| gate.permits(role))
        );
    }

    #[rstest]
    fn callers_can_substitute_their_own_gate() {
        let mut gate = MockAccessGate::new();
        gate.expect_permits()
            .withf(|role| *role == Role::Viewer)
            .times(1)
            .return_const(false);

        assert!(!can_open_board(&gate, Role::Viewer));
    }

    #[rstest]
    #[case(" Admin ", Role::Admin)]
    #[case("VIEWER", Role::Viewer)]
    fn roles_parse_case_insensitively(#[case] raw: &str, #[case] expected: Role) {
        assert_eq!(Role::try_from(raw), Ok(expected));
    }

    #[rstest]
    fn unknown_role_is_rejected() {
        let err = Role::try_from("owner").expect_err("owner is not a role");
        assert_eq!(err.to_string(), "unknown role: owner");
    }
}
