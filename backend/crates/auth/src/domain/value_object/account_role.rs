use serde::{Deserialize, Serialize};
use std::fmt;

/// Role attached to an administrative account.
///
/// Deployment policy: only `Admin` passes the authorization middleware
/// in front of the protected content routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum AccountRole {
    #[default]
    Editor = 0,
    Admin = 1,
}

impl AccountRole {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            AccountRole::Editor => "editor",
            AccountRole::Admin => "admin",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, AccountRole::Admin)
    }

    /// Map a stored role id back to a role.
    ///
    /// Unknown ids fall back to the least-privileged role.
    #[inline]
    pub fn from_id(id: i16) -> Self {
        match id {
            0 => AccountRole::Editor,
            1 => AccountRole::Admin,
            _ => {
                tracing::error!(id, "Unknown AccountRole id, falling back to editor");
                AccountRole::Editor
            }
        }
    }

    /// Map a role code (e.g. from token claims) back to a role.
    ///
    /// Unknown codes fall back to the least-privileged role.
    #[inline]
    pub fn from_code(code: &str) -> Self {
        match code {
            "editor" => AccountRole::Editor,
            "admin" => AccountRole::Admin,
            _ => {
                tracing::error!(code, "Unknown AccountRole code, falling back to editor");
                AccountRole::Editor
            }
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
