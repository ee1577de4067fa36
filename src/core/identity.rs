//! Best-effort lookup of the local committer identity.

use serde::Serialize;

use crate::utils::command;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Identity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Source of the committer identity used for author/email defaults.
///
/// Implementations never fail: anything that goes wrong is reported as an
/// absent field.
pub trait IdentityProbe {
    fn lookup_identity(&self) -> Identity;
}

/// Reads `user.name` and `user.email` from the git configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitIdentity;

impl IdentityProbe for GitIdentity {
    fn lookup_identity(&self) -> Identity {
        let identity = Identity {
            author: command::run_optional("git", &["config", "--get", "user.name"]),
            email: command::run_optional("git", &["config", "--get", "user.email"]),
        };

        if identity.author.is_none() || identity.email.is_none() {
            crate::log_status!("identity", "git user.name/user.email not fully configured");
        }

        identity
    }
}

/// Fixed identity, for callers that must not consult the environment.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity(pub Identity);

impl IdentityProbe for StaticIdentity {
    fn lookup_identity(&self) -> Identity {
        self.0.clone()
    }
}
