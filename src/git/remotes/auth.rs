//! SSH-agent credentials for clone, fetch and push.

use git2::{Cred, CredentialType, FetchOptions, PushOptions, RemoteCallbacks};
use tracing::debug;

const DEFAULT_SSH_USER: &str = "git";

/// libgit2 keeps asking for credentials while the server rejects them, so
/// the callback gives up after this many rounds.
const MAX_CREDENTIAL_ATTEMPTS: usize = 3;

/// Hands out SSH-agent credentials for a single remote operation.
#[derive(Debug, Default)]
pub struct AgentCredentials {
    attempts: usize,
}

impl AgentCredentials {
    pub fn credentials(
        &mut self,
        url: &str,
        username_from_url: Option<&str>,
        allowed: CredentialType,
    ) -> Result<Cred, git2::Error> {
        self.attempts += 1;
        if self.attempts > MAX_CREDENTIAL_ATTEMPTS {
            return Err(git2::Error::from_str(&format!(
                "ssh-agent authentication for {url} failed after {MAX_CREDENTIAL_ATTEMPTS} attempts"
            )));
        }

        let user = username_from_url.unwrap_or(DEFAULT_SSH_USER);
        debug!(url, user, ?allowed, attempt = self.attempts, "credentials requested");

        if allowed.contains(CredentialType::USERNAME) {
            Cred::username(user)
        } else if allowed.contains(CredentialType::SSH_KEY) {
            Cred::ssh_key_from_agent(user)
        } else {
            Err(git2::Error::from_str(&format!(
                "{url} requires credentials other than an ssh key ({allowed:?})"
            )))
        }
    }
}

fn agent_callbacks<'a>() -> RemoteCallbacks<'a> {
    let mut agent = AgentCredentials::default();
    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(move |url, username_from_url, allowed| {
        agent.credentials(url, username_from_url, allowed)
    });
    callbacks
}

pub(crate) fn fetch_options<'a>() -> FetchOptions<'a> {
    let mut options = FetchOptions::new();
    options.remote_callbacks(agent_callbacks());
    options
}

/// Push options that also turn a server-side ref rejection into an error;
/// libgit2 otherwise reports a rejected push as success.
pub(crate) fn push_options<'a>() -> PushOptions<'a> {
    let mut callbacks = agent_callbacks();
    callbacks.push_update_reference(|refname, status| match status {
        Some(message) => Err(git2::Error::from_str(&format!(
            "remote rejected {refname}: {message}"
        ))),
        None => Ok(()),
    });

    let mut options = PushOptions::new();
    options.remote_callbacks(callbacks);
    options
}
