use shared::GlyphError;

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] octocrab::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RemoteError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RemoteError::Status { status: 404, .. })
    }
}

/// Remote call inside a single appended commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum CommitStep {
    #[strum(serialize = "tree")]
    Tree,
    #[strum(serialize = "commit")]
    Commit,
    #[strum(serialize = "ref update")]
    UpdateRef,
}

#[derive(Debug, thiserror::Error)]
pub enum PaintError {
    #[error("authentication failed: {0}")]
    AuthenticationFailed(#[source] RemoteError),

    #[error("failed to look up repository {repo}: {source}")]
    RepositoryLookupFailed { repo: String, source: RemoteError },

    #[error("failed to create repository {repo}: {source}")]
    RepositoryCreationFailed { repo: String, source: RemoteError },

    #[error("failed to read commit history of {repo}: {source}")]
    InitialStateUnavailable { repo: String, source: RemoteError },

    #[error("repository {0} has no commits to draw on")]
    EmptyHistory(String),

    /// `parent` is the last commit the chain reached, which the failed commit
    /// was meant to build on.
    #[error("commit chain broken at {step} step on top of {parent}: {source}")]
    CommitChainBroken {
        step: CommitStep,
        parent: String,
        source: RemoteError,
    },

    #[error(transparent)]
    Glyph(#[from] GlyphError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_404_is_not_found() {
        let missing = RemoteError::Status {
            status: 404,
            body: "{\"message\":\"Not Found\"}".to_string(),
        };
        let forbidden = RemoteError::Status {
            status: 403,
            body: "Forbidden".to_string(),
        };
        assert!(missing.is_not_found());
        assert!(!forbidden.is_not_found());
    }

    #[test]
    fn chain_error_names_the_step() {
        let error = PaintError::CommitChainBroken {
            step: CommitStep::UpdateRef,
            parent: "abc".to_string(),
            source: RemoteError::Status {
                status: 422,
                body: "Reference update failed".to_string(),
            },
        };
        assert_eq!(
            error.to_string(),
            "commit chain broken at ref update step on top of abc: HTTP 422: Reference update failed"
        );
    }
}
