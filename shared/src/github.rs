use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DRAWING_PATH: &str = "drawing";
pub const DRAWING_CONTENT: &str = "1";
pub const REGULAR_FILE_MODE: &str = "100644";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    pub owner: String,
    pub repo: String,
    pub full_id: String,
}

impl RepoInfo {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        let owner = owner.into();
        let repo = repo.into();
        let full_id = format!("{}/{}", owner, repo);
        Self {
            owner,
            repo,
            full_id,
        }
    }

    /// API route below `/repos/{owner}/{repo}`.
    pub fn route(&self, suffix: &str) -> String {
        format!("/repos/{}{}", self.full_id, suffix)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AuthorizationRequest {
    pub scopes: Vec<String>,
    pub note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

impl AuthorizationRequest {
    pub fn repo_scope(client_id: Option<String>, client_secret: Option<String>) -> Self {
        Self {
            scopes: vec!["repo".to_string()],
            note: "Writing history".to_string(),
            client_id,
            client_secret,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Authorization {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewRepository {
    pub name: String,
    pub private: bool,
    pub has_wiki: bool,
    pub has_downloads: bool,
    pub has_issues: bool,
    pub auto_init: bool,
}

impl NewRepository {
    /// Bare repository that GitHub seeds with an initial commit.
    pub fn auto_initialized(name: impl Into<String>, private: bool) -> Self {
        Self {
            name: name.into(),
            private,
            has_wiki: false,
            has_downloads: false,
            has_issues: false,
            auto_init: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryCommit {
    pub sha: String,
    pub commit: CommitDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetails {
    pub author: Identity,
    pub tree: GitObject,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn sign(&self, date: DateTime<Utc>) -> Signature {
        Signature {
            name: self.name.clone(),
            email: self.email.clone(),
            date,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub email: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GitObject {
    pub sha: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TreeEntry {
    pub path: String,
    pub mode: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

impl TreeEntry {
    pub fn drawing() -> Self {
        Self {
            path: DRAWING_PATH.to_string(),
            mode: REGULAR_FILE_MODE.to_string(),
            kind: "blob".to_string(),
            content: DRAWING_CONTENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TreeRequest {
    pub base_tree: String,
    pub tree: Vec<TreeEntry>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CommitRequest {
    pub message: String,
    pub tree: String,
    pub parents: Vec<String>,
    pub author: Signature,
    pub committer: Signature,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RefUpdate {
    pub sha: String,
    pub force: bool,
}
