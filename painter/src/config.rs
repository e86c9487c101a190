use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_REPO_NAME: &str = "Commit-History-Art";

#[derive(Clone, Deserialize)]
pub struct Env {
    pub github_client_id: Option<String>,
    pub github_client_secret: Option<String>,
    #[serde(default = "default_api_url")]
    pub github_api_url: String,
    #[serde(default = "default_repo_name")]
    pub repo_name: String,
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default = "default_commit_message")]
    pub commit_message: String,
    #[serde(default)]
    pub private: bool,
}

impl Env {
    /// Reads the process environment, after merging an optional `.env` file.
    pub fn load() -> Result<Self, envy::Error> {
        dotenv::dotenv().ok();
        envy::from_env::<Env>()
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_repo_name() -> String {
    DEFAULT_REPO_NAME.to_string()
}

fn default_branch() -> String {
    "master".to_string()
}

fn default_commit_message() -> String {
    "Commit".to_string()
}
