use http_body_util::BodyExt;
use octocrab::{service::middleware::retry::RetryConfig, Octocrab, Page};
use serde::{de::DeserializeOwned, de::IgnoredAny, Serialize};
use tracing::{debug, instrument};

use crate::{
    config::Env,
    error::{PaintError, RemoteError},
    prompt::Credentials,
};

pub use shared::github::*;

/// Largest page GitHub serves for commit listings.
const COMMITS_PER_PAGE: &str = "100";

/// Repository endpoints the commit driver depends on.
#[async_trait::async_trait]
pub trait RemoteRepository: Send + Sync {
    async fn get_repository(&self, repo: &RepoInfo) -> Result<(), RemoteError>;

    async fn create_repository(&self, request: &NewRepository) -> Result<(), RemoteError>;

    /// Last page of the default branch history, newest first. Its final entry is
    /// the root commit.
    async fn oldest_commits(&self, repo: &RepoInfo)
        -> Result<Vec<RepositoryCommit>, RemoteError>;

    async fn create_tree(
        &self,
        repo: &RepoInfo,
        request: &TreeRequest,
    ) -> Result<GitObject, RemoteError>;

    async fn create_commit(
        &self,
        repo: &RepoInfo,
        request: &CommitRequest,
    ) -> Result<GitObject, RemoteError>;

    async fn update_ref(
        &self,
        repo: &RepoInfo,
        branch: &str,
        request: &RefUpdate,
    ) -> Result<(), RemoteError>;
}

#[derive(Clone, Copy)]
enum Method {
    Get,
    Post,
    Patch,
}

enum Auth {
    Basic { username: String, password: String },
    Token(String),
}

/// Octocrab session without the retry layer: every write is sent exactly once.
fn session(api_url: &str, auth: Auth) -> octocrab::Result<Octocrab> {
    let builder = Octocrab::builder()
        .add_retry_config(RetryConfig::None)
        .base_uri(api_url)?;
    match auth {
        Auth::Basic { username, password } => builder.basic_auth(username, password).build(),
        Auth::Token(token) => builder.personal_token(token).build(),
    }
}

#[derive(Clone)]
pub struct GithubClient {
    octocrab: Octocrab,
    api_url: String,
    pub user_handle: String,
}

impl GithubClient {
    /// Trades basic credentials for a `repo` scoped token and opens a session with it.
    #[instrument(skip_all, fields(user = credentials.username))]
    pub async fn authenticate(env: &Env, credentials: &Credentials) -> Result<Self, PaintError> {
        let api_url = env.github_api_url.trim_end_matches('/').to_string();

        let basic = session(
            &api_url,
            Auth::Basic {
                username: credentials.username.clone(),
                password: credentials.password.clone(),
            },
        )
        .map_err(|e| PaintError::AuthenticationFailed(e.into()))?;

        let request = AuthorizationRequest::repo_scope(
            env.github_client_id.clone(),
            env.github_client_secret.clone(),
        );
        let authorization: Authorization =
            send(&basic, &api_url, Method::Post, "/authorizations", Some(&request))
                .await
                .map_err(PaintError::AuthenticationFailed)?;

        let octocrab = session(&api_url, Auth::Token(authorization.token))
            .map_err(|e| PaintError::AuthenticationFailed(e.into()))?;
        debug!("Obtained token for {}", credentials.username);

        Ok(Self {
            octocrab,
            api_url,
            user_handle: credentials.username.clone(),
        })
    }

    pub fn repo_info(&self, repo: &str) -> RepoInfo {
        RepoInfo::new(self.user_handle.as_str(), repo)
    }

    async fn request<P, R>(
        &self,
        method: Method,
        route: &str,
        body: Option<&P>,
    ) -> Result<R, RemoteError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        send(&self.octocrab, &self.api_url, method, route, body).await
    }
}

/// Issues a raw request so that failures keep the status code and the body verbatim.
async fn send<P, R>(
    octocrab: &Octocrab,
    api_url: &str,
    method: Method,
    route: &str,
    body: Option<&P>,
) -> Result<R, RemoteError>
where
    P: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let uri = format!("{api_url}{route}");
    let response = match method {
        Method::Get => octocrab._get(uri).await?,
        Method::Post => octocrab._post(uri, body).await?,
        Method::Patch => octocrab._patch(uri, body).await?,
    };

    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    if !status.is_success() {
        return Err(RemoteError::Status {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&bytes).into_owned(),
        });
    }

    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait::async_trait]
impl RemoteRepository for GithubClient {
    #[instrument(skip(self, repo), fields(repo = repo.full_id))]
    async fn get_repository(&self, repo: &RepoInfo) -> Result<(), RemoteError> {
        self.request::<(), IgnoredAny>(Method::Get, &repo.route(""), None)
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn create_repository(&self, request: &NewRepository) -> Result<(), RemoteError> {
        self.request::<_, IgnoredAny>(Method::Post, "/user/repos", Some(request))
            .await?;
        Ok(())
    }

    #[instrument(skip(self, repo), fields(repo = repo.full_id))]
    async fn oldest_commits(
        &self,
        repo: &RepoInfo,
    ) -> Result<Vec<RepositoryCommit>, RemoteError> {
        let first: Page<RepositoryCommit> = self
            .octocrab
            .get(
                repo.route("/commits"),
                Some(&[("per_page", COMMITS_PER_PAGE)]),
            )
            .await?;
        if first.last.is_none() {
            return Ok(first.items);
        }

        debug!("History spans several pages, fetching the last one");
        let last = self
            .octocrab
            .get_page::<RepositoryCommit>(&first.last)
            .await?;
        Ok(last.map_or(first.items, |page| page.items))
    }

    #[instrument(skip(self, repo, request), fields(repo = repo.full_id, base = request.base_tree))]
    async fn create_tree(
        &self,
        repo: &RepoInfo,
        request: &TreeRequest,
    ) -> Result<GitObject, RemoteError> {
        self.request(Method::Post, &repo.route("/git/trees"), Some(request))
            .await
    }

    #[instrument(skip(self, repo, request), fields(repo = repo.full_id, date = %request.author.date))]
    async fn create_commit(
        &self,
        repo: &RepoInfo,
        request: &CommitRequest,
    ) -> Result<GitObject, RemoteError> {
        self.request(Method::Post, &repo.route("/git/commits"), Some(request))
            .await
    }

    #[instrument(skip(self, repo, request), fields(repo = repo.full_id, sha = request.sha))]
    async fn update_ref(
        &self,
        repo: &RepoInfo,
        branch: &str,
        request: &RefUpdate,
    ) -> Result<(), RemoteError> {
        let route = repo.route(&format!("/git/refs/heads/{branch}"));
        self.request::<_, IgnoredAny>(Method::Patch, &route, Some(request))
            .await?;
        Ok(())
    }
}
