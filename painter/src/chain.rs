use shared::DrawDate;
use tracing::{debug, error, info, instrument, warn};

use crate::{
    api::{
        CommitRequest, Identity, NewRepository, RefUpdate, RemoteRepository, RepoInfo,
        TreeEntry, TreeRequest,
    },
    error::{CommitStep, PaintError},
};

/// Tree every new commit is layered on, and the commit it is chained to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainCursor {
    pub tree_sha: String,
    pub parent_sha: String,
}

#[derive(Debug, Clone)]
pub struct InitialState {
    pub cursor: ChainCursor,
    pub author: Identity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintReport {
    pub commits: usize,
    pub head: String,
}

pub async fn repository_exists<R>(remote: &R, repo: &RepoInfo) -> Result<bool, PaintError>
where
    R: RemoteRepository + ?Sized,
{
    match remote.get_repository(repo).await {
        Ok(()) => Ok(true),
        Err(e) if e.is_not_found() => Ok(false),
        Err(source) => Err(PaintError::RepositoryLookupFailed {
            repo: repo.full_id.clone(),
            source,
        }),
    }
}

pub async fn create_repository<R>(
    remote: &R,
    repo: &RepoInfo,
    private: bool,
) -> Result<(), PaintError>
where
    R: RemoteRepository + ?Sized,
{
    let request = NewRepository::auto_initialized(repo.repo.as_str(), private);
    remote
        .create_repository(&request)
        .await
        .map_err(|source| PaintError::RepositoryCreationFailed {
            repo: repo.full_id.clone(),
            source,
        })
}

/// Returns `true` when the repository had to be created.
#[instrument(skip(remote, repo), fields(repo = repo.full_id))]
pub async fn ensure_repository<R>(
    remote: &R,
    repo: &RepoInfo,
    private: bool,
) -> Result<bool, PaintError>
where
    R: RemoteRepository + ?Sized,
{
    if repository_exists(remote, repo).await? {
        debug!("Repository {} already exists", repo.full_id);
        return Ok(false);
    }

    info!("Creating repository {}", repo.full_id);
    create_repository(remote, repo, private).await?;
    Ok(true)
}

/// Reads the root commit of the default branch, which for a fresh repository is
/// the one GitHub generated on creation.
#[instrument(skip(remote, repo), fields(repo = repo.full_id))]
pub async fn capture_initial_state<R>(
    remote: &R,
    repo: &RepoInfo,
) -> Result<InitialState, PaintError>
where
    R: RemoteRepository + ?Sized,
{
    let mut commits = remote
        .oldest_commits(repo)
        .await
        .map_err(|source| PaintError::InitialStateUnavailable {
            repo: repo.full_id.clone(),
            source,
        })?;

    let earliest = commits
        .pop()
        .ok_or_else(|| PaintError::EmptyHistory(repo.full_id.clone()))?;

    debug!(
        "Drawing on top of {} authored by {}",
        earliest.sha, earliest.commit.author.name
    );
    Ok(InitialState {
        cursor: ChainCursor {
            tree_sha: earliest.commit.tree.sha,
            parent_sha: earliest.sha,
        },
        author: earliest.commit.author,
    })
}

/// Appends commits one after another on a single branch.
pub struct CommitChain<'a, R: ?Sized> {
    remote: &'a R,
    repo: &'a RepoInfo,
    branch: &'a str,
    message: &'a str,
    author: Identity,
}

impl<'a, R> CommitChain<'a, R>
where
    R: RemoteRepository + ?Sized,
{
    pub fn new(
        remote: &'a R,
        repo: &'a RepoInfo,
        branch: &'a str,
        message: &'a str,
        author: Identity,
    ) -> Self {
        Self {
            remote,
            repo,
            branch,
            message,
            author,
        }
    }

    /// Creates a tree with the drawing file, commits it on top of the cursor and
    /// force moves the branch to it. The returned cursor points at the new commit.
    pub async fn append_commit(
        &self,
        cursor: &ChainCursor,
        date: DrawDate,
    ) -> Result<ChainCursor, PaintError> {
        let broken = |step| {
            move |source| PaintError::CommitChainBroken {
                step,
                parent: cursor.parent_sha.clone(),
                source,
            }
        };

        let tree = self
            .remote
            .create_tree(
                self.repo,
                &TreeRequest {
                    base_tree: cursor.tree_sha.clone(),
                    tree: vec![TreeEntry::drawing()],
                },
            )
            .await
            .map_err(broken(CommitStep::Tree))?;

        let signature = self.author.sign(date);
        let commit = self
            .remote
            .create_commit(
                self.repo,
                &CommitRequest {
                    message: self.message.to_string(),
                    tree: tree.sha,
                    parents: vec![cursor.parent_sha.clone()],
                    author: signature.clone(),
                    committer: signature,
                },
            )
            .await
            .map_err(broken(CommitStep::Commit))?;

        self.remote
            .update_ref(
                self.repo,
                self.branch,
                &RefUpdate {
                    sha: commit.sha.clone(),
                    force: true,
                },
            )
            .await
            .map_err(broken(CommitStep::UpdateRef))?;

        Ok(ChainCursor {
            tree_sha: cursor.tree_sha.clone(),
            parent_sha: commit.sha,
        })
    }

    /// Commits once per date, in order. Stops at the first failure; commits
    /// already pushed stay in place.
    #[instrument(skip(self, cursor, dates), fields(repo = self.repo.full_id, total = dates.len()))]
    pub async fn paint(
        &self,
        cursor: ChainCursor,
        dates: &[DrawDate],
    ) -> Result<PaintReport, PaintError> {
        let mut cursor = cursor;
        for (index, date) in dates.iter().enumerate() {
            cursor = match self.append_commit(&cursor, *date).await {
                Ok(next) => next,
                Err(e) => {
                    error!("Stopped after {index} of {} commits: {e}", dates.len());
                    return Err(e);
                }
            };
            info!(
                "Commit {}/{} on {}: {}",
                index + 1,
                dates.len(),
                shared::format_draw_date(date),
                cursor.parent_sha
            );
        }

        if dates.is_empty() {
            warn!("Nothing to draw");
        }

        Ok(PaintReport {
            commits: dates.len(),
            head: cursor.parent_sha,
        })
    }
}

/// Everything after authentication: makes sure the repository exists, reads its
/// initial state and draws `text` relative to `today`.
pub async fn draw<R>(
    remote: &R,
    repo: &RepoInfo,
    branch: &str,
    message: &str,
    private: bool,
    text: &str,
    today: DrawDate,
) -> Result<PaintReport, PaintError>
where
    R: RemoteRepository + ?Sized,
{
    shared::validate(text)?;
    ensure_repository(remote, repo, private).await?;
    let initial = capture_initial_state(remote, repo).await?;

    let dates = shared::draw_dates(text, shared::start_date(today))?;
    info!("Drawing {text:?} with {} commits", dates.len());

    CommitChain::new(remote, repo, branch, message, initial.author)
        .paint(initial.cursor, &dates)
        .await
}
