use std::io;

use anyhow::Context;
use commit_art_painter::{
    api::GithubClient,
    chain,
    config::Env,
    prompt::{self, Answers},
};
use tracing::{info, instrument};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = Env::load().context("Failed to load environment variables")?;

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer());
    tracing::subscriber::set_global_default(subscriber)?;

    let answers = prompt::read_answers(io::stdin().lock(), io::stdout())?;

    // Fail on bad text before anything is created remotely
    shared::validate(&answers.text)?;

    run(&env, &answers).await
}

#[instrument(skip_all, fields(user = answers.credentials.username, repo = env.repo_name))]
async fn run(env: &Env, answers: &Answers) -> anyhow::Result<()> {
    let github = GithubClient::authenticate(env, &answers.credentials).await?;
    let repo = github.repo_info(&env.repo_name);

    let report = chain::draw(
        &github,
        &repo,
        &env.branch,
        &env.commit_message,
        env.private,
        &answers.text,
        chrono::Utc::now(),
    )
    .await
    .with_context(|| format!("Failed to draw {:?} on {}", answers.text, repo.full_id))?;

    info!(
        "Finished: {} commits, {} now points at {}",
        report.commits, env.branch, report.head
    );
    Ok(())
}
