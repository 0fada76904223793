mod aggregate;
mod bootstrap;
mod client;
mod config;
mod dispatch;
mod error;
mod models;
mod render;
mod ui;
mod view;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::info;

use bootstrap::Sequencer;
use client::TaskStoreClient;
use config::{Args, Command, Config};
use dispatch::Dispatcher;
use models::UpdateRequest;
use ui::ControlPrompt;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let config = Config::from_args(&args);
    init_logging(&config.log_level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        commit = env!("GIT_COMMIT"),
        endpoint = %config.endpoint,
        "taskdash starting"
    );

    if let Err(e) = run(args, &config).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(args: Args, config: &Config) -> Result<()> {
    let client = TaskStoreClient::new(&config.endpoint);

    match args.command.unwrap_or(Command::View { interactive: false }) {
        Command::View { interactive } => view_command(&client, interactive).await,
        Command::Protect { task_arn, minutes } => {
            let update = match minutes {
                Some(minutes) => UpdateRequest::protection_for_minutes(minutes),
                None => UpdateRequest::protection(true),
            };
            apply_update(&client, &task_arn, update).await
        }
        Command::Unprotect { task_arn } => {
            apply_update(&client, &task_arn, UpdateRequest::protection(false)).await
        }
        Command::Show { task_arn } => show_command(&client, &task_arn).await,
    }
}

async fn view_command(client: &TaskStoreClient, interactive: bool) -> Result<()> {
    let sequencer = Sequencer::new(client);
    let tree = sequencer.run().await.context("bootstrap failed")?;

    if interactive {
        let prompt = ControlPrompt::new(&tree);
        if prompt.is_empty() {
            println!("{}", "No controls available.".yellow());
            return Ok(());
        }
        let dispatcher = Dispatcher::new(client);
        prompt
            .run(&dispatcher)
            .await
            .context("control prompt failed")?;
    }

    Ok(())
}

async fn apply_update(
    client: &TaskStoreClient,
    task_arn: &str,
    update: UpdateRequest,
) -> Result<()> {
    let body = client
        .update_task(task_arn, &update)
        .await
        .with_context(|| format!("failed to update task {}", task_arn))?;
    println!("{} {}", "Accepted:".green().bold(), body);
    Ok(())
}

async fn show_command(client: &TaskStoreClient, task_arn: &str) -> Result<()> {
    let record = client
        .describe_task(task_arn)
        .await
        .with_context(|| format!("failed to fetch task {}", task_arn))?;
    print!("{}", render::render(&view::task_card(&record)));
    Ok(())
}

fn init_logging(log_level: &str) {
    let filter = format!("error,taskdash={}", log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
