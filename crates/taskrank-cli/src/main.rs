//! taskrank: rank exported tasks by importance from the command line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use taskrank_core::ports::{Clock, FixedClock, SystemClock, UlidGenerator};
use taskrank_core::ranking::RankedTask;
use taskrank_core::{Limit, Ranker, ScoringPolicy, Task};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod input;
mod output;

#[derive(Parser)]
#[command(name = "taskrank", version, about = "Rank tasks by importance")]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the most important tasks.
    Top {
        #[command(flatten)]
        rank: RankArgs,

        /// How many tasks to print.
        #[arg(
            short = 'n',
            long,
            default_value_t = Limit::DEFAULT.get() as i64,
            allow_negative_numbers = true
        )]
        limit: i64,
    },

    /// Print every task, most important first.
    Sort {
        #[command(flatten)]
        rank: RankArgs,
    },

    /// Print how each task's score is made up, in file order.
    Score {
        #[command(flatten)]
        rank: RankArgs,
    },
}

#[derive(Args)]
struct RankArgs {
    /// JSON file holding an array of task records.
    tasks: PathBuf,

    /// JSON scoring policy overriding the default tables.
    #[arg(long, env = "TASKRANK_POLICY")]
    policy: Option<PathBuf>,

    /// Rank as of this instant (RFC 3339) instead of the current time.
    #[arg(long)]
    now: Option<DateTime<Utc>>,

    /// Emit JSON instead of a table.
    #[arg(long)]
    json: bool,
}

impl RankArgs {
    /// Load policy and tasks, freezing the clock so the whole command sees one
    /// instant.
    fn load(&self) -> Result<(Ranker<FixedClock>, Vec<Task>)> {
        let clock = FixedClock::new(self.now.unwrap_or_else(|| SystemClock.now()));

        let policy = match &self.policy {
            Some(path) => input::read_policy(path)?,
            None => ScoringPolicy::default(),
        };
        let tasks = input::read_tasks(&self.tasks, &UlidGenerator::new(clock), clock.now())?;
        info!(
            tasks = tasks.len(),
            file = %self.tasks.display(),
            now = %clock.now(),
            "loaded tasks"
        );

        Ok((Ranker::new(policy, clock), tasks))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info,taskrank_core=debug,taskrank=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Top { rank, limit } => {
            let limit = Limit::try_from(limit).context("invalid --limit")?;
            let (ranker, tasks) = rank.load()?;
            let top = ranker.top_ranked(&tasks, limit);
            print_ranked(&top, rank.json)
        }
        Commands::Sort { rank } => {
            let (ranker, tasks) = rank.load()?;
            let sorted = ranker.rank(&tasks);
            print_ranked(&sorted, rank.json)
        }
        Commands::Score { rank } => {
            let (ranker, tasks) = rank.load()?;
            let rows: Vec<_> = tasks.iter().map(|t| (t, ranker.breakdown(t))).collect();
            if rank.json {
                println!("{}", output::breakdown_json(&rows)?);
            } else {
                print!("{}", output::breakdown_table(&rows));
            }
            Ok(())
        }
    }
}

fn print_ranked(ranked: &[RankedTask<'_>], json: bool) -> Result<()> {
    if json {
        println!("{}", output::ranked_json(ranked)?);
    } else {
        print!("{}", output::ranked_table(ranked));
    }
    Ok(())
}
