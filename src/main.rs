use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use vcs::Repository;
use vcs::artifacts::core::config::LOG_FILTER_ENV;
use vcs::artifacts::objects::commit::LogEntry;
use vcs::artifacts::status::status_info::{
    BRANCHES_HEADER, MODIFIED_HEADER, REMOVED_HEADER, STAGED_HEADER, StatusInfo, UNTRACKED_HEADER,
};

#[derive(Parser)]
#[command(
    name = "vcs",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A local version control system with task tracking",
    long_about = "A single-user version control system that stores snapshots of a \
    working directory, tracks branches and records open tasks alongside every commit.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command stages files, or every file beneath a directory. \
        Tracked files that no longer exist are staged for removal."
    )]
    Add {
        #[arg(required = true, help = "The files or directories to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "rm",
        about = "Unstage a file or stage a tracked file for removal",
        long_about = "This command unstages an untracked file, or stages a tracked file for removal \
        and deletes it from the working directory."
    )]
    Rm {
        #[arg(required = true, help = "The files to remove")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Record the staged changes",
        long_about = "This command creates a new commit on the current branch from the staged changes, \
        optionally opening and closing tasks."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
        #[arg(long, help = "The commit author (defaults to VCS_AUTHOR_NAME or USER)")]
        author: Option<String>,
        #[arg(long = "open", help = "A task to open with this commit")]
        open: Vec<String>,
        #[arg(long = "close", help = "A task to close with this commit")]
        close: Vec<String>,
    },
    #[command(name = "log", about = "Show the history of the current branch")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "status", about = "Show the working tree status")]
    Status {
        #[arg(short, long, help = "Show only the pending changes, one per line")]
        short: bool,
    },
    #[command(
        name = "checkout",
        about = "Switch branches or restore files",
        long_about = "This command switches to a branch (`checkout <branch>`), or restores files from \
        the head commit (`checkout -- <file>...`) or from a given commit (`checkout <commit> -- <file>...`)."
    )]
    Checkout {
        #[arg(help = "The branch to switch to, or the commit to restore files from")]
        target: Option<String>,
        #[arg(last = true, help = "The files to restore")]
        files: Vec<String>,
    },
    #[command(name = "branch", about = "Create, delete or list branches")]
    Branch {
        #[command(subcommand)]
        action: BranchAction,
    },
    #[command(
        name = "reset",
        about = "Move the current branch to a commit",
        long_about = "This command moves the current branch to the given commit and checks it out. \
        Without a commit it discards uncommitted changes to tracked files."
    )]
    Reset {
        #[arg(index = 1, help = "The commit to reset to (full or abbreviated id)")]
        commit: Option<String>,
    },
}

#[derive(Subcommand)]
enum BranchAction {
    #[command(about = "Create a branch at the current head commit")]
    Create { name: String },
    #[command(about = "Delete a branch")]
    Delete { name: String },
    #[command(about = "List all branches")]
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();
    let pwd = std::env::current_dir()?.canonicalize()?;

    match &cli.command {
        Commands::Init { path } => {
            let path = path.as_ref().map_or_else(|| pwd.clone(), |path| pwd.join(path));
            let repository = Repository::init(path)?;

            println!(
                "Initialized empty repository in {}",
                repository.metadata_path().display()
            );
        }
        Commands::Add { paths } => {
            let mut repository = Repository::open(&pwd)?;

            for path in paths {
                repository.add(resolve(&pwd, path))?;
            }
        }
        Commands::Rm { paths } => {
            let mut repository = Repository::open(&pwd)?;

            for path in paths {
                repository.remove(resolve(&pwd, path))?;
            }
        }
        Commands::Commit {
            message,
            author,
            open,
            close,
        } => {
            let mut repository = Repository::open(&pwd)?;
            let author = author.as_deref().unwrap_or_default();
            let open = open.iter().map(String::as_str).collect::<Vec<_>>();
            let close = close.iter().map(String::as_str).collect::<Vec<_>>();

            let commit = repository.commit(message, author, &close, &open)?;

            println!(
                "[{} {}] {}",
                commit.branch(),
                commit.oid().to_short_oid(),
                commit.short_message()
            );
        }
        Commands::Log => {
            let repository = Repository::open(&pwd)?;

            for commit in repository.log()? {
                print!("{}", LogEntry::new(&commit, false));
            }
        }
        Commands::GlobalLog => {
            let repository = Repository::open(&pwd)?;

            for commit in repository.global_log()? {
                print!("{}", LogEntry::new(&commit, true));
            }
        }
        Commands::Status { short } => {
            let repository = Repository::open(&pwd)?;
            let status = repository.status()?;

            if *short {
                print_short_status(&status);
            } else {
                print_long_status(&status);
            }
        }
        Commands::Checkout { target, files } => {
            let mut repository = Repository::open(&pwd)?;

            match (target, files.is_empty()) {
                (Some(branch), true) => {
                    repository.checkout_branch(branch)?;
                    eprintln!("Switched to branch '{branch}'");
                }
                (Some(commit), false) => {
                    for file in files {
                        repository.checkout_file_at(commit, resolve(&pwd, file))?;
                    }
                }
                (None, false) => {
                    for file in files {
                        repository.checkout_file(resolve(&pwd, file))?;
                    }
                }
                (None, true) => anyhow::bail!("checkout needs a branch or files to restore"),
            }
        }
        Commands::Branch { action } => {
            let mut repository = Repository::open(&pwd)?;

            match action {
                BranchAction::Create { name } => repository.branch(name)?,
                BranchAction::Delete { name } => repository.remove_branch(name)?,
                BranchAction::List => {
                    let current = repository.current_branch();

                    for branch in repository.branches()? {
                        if branch == current {
                            println!("* {}", branch.to_string().green());
                        } else {
                            println!("  {branch}");
                        }
                    }
                }
            }
        }
        Commands::Reset { commit } => {
            let mut repository = Repository::open(&pwd)?;

            match commit {
                Some(commit) => repository.reset_to(commit)?,
                None => repository.reset()?,
            }
        }
    }

    Ok(())
}

fn resolve(pwd: &Path, path: &str) -> PathBuf {
    pwd.join(path)
}

fn print_long_status(status: &StatusInfo) {
    print!("{}", status_report(status));
}

// Same layout as `StatusInfo`'s Display, with colored groups
fn status_report(status: &StatusInfo) -> String {
    let mut lines = vec![BRANCHES_HEADER.to_string()];
    for (position, line) in status.branch_lines().into_iter().enumerate() {
        if position == 0 {
            lines.push(line.green().to_string());
        } else {
            lines.push(line);
        }
    }

    let groups = [
        (STAGED_HEADER, status.staged(), true),
        (REMOVED_HEADER, status.removed(), true),
        (MODIFIED_HEADER, status.modified(), false),
        (UNTRACKED_HEADER, status.untracked(), false),
    ];

    for (header, files, staged) in groups {
        if files.is_empty() {
            continue;
        }

        lines.push(header.to_string());
        for file in files {
            let line = if header == MODIFIED_HEADER {
                status.modified_line(file)
            } else {
                file.to_string()
            };

            if staged {
                lines.push(line.green().to_string());
            } else {
                lines.push(line.red().to_string());
            }
        }
    }

    lines.into_iter().map(|line| format!("{line}\n")).collect()
}

fn print_short_status(status: &StatusInfo) {
    for (file, change) in status.staged_changes() {
        println!("{} {}", change.short_code().green(), file);
    }
    for (file, change) in status.unstaged_changes() {
        println!("{} {}", change.short_code().red(), file);
    }
}
