use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tinygit::areas::repository::Repository;
use tinygit::artifacts::command::request::{CommandRequest, RawCommandRequest};

const LOG_ENV: &str = "TINYGIT_LOG";
const STDIN_PATH: &str = "-";

#[derive(Parser)]
#[command(
    name = "tinygit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A stand-in for a handful of git commands",
    long_about = "This is a stand-in for the status, commit, log and diff git commands. \
    It validates its arguments and reports what the command would do, \
    without keeping any history of its own.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        long = "work-tree",
        global = true,
        help = "Resolve relative paths against this directory instead of the current one"
    )]
    work_tree: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "status",
        about = "Show the status for the given path specs",
        long_about = "This command echoes the given path specs. Path specs are not expanded."
    )]
    Status {
        #[arg(index = 1, help = "The path specs to report on")]
        path_specs: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Commit the given files with the specified message",
        long_about = "This command checks that every given file exists and reports them as committed. \
        Nothing is written to disk."
    )]
    Commit {
        #[arg(short, long, default_value = "", help = "The commit message")]
        message: String,
        #[arg(index = 1, help = "The files to commit")]
        file_paths: Vec<String>,
    },
    #[command(
        name = "log",
        about = "Show the log for the given paths",
        long_about = "This command echoes the given paths."
    )]
    Log {
        #[arg(index = 1, help = "The paths to show the log for")]
        paths: Vec<String>,
    },
    #[command(
        name = "diff",
        about = "Tell whether two files have the same content",
        long_about = "This command compares the full contents of exactly two files."
    )]
    Diff {
        #[arg(index = 1, help = "The two files to compare")]
        versions: Vec<String>,
    },
    #[command(
        name = "exec",
        about = "Run a command described by a JSON request",
        long_about = "This command reads a JSON request with the keys command, pathSpecs, filePaths, \
        pathsToShowLogFor, versions and message, and runs it. Use - to read the request from stdin."
    )]
    Exec {
        #[arg(index = 1, help = "Path to the request file, or - for stdin")]
        request: String,
    },
    #[command(external_subcommand)]
    Other(Vec<String>),
}

impl Commands {
    fn into_request(self) -> Result<CommandRequest> {
        let request = match self {
            Commands::Status { path_specs } => {
                CommandRequest::named("status").with_path_specs(path_specs)
            }
            Commands::Commit {
                message,
                file_paths,
            } => CommandRequest::named("commit")
                .with_file_paths(file_paths)
                .with_message(message),
            Commands::Log { paths } => {
                CommandRequest::named("log").with_paths_to_show_log_for(paths)
            }
            Commands::Diff { versions } => CommandRequest::named("diff").with_versions(versions),
            Commands::Exec { request } => {
                let raw = RawCommandRequest::from_json(&read_request(&request)?)
                    .with_context(|| format!("Failed to parse request: {}", request))?;
                CommandRequest::try_from(raw)?
            }
            Commands::Other(args) => {
                CommandRequest::named(args.into_iter().next().unwrap_or_default())
            }
        };

        Ok(request)
    }
}

fn read_request(source: &str) -> Result<String> {
    if source == STDIN_PATH {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .context("Failed to read request from stdin")?;
        Ok(json)
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read request file: {}", source))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "warn")).init();

    let cli = Cli::parse();

    let work_tree = match cli.work_tree {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let repository = Repository::new(&work_tree, Box::new(std::io::stdout()))?;
    log::debug!("workspace root {:?}", repository.path());

    let request = cli.command.into_request()?;
    repository.execute(&request)?;

    Ok(())
}
