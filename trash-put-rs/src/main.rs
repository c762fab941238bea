use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use trash_put_core::{move_paths_to_trash, MoveResult};

#[derive(Parser, Debug)]
#[command(name = "trash-put")]
#[command(about = "Put files and directories in the Trash")]
struct Cli {
    /// Files or directories to move to the Trash
    #[arg(required = true, value_name = "PATHS")]
    paths: Vec<String>,

    /// Ignore nonexistent files
    #[arg(short = 'f', long = "force")]
    force: bool,

    /// Directory relative paths are resolved against (defaults to the current directory)
    #[arg(long = "base-dir", value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// Enable debug output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints both tallies to stderr and returns the process exit code.
fn report(result: &MoveResult) -> u8 {
    for path in &result.missing {
        eprintln!("trash-put: cannot trash non existent '{}'", path);
    }
    for error in &result.errors {
        eprintln!("trash-put: {}", error);
    }
    if result.is_clean() {
        0
    } else {
        1
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let base_dir = match cli.base_dir {
        Some(dir) => dir,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(err) => {
                eprintln!("trash-put: cannot determine current directory: {}", err);
                return ExitCode::FAILURE;
            }
        },
    };

    tracing::debug!(count = cli.paths.len(), base_dir = %base_dir.display(), "Trashing paths");
    let result = move_paths_to_trash(&cli.paths, &base_dir, cli.force);
    ExitCode::from(report(&result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn force_and_paths_parse() {
        let cli = Cli::try_parse_from(["trash-put", "-f", "a", "b"]).unwrap();
        assert!(cli.force);
        assert_eq!(cli.paths, vec!["a", "b"]);
        assert!(cli.base_dir.is_none());
    }

    #[test]
    fn paths_are_required() {
        assert!(Cli::try_parse_from(["trash-put"]).is_err());
    }

    #[test]
    fn exit_code_reflects_tallies() {
        assert_eq!(report(&MoveResult::default()), 0);
        let failed = MoveResult {
            missing: vec!["x".to_string()],
            errors: Vec::new(),
        };
        assert_eq!(report(&failed), 1);
    }
}
