//! CLI argument parsing.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Global CLI arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Launchpad subcommands.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Detect the framework of a project and print its deployment plan.
    Detect {
        /// Project directory to inspect.
        #[arg(default_value = ".")]
        path: PathBuf,

        #[arg(long, default_value_t = false)]
        /// Print the result as JSON.
        json: bool,

        #[arg(long)]
        /// Config file to use instead of <path>/launchpad.toml.
        config: Option<PathBuf>,
    },

    /// List every framework launchpad can detect.
    Frameworks,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_defaults_to_current_directory() {
        let args = Args::try_parse_from(["launchpad", "detect"]).unwrap();

        assert!(!args.debug);
        assert_eq!(
            args.command,
            Command::Detect {
                path: PathBuf::from("."),
                json: false,
                config: None,
            }
        );
    }

    #[test]
    fn detect_accepts_path_and_flags() {
        let args = Args::try_parse_from([
            "launchpad",
            "detect",
            "./app",
            "--json",
            "--config",
            "deploy.toml",
            "--debug",
        ])
        .unwrap();

        assert!(args.debug);
        assert_eq!(
            args.command,
            Command::Detect {
                path: PathBuf::from("./app"),
                json: true,
                config: Some(PathBuf::from("deploy.toml")),
            }
        );
    }

    #[test]
    fn frameworks_subcommand() {
        let args =
            Args::try_parse_from(["launchpad", "--debug", "frameworks"])
                .unwrap();

        assert!(args.debug);
        assert_eq!(args.command, Command::Frameworks);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Args::try_parse_from(["launchpad"]).is_err());
    }
}
