//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Migrate dark-only color tokens in the statistics page to a light/dark palette
#[derive(Parser)]
#[command(name = "themeshift", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rewrite the page in place (the default when no subcommand is given)
    Apply {
        /// Page to rewrite (default: $THEMESHIFT_TARGET, then src/pages/Stats.tsx)
        path: Option<PathBuf>,
    },
    /// Report what a rewrite would change without writing
    Check {
        /// Page to inspect
        path: Option<PathBuf>,
    },
    /// List the replacement table
    Rules {
        /// Also list rule pairs whose order matters
        #[arg(long)]
        conflicts: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation_defaults_to_apply() {
        let cli = Cli::try_parse_from(["themeshift"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_apply_path() {
        let cli = Cli::try_parse_from(["themeshift", "apply", "web/Stats.tsx"]).unwrap();
        match cli.command {
            Some(Command::Apply { path }) => {
                assert_eq!(path, Some(PathBuf::from("web/Stats.tsx")))
            }
            _ => panic!("expected apply"),
        }
    }

    #[test]
    fn test_bare_path_is_rejected() {
        assert!(Cli::try_parse_from(["themeshift", "web/Stats.tsx"]).is_err());
    }

    #[test]
    fn test_global_flags_before_subcommand() {
        let cli = Cli::try_parse_from(["themeshift", "-v", "check"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Command::Check { path: None })));

        let cli = Cli::try_parse_from(["themeshift", "-o", "json", "rules"]).unwrap();
        assert!(matches!(cli.output, OutputFormat::Json));
        assert!(matches!(cli.command, Some(Command::Rules { conflicts: false })));

        let cli = Cli::try_parse_from(["themeshift", "-o", "json", "apply"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Apply { path: None })));

        let cli = Cli::try_parse_from(["themeshift", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_check_with_global_flags() {
        let cli = Cli::try_parse_from(["themeshift", "check", "page.tsx", "-v", "-o", "json"])
            .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.output, OutputFormat::Json));
        match cli.command {
            Some(Command::Check { path }) => assert_eq!(path, Some(PathBuf::from("page.tsx"))),
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn test_rules_conflicts_flag() {
        let cli = Cli::try_parse_from(["themeshift", "rules", "--conflicts"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Rules { conflicts: true })));
    }
}
