//! CLI argument structures

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Fold values under a monoid, compose endomorphisms, and check algebraic laws
#[derive(Parser, Debug)]
#[command(name = "monoidal")]
#[command(about = "monoidal - Fold values under a monoid and check algebraic laws", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fold values left to right under a monoid
    Fold {
        /// Monoid to fold under
        monoid: MonoidKind,

        /// Values to fold, in order
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        /// Start from this value instead of the identity
        #[arg(long, allow_negative_numbers = true)]
        seed: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply a pipeline of endomorphisms to an integer
    Pipeline {
        /// Starting value
        #[arg(long, allow_negative_numbers = true)]
        input: i64,

        /// Steps, applied left to right
        steps: Vec<Step>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check associativity and identity laws over sample values
    Laws {
        /// Monoid to check
        monoid: MonoidKind,

        /// Sample values (built-in samples are used when omitted)
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
    },
}

/// Monoids selectable from the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonoidKind {
    /// Integers under addition
    Sum,
    /// Integers under multiplication
    Product,
    /// Booleans under AND
    All,
    /// Booleans under OR
    Any,
    /// Largest integer
    Max,
    /// Smallest integer
    Min,
    /// Strings under concatenation
    Concat,
    /// JSON integer arrays under concatenation
    List,
}

impl MonoidKind {
    pub fn name(self) -> &'static str {
        match self {
            MonoidKind::Sum => "sum",
            MonoidKind::Product => "product",
            MonoidKind::All => "all",
            MonoidKind::Any => "any",
            MonoidKind::Max => "max",
            MonoidKind::Min => "min",
            MonoidKind::Concat => "concat",
            MonoidKind::List => "list",
        }
    }
}

/// Integer endomorphisms for the `pipeline` command. Arithmetic wraps.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// x + 1
    Inc,
    /// x - 1
    Dec,
    /// x * 2
    Double,
    /// x * x
    Square,
    /// -x
    Negate,
}

impl Step {
    pub fn name(self) -> &'static str {
        match self {
            Step::Inc => "inc",
            Step::Dec => "dec",
            Step::Double => "double",
            Step::Square => "square",
            Step::Negate => "negate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_fold_with_negative_values() {
        let cli = Cli::try_parse_from(["monoidal", "fold", "sum", "-3", "4", "--seed", "-1"])
            .unwrap();
        match cli.command {
            Commands::Fold {
                monoid,
                values,
                seed,
                json,
            } => {
                assert_eq!(monoid, MonoidKind::Sum);
                assert_eq!(values, vec!["-3", "4"]);
                assert_eq!(seed.as_deref(), Some("-1"));
                assert!(!json);
            }
            other => panic!("Expected Fold, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_pipeline() {
        let cli =
            Cli::try_parse_from(["monoidal", "-vv", "pipeline", "--input", "3", "inc", "square"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Pipeline { input, steps, .. } => {
                assert_eq!(input, 3);
                assert_eq!(steps, vec![Step::Inc, Step::Square]);
            }
            other => panic!("Expected Pipeline, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_monoid_rejected() {
        assert!(Cli::try_parse_from(["monoidal", "fold", "median", "1"]).is_err());
    }
}
