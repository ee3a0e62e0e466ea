use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "repflow")]
#[command(about = "A workout session timer for the terminal")]
#[command(long_about = "repflow - a workout session timer for the terminal

Runs your exercise plan as a guided session: each exercise in turn, with
countdowns for timed exercises and a mandatory rest period between steps.
Multi-set exercises are spread out so every exercise gets its first set
before any second sets begin.

QUICK START:
  repflow start             Run the workout player
  repflow plan              Show the current exercise plan
  repflow reset --force     Go back to the default plan

PLAYER KEYS:
  space   pause / resume
  n       next exercise (inserts a rest first; rest cannot be skipped)
  r       restart the current exercise or rest
  q/Esc   exit the workout (asks for confirmation)

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  repflow <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a workout session
    ///
    /// Builds the workout queue from your plan (the saved plan if one
    /// exists, otherwise the built-in default) and opens the interactive
    /// player. The confirmed plan is saved for next time.
    ///
    /// Fails if no exercise in the plan has reps, sets, or time set.
    ///
    /// # Examples
    ///
    ///   repflow start
    ///   repflow s
    #[command(alias = "s")]
    Start,

    /// Show the current exercise plan
    ///
    /// Displays the plan the next session will run: the saved plan if one
    /// exists, otherwise the built-in default plan. Exercises with no
    /// reps, sets, or time are shown dimmed; they are skipped when the
    /// workout queue is built.
    ///
    /// # Examples
    ///
    ///   repflow plan                  Full plan
    ///   repflow plan --section legs   One section only
    ///   repflow plan -o json          JSON for scripting
    #[command(alias = "p")]
    Plan(PlanArgs),

    /// Reset the saved plan to the built-in default
    ///
    /// Discards the saved plan. The next session runs the default
    /// calisthenics plan.
    Reset {
        /// Skip the confirmation check
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   repflow completions bash > /etc/bash_completion.d/repflow
    ///   repflow completions zsh > ~/.zfunc/_repflow
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the plan command.
#[derive(Args)]
pub struct PlanArgs {
    /// Limit output to one section (warmup, push, pull, legs, core, cooldown)
    #[arg(short, long)]
    pub section: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_start() {
        let cli = Cli::try_parse_from(["repflow", "start"]).unwrap();
        assert!(matches!(cli.command, Commands::Start));
        assert_eq!(cli.output, OutputFormat::Pretty);
    }

    #[test]
    fn test_cli_parses_plan_with_section() {
        let cli = Cli::try_parse_from(["repflow", "plan", "--section", "legs"]).unwrap();
        match cli.command {
            Commands::Plan(args) => assert_eq!(args.section.as_deref(), Some("legs")),
            _ => panic!("expected plan command"),
        }
    }

    #[test]
    fn test_cli_global_output_flag() {
        let cli = Cli::try_parse_from(["repflow", "plan", "-o", "json"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn test_cli_aliases() {
        assert!(matches!(
            Cli::try_parse_from(["repflow", "s"]).unwrap().command,
            Commands::Start
        ));
        assert!(matches!(
            Cli::try_parse_from(["repflow", "p"]).unwrap().command,
            Commands::Plan(_)
        ));
    }
}
