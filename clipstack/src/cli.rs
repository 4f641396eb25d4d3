//! src/cli.rs
//! ============================================================================
//! # Command Line
//!
//! Flags mirror the configuration file and win over it. Help and version go
//! to stdout with status 0; every other parse failure exits with status 1.

use std::path::PathBuf;

use clap::{ArgAction, Parser, error::ErrorKind};

use crate::config::{Config, Layout};

#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "clipstack",
    version,
    about = "Keep a history of clipboard texts and paste them back",
    disable_version_flag = true
)]
pub struct Cli {
    /// Show version and exit
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    /// Lay entries out side by side, with their copy date
    #[arg(short = 'H', long, overrides_with = "vertical")]
    pub horizontal: bool,

    /// Lay entries out as a list
    #[arg(short = 'V', long, overrides_with = "horizontal")]
    pub vertical: bool,

    /// Keep the view open after pasting an entry
    #[arg(short = 'i', long = "iconify-disable")]
    pub iconify_disable: bool,

    /// Number of entries kept in history (2..=1024)
    #[arg(short = 's', long = "history-size", value_name = "N")]
    pub history_size: Option<usize>,

    /// Background colour, `#rrggbb` or a colour name
    #[arg(short = 'c', long = "bg-color", value_name = "COLOR")]
    pub bg_color: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// What `main` should do after looking at the arguments
#[derive(Debug)]
pub enum CliOutcome {
    Run(Cli),
    Exit { message: String, code: u8 },
}

impl Cli {
    /// Parse arguments, turning clap's own exits into explicit outcomes.
    pub fn parse_from_args<I, T>(args: I) -> CliOutcome
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => CliOutcome::Run(cli),
            Err(err) => {
                let code = match err.kind() {
                    ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
                    _ => 1,
                };
                CliOutcome::Exit {
                    message: err.render().to_string(),
                    code,
                }
            }
        }
    }

    /// Layer command-line overrides onto a loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if self.horizontal {
            config.ui.layout = Layout::Horizontal;
        } else if self.vertical {
            config.ui.layout = Layout::Vertical;
        }

        if self.iconify_disable {
            config.ui.minimize_after_paste = false;
        }

        if let Some(size) = self.history_size {
            config.history.capacity = size;
        }

        if let Some(color) = &self.bg_color {
            config.ui.background.clone_from(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Cli {
        match Cli::parse_from_args(std::iter::once("clipstack").chain(args.iter().copied())) {
            CliOutcome::Run(cli) => cli,
            CliOutcome::Exit { message, code } => panic!("unexpected exit {code}: {message}"),
        }
    }

    fn exit_code(args: &[&str]) -> u8 {
        match Cli::parse_from_args(std::iter::once("clipstack").chain(args.iter().copied())) {
            CliOutcome::Run(cli) => panic!("unexpected run: {cli:?}"),
            CliOutcome::Exit { code, .. } => code,
        }
    }

    #[test]
    fn test_short_flags() {
        let cli = run(&["-H", "-i", "-s", "12", "-c", "#112233"]);
        assert!(cli.horizontal);
        assert!(cli.iconify_disable);
        assert_eq!(cli.history_size, Some(12));
        assert_eq!(cli.bg_color.as_deref(), Some("#112233"));
    }

    #[test]
    fn test_help_and_version_exit_zero() {
        assert_eq!(exit_code(&["--help"]), 0);
        assert_eq!(exit_code(&["-h"]), 0);
        assert_eq!(exit_code(&["-v"]), 0);
        assert_eq!(exit_code(&["--version"]), 0);
    }

    #[test]
    fn test_bad_history_size_exits_one() {
        assert_eq!(exit_code(&["-s", "12abc"]), 1);
        assert_eq!(exit_code(&["--history-size"]), 1);
    }

    #[test]
    fn test_last_orientation_flag_wins() {
        let cli = run(&["-H", "-V"]);
        assert!(cli.vertical);
        assert!(!cli.horizontal);
    }

    #[test]
    fn test_apply_overrides_config() {
        let mut config = Config::default();
        run(&["--horizontal", "--iconify-disable", "--history-size", "3"]).apply(&mut config);

        assert_eq!(config.ui.layout, Layout::Horizontal);
        assert!(!config.ui.minimize_after_paste);
        assert_eq!(config.history.capacity, 3);
    }

    #[test]
    fn test_out_of_range_size_fails_validation() {
        let mut config = Config::default();
        run(&["-s", "1"]).apply(&mut config);
        assert!(config.validate().unwrap_err().is_fatal());
    }

    #[test]
    fn test_no_flags_keep_config() {
        let mut config = Config::default();
        config.ui.layout = Layout::Horizontal;
        run(&[]).apply(&mut config);
        assert_eq!(config, {
            let mut expected = Config::default();
            expected.ui.layout = Layout::Horizontal;
            expected
        });
    }
}
