//! Command line interface.
//!
//! Examples:
//!   theme-tasks replace-reds --theme=1
//!   theme-tasks compile-default-theme --theme=2
//!   theme-tasks --themes-dir ./themes compile-default-theme --theme 2

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Settings;
use crate::tasks::Task;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "theme-tasks",
    version,
    about = "Theme stylesheet build tasks",
    long_about = "Rewrites theme stylesheets so literal colors use semantic SCSS variables, and compiles a theme's default preset into compressed CSS."
)]
pub struct Cli {
    /// Project settings file (defaults to ./theme-tasks.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Increase log detail (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, Default)]
pub struct LayoutArgs {
    /// Directory holding per-theme replacement inputs (app<ID>/)
    #[arg(long, global = true)]
    pub files_dir: Option<PathBuf>,

    /// Directory holding the front-end theme folders (app<ID>/)
    #[arg(long, global = true)]
    pub themes_dir: Option<PathBuf>,

    /// Stylesheet file name inside each theme folder
    #[arg(long, global = true)]
    pub stylesheet: Option<String>,
}

impl LayoutArgs {
    pub fn to_settings(&self) -> Settings {
        Settings {
            files_dir: self.files_dir.clone(),
            themes_dir: self.themes_dir.clone(),
            stylesheet: self.stylesheet.clone(),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Replace literal colors with variable names and strip comments
    ReplaceReds(ThemeArgs),
    /// Compile the theme stylesheet with its default preset to compressed CSS
    CompileDefaultTheme(ThemeArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ThemeArgs {
    /// Theme number, selects the app<ID> folder
    #[arg(long)]
    pub theme: Option<String>,
}

impl Command {
    pub fn task(&self) -> Task {
        match self {
            Command::ReplaceReds(_) => Task::ReplaceReds,
            Command::CompileDefaultTheme(_) => Task::CompileDefaultTheme,
        }
    }

    pub fn theme(&self) -> Option<&str> {
        match self {
            Command::ReplaceReds(args) | Command::CompileDefaultTheme(args) => {
                args.theme.as_deref()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_theme_with_equals_sign() {
        let cli = Cli::try_parse_from(["theme-tasks", "replace-reds", "--theme=1"]).unwrap();
        assert_eq!(cli.command.task(), Task::ReplaceReds);
        assert_eq!(cli.command.theme(), Some("1"));
    }

    #[test]
    fn theme_is_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["theme-tasks", "compile-default-theme"]).unwrap();
        assert_eq!(cli.command.task(), Task::CompileDefaultTheme);
        assert_eq!(cli.command.theme(), None);
    }

    #[test]
    fn layout_flags_become_settings_overrides() {
        let cli = Cli::try_parse_from([
            "theme-tasks",
            "compile-default-theme",
            "--theme",
            "2",
            "--themes-dir",
            "web/themes",
            "-vv",
        ])
        .unwrap();

        let settings = cli.layout.to_settings();
        assert_eq!(settings.themes_dir, Some(PathBuf::from("web/themes")));
        assert!(settings.files_dir.is_none());
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn unknown_task_is_rejected() {
        assert!(Cli::try_parse_from(["theme-tasks", "watch"]).is_err());
    }
}
