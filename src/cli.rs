use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "shape-drawer")]
#[command(about = "Draw ASCII shapes, save them to a file and load them back")]
#[command(version)]
pub struct Cli {
    /// Shape file to save to and load from
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Activity journal to append to
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Config file (defaults to the platform config dir)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print without colours
    #[arg(long)]
    pub no_colour: bool,

    /// Don't clear the screen before the menu
    #[arg(long)]
    pub no_clear: bool,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(file) = &self.file {
            config.shapes_file = file.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = log_file.clone();
        }
        if self.no_colour {
            config.colour = false;
        }
        if self.no_clear {
            config.clear_screen = false;
        }
    }
}
