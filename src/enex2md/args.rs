use clap::{Args, Parser, Subcommand};
use enex2md::config::Language;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "enex2md", version)]
#[command(about = "Convert Evernote .enex exports into tag-organized Markdown", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub overrides: ConfigOverrides,

    /// Config file (defaults to ./enex2md.json when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Flags that take precedence over the config file.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// Directory containing .enex archives
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Root directory for the generated Markdown tree
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Tag a note must carry to be converted
    #[arg(long)]
    pub marker: Option<String>,

    /// Label language for generated notes (ja, en)
    #[arg(long)]
    pub lang: Option<Language>,

    /// Run the conversion without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the effective configuration
    Config {
        /// Also write it to ./enex2md.json
        #[arg(long)]
        save: bool,
    },
}
