use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mdexplorer")]
#[command(version)]
#[command(about = "Explore markdown documents section by section")]
#[command(
    long_about = "mdexplorer - Split markdown documents into a title and ## sections.\n\n\
    The first # heading becomes the document title and every ## heading starts a\n\
    section. Documents without ## headings are shown as a single section.\n\n\
    Examples:\n  \
    mdexplorer files                        # Markdown files in docs/\n  \
    mdexplorer files --csv                  # CSV files in data/\n  \
    mdexplorer sections docs/manual.md      # Numbered section list\n  \
    mdexplorer show docs/manual.md 2        # Second section\n  \
    mdexplorer show docs/manual.md Usage    # Section by heading\n  \
    mdexplorer search docs/manual.md ventas # Lines containing 'ventas'"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    ///
    ///   plain - Human-readable text (default)
    ///   json  - Pretty-printed JSON for scripting
    #[arg(short = 'o', long = "output", default_value = "plain", global = true)]
    pub output: OutputFormat,

    /// Project root for image paths and the docs/ and data/ folders
    ///
    /// Overrides `paths.project_root` from the config file. Defaults to the
    /// current directory.
    #[arg(long = "root", value_name = "DIR", global = true)]
    pub root: Option<PathBuf>,

    /// Truncate displayed sections to this many characters
    #[arg(long = "max-length", value_name = "CHARS", global = true)]
    pub max_length: Option<usize>,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List markdown (or CSV) files with their sizes
    Files {
        /// Directory to scan (default: docs/, or data/ with --csv)
        dir: Option<PathBuf>,

        /// List CSV data files instead of markdown documents
        #[arg(long = "csv")]
        csv: bool,
    },

    /// Show the document title and its numbered sections
    Sections {
        /// Markdown file
        file: PathBuf,
    },

    /// Display one section, cleaned for the terminal
    Show {
        /// Markdown file
        file: PathBuf,

        /// Section heading or 1-based section number
        section: String,

        /// Keep image lines and figure captions in the output
        #[arg(long = "keep-figures")]
        keep_figures: bool,
    },

    /// Word, line, character and section counts
    Stats {
        /// Markdown file
        file: PathBuf,
    },

    /// Case-insensitive search across all sections
    Search {
        /// Markdown file
        file: PathBuf,

        /// Text to look for
        term: String,
    },

    /// Write one section to a file
    Export {
        /// Markdown file
        file: PathBuf,

        /// Section heading or 1-based section number
        section: String,

        /// Destination file (replaced if it exists)
        out: PathBuf,
    },

    /// Name, size and existence of a file
    Info {
        /// Any file
        file: PathBuf,
    },

    /// Show the config file location and effective settings
    Config {
        /// Write the default config file if none exists
        #[arg(long = "init")]
        init: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}
