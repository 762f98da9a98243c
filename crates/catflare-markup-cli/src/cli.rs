use catflare_markup::{Feature, Preset};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catflare-markup")]
#[command(author, version)]
#[command(about = "Parse Catflare message or bio markup and print the content nodes")]
#[command(after_help = "\
EXAMPLES:

    # Parse a file with the message dialect
    catflare-markup message.txt

    # Parse stdin as a bio, as JSON
    echo '**hi** <userid:'\\''42'\\''>' | catflare-markup --preset bio --format json

    # Turn off a construct for one run
    catflare-markup --disable file_embed --disable spoiler message.txt

CONFIGURATION:

Settings are read from --config, or ~/.config/catflare-markup/config.toml:

    preset = \"message\"
    disable = [\"file_embed\"]
    enable = []

Command-line --disable and --enable are applied after the file's lists.")]
pub struct Cli {
    /// Input file; reads stdin when omitted or `-`
    pub file: Option<PathBuf>,

    /// Content dialect, overriding the config file
    #[arg(long)]
    pub preset: Option<Preset>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Feature to turn off (repeatable)
    #[arg(long, value_name = "FEATURE")]
    pub disable: Vec<Feature>,

    /// Feature to turn on (repeatable)
    #[arg(long, value_name = "FEATURE")]
    pub enable: Vec<Feature>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Debug)]
    pub format: OutputFormat,

    /// Include the source byte range of each node
    #[arg(long)]
    pub spans: bool,

    /// Print the effective feature set and exit
    #[arg(long)]
    pub list_features: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Debug,
    Json,
}
