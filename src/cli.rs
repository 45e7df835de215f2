use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "anime-inventory")]
#[command(about = "Keep a list of anime in a local JSON file through an interactive menu")]
pub struct Cli {
    /// JSON file holding the collection (defaults to ./data.json)
    #[arg(long)]
    pub data_file: Option<PathBuf>,
}
