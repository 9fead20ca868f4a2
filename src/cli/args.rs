use super::parse::parse_juncture;
use clap::Args;
use mazegraph_core::Juncture;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Maze description (TOML)
    pub maze: PathBuf,

    /// Start juncture as x,y (defaults to [run].start, then 0,0)
    #[arg(long, value_parser = parse_juncture)]
    pub from: Option<Juncture>,

    /// End juncture as x,y (defaults to [run].end, then the lower right corner)
    #[arg(long, value_parser = parse_juncture)]
    pub to: Option<Juncture>,
}
