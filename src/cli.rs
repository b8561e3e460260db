// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "cubewalk")]
#[command(about = "First-person cube walking demo", long_about = None)]
pub struct Cli {
    /// Render an OBJ mesh next to the cube
    #[arg(long = "mesh")]
    pub mesh: Option<PathBuf>,

    /// Free-fly camera instead of the walking player
    #[arg(long = "fly", default_value = "false")]
    pub fly: bool,
}
