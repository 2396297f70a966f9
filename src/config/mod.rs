pub mod site;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "lueur-site")]
#[command(about = "Builds the daily Lueur Quotidienne page")]
pub struct CliConfig {
    /// Products JSON endpoint: an http(s) URL or a local file path.
    #[arg(long)]
    pub data_endpoint: Option<String>,

    /// Page shell template; the built-in shell is used when omitted.
    #[arg(long)]
    pub shell: Option<String>,

    #[arg(long, default_value = "./dist")]
    pub output_path: String,

    /// Site configuration file (TOML).
    #[arg(long)]
    pub config: Option<String>,

    /// Public site URL, used to resolve relative image paths.
    #[arg(long)]
    pub site_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}
