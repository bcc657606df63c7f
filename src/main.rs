use clap::Parser;
use explore::core::config::{self, CliOverrides};
use explore::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "explore", about = "Browse published sandbox templates")]
struct Args {
    /// Search index to query
    #[arg(short, long)]
    index: Option<String>,

    /// Initial search text
    #[arg(short, long)]
    query: Option<String>,

    /// Initial category (catalog name, e.g. "vue-cli")
    #[arg(short, long)]
    category: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to explore.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("explore.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return Err(std::io::Error::other(e));
        }
    };
    let resolved = config::resolve(
        &file_config,
        CliOverrides {
            index: args.index.as_deref(),
            category: args.category.as_deref(),
        },
    );

    log::info!("Explore starting up with index: {}", resolved.index);

    let provider = match tui::build_provider(&resolved) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            return Err(std::io::Error::other(e));
        }
    };

    tui::run(provider, &resolved, args.query)
}
