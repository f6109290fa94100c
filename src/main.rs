use anyhow::Result;
use clap::Parser;
use sitemetrics::cli::{Cli, Commands};
use sitemetrics::io::output::create_writer;
use sitemetrics::store::MetricsStore;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            today,
        } => {
            let records = sitemetrics::io::read_project_file(&path)?;
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            let store = MetricsStore::load(records, today);
            let metrics = store.metrics();
            let mut writer = create_writer(output, format)?;
            writer.write_report(&metrics)
        }
        Commands::Init { force } => {
            sitemetrics::config::init_config(force)?;
            Ok(())
        }
    }
}
