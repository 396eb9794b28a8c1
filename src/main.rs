use clap::Parser;
use tracing::{error, info};

use study_inspect::adapter::inbound::cli::command::Cli;
use study_inspect::adapter::inbound::cli::run::{self, ExportTarget};
use study_inspect::adapter::inbound::cli::{output, paths};
use study_inspect::adapter::outbound::postgres::PgStudyStore;
use study_inspect::config::Config;

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let mut config = match Config::discover(cli.config.as_deref(), &paths::default_config()) {
        Ok(config) => config,
        Err(e) => {
            output::error(&e.to_string());
            return;
        }
    };
    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }
    if cli.json_logs {
        config.logging.format = "json".into();
    }
    config.init_logging();

    let action = match cli.action() {
        Ok(action) => action,
        Err(e) => {
            output::error(&e.to_string());
            return;
        }
    };

    let database_url = config.database_url(cli.db.as_deref());
    let mut store = match PgStudyStore::connect(&database_url) {
        Ok(store) => store,
        Err(e) => {
            output::fatal(&miette::Report::new(e));
            std::process::exit(1);
        }
    };

    let target = ExportTarget {
        explicit: cli.output_dir.clone(),
        configured: config.export.output_dir.clone(),
    };
    info!(?action, "starting");
    if let Err(e) = run::execute(&mut store, &action, &target) {
        error!(error = %e, "action failed");
        output::error(&e.to_string());
    }
}
