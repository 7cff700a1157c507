use clap::CommandFactory;
use clap_complete::CompleteEnv;
use log::{error, info};
use parcel_watch::{Cli, Config, config::cron_requested_in_env, logging};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    CompleteEnv::with_factory(Cli::command).complete();
    logging::init(logging::is_cron(cron_requested_in_env()));
    color_backtrace::install();
    let cli = Cli::default();

    info!("Script execution started");
    let outcome = match Config::from_env() {
        Ok(config) => cli.execute(config).await,
        Err(e) => Err(e),
    };
    match outcome {
        Ok(_) => info!("Script execution finished"),
        Err(e) => {
            error!("{e}");
            if let Some(backtrace) = e.backtrace() {
                log::debug!("{backtrace}");
            }
        }
    }
}
