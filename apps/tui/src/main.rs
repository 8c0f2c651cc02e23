use clap::Parser;
use color_eyre::Result;
use radiopharma_tui::app::App;
use radiopharma_tui::cli::CliArgs;
use radiopharma_tui::config::Settings;
use radiopharma_tui::logging::{self, LogTarget};
use radiopharma_tui::{event, terminal};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = CliArgs::parse();
    cli.apply_env_overrides();
    let settings = Settings::from_env()?;
    let source = cli.document_source(&settings.data_url);

    if cli.headless || cli.json || !is_terminal() {
        logging::init(LogTarget::Stderr, settings.debug)?;
        return event::run_headless(&settings, &source, cli.phase, cli.json).await;
    }

    logging::init(LogTarget::File(&settings.log_file), settings.debug)?;
    info!(%source, log_file = %settings.log_file.display(), "starting dashboard");

    let mut app = App::new(settings, source)?;
    app.start_loading();

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app).await;
    terminal::cleanup(true, true);

    if let Err(e) = &result {
        error!(error = %e, "dashboard exited with an error");
    }
    result
}

fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
