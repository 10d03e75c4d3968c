use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ghas_demo::config::{Config, Settings};
use ghas_demo::ui::{App, TerminalPrompter};
use ghas_demo_core::GhClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Config::parse_args();

    // Setup logging
    setup_logging(cli.debug);

    // Load settings
    let mut settings = Settings::load(cli.config.as_ref())?;
    settings.merge_cli(&cli);
    settings.validate();

    let runner = GhClient::new()
        .with_program(settings.gh_program.clone())
        .with_timeout(settings.command_timeout());

    // Run the application
    let mut app = App::new(settings, TerminalPrompter::new(), runner, std::io::stdout());
    app.run().await
}

/// Logs go to stderr so they never interleave with menu output
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("ghas_demo=debug,ghas_demo_core=debug")
    } else {
        EnvFilter::new("ghas_demo=warn,ghas_demo_core=warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
