use anyhow::anyhow;
use outfitter_core::config::{AppConfig, LogFormat};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::fmt::{MakeWriter, SubscriberBuilder};

/// Installs the global subscriber once. Output goes to stderr so it never
/// interleaves with the session transcript on stdout.
pub fn init(config: &AppConfig) -> anyhow::Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let builder = builder(config, std::io::stderr);
    let installed = match config.logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.or_else(|error| {
        if tracing::dispatcher::has_been_set() {
            Ok(())
        } else {
            Err(anyhow!("failed to install log subscriber: {error}"))
        }
    })
}

/// ANSI styling in log lines follows `session.color`, the same switch as the
/// console palette.
fn builder<W>(
    config: &AppConfig,
    writer: W,
) -> SubscriberBuilder<DefaultFields, Format, LevelFilter, W>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::WARN);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_target(false)
        .with_ansi(config.session.color)
        .with_max_level(log_level)
}
