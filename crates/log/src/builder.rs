//! Logger builder

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

use crate::config::{Config, DisplayConfig, Format};
use crate::error::{LogError, LogResult};
use crate::writer;

type Filtered = Layered<EnvFilter, Registry>;
type BoxLayer = Box<dyn Layer<Filtered> + Send + Sync>;

/// Applies the display toggles shared by every format and boxes the layer.
macro_rules! finish_layer {
    ($layer:expr, $display:expr) => {{
        let display: &DisplayConfig = $display;
        let layer = $layer
            .with_ansi(display.colors)
            .with_target(display.target)
            .with_file(display.source)
            .with_line_number(display.source)
            .with_thread_ids(display.thread_ids);
        if display.time {
            layer.boxed()
        } else {
            layer.without_time().boxed()
        }
    }};
}

/// Logger builder
pub struct LoggerBuilder {
    config: Config,
    writer: Option<BoxMakeWriter>,
}

/// Keeps a logger installed.
///
/// A global logger stays for the life of the process; a scoped one is
/// removed when the guard drops.
#[must_use = "dropping the guard removes a scoped logger"]
pub struct LoggerGuard {
    scope: Option<DefaultGuard>,
}

impl LoggerGuard {
    /// A guard that holds nothing.
    pub const fn noop() -> Self {
        Self { scope: None }
    }

    /// `true` when dropping the guard uninstalls the logger.
    pub const fn is_scoped(&self) -> bool {
        self.scope.is_some()
    }
}

impl std::fmt::Debug for LoggerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerGuard")
            .field("scoped", &self.is_scoped())
            .finish()
    }
}

impl LoggerBuilder {
    #[must_use]
    pub const fn from_config(config: Config) -> Self {
        Self {
            config,
            writer: None,
        }
    }

    /// Sends output to `writer` instead of the configured destination.
    #[must_use]
    pub fn with_make_writer(mut self, writer: BoxMakeWriter) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Installs the logger for the whole process.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the filter directive cannot be parsed
    /// - another global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let level = self.config.level.clone();
        let format = self.config.format;
        self.subscriber()?
            .try_init()
            .map_err(|e| LogError::AlreadyInitialized(e.to_string()))?;

        tracing::debug!(%level, %format, "logger initialized");
        Ok(LoggerGuard::noop())
    }

    /// Installs the logger for the current thread until the guard drops.
    ///
    /// # Errors
    ///
    /// Returns error if the filter directive cannot be parsed.
    pub fn build_scoped(self) -> LogResult<LoggerGuard> {
        let scope = self.subscriber()?.set_default();
        Ok(LoggerGuard { scope: Some(scope) })
    }

    fn subscriber(self) -> LogResult<Layered<BoxLayer, Filtered>> {
        let filter = EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })?;

        let writer = self
            .writer
            .unwrap_or_else(|| writer::make_writer(self.config.writer));
        let layer = format_layer(self.config.format, &self.config.display, writer);

        Ok(Registry::default().with(filter).with(layer))
    }
}

fn format_layer(format: Format, display: &DisplayConfig, writer: BoxMakeWriter) -> BoxLayer {
    match format {
        Format::Pretty => finish_layer!(fmt::layer().pretty().with_writer(writer), display),
        Format::Compact => finish_layer!(fmt::layer().compact().with_writer(writer), display),
        Format::Json => finish_layer!(
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(display.span_list)
                .flatten_event(display.flatten)
                .with_writer(writer),
            display
        ),
    }
}
