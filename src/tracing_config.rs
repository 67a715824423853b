//! Subscriber setup for hosts that want to watch name resolution.
//!
//! Nothing is installed unless a filter is given, either through `XSC_LOG`
//! or, failing that, `RUST_LOG`. `XSC_LOG_FORMAT` picks the rendering:
//!
//! - `text` (default): one line per event
//! - `tree`: events nested under their spans (`tracing-tree`)
//! - `json`: one object per line, the form `xsc::resolve_json` is meant for
//!
//! ```bash
//! # Every resolution query with its outcome and cache-hit flag
//! XSC_LOG=xsc::resolve_json=trace XSC_LOG_FORMAT=json my-host app.xaml
//!
//! # Resolver decisions, nested
//! XSC_LOG="xsc_schema=trace,xsc_reflect=debug" XSC_LOG_FORMAT=tree my-host app.xaml
//! ```
//!
//! Output goes to stderr. A subscriber the host installed first is kept.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Unrecognised names fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("XSC_LOG_FORMAT").unwrap_or_default())
    }
}

/// What `init_tracing` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingInit {
    /// No filter was configured.
    Disabled,
    Installed(LogFormat),
    /// Another global subscriber was already in place.
    AlreadyInstalled,
}

/// Install the global subscriber from `XSC_LOG` / `RUST_LOG` and
/// `XSC_LOG_FORMAT`.
pub fn init_tracing() -> TracingInit {
    let directives = std::env::var("XSC_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok();
    init_with(directives.as_deref(), LogFormat::from_env())
}

/// Install the global subscriber from explicit filter directives
/// (`RUST_LOG` syntax). `None` installs nothing.
pub fn init_with(directives: Option<&str>, format: LogFormat) -> TracingInit {
    let Some(directives) = directives else {
        return TracingInit::Disabled;
    };
    let filter = EnvFilter::builder().parse_lossy(directives);

    let installed = match format {
        LogFormat::Tree => {
            let layer = tracing_tree::HierarchicalLayer::default()
                .with_writer(std::io::stderr)
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(true);
            Registry::default().with(filter).with(layer).try_init()
        }
        LogFormat::Json => {
            let layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).try_init()
        }
        LogFormat::Text => {
            let layer = fmt::layer().with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).try_init()
        }
    };

    match installed {
        Ok(()) => {
            tracing::debug!(?format, "tracing subscriber installed");
            TracingInit::Installed(format)
        }
        Err(_) => TracingInit::AlreadyInstalled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
        assert_eq!(LogFormat::parse("yaml"), LogFormat::Text);
    }

    // The only test in this binary that touches the global subscriber.
    #[test]
    fn test_init_with_installs_once() {
        assert_eq!(init_with(None, LogFormat::Json), TracingInit::Disabled);
        assert_eq!(
            init_with(Some("xsc::resolve_json=trace"), LogFormat::Json),
            TracingInit::Installed(LogFormat::Json)
        );
        assert_eq!(
            init_with(Some("debug"), LogFormat::Tree),
            TracingInit::AlreadyInstalled
        );
        assert!(tracing::enabled!(target: "xsc::resolve_json", tracing::Level::TRACE));
    }
}
