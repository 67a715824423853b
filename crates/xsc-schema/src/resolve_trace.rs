//! Structured tracing for resolution entry points.
//!
//! Events use target `xsc::resolve_json` and are intended to be consumed with:
//! `XSC_LOG=xsc::resolve_json=trace XSC_LOG_FORMAT=json`.
//!
//! Environment:
//! - `XSC_RESOLVE_RUN_ID`: optional run identifier attached to every event.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{Level, trace};

static NEXT_QUERY_ID: AtomicU64 = AtomicU64::new(1);
static RUN_ID: OnceLock<String> = OnceLock::new();

/// How a query was answered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Cached,
    Provider,
    ProviderSuffixed,
    SimpleType,
    Registered,
    Attached,
    DependsOn,
    Plain,
    Fallback,
    MalformedArgs,
    NotFound,
    Failed,
}

impl Outcome {
    const fn as_str(self) -> &'static str {
        match self {
            Outcome::Cached => "cached",
            Outcome::Provider => "provider",
            Outcome::ProviderSuffixed => "provider_suffixed",
            Outcome::SimpleType => "simple_type",
            Outcome::Registered => "registered",
            Outcome::Attached => "attached",
            Outcome::DependsOn => "depends_on",
            Outcome::Plain => "plain",
            Outcome::Fallback => "fallback",
            Outcome::MalformedArgs => "malformed_args",
            Outcome::NotFound => "not_found",
            Outcome::Failed => "failed",
        }
    }
}

#[inline]
pub(crate) fn enabled() -> bool {
    tracing::enabled!(target: "xsc::resolve_json", Level::TRACE)
}

#[inline]
pub(crate) fn next_query_id() -> u64 {
    NEXT_QUERY_ID.fetch_add(1, Ordering::Relaxed)
}

#[inline]
fn run_id() -> &'static str {
    RUN_ID
        .get_or_init(|| std::env::var("XSC_RESOLVE_RUN_ID").unwrap_or_else(|_| "default".to_string()))
        .as_str()
}

#[inline]
pub(crate) fn type_start(query_id: u64, namespace: &str, local_name: &str, arity: usize) {
    trace!(
        target: "xsc::resolve_json",
        event = "resolve",
        phase = "start",
        run_id = run_id(),
        query_id,
        op = "resolve_type",
        namespace,
        local_name,
        arity
    );
}

#[inline]
pub(crate) fn member_start(query_id: u64, op: &'static str, name: &str) {
    trace!(
        target: "xsc::resolve_json",
        event = "resolve",
        phase = "start",
        run_id = run_id(),
        query_id,
        op,
        name
    );
}

#[inline]
pub(crate) fn end(query_id: u64, op: &'static str, outcome: Outcome) {
    trace!(
        target: "xsc::resolve_json",
        event = "resolve",
        phase = "end",
        run_id = run_id(),
        query_id,
        op,
        outcome = outcome.as_str(),
        cache_hit = outcome == Outcome::Cached
    );
}
