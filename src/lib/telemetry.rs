//! Telemetry initialization and per-invocation span helpers.

use std::{path::Path, time::Instant};

use anyhow::Result;
use tracing::{debug, debug_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of one AnyDesk invocation.
pub struct InvocationSpan {
    span: Span,
    started_at: Instant,
    invocation_id: Uuid,
}

impl InvocationSpan {
    /// Start an invocation span. Argument contents are not recorded.
    pub fn start(runnable: &Path, arg_count: usize, stdin: bool, output: bool) -> Self {
        let invocation_id = Uuid::new_v4();
        let span = debug_span!(
            target: "granny::runner",
            "anydesk_invocation",
            %invocation_id,
            runnable = %runnable.display()
        );
        {
            let _entered = span.enter();
            debug!(
                target: "granny::runner",
                arg_count,
                stdin,
                output,
                "Starting AnyDesk"
            );
        }
        Self {
            span,
            started_at: Instant::now(),
            invocation_id,
        }
    }

    pub fn id(&self) -> Uuid {
        self.invocation_id
    }

    /// Close the span while recording status and exit code.
    pub fn finish(self, status: &'static str, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        debug!(
            target: "granny::runner",
            invocation_id = %self.invocation_id,
            status,
            exit_code,
            elapsed_ms,
            "AnyDesk finished"
        );
    }
}
