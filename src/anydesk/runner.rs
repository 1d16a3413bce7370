//! Spawn the AnyDesk runnable and block until it exits.
use std::{
    ffi::{OsStr, OsString},
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process::{Child, Command, ExitStatus, Stdio},
    sync::Mutex,
    thread,
};

use crate::lib::{errors::AnyDeskError, telemetry::InvocationSpan};

use super::options::{RunOptions, DEFAULT_RUNNABLE};

const PUMP_BUFFER_SIZE: usize = 8 * 1024;

type Sink<'a> = Mutex<Box<dyn Write + Send + 'a>>;

/// Run the configured runnable with `args`.
///
/// Blocks until the child exits. A non-zero exit status is reported as
/// [`AnyDeskError::CommandFailed`]; stream failures are only reported when the
/// child itself exited cleanly.
pub fn run<I, S>(args: I, options: RunOptions<'_>) -> Result<(), AnyDeskError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let RunOptions {
        runnable,
        input,
        output,
    } = options;
    let runnable = runnable.unwrap_or_else(|| PathBuf::from(DEFAULT_RUNNABLE));
    let args: Vec<OsString> = args
        .into_iter()
        .map(|arg| arg.as_ref().to_os_string())
        .collect();

    let span = InvocationSpan::start(&runnable, args.len(), input.is_some(), output.is_some());
    let mut command = build_command(&runnable, &args, input.is_some(), output.is_some());
    let child = match command.spawn() {
        Ok(child) => child,
        Err(source) => {
            span.finish("spawn_failed", None);
            return Err(AnyDeskError::Spawn { runnable, source });
        }
    };

    let mut child = ChildGuard::new(child);
    let (status, streams) = match pump_and_wait(&mut child, input, output) {
        Ok(outcome) => outcome,
        Err(source) => {
            span.finish("wait_failed", None);
            return Err(AnyDeskError::Wait { runnable, source });
        }
    };

    if !status.success() {
        span.finish("failed", status.code());
        return Err(AnyDeskError::CommandFailed {
            runnable,
            exit_code: status.code(),
        });
    }
    if let Err(source) = streams {
        span.finish("stream_failed", status.code());
        return Err(AnyDeskError::Stream { runnable, source });
    }

    span.finish("succeeded", status.code());
    Ok(())
}

/// Build the command without spawning it.
pub(crate) fn build_command(
    runnable: &Path,
    args: &[OsString],
    pipe_input: bool,
    pipe_output: bool,
) -> Command {
    let mut command = Command::new(runnable);
    command.args(args);
    command.stdin(if pipe_input {
        Stdio::piped()
    } else {
        Stdio::null()
    });
    if pipe_output {
        command.stdout(Stdio::piped()).stderr(Stdio::piped());
    } else {
        command.stdout(Stdio::null()).stderr(Stdio::null());
    }
    command
}

/// Feed stdin and drain stdout/stderr on scoped threads while waiting for the child.
///
/// The outer error is a failed wait; the inner one is the first stream failure.
fn pump_and_wait<'a>(
    child: &mut ChildGuard,
    input: Option<Box<dyn Read + Send + 'a>>,
    output: Option<Box<dyn Write + Send + 'a>>,
) -> io::Result<(ExitStatus, io::Result<()>)> {
    let stdin = child.child.stdin.take();
    let stdout = child.child.stdout.take();
    let stderr = child.child.stderr.take();
    let sink: Option<Sink<'a>> = output.map(Mutex::new);

    thread::scope(|scope| {
        let mut workers = Vec::with_capacity(3);
        if let (Some(mut reader), Some(mut pipe)) = (input, stdin) {
            workers.push(scope.spawn(move || feed_stdin(&mut reader, &mut pipe)));
        }
        if let Some(sink) = sink.as_ref() {
            if let Some(mut source) = stdout {
                workers.push(scope.spawn(move || pump(&mut source, sink)));
            }
            if let Some(mut source) = stderr {
                workers.push(scope.spawn(move || pump(&mut source, sink)));
            }
        }

        let status = match child.wait() {
            Ok(status) => status,
            Err(err) => {
                child.kill();
                return Err(err);
            }
        };
        let mut streams = Ok(());
        for worker in workers {
            let result = worker
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
            if streams.is_ok() {
                streams = result;
            }
        }
        Ok((status, streams))
    })
}

fn feed_stdin(reader: &mut dyn Read, pipe: &mut dyn Write) -> io::Result<()> {
    match io::copy(reader, pipe).and_then(|_| pipe.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn pump(source: &mut dyn Read, sink: &Sink<'_>) -> io::Result<()> {
    let mut buf = [0u8; PUMP_BUFFER_SIZE];
    loop {
        let read = match source.read(&mut buf) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        lock(sink)?.write_all(&buf[..read])?;
    }
    lock(sink)?.flush()
}

fn lock<'s, 'a>(
    sink: &'s Sink<'a>,
) -> io::Result<std::sync::MutexGuard<'s, Box<dyn Write + Send + 'a>>> {
    sink.lock()
        .map_err(|_| io::Error::other("output writer lock poisoned"))
}

/// Kills and reaps the child unless it has already been waited on.
struct ChildGuard {
    child: Child,
    reaped: bool,
}

impl ChildGuard {
    fn new(child: Child) -> Self {
        Self {
            child,
            reaped: false,
        }
    }

    fn wait(&mut self) -> io::Result<ExitStatus> {
        let status = self.child.wait()?;
        self.reaped = true;
        Ok(status)
    }

    /// Kill without reaping so blocked stream workers see end-of-file.
    fn kill(&mut self) {
        let _ = self.child.kill();
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if !self.reaped {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}
