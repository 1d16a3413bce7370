//! Run options shared by every operation and the first-wins resolver.
use std::{
    fmt,
    io::{Read, Write},
    path::{Path, PathBuf},
};

/// Runnable used when none is configured.
pub const DEFAULT_RUNNABLE: &str = "anydesk";

/// How to launch the AnyDesk executable.
///
/// `input` becomes the child's stdin; `output` receives its stdout and
/// stderr combined. Unset streams mean no input and discarded output.
#[derive(Default)]
pub struct RunOptions<'a> {
    /// Name or path of the runnable, e.g. `anydesk.exe`.
    pub runnable: Option<PathBuf>,
    pub input: Option<Box<dyn Read + Send + 'a>>,
    pub output: Option<Box<dyn Write + Send + 'a>>,
}

impl<'a> RunOptions<'a> {
    pub const DEFAULT: RunOptions<'static> = RunOptions {
        runnable: None,
        input: None,
        output: None,
    };

    pub fn with_runnable(mut self, runnable: impl Into<PathBuf>) -> Self {
        self.runnable = Some(runnable.into());
        self
    }

    pub fn with_input(mut self, input: impl Read + Send + 'a) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    pub fn with_output(mut self, output: impl Write + Send + 'a) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    /// The runnable to execute, falling back to [`DEFAULT_RUNNABLE`].
    pub fn resolved_runnable(&self) -> &Path {
        self.runnable
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_RUNNABLE))
    }
}

impl fmt::Debug for RunOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunOptions")
            .field("runnable", &self.runnable)
            .field("input", &self.input.is_some())
            .field("output", &self.output.is_some())
            .finish()
    }
}

/// Pick the first of the provided options, or `T::default()` if none are given.
///
/// Options are never merged; extra entries after the first are ignored.
pub fn resolve<T, I>(provided: I) -> T
where
    T: Default,
    I: IntoIterator<Item = T>,
{
    provided.into_iter().next().unwrap_or_default()
}
