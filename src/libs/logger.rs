//! Line sinks for the client's debug output.
//!
//! The client hands each finished line to a [`Logger`]; where it ends
//! up is the embedder's business.  [`StderrLogger`] is the default,
//! [`FileLogger`] keeps one file per day under a directory, and any
//! `Fn(&str)` closure works too.
use std::fs::{create_dir_all, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::writing::{cc, stamped_line};

pub trait Logger: Send + Sync {
    fn println(&self, line: &str);
}

impl<F> Logger for F
where
    F: Fn(&str) + Send + Sync,
{
    fn println(&self, line: &str) {
        self(line)
    }
}

/// Timestamped lines on stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrLogger;

impl Logger for StderrLogger {
    fn println(&self, line: &str) {
        stamped_line(cc::LIGHT_GRAY, format_args!("{line}"));
    }
}

/// Appends timestamped lines to `<dir>/moacrpc_<YYYY-MM-DD>.log`.
///
/// Write failures are reported on stderr and otherwise ignored; a
/// broken log sink must not fail the RPC call that produced the line.
#[derive(Clone, Debug)]
pub struct FileLogger {
    dir: PathBuf,
}

impl FileLogger {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that lines logged right now end up in.
    pub fn current_file(&self) -> PathBuf {
        let day = chrono::Local::now().format("%Y-%m-%d");
        self.dir.join(format!("moacrpc_{day}.log"))
    }
}

impl Logger for FileLogger {
    fn println(&self, line: &str) {
        if let Err(e) = create_dir_all(&self.dir) {
            crate::warn!("FileLogger mkdir {} error: {e}", self.dir.display());
            return;
        }
        let time_now = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line_with_time = format!("[{time_now}] {line}");

        if let Err(e) = append_line(&self.current_file(), &line_with_time) {
            crate::warn!("FileLogger write error: {e}");
        }
    }
}

fn append_line(path: &Path, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn closures_are_loggers() {
        let lines = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink = lines.clone();
        let logger = move |line: &str| sink.lock().unwrap().push(line.to_string());

        logger.println("first");
        Logger::println(&logger, "second");

        assert_eq!(*lines.lock().unwrap(), ["first", "second"]);
    }

    #[test]
    fn file_logger_appends_stamped_lines() {
        let dir = tempfile::tempdir().unwrap();
        let logger = FileLogger::new(dir.path().join("logs"));

        logger.println("mc_blockNumber");
        logger.println("net_version");

        let contents = std::fs::read_to_string(logger.current_file()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("] mc_blockNumber"));
        assert!(lines[1].ends_with("] net_version"));
    }

    #[test]
    fn stderr_logger_smoke() {
        StderrLogger.println("hello from the stderr logger");
    }
}
