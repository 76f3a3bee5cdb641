//! Fire-and-forget file appends
//!
//! Callers enqueue a line and return immediately. A dedicated thread drives a
//! current-thread tokio runtime that drains the queue, opening the target file
//! in append mode for every line and closing it again afterwards. Failures are
//! printed to the console's error channel and dropped.

use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

use tokio::io::AsyncWriteExt;
use tokio::sync::{mpsc, oneshot};

use super::traits::SharedConsole;
use crate::error::{LogError, LogResult};

enum Request {
    Append { path: PathBuf, line: String },
    Flush(oneshot::Sender<()>),
}

/// Handle to the background append worker
///
/// Appends are applied one at a time in the order they were enqueued.
/// Dropping the handle drains whatever is still queued and joins the thread.
pub struct FileWriter {
    tx: Option<mpsc::UnboundedSender<Request>>,
    handle: Option<JoinHandle<()>>,
    console: SharedConsole,
}

impl FileWriter {
    /// Start the worker thread
    ///
    /// `console` receives a diagnostic line for every failed append.
    pub fn spawn(console: SharedConsole) -> LogResult<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread().build()?;
        let (tx, rx) = mpsc::unbounded_channel();

        let worker_console = console.clone();
        let handle = std::thread::Builder::new()
            .name("nicelog-writer".to_string())
            .spawn(move || runtime.block_on(run(rx, worker_console)))?;

        Ok(Self {
            tx: Some(tx),
            handle: Some(handle),
            console,
        })
    }

    /// Queue `line` for appending to `path` and return without waiting
    pub fn append(&self, path: PathBuf, line: String) {
        let Some(tx) = self.tx.as_ref() else {
            return;
        };
        if let Err(mpsc::error::SendError(Request::Append { path, .. })) =
            tx.send(Request::Append { path, line })
        {
            self.console
                .err(&format!("{}: {}", path.display(), LogError::WorkerStopped));
        }
    }

    /// Block until every append queued so far has been attempted
    ///
    /// Safe to call from a runtime thread, though it blocks that thread;
    /// prefer [`FileWriter::flush_async`] in async code.
    pub fn flush(&self) -> LogResult<()> {
        let done = self.request_flush()?;
        let received = if tokio::runtime::Handle::try_current().is_ok() {
            // blocking_recv refuses to run on a runtime thread
            std::thread::scope(|scope| {
                scope
                    .spawn(move || done.blocking_recv().is_ok())
                    .join()
                    .unwrap_or(false)
            })
        } else {
            done.blocking_recv().is_ok()
        };

        if received {
            Ok(())
        } else {
            Err(LogError::WorkerStopped)
        }
    }

    /// Wait until every append queued so far has been attempted
    pub async fn flush_async(&self) -> LogResult<()> {
        self.request_flush()?
            .await
            .map_err(|_| LogError::WorkerStopped)
    }

    fn request_flush(&self) -> LogResult<oneshot::Receiver<()>> {
        let tx = self.tx.as_ref().ok_or(LogError::WorkerStopped)?;
        let (done_tx, done_rx) = oneshot::channel();
        tx.send(Request::Flush(done_tx))
            .map_err(|_| LogError::WorkerStopped)?;
        Ok(done_rx)
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        // Closing the channel lets the worker finish the queue and exit
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("running", &self.tx.as_ref().is_some_and(|tx| !tx.is_closed()))
            .finish()
    }
}

async fn run(mut rx: mpsc::UnboundedReceiver<Request>, console: SharedConsole) {
    while let Some(request) = rx.recv().await {
        match request {
            Request::Append { path, line } => {
                if let Err(e) = append_line(&path, &line).await {
                    console.err(&format!("{}: {}", path.display(), e));
                }
            }
            Request::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
}

/// One open/append/close cycle; the line goes out in a single `write_all`
async fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    file.flush().await
}
