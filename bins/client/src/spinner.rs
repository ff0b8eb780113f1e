//! Progress indicator on stderr while a request is in flight.

use std::io::Write;
use std::time::Duration;

use tokio::task::JoinHandle;

const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
const TICK: Duration = Duration::from_millis(100);

/// A running spinner. Stop it with [`Spinner::finish`].
pub struct Spinner {
    task: JoinHandle<()>,
}

impl Spinner {
    /// Start drawing `message` with a rotating frame.
    pub fn start(message: &str) -> Self {
        let message = message.to_string();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK);
            for frame in FRAMES.into_iter().cycle() {
                interval.tick().await;
                draw(&format!("\r{frame} {message}"));
            }
        });
        Self { task }
    }

    /// Stop the spinner and clear its line.
    pub async fn finish(self) {
        self.task.abort();
        let _ = self.task.await;
        draw("\r\x1b[2K");
    }
}

fn draw(text: &str) {
    let mut stderr = std::io::stderr().lock();
    let _ = write!(stderr, "{text}");
    let _ = stderr.flush();
}
