//! Watch Use Case implementation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::application::poll::PollUseCase;
use crate::domain::ports::{DirectoryLister, SessionStore};
use crate::domain::value_objects::SessionId;
use crate::error::LivepollResult;

use super::event::{WatchEvent, WatchOptions};

/// Granularity at which sleeps notice a cleared running flag
const TICK: Duration = Duration::from_millis(50);

/// Watch Use Case
///
/// Polls until the running flag is cleared. This is the main entry point
/// for the `livepoll watch` command.
pub struct WatchUseCase<L: DirectoryLister, S: SessionStore> {
    poll: PollUseCase<L, S>,
    options: WatchOptions,
    session: SessionId,
}

impl<L: DirectoryLister, S: SessionStore> WatchUseCase<L, S> {
    pub fn new(poll: PollUseCase<L, S>, options: WatchOptions) -> Self {
        Self {
            poll,
            options,
            session: SessionId::generate(),
        }
    }

    /// Start watching (blocking)
    ///
    /// Returns when `running` is cleared, or with an error when the session
    /// store fails. An unreadable watch root is reported through `on_event`
    /// (once per distinct error) and polling carries on.
    pub fn start<F>(&self, running: Arc<AtomicBool>, on_event: F) -> LivepollResult<()>
    where
        F: Fn(WatchEvent),
    {
        on_event(WatchEvent::WatchStarted {
            root: self.poll.root().to_string(),
        });

        let mut last_error: Option<String> = None;
        let mut delay = self.options.initial_delay;

        while sleep_while_running(&running, delay) {
            delay = self.options.interval;

            let report = match self.poll.poll_report(&self.session) {
                Ok(report) => report,
                Err(e) => {
                    on_event(WatchEvent::Error {
                        message: e.to_string(),
                    });
                    return Err(e);
                }
            };

            match report.root_error {
                Some(message) => {
                    if last_error.as_deref() != Some(message.as_str()) {
                        on_event(WatchEvent::Error {
                            message: message.clone(),
                        });
                    }
                    last_error = Some(message);
                    continue;
                }
                None => last_error = None,
            }

            if report.outcome.is_change() {
                on_event(WatchEvent::Changed {
                    path: report.changed_path.map(|p| p.display().to_string()),
                });
            }
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }
}

/// Sleep for `duration` in small ticks; false once `running` is cleared.
fn sleep_while_running(running: &AtomicBool, duration: Duration) -> bool {
    let deadline = Instant::now() + duration;
    loop {
        if !running.load(Ordering::SeqCst) {
            return false;
        }
        let now = Instant::now();
        if now >= deadline {
            return true;
        }
        std::thread::sleep(TICK.min(deadline - now));
    }
}
