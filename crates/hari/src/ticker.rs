//! The periodic timer driving the clock.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use hari_core::{TimeSample, TimeSource};
use tracing::{debug, trace};

/// Longest stretch the ticker thread sleeps before checking for shutdown.
const SHUTDOWN_POLL: Duration = Duration::from_millis(50);

/// Emits a [`TimeSample`] once per period from a background thread.
///
/// Dropping the ticker stops the schedule.
#[derive(Debug)]
pub struct Ticker {
    /// Samples sent by the background thread.
    receiver: Receiver<TimeSample>,
    /// Flag to signal thread termination.
    running: Arc<RwLock<bool>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start ticking. The first sample is sent immediately.
    pub fn start<S>(period: Duration, source: S) -> Self
    where
        S: TimeSource + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let running = Arc::new(RwLock::new(true));
        let flag = running.clone();

        let handle = thread::spawn(move || {
            debug!(?period, "ticker started");
            'ticks: loop {
                if sender.send(source.sample()).is_err() {
                    break;
                }
                trace!("tick");

                let deadline = Instant::now() + period;
                loop {
                    if let Ok(running) = flag.read()
                        && !*running
                    {
                        break 'ticks;
                    }
                    let now = Instant::now();
                    if now >= deadline {
                        break;
                    }
                    thread::sleep((deadline - now).min(SHUTDOWN_POLL));
                }
            }
            debug!("ticker stopped");
        });

        Self {
            receiver,
            running,
            handle: Some(handle),
        }
    }

    /// Next pending sample, if one has arrived.
    pub fn try_recv(&self) -> Result<TimeSample, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Stop the schedule and wait for the thread to exit.
    pub fn stop(&mut self) {
        if let Ok(mut running) = self.running.write() {
            *running = false;
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hari_core::FixedClock;

    const WAIT: Duration = Duration::from_secs(2);

    /// Poll until a sample arrives, the channel closes or `WAIT` passes.
    fn next(ticker: &Ticker) -> Result<TimeSample, TryRecvError> {
        let deadline = Instant::now() + WAIT;
        loop {
            match ticker.try_recv() {
                Err(TryRecvError::Empty) if Instant::now() < deadline => {
                    thread::sleep(Duration::from_millis(1));
                }
                other => return other,
            }
        }
    }

    #[test]
    fn test_first_sample_is_immediate() {
        let sample = TimeSample::new(10, 9, 8);
        let ticker = Ticker::start(Duration::from_secs(60), FixedClock(sample));
        assert_eq!(next(&ticker), Ok(sample));
        assert_eq!(ticker.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_ticks_repeat() {
        let ticker = Ticker::start(Duration::from_millis(5), FixedClock(TimeSample::default()));
        for _ in 0..3 {
            assert!(next(&ticker).is_ok());
        }
    }

    #[test]
    fn test_stop_ends_the_schedule() {
        let mut ticker = Ticker::start(Duration::from_secs(60), FixedClock(TimeSample::default()));
        assert!(next(&ticker).is_ok());

        ticker.stop();
        // The thread has exited and dropped its sender.
        assert_eq!(ticker.try_recv(), Err(TryRecvError::Disconnected));
    }
}
