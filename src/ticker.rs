//! Periodic tick sources.
//!
//! A tick source lives exactly as long as its handle. Dropping the handle stops the
//! callbacks before the drop returns.

use anyhow::{Context, Result};
use log::{debug, error};

use std::{
    sync::mpsc::{self, RecvTimeoutError, Sender},
    thread::{self, JoinHandle},
    time::Duration,
};

/// Hands out periodic tick sources. The returned handle owns the source.
pub trait Scheduler {
    type Handle;

    fn schedule(&mut self, period: Duration) -> Result<Self::Handle>;
}

/// Background thread that calls a callback every `period` until cancelled.
pub struct Ticker {
    stop_tx: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn spawn<F>(period: Duration, mut on_tick: F) -> Result<Ticker>
    where
        F: FnMut() + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let thread = thread::Builder::new()
            .name("lapwatch-tick".into())
            .spawn(move || loop {
                match stop_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => on_tick(),
                    // Either an explicit stop or the handle went away
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })
            .context("Failed to spawn tick thread")?;

        debug!("Tick thread started with period {:?}", period);

        Ok(Ticker {
            stop_tx: Some(stop_tx),
            thread: Some(thread),
        })
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }

        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                error!("Tick thread panicked");
            } else {
                debug!("Tick thread stopped");
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    fn counting_ticker(period_ms: u64) -> (Ticker, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let thread_count = Arc::clone(&count);
        let ticker = Ticker::spawn(Duration::from_millis(period_ms), move || {
            thread_count.fetch_add(1, Ordering::SeqCst);
        })
        .expect("Failed to spawn ticker");
        (ticker, count)
    }

    #[test]
    fn test_ticks_while_alive() {
        let (ticker, count) = counting_ticker(5);
        thread::sleep(Duration::from_millis(100));
        drop(ticker);
        assert!(count.load(Ordering::SeqCst) > 0);
    }

    #[test]
    fn test_no_ticks_after_drop() {
        let (ticker, count) = counting_ticker(5);
        thread::sleep(Duration::from_millis(30));
        drop(ticker);

        let after_drop = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::SeqCst), after_drop);
    }

    #[test]
    fn test_drop_before_first_tick() {
        let (ticker, count) = counting_ticker(10_000);
        drop(ticker);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
