//! Channel-backed sources and the `to_channel` worker.

use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use tokio::sync::mpsc::{self, Receiver};

use pullseq_core::config::SeqConfig;
use pullseq_core::error::{Error, Result};
use pullseq_core::Enumerable;

/// An enumeration over values arriving on a channel.
///
/// Each pass reads until the channel closes or the consumer stops. Values
/// consumed by one pass are gone, so a second pass resumes where the first
/// left off.
pub struct FromChannel<T> {
    rx: Mutex<Receiver<T>>,
}

pub fn from_channel<T>(rx: Receiver<T>) -> FromChannel<T> {
    FromChannel { rx: Mutex::new(rx) }
}

impl<T> FromChannel<T> {
    pub fn into_inner(self) -> Receiver<T> {
        self.rx.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<T> Enumerable for FromChannel<T> {
    type Item = T;

    fn enumerate(&self, yield_: &mut dyn FnMut(T) -> bool) {
        // A consumer that panicked mid-pass leaves the receiver intact.
        let mut rx = self.rx.lock().unwrap_or_else(|e| e.into_inner());
        while let Some(value) = rx.blocking_recv() {
            if !yield_(value) {
                return;
            }
        }
    }
}

/// Drain `source` on a worker thread configured by `SeqConfig::global()`.
pub fn to_channel<E>(source: E) -> Result<ChannelStream<E::Item>>
where
    E: Enumerable + Send + 'static,
    E::Item: Send + 'static,
{
    to_channel_with(source, SeqConfig::global())
}

/// Drain `source` on a worker thread named `config.worker_name`, through a
/// channel holding at most `config.channel_capacity` values.
pub fn to_channel_with<E>(source: E, config: &SeqConfig) -> Result<ChannelStream<E::Item>>
where
    E: Enumerable + Send + 'static,
    E::Item: Send + 'static,
{
    config.validate()?;

    let (tx, rx) = mpsc::channel(config.channel_capacity);
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);

    let worker = thread::Builder::new()
        .name(config.worker_name.clone())
        .spawn(move || {
            #[cfg(feature = "tracing")]
            tracing::trace!("channel worker started");

            #[cfg(feature = "tracing")]
            let mut sent = 0usize;
            source.enumerate(&mut |item| {
                if flag.load(Ordering::Acquire) {
                    return false;
                }
                if tx.blocking_send(item).is_err() {
                    return false;
                }
                #[cfg(feature = "tracing")]
                {
                    sent += 1;
                }
                true
            });

            #[cfg(feature = "tracing")]
            tracing::trace!(
                sent,
                cancelled = flag.load(Ordering::Acquire),
                "channel worker finished"
            );
        })
        .map_err(|e| Error::WorkerSpawn(e.to_string()))?;

    Ok(ChannelStream {
        rx: Some(rx),
        worker: Some(worker),
        cancel,
    })
}

/// The reading end of a `to_channel` worker.
///
/// Iterating blocks until the worker sends a value or exits. The worker is
/// always joined: explicitly by `finish`, otherwise on drop.
pub struct ChannelStream<T> {
    rx: Option<Receiver<T>>,
    worker: Option<JoinHandle<()>>,
    cancel: Arc<AtomicBool>,
}

impl<T> ChannelStream<T> {
    /// Ask the worker to stop. Values already buffered can still be read;
    /// after them the stream ends.
    pub fn cancel(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!("channel worker cancelled");

        self.cancel.store(true, Ordering::Release);
        if let Some(rx) = self.rx.as_mut() {
            rx.close();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Acquire)
    }

    /// Stop reading, wait for the worker, and surface a worker panic.
    ///
    /// Unread values are discarded. A worker that completed normally, or that
    /// stopped because the stream closed, reports `Ok(())`.
    pub fn finish(mut self) -> Result<()> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<()> {
        if let Some(mut rx) = self.rx.take() {
            rx.close();
            drop(rx);
        }
        match self.worker.take() {
            Some(worker) => worker
                .join()
                .map_err(|payload| Error::WorkerPanicked(panic_message(payload.as_ref()))),
            None => Ok(()),
        }
    }
}

impl<T> Iterator for ChannelStream<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.rx.as_mut()?.blocking_recv()
    }
}

impl<T> Drop for ChannelStream<T> {
    fn drop(&mut self) {
        if self.worker.is_some() {
            self.cancel.store(true, Ordering::Release);
            // A worker panic has nowhere to go from a destructor.
            let _ = self.shutdown();
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pullseq_core::prelude::*;
    use pullseq_operators::EnumerableExt;
    use std::sync::atomic::AtomicUsize;

    fn counting_forever(produced: Arc<AtomicUsize>) -> impl Enumerable<Item = u64> + Send + 'static {
        from_fn(move |yield_: &mut dyn FnMut(u64) -> bool| {
            let mut n = 0u64;
            loop {
                produced.fetch_add(1, Ordering::SeqCst);
                if !yield_(n) {
                    return;
                }
                n += 1;
            }
        })
    }

    #[test]
    fn test_from_channel_reads_until_closed() {
        let (tx, rx) = mpsc::channel(4);
        let producer = thread::spawn(move || {
            for i in 0..10 {
                tx.blocking_send(i).unwrap();
            }
        });
        let seq = from_channel(rx);
        assert_eq!(seq.to_vec(), (0..10).collect::<Vec<_>>());
        producer.join().unwrap();
    }

    #[test]
    fn test_from_channel_second_pass_resumes() {
        let (tx, rx) = mpsc::channel(8);
        for i in 0..5 {
            tx.blocking_send(i).unwrap();
        }
        drop(tx);

        let seq = from_channel(rx);
        assert_eq!((&seq).take(2).to_vec(), vec![0, 1]);
        assert_eq!(seq.to_vec(), vec![2, 3, 4]);
        assert!(seq.to_vec().is_empty());
    }

    #[test]
    fn test_into_inner_hands_back_unread_values() {
        let (tx, rx) = mpsc::channel(8);
        for i in 0..4 {
            tx.blocking_send(i).unwrap();
        }

        let seq = from_channel(rx);
        assert_eq!((&seq).first(), Some(0));
        let mut rx = seq.into_inner();
        assert_eq!(rx.blocking_recv(), Some(1));

        tx.blocking_send(9).unwrap();
        drop(tx);
        let rest = from_channel(rx).to_vec();
        assert_eq!(rest, vec![2, 3, 9]);
    }

    #[test]
    fn test_to_channel_delivers_in_order() {
        let stream = to_channel(range(0, 100)).unwrap();
        let got: Vec<i64> = stream.collect();
        assert_eq!(got, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_finish_after_full_read() {
        let mut stream = to_channel_with(from_vec(vec![1, 2, 3]), &SeqConfig::default()).unwrap();
        assert_eq!(stream.by_ref().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(stream.finish().is_ok());
    }

    #[test]
    fn test_drop_stops_and_joins_worker() {
        let produced = Arc::new(AtomicUsize::new(0));
        let cfg = SeqConfig::default().with_channel_capacity(1);
        let mut stream = to_channel_with(counting_forever(Arc::clone(&produced)), &cfg).unwrap();

        let head: Vec<u64> = stream.by_ref().take(3).collect();
        assert_eq!(head, vec![0, 1, 2]);
        drop(stream);

        // Joined: the count can no longer move.
        let after_drop = produced.load(Ordering::SeqCst);
        assert!(after_drop <= 8, "worker overran: {after_drop}");
        thread::sleep(std::time::Duration::from_millis(20));
        assert_eq!(produced.load(Ordering::SeqCst), after_drop);
    }

    #[test]
    fn test_cancel_ends_stream() {
        let produced = Arc::new(AtomicUsize::new(0));
        let cfg = SeqConfig::default().with_channel_capacity(2);
        let mut stream = to_channel_with(counting_forever(produced), &cfg).unwrap();

        assert_eq!(stream.next(), Some(0));
        stream.cancel();
        assert!(stream.is_cancelled());
        // Only buffered values remain.
        let rest: Vec<u64> = stream.by_ref().collect();
        assert!(rest.len() <= 2);
        assert!(stream.finish().is_ok());
    }

    #[test]
    fn test_worker_panic_is_reported() {
        let source = from_fn(|yield_: &mut dyn FnMut(i32) -> bool| {
            if !yield_(1) {
                return;
            }
            panic!("boom");
        });
        let mut stream = to_channel(source).unwrap();
        assert_eq!(stream.next(), Some(1));
        assert_eq!(stream.next(), None);
        match stream.finish() {
            Err(Error::WorkerPanicked(msg)) => assert!(msg.contains("boom")),
            other => panic!("expected worker panic, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_config_is_rejected_before_spawn() {
        let cfg = SeqConfig::default().with_channel_capacity(0);
        assert!(matches!(
            to_channel_with(range(0, 3), &cfg),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_worker_thread_is_named() {
        let cfg = SeqConfig::default().with_worker_name("seq-test-worker");
        let source = from_fn(|yield_: &mut dyn FnMut(String) -> bool| {
            let name = thread::current().name().unwrap_or_default().to_string();
            yield_(name);
        });
        let names: Vec<String> = to_channel_with(source, &cfg).unwrap().collect();
        assert_eq!(names, vec!["seq-test-worker".to_string()]);
    }
}
