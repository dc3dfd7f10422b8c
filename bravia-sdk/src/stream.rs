//! Polling bridge from device state to an ordered event stream
//!
//! The device offers no push notifications, so subscribers are served by a
//! per-subscriber polling loop: on a fixed interval the poller samples power
//! and volume/mute through the client and republishes the result as a
//! [`StateSnapshot`]. Dropping the subscriber's stream cancels its loop
//! before the next sample; concurrent subscribers each get an independent
//! loop with no shared state.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use bravia_api::{ApiError, BraviaClient, PowerState, PowerStatus, VolumeInformation};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Interval between state samples
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Audio target whose volume and mute flag feed the snapshot
const SNAPSHOT_TARGET: &str = "speaker";

/// The device queries a poller needs to assemble a snapshot
///
/// Implemented by [`BraviaClient`]; test code substitutes a counting mock.
pub trait StateSource: Send + Sync {
    fn power_status(&self) -> Result<PowerStatus, ApiError>;
    fn volume_information(&self) -> Result<Vec<VolumeInformation>, ApiError>;
}

impl StateSource for BraviaClient {
    fn power_status(&self) -> Result<PowerStatus, ApiError> {
        self.system.get_power_status()
    }

    fn volume_information(&self) -> Result<Vec<VolumeInformation>, ApiError> {
        self.audio.get_volume_information()
    }
}

/// A point-in-time capture of device state
///
/// Created fresh on every tick and never mutated afterwards. Serializes to
/// the JSON shape stream consumers expect
/// (`{"powerStatus":…,"volume":…,"muted":…,"timestamp":…}`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub power_status: PowerState,
    pub volume: i32,
    pub muted: bool,
    pub timestamp: DateTime<Utc>,
}

impl StateSnapshot {
    /// Snapshot carrying the defaults used before the first sample succeeds
    fn unknown() -> Self {
        Self {
            power_status: PowerState::Unknown,
            volume: 0,
            muted: false,
            timestamp: Utc::now(),
        }
    }
}

/// One event on a subscriber's stream
#[derive(Debug, Clone, PartialEq)]
pub enum StateEvent {
    /// Synthetic event published immediately on subscribe
    Connected,
    /// One polled snapshot
    Snapshot(StateSnapshot),
}

/// Timer-driven sampler republishing device state as an event stream
pub struct StatePoller<S> {
    source: Arc<S>,
    interval: Duration,
}

impl<S: StateSource + 'static> StatePoller<S> {
    /// Create a poller over the given device source
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Override the sampling interval
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Start an independent polling loop and return its event stream
    ///
    /// The stream yields [`StateEvent::Connected`] first, then one snapshot
    /// per tick. Dropping the stream stops the loop; an in-flight sample may
    /// complete but its result is discarded and no further device queries
    /// are issued.
    pub fn subscribe(&self) -> StateStream {
        let (event_tx, event_rx) = mpsc::channel();
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let source = Arc::clone(&self.source);
        let interval = self.interval;

        thread::spawn(move || {
            let _ = event_tx.send(StateEvent::Connected);
            let mut last = StateSnapshot::unknown();
            loop {
                // The wait doubles as the cancellation point: the stream
                // dropping its sender wakes this receiver immediately.
                match cancel_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
                let snapshot = sample(source.as_ref(), &last);
                last = snapshot.clone();
                if event_tx.send(StateEvent::Snapshot(snapshot)).is_err() {
                    break;
                }
            }
        });

        StateStream {
            events: event_rx,
            _cancel: cancel_tx,
        }
    }
}

/// Assemble a snapshot, degrading to last-known values on sampling failure
///
/// A transient device outage reduces snapshot freshness; it never
/// terminates the stream.
fn sample<S: StateSource + ?Sized>(source: &S, last: &StateSnapshot) -> StateSnapshot {
    let power_status = match source.power_status() {
        Ok(status) => status.status,
        Err(err) => {
            tracing::warn!(error = %err, "power status sample failed, keeping last known state");
            last.power_status
        }
    };

    let (volume, muted) = match source.volume_information() {
        Ok(info) => info
            .iter()
            .find(|entry| entry.target == SNAPSHOT_TARGET)
            .map(|entry| (entry.volume, entry.mute))
            .unwrap_or((last.volume, last.muted)),
        Err(err) => {
            tracing::warn!(error = %err, "volume sample failed, keeping last known state");
            (last.volume, last.muted)
        }
    };

    StateSnapshot {
        power_status,
        volume,
        muted,
        timestamp: Utc::now(),
    }
}

/// A subscriber's ordered sequence of state events
///
/// Iteration blocks until the next event. Dropping the stream disconnects
/// the subscriber and cancels its polling loop.
pub struct StateStream {
    events: mpsc::Receiver<StateEvent>,
    _cancel: mpsc::Sender<()>,
}

impl StateStream {
    /// Wait for the next event, giving up after `timeout`
    pub fn recv_timeout(&self, timeout: Duration) -> Option<StateEvent> {
        self.events.recv_timeout(timeout).ok()
    }
}

impl Iterator for StateStream {
    type Item = StateEvent;

    fn next(&mut self) -> Option<StateEvent> {
        self.events.recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TICK: Duration = Duration::from_millis(20);

    struct MockSource {
        samples: AtomicUsize,
        power: Result<PowerState, ()>,
        volume: Result<(i32, bool), ()>,
    }

    impl MockSource {
        fn healthy() -> Arc<Self> {
            Arc::new(Self {
                samples: AtomicUsize::new(0),
                power: Ok(PowerState::Active),
                volume: Ok((20, false)),
            })
        }

        fn unreachable() -> Arc<Self> {
            Arc::new(Self {
                samples: AtomicUsize::new(0),
                power: Err(()),
                volume: Err(()),
            })
        }

        fn sample_count(&self) -> usize {
            self.samples.load(Ordering::SeqCst)
        }
    }

    impl StateSource for MockSource {
        fn power_status(&self) -> Result<PowerStatus, ApiError> {
            self.samples.fetch_add(1, Ordering::SeqCst);
            match self.power {
                Ok(status) => Ok(PowerStatus { status }),
                Err(()) => Err(ApiError::Transport("unreachable".to_string())),
            }
        }

        fn volume_information(&self) -> Result<Vec<VolumeInformation>, ApiError> {
            match self.volume {
                Ok((volume, mute)) => Ok(vec![VolumeInformation {
                    target: SNAPSHOT_TARGET.to_string(),
                    volume,
                    mute,
                    max_volume: 100,
                    min_volume: 0,
                }]),
                Err(()) => Err(ApiError::Transport("unreachable".to_string())),
            }
        }
    }

    #[test]
    fn test_stream_starts_with_connected_event() {
        let source = MockSource::healthy();
        let stream = StatePoller::new(source).with_interval(TICK).subscribe();
        assert_eq!(
            stream.recv_timeout(Duration::from_secs(1)),
            Some(StateEvent::Connected)
        );
    }

    #[test]
    fn test_snapshots_carry_sampled_state() {
        let source = MockSource::healthy();
        let mut stream = StatePoller::new(Arc::clone(&source))
            .with_interval(TICK)
            .subscribe();
        stream.next(); // connected

        match stream.next() {
            Some(StateEvent::Snapshot(snapshot)) => {
                assert_eq!(snapshot.power_status, PowerState::Active);
                assert_eq!(snapshot.volume, 20);
                assert!(!snapshot.muted);
            }
            other => panic!("expected snapshot, got {other:?}"),
        }
    }

    #[test]
    fn test_no_device_queries_after_disconnect() {
        let source = MockSource::healthy();
        let stream = StatePoller::new(Arc::clone(&source))
            .with_interval(TICK)
            .subscribe();

        // Let a few ticks elapse, then disconnect.
        thread::sleep(TICK * 3);
        drop(stream);

        // Allow any in-flight sample to finish before taking the baseline.
        thread::sleep(TICK);
        let after_disconnect = source.sample_count();
        thread::sleep(TICK * 3);
        assert_eq!(source.sample_count(), after_disconnect);
    }

    #[test]
    fn test_sampling_failure_degrades_without_closing_stream() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let source = MockSource::unreachable();
        let mut stream = StatePoller::new(source).with_interval(TICK).subscribe();
        stream.next(); // connected

        for _ in 0..2 {
            match stream.next() {
                Some(StateEvent::Snapshot(snapshot)) => {
                    assert_eq!(snapshot.power_status, PowerState::Unknown);
                    assert_eq!(snapshot.volume, 0);
                    assert!(!snapshot.muted);
                }
                other => panic!("expected snapshot despite outage, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_concurrent_subscribers_get_independent_streams() {
        let source = MockSource::healthy();
        let poller = StatePoller::new(Arc::clone(&source)).with_interval(TICK);

        let mut first = poller.subscribe();
        let mut second = poller.subscribe();

        assert_eq!(first.next(), Some(StateEvent::Connected));
        assert_eq!(second.next(), Some(StateEvent::Connected));

        // Dropping one subscriber leaves the other's loop running.
        drop(first);
        assert!(matches!(second.next(), Some(StateEvent::Snapshot(_))));
    }

    #[test]
    fn test_snapshot_serializes_to_stream_shape() {
        let snapshot = StateSnapshot {
            power_status: PowerState::Active,
            volume: 25,
            muted: true,
            timestamp: DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["powerStatus"], "active");
        assert_eq!(json["volume"], 25);
        assert_eq!(json["muted"], true);
        assert!(json["timestamp"].as_str().unwrap().starts_with("2024-05-01T10:00:00"));
    }
}
