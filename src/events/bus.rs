//! Request-keyed result bus.
//!
//! Decouples producers from consumers: a producer publishes a small
//! envelope under a string request key and returns immediately;
//! whoever holds a subscription for that key receives each envelope
//! once, whenever its own context gets around to draining the
//! receiver. No ordering is guaranteed across keys.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;
use tokio::sync::broadcast;
use tracing::debug;

use crate::error::ShelfResult;

use super::flags::RowChange;
use super::listener::{KeyedChangeListener, RowChangeListener};
use super::message::{KeyedChangeMessage, RowChangeMessage};

/// Buffered messages per request key before the oldest is dropped for
/// a lagging subscriber.
const CHANNEL_CAPACITY: usize = 64;

/// Publish/subscribe registry keyed by request key.
///
/// Channels are created lazily on first use of a key and live for the
/// bus's lifetime. Share the bus itself via `Arc`; receivers are
/// independent once handed out.
#[derive(Debug, Default)]
pub struct ResultBus {
    channels: Mutex<HashMap<String, broadcast::Sender<Value>>>,
}

impl ResultBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to every future message published under
    /// `request_key`. Messages published before this call are not
    /// replayed.
    pub fn subscribe(&self, request_key: &str) -> broadcast::Receiver<Value> {
        self.sender(request_key).subscribe()
    }

    /// Publish a raw envelope under `request_key`.
    ///
    /// Fire-and-forget: with no live subscriber the message is dropped.
    pub fn publish(&self, request_key: &str, envelope: Value) {
        let sender = self.sender(request_key);
        if sender.send(envelope).is_err() {
            debug!(request_key, "dropped change message with no subscribers");
        }
    }

    /// Publish a bitmask change. `item == 0` means no specific row.
    pub fn send_row_change(&self, request_key: &str, change: RowChange, item: i64) {
        debug!(request_key, ?change, item, "row change");
        self.publish(request_key, RowChangeMessage::new(change, item).to_value());
    }

    /// Publish a keyed change. `item == 0` means no specific row.
    pub fn send_keyed_change(&self, request_key: &str, key: impl Into<String>, item: i64) {
        let message = KeyedChangeMessage::new(key, item);
        debug!(request_key, key = %message.key, item, "keyed change");
        self.publish(request_key, message.to_value());
    }

    fn sender(&self, request_key: &str) -> broadcast::Sender<Value> {
        let mut channels = self.channels.lock().unwrap();
        channels
            .entry(request_key.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .clone()
    }
}

/// Decode one received envelope and dispatch it to `listener`.
///
/// Decode failures surface before the listener runs; on success the
/// listener is invoked exactly once.
pub fn deliver_row_change(
    listener: &mut dyn RowChangeListener,
    envelope: &Value,
) -> ShelfResult<()> {
    let message = RowChangeMessage::from_value(envelope)?;
    listener.on_change(message.change, message.item);
    Ok(())
}

/// Keyed-form counterpart of [`deliver_row_change`].
pub fn deliver_keyed_change(
    listener: &mut dyn KeyedChangeListener,
    envelope: &Value,
) -> ShelfResult<()> {
    let message = KeyedChangeMessage::from_value(envelope)?;
    listener.on_change(&message.key, message.item);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_without_subscribers_does_not_panic() {
        let bus = ResultBus::new();
        bus.send_row_change("rk:test", RowChange::AUTHOR, 1);
    }

    #[tokio::test]
    async fn test_subscribe_then_publish_delivers() {
        let bus = ResultBus::new();
        let mut rx = bus.subscribe("rk:test");

        bus.send_row_change("rk:test", RowChange::FORMAT, 9);

        let envelope = rx.recv().await.unwrap();
        let message = RowChangeMessage::from_value(&envelope).unwrap();
        assert_eq!(message.change, RowChange::FORMAT);
        assert_eq!(message.item, 9);
    }

    #[tokio::test]
    async fn test_messages_do_not_cross_request_keys() {
        let bus = ResultBus::new();
        let mut other = bus.subscribe("rk:other");

        bus.send_row_change("rk:test", RowChange::GENRE, 3);

        assert!(matches!(
            other.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }
}
