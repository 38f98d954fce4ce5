use serde_json::value::RawValue;
use typed_builder::TypedBuilder;

use crate::time::Ticks;

/// A scheduled event.
#[derive(
    Debug,
    Clone,
    derivative::Derivative,
    serde::Serialize,
    serde::Deserialize,
    TypedBuilder,
)]
#[derivative(PartialEq, Eq)]
pub struct Event {
    /// Offset from "now" at which the event fires. While the event sits in
    /// the queue this is the delta from its predecessor entry; on an event
    /// returned by a drain it is the overdue amount (zero or negative).
    #[serde(default)]
    pub delay: Ticks,
    /// Re-arm interval after firing. Zero fires once.
    #[serde(default)]
    #[builder(default)]
    pub repeat: Ticks,
    /// Identity key for [`EventQueue::remove`] and [`EventQueue::add`].
    ///
    /// [`EventQueue::remove`]: crate::EventQueue::remove
    /// [`EventQueue::add`]: crate::EventQueue::add
    #[serde(default)]
    #[builder(setter(into))]
    pub name: String,
    /// Opaque payload, carried through untouched. Preserved byte-for-byte
    /// when a repeating event is re-armed.
    #[serde(default, rename = "what", skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    #[derivative(PartialEq = "ignore")]
    pub payload: Option<Box<RawValue>>,
}

impl Event {
    pub(crate) fn is_repeating(&self) -> bool {
        self.repeat > Ticks::ZERO
    }
}

/// Decodes an event descriptor from its JSON wire form.
///
/// Absent fields take their zero values; `what` is kept as raw JSON text and
/// never interpreted.
pub fn parse(message: &[u8]) -> Result<Event, Error> {
    Ok(serde_json::from_slice(message)?)
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serde error")]
    Serde(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_descriptor() {
        let event =
            parse(br#"{"delay": 3, "repeat": 2, "name": "tick", "what": {"event": "tick"}}"#)
                .unwrap();
        assert_eq!(event.delay, Ticks::new(3));
        assert_eq!(event.repeat, Ticks::new(2));
        assert_eq!(event.name, "tick");
        assert_eq!(
            event.payload.as_deref().map(RawValue::get),
            Some(r#"{"event": "tick"}"#)
        );
    }

    #[test]
    fn parse_defaults_absent_fields() {
        let event = parse(br#"{"name": "tick"}"#).unwrap();
        assert_eq!(event.delay, Ticks::ZERO);
        assert_eq!(event.repeat, Ticks::ZERO);
        assert!(event.payload.is_none());

        let event = parse(b"{}").unwrap();
        assert_eq!(event.name, "");
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(parse(b"{\"delay\":").is_err());
        assert!(parse(b"[1, 2, 3]").is_err());
    }

    #[test]
    fn payload_survives_reserialization() {
        let raw = br#"{"delay":1,"name":"tick","what":{"k":[1,2,{"deep":null}]}}"#;
        let event = parse(raw).unwrap();
        let emitted = serde_json::to_string(&event).unwrap();
        let again = parse(emitted.as_bytes()).unwrap();
        assert_eq!(
            event.payload.as_deref().map(RawValue::get),
            again.payload.as_deref().map(RawValue::get),
        );
    }
}
