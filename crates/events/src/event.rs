use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};

use crate::{EventError, Result};

/// A typed event payload with a stable name.
///
/// The name is the registry key handlers subscribe to, so it must not change
/// once producers and handlers agree on it.
pub trait EventPayload: Serialize + DeserializeOwned {
    /// The event name, e.g. `"CustomerCreatedEvent"`.
    const EVENT_NAME: &'static str;
}

/// An immutable record of something that happened in the domain.
///
/// The occurrence time is captured at construction. There are no setters:
/// once built, an event is only read.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainEvent {
    event_name: String,
    occurred_at: DateTime<Utc>,
    payload: serde_json::Value,
}

impl DomainEvent {
    /// Creates an event from a name and a raw JSON payload.
    pub fn new(event_name: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            event_name: event_name.into(),
            occurred_at: Utc::now(),
            payload,
        }
    }

    /// Creates an event from a typed payload, named after `P::EVENT_NAME`.
    pub fn from_payload<P: EventPayload>(payload: &P) -> Result<Self> {
        Ok(Self::new(P::EVENT_NAME, serde_json::to_value(payload)?))
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    /// Returns the raw payload.
    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }

    /// Decodes the payload as `P`.
    ///
    /// Fails with [`EventError::NameMismatch`] if this event is not a `P` event.
    pub fn payload_as<P: EventPayload>(&self) -> Result<P> {
        if self.event_name != P::EVENT_NAME {
            return Err(EventError::NameMismatch {
                expected: P::EVENT_NAME,
                actual: self.event_name.clone(),
            });
        }
        Ok(serde_json::from_value(self.payload.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct ProductCreated {
        name: String,
        price: i64,
    }

    impl EventPayload for ProductCreated {
        const EVENT_NAME: &'static str = "ProductCreatedEvent";
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Other {}

    impl EventPayload for Other {
        const EVENT_NAME: &'static str = "OtherEvent";
    }

    #[test]
    fn from_payload_uses_payload_name() {
        let payload = ProductCreated {
            name: "Product 1".to_string(),
            price: 1000,
        };
        let event = DomainEvent::from_payload(&payload).unwrap();

        assert_eq!(event.event_name(), "ProductCreatedEvent");
        assert_eq!(event.payload()["name"], "Product 1");
        assert_eq!(event.payload_as::<ProductCreated>().unwrap(), payload);
    }

    #[test]
    fn occurred_at_is_set_at_construction() {
        let before = Utc::now();
        let event = DomainEvent::new("X", serde_json::json!({}));
        let after = Utc::now();

        assert!(event.occurred_at() >= before);
        assert!(event.occurred_at() <= after);
    }

    #[test]
    fn payload_as_rejects_other_event_kinds() {
        let event = DomainEvent::new("OtherEvent", serde_json::json!({}));
        let result = event.payload_as::<ProductCreated>();

        assert!(matches!(
            result,
            Err(EventError::NameMismatch { expected: "ProductCreatedEvent", .. })
        ));
        assert!(event.payload_as::<Other>().is_ok());
    }

    #[test]
    fn payload_as_reports_shape_errors() {
        let event = DomainEvent::new("ProductCreatedEvent", serde_json::json!({"name": 1}));
        let result = event.payload_as::<ProductCreated>();
        assert!(matches!(result, Err(EventError::Serialization(_))));
    }

    #[test]
    fn clones_are_equal() {
        let event = DomainEvent::new("X", serde_json::json!({"a": 1}));
        assert_eq!(event.clone(), event);
    }
}
