use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Represents the request descriptor handed to the authorizer.
///
/// Parsing never fails: anything that can't be read as a header map is treated
/// as if no headers were sent at all, while the event itself is kept as received.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// The string valued request headers, keyed by name exactly as they were delivered.
    pub headers: BTreeMap<String, String>,
    /// The event as it was received, only kept for logging.
    pub event: Value,
}

impl RequestDescriptor {
    /// Parse a descriptor from an event body.
    ///
    /// A body that isn't JSON is kept as text and has no headers.
    pub fn from_slice(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(event) => Self::from_event(event),
            Err(_) => Self {
                headers: BTreeMap::new(),
                event: Value::String(String::from_utf8_lossy(body).into_owned()),
            },
        }
    }

    /// Build a descriptor from an already parsed event.
    pub fn from_event(event: Value) -> Self {
        Self {
            headers: lenient_headers(event.get("headers")),
            event,
        }
    }

    /// Build a descriptor from already received header pairs.
    pub fn from_headers<I>(headers: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let headers: BTreeMap<String, String> = headers.into_iter().collect();
        Self {
            event: json!({ "headers": headers }),
            headers,
        }
    }

    /// Get the value of a header by its exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// The received event as pretty printed JSON.
    pub fn to_log_string(&self) -> String {
        format!("{:#}", self.event)
    }
}

/// Keep only the string valued entries of a `headers` object, anything else becomes an empty map.
fn lenient_headers(headers: Option<&Value>) -> BTreeMap<String, String> {
    let Some(Value::Object(headers)) = headers else {
        return BTreeMap::new();
    };

    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .as_str()
                .map(|value| (name.clone(), value.to_string()))
        })
        .collect()
}
