//! NEP-297 log assembly shared by every ledger event.

use near_sdk::json_types::U128;
use near_sdk::serde_json::{self, Map, Value};
use near_sdk::{AccountId, env};

use super::types::{Event, EventData};
use super::{PREFIX, STANDARD, VERSION};

pub(crate) trait IntoEventValue {
    fn into_event_value(self) -> Value;
}

macro_rules! log_as_string {
    ($($ty:ty),* $(,)?) => {$(
        impl IntoEventValue for $ty {
            fn into_event_value(self) -> Value {
                Value::String(self.to_string())
            }
        }
    )*};
}

// Integers go out as strings; JSON consumers lose precision above 2^53.
log_as_string!(&str, &String, &AccountId, u64, u128);

impl IntoEventValue for U128 {
    fn into_event_value(self) -> Value {
        self.0.into_event_value()
    }
}

impl IntoEventValue for bool {
    fn into_event_value(self) -> Value {
        Value::Bool(self)
    }
}

impl IntoEventValue for Value {
    fn into_event_value(self) -> Value {
        self
    }
}

/// Market-scoped ids (items, item types) as a JSON array of strings.
pub(crate) fn id_list<'a>(ids: impl IntoIterator<Item = &'a u64>) -> Value {
    Value::Array(ids.into_iter().map(|&id| id.into_event_value()).collect())
}

pub(crate) struct EventBuilder {
    event_type: &'static str,
    data: EventData,
}

impl EventBuilder {
    pub(crate) fn new(event_type: &'static str, operation: &'static str, author: &AccountId) -> Self {
        Self {
            event_type,
            data: EventData {
                operation: operation.into(),
                author: author.to_string(),
                extra: Map::new(),
            },
        }
    }

    pub(crate) fn field(mut self, key: &str, value: impl IntoEventValue) -> Self {
        self.data.extra.insert(key.into(), value.into_event_value());
        self
    }

    pub(crate) fn field_opt(self, key: &str, value: Option<impl IntoEventValue>) -> Self {
        match value {
            Some(v) => self.field(key, v),
            None => self,
        }
    }

    pub(crate) fn emit(self) {
        let event = Event {
            standard: STANDARD.into(),
            version: VERSION.into(),
            event: self.event_type.into(),
            data: vec![self.data],
        };
        // Maps of strings, numbers and bools always serialize.
        if let Ok(json) = serde_json::to_string(&event) {
            env::log_str(&format!("{PREFIX}{json}"));
        }
    }
}
