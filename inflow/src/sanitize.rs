//! Parameter sanitization: normalizes host-supplied parameter maps into a
//! transport-safe shape.

use inflow_types::{Properties, PropertyValue};

/// Sanitize a parameter map for transport.
///
/// Date/timestamp values are replaced with their integer epoch-seconds
/// representation; values with no wire representation are dropped (with a
/// warning - silent drop is the documented policy, no error is raised);
/// lists and nested maps are sanitized recursively. Surviving entries keep
/// their insertion order. Pure and idempotent.
pub fn sanitize(params: Properties) -> Properties {
    params
        .into_iter()
        .filter_map(|(key, value)| match sanitize_value(value) {
            Some(clean) => Some((key, clean)),
            None => {
                log::warn!("dropping parameter {key:?}: value has no transport representation");
                None
            }
        })
        .collect()
}

fn sanitize_value(value: PropertyValue) -> Option<PropertyValue> {
    match value {
        PropertyValue::Timestamp(ts) => Some(PropertyValue::Int(ts.timestamp())),
        PropertyValue::Opaque => None,
        PropertyValue::List(items) => Some(PropertyValue::List(
            items.into_iter().filter_map(sanitize_value).collect(),
        )),
        PropertyValue::Map(map) => Some(PropertyValue::Map(sanitize(map))),
        other => Some(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn props(entries: Vec<(&str, PropertyValue)>) -> Properties {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn dates_become_epoch_seconds() {
        let ts = Utc.with_ymd_and_hms(2022, 4, 30, 8, 30, 15).unwrap();
        let clean = sanitize(props(vec![("date", PropertyValue::Timestamp(ts))]));
        assert_eq!(clean["date"], PropertyValue::Int(ts.timestamp()));
    }

    #[test]
    fn opaque_values_are_dropped() {
        let clean = sanitize(props(vec![
            ("number", PropertyValue::from("1234567890")),
            ("some_object", PropertyValue::Opaque),
        ]));
        assert_eq!(clean.len(), 1);
        assert!(clean.contains_key("number"));
        assert!(!clean.contains_key("some_object"));
    }

    #[test]
    fn surviving_keys_keep_insertion_order() {
        let clean = sanitize(props(vec![
            ("z", PropertyValue::from(1)),
            ("bad", PropertyValue::Opaque),
            ("a", PropertyValue::from(2)),
            ("m", PropertyValue::from(true)),
        ]));
        let keys: Vec<_> = clean.keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn nested_structures_are_sanitized_recursively() {
        let ts = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let nested = props(vec![
            ("when", PropertyValue::Timestamp(ts)),
            ("junk", PropertyValue::Opaque),
        ]);
        let clean = sanitize(props(vec![
            ("inner", PropertyValue::Map(nested)),
            (
                "list",
                PropertyValue::List(vec![PropertyValue::Opaque, PropertyValue::from("kept")]),
            ),
        ]));
        let PropertyValue::Map(inner) = &clean["inner"] else {
            panic!("expected a map");
        };
        assert_eq!(inner["when"], PropertyValue::Int(ts.timestamp()));
        assert!(!inner.contains_key("junk"));
        assert_eq!(
            clean["list"],
            PropertyValue::List(vec![PropertyValue::from("kept")])
        );
    }

    #[test]
    fn sanitize_is_idempotent() {
        let ts = Utc.with_ymd_and_hms(2024, 12, 24, 18, 0, 0).unwrap();
        let original = props(vec![
            ("date", PropertyValue::Timestamp(ts)),
            ("name", PropertyValue::from("Alice")),
            ("junk", PropertyValue::Opaque),
        ]);
        let once = sanitize(original);
        let twice = sanitize(once.clone());
        assert_eq!(once, twice);
    }
}
