//! Row parsing helpers.
//!
//! Drupal stores `flagging.entity_id` as text and `node_field_data.nid` as an
//! integer, so id columns are read as raw values and normalized here.

use crate::error::DatabaseError;

/// Read an id column that may be stored as INTEGER or TEXT.
///
/// # Errors
///
/// Returns `DatabaseError::Query` for NULL, negative, non-numeric or
/// non-scalar values.
pub fn get_id(row: &libsql::Row, idx: i32) -> Result<u64, DatabaseError> {
    let value = row.get_value(idx)?;
    value_to_id(&value)
        .ok_or_else(|| DatabaseError::Query(format!("column {idx} is not a node id: {value:?}")))
}

/// Convert a raw libSQL value into an id.
#[must_use]
pub fn value_to_id(value: &libsql::Value) -> Option<u64> {
    match value {
        libsql::Value::Integer(i) => u64::try_from(*i).ok(),
        libsql::Value::Text(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Build `?1, ?2, ...` for an `IN (...)` list of `count` parameters.
#[must_use]
pub fn placeholders(count: usize) -> String {
    (1..=count)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(libsql::Value::Integer(12), Some(12))]
    #[case(libsql::Value::Text("34".into()), Some(34))]
    #[case(libsql::Value::Integer(-1), None)]
    #[case(libsql::Value::Text("node".into()), None)]
    #[case(libsql::Value::Null, None)]
    fn ids_from_integer_or_text(#[case] value: libsql::Value, #[case] expected: Option<u64>) {
        assert_eq!(value_to_id(&value), expected);
    }

    #[test]
    fn placeholder_lists() {
        assert_eq!(placeholders(0), "");
        assert_eq!(placeholders(3), "?1, ?2, ?3");
    }
}
