//! Normalization of a user record's favorite-games field.
//!
//! The field has accumulated several shapes over time: an array of ids,
//! an array of `{id, name}` records, or a JSON string wrapping either.
//! `extract_ids` flattens all of them into an ordered id list and never
//! fails; anything unreadable degrades to an empty list.

use catalog_client::models::GameId;
use serde_json::Value;

/// Extract the ordered list of game ids from a raw favorites field.
///
/// Entries without a usable id (null, zero, empty string) are dropped;
/// the relative order of the rest is preserved.
pub fn extract_ids(raw: Option<&Value>) -> Vec<GameId> {
    let Some(value) = raw else {
        return Vec::new();
    };
    match value {
        Value::Array(items) => ids_from_array(items),
        Value::String(text) => ids_from_text(text),
        _ => Vec::new(),
    }
}

/// Element 0 picks the branch for the whole array: records projected
/// through their `id` member, or bare id scalars. Mixed arrays follow
/// whatever the first element looks like.
fn ids_from_array(items: &[Value]) -> Vec<GameId> {
    match items.first() {
        Some(Value::Object(_) | Value::Array(_)) => items
            .iter()
            .filter_map(|item| scalar_id(item.get("id")?))
            .collect(),
        _ => items.iter().filter_map(scalar_id).collect(),
    }
}

fn ids_from_text(text: &str) -> Vec<GameId> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => ids_from_array(&items),
        Ok(_) => Vec::new(),
        Err(err) => {
            tracing::debug!(%err, "favorites field is not valid JSON, ignoring");
            Vec::new()
        }
    }
}

/// A single id candidate. Zero and the empty string mark "no id" in
/// legacy records and are treated as absent.
fn scalar_id(value: &Value) -> Option<GameId> {
    match value {
        Value::Number(n) => n.as_u64().filter(|&n| n != 0).map(GameId::Num),
        Value::String(s) if !s.is_empty() => Some(GameId::Text(s.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn num_ids(ids: &[u64]) -> Vec<GameId> {
        ids.iter().copied().map(GameId::Num).collect()
    }

    #[test]
    fn id_array_passes_through_minus_falsy_entries() {
        let raw = json!([1, 2, 0, 3]);
        assert_eq!(extract_ids(Some(&raw)), num_ids(&[1, 2, 3]));
    }

    #[test]
    fn record_array_projects_the_id_member() {
        let raw = json!([{ "id": 5, "name": "A" }, { "id": null }]);
        assert_eq!(extract_ids(Some(&raw)), num_ids(&[5]));
    }

    #[test]
    fn json_string_of_ids_is_parsed() {
        let raw = json!("[7,8]");
        assert_eq!(extract_ids(Some(&raw)), num_ids(&[7, 8]));
    }

    #[test]
    fn json_string_of_records_is_parsed() {
        let raw = json!(r#"[{"id": 3, "name": "B"}]"#);
        assert_eq!(extract_ids(Some(&raw)), num_ids(&[3]));
    }

    #[test]
    fn unparsable_string_degrades_to_empty() {
        let raw = json!("not json");
        assert_eq!(extract_ids(Some(&raw)), Vec::new());
    }

    #[test]
    fn non_array_json_string_degrades_to_empty() {
        let raw = json!(r#"{"id": 1}"#);
        assert_eq!(extract_ids(Some(&raw)), Vec::new());
    }

    #[test]
    fn absent_and_null_fields_are_empty() {
        assert_eq!(extract_ids(None), Vec::new());
        assert_eq!(extract_ids(Some(&Value::Null)), Vec::new());
    }

    #[test]
    fn other_value_types_are_empty() {
        assert_eq!(extract_ids(Some(&json!(42))), Vec::new());
        assert_eq!(extract_ids(Some(&json!(true))), Vec::new());
        assert_eq!(extract_ids(Some(&json!({ "id": 1 }))), Vec::new());
    }

    #[test]
    fn first_element_governs_mixed_arrays() {
        // Record first: later bare ids have no `id` member and are dropped.
        let raw = json!([{ "id": 1 }, 9]);
        assert_eq!(extract_ids(Some(&raw)), num_ids(&[1]));

        // Scalar first: later records are not valid scalars and are dropped.
        let raw = json!([9, { "id": 1 }]);
        assert_eq!(extract_ids(Some(&raw)), num_ids(&[9]));
    }

    #[test]
    fn string_ids_survive_and_empty_strings_drop() {
        let raw = json!(["co-9", "", 2]);
        assert_eq!(
            extract_ids(Some(&raw)),
            vec![GameId::Text("co-9".into()), GameId::Num(2)]
        );
    }

    #[test]
    fn order_is_preserved() {
        let raw = json!([3, 1, 2]);
        assert_eq!(extract_ids(Some(&raw)), num_ids(&[3, 1, 2]));
    }
}
