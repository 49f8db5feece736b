use serde_json::{Deserializer, Map, Value};

/// Returns the first complete JSON object embedded in free-form text.
///
/// Every `{` is tried as a starting point in order; braces nested inside the
/// object or inside its strings do not end it early. Text after the object
/// is ignored.
pub fn first_json_object(text: &str) -> Option<Map<String, Value>> {
    for (start, _) in text.match_indices('{') {
        let mut values = Deserializer::from_str(&text[start..]).into_iter::<Value>();

        if let Some(Ok(Value::Object(object))) = values.next() {
            return Some(object);
        }
    }

    None
}
