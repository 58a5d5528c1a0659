use model::Value;
use std::cmp::Ordering;

/// Reads a dotted path such as `address.city` from `object`.
///
/// Numeric segments index into arrays. Any other segment applied to an array
/// is applied to each element, and the found values are flattened into one
/// array, so `projects.name` yields the names of all projects.
pub fn get(object: &Value, path: &str) -> Option<Value> {
    let segments: Vec<&str> = path.split('.').collect();
    lookup(object, &segments)
}

fn lookup(value: &Value, segments: &[&str]) -> Option<Value> {
    let Some((head, rest)) = segments.split_first() else {
        return Some(value.clone());
    };

    match value {
        Value::Object(map) => map.get(*head).and_then(|next| lookup(next, rest)),
        Value::Array(items) => {
            if let Ok(index) = head.parse::<usize>() {
                return items.get(index).and_then(|next| lookup(next, rest));
            }
            let collected: Vec<Value> = items
                .iter()
                .filter_map(|item| lookup(item, segments))
                .flat_map(|found| match found {
                    Value::Array(inner) => inner,
                    other => vec![other],
                })
                .collect();
            (!collected.is_empty()).then_some(Value::Array(collected))
        }
        _ => None,
    }
}

pub fn compare(actual: &Value, expected: &Value) -> Option<Ordering> {
    actual.compare(expected)
}
