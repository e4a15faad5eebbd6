use serde_json::Value as Json;

use crate::resource::kind::ResourceKind;
use crate::resource::object::{SolveObject, Value};

/// Build a typed object from a JSON mapping.
///
/// The kind is selected by the `class_name` discriminator through the
/// static table; unrecognized or missing discriminators construct a generic
/// object. The mapping's values are converted recursively.
pub fn construct(values: serde_json::Map<String, Json>) -> SolveObject {
    let kind = values
        .get("class_name")
        .and_then(Json::as_str)
        .map(ResourceKind::from_class_name)
        .unwrap_or(ResourceKind::Generic);

    let mut object = SolveObject::new(kind);
    object.refresh_from(values);
    object
}

/// Convert an arbitrary server response value into the object model.
///
/// Every response passes through here before reaching application code:
/// sequences convert element-wise in order, mappings become typed objects,
/// scalars pass through unchanged. Total — no input shape fails.
pub fn convert(resp: Json) -> Value {
    match resp {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            // u64 beyond the i64 range, or a float
            None => Value::Float(n.as_f64().unwrap_or_default()),
        },
        Json::String(s) => Value::String(s),
        Json::Array(items) => Value::List(items.into_iter().map(convert).collect()),
        Json::Object(map) => Value::Object(construct(map)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn dispatches_on_the_discriminator() {
        for (name, kind) in [
            ("Depository", ResourceKind::Depository),
            ("DepositoryVersion", ResourceKind::DepositoryVersion),
            ("Dataset", ResourceKind::Dataset),
            ("DatasetField", ResourceKind::DatasetField),
            ("User", ResourceKind::User),
        ] {
            let converted = convert(json!({"class_name": name, "id": 1}));
            let object = converted.as_object().expect("object");
            assert_eq!(object.kind(), kind);
            assert_eq!(object.class_name(), Some(name));
        }
    }

    #[test]
    fn unknown_or_missing_discriminator_is_generic() {
        let unknown = convert(json!({"class_name": "FutureThing", "id": 1}));
        assert_eq!(unknown.as_object().unwrap().kind(), ResourceKind::Generic);

        let missing = convert(json!({"id": 1}));
        assert_eq!(missing.as_object().unwrap().kind(), ResourceKind::Generic);

        // a non-string discriminator is ignored rather than dispatched
        let numeric = convert(json!({"class_name": 3}));
        assert_eq!(numeric.as_object().unwrap().kind(), ResourceKind::Generic);
    }

    #[test]
    fn nested_values_convert_recursively() {
        let converted = convert(json!({
            "class_name": "Dataset",
            "depository": {"class_name": "Depository", "id": 5},
            "fields": [{"class_name": "DatasetField", "id": 6}],
        }));
        let dataset = converted.as_object().unwrap();

        let depository = dataset.get("depository").unwrap().as_object().unwrap();
        assert_eq!(depository.kind(), ResourceKind::Depository);

        let fields = dataset.get("fields").unwrap().as_list().unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(
            fields[0].as_object().unwrap().kind(),
            ResourceKind::DatasetField
        );
    }

    #[test]
    fn sequences_preserve_order_and_length() {
        let source = json!([{"id": 1}, {"id": 2}, {"id": 3}, "scalar", 4]);
        let converted = convert(source.clone());
        let items = converted.as_list().unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].as_object().unwrap().id(), Some(1));
        assert_eq!(items[2].as_object().unwrap().id(), Some(3));
        assert_eq!(items[3].as_str(), Some("scalar"));
        assert_eq!(items[4].as_i64(), Some(4));

        // same input, same output
        assert_eq!(convert(source.clone()), convert(source));
    }

    #[test]
    fn reconverting_a_serialized_object_is_a_no_op() {
        let first = convert(json!({
            "class_name": "Dataset",
            "id": 10,
            "depository": {"class_name": "Depository", "id": 5},
        }));
        let round_tripped = serde_json::to_value(&first).unwrap();
        assert_eq!(convert(round_tripped), first);
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(convert(json!(null)), Value::Null);
        assert_eq!(convert(json!(true)), Value::Bool(true));
        assert_eq!(convert(json!(12)), Value::Int(12));
        assert_eq!(convert(json!(1.5)), Value::Float(1.5));
        assert_eq!(convert(json!("plain")), Value::String("plain".to_string()));
    }
}
