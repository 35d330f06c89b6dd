use std::collections::HashMap;

use super::{FieldKind, FieldValue, FormEditor};

impl FormEditor {
    /// Name -> typed value for every data field. Action fields carry no data
    /// and are left out.
    pub fn current_values(&self) -> HashMap<String, FieldValue> {
        self.fields
            .iter()
            .filter(|f| f.kind != FieldKind::Action)
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }

    /// The same mapping as a JSON object.
    pub fn values_json(&self) -> serde_json::Value {
        let map = self
            .fields
            .iter()
            .filter(|f| f.kind != FieldKind::Action)
            .map(|f| (f.name.clone(), f.value.to_json()))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }
}
