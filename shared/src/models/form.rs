//! Crop recommendation form submission

use std::collections::HashMap;

use serde::Deserialize;

use crate::types::{Feature, FEATURE_COUNT};

/// Raw form fields as posted by the browser, keyed by field name.
///
/// Every field is optional text so that a missing or malformed value
/// becomes a validation message instead of a request rejection. Fields are
/// looked up by `Feature::form_field`; unknown names are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CropForm {
    fields: HashMap<String, String>,
}

impl CropForm {
    /// Raw text submitted for a feature, if any
    pub fn field(&self, feature: Feature) -> Option<&str> {
        self.fields.get(feature.form_field()).map(String::as_str)
    }

    /// Convenience constructor used by tests and tooling
    pub fn from_values(values: [&str; FEATURE_COUNT]) -> Self {
        let fields = Feature::ALL
            .iter()
            .zip(values)
            .map(|(feature, value)| (feature.form_field().to_string(), value.to_string()))
            .collect();
        Self { fields }
    }
}
