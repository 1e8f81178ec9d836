//! Feature Encoder - record to schema-aligned vector
//!
//! Steps 1-3 of feature preparation: drop-first one-hot encoding of the
//! categorical fields, zero-fill of schema columns absent after encoding,
//! and selection/reordering to exactly the trained feature schema.
//!
//! Zero-filling is the explicit, documented mechanism that absorbs
//! reference categories and rare dummy columns dropped during training.
//! Encoded columns the schema does not know are discarded with a warning,
//! since that is the visible symptom of encode/train schema skew.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::record::ApplicantRecord;

/// Encode a record against a feature schema.
///
/// Output is always exactly `features.len()` wide, in schema order,
/// regardless of which categorical combination the record carries.
/// Infallible: unknown encodings are absorbed, never rejected here.
pub fn encode(record: &ApplicantRecord, features: &[String]) -> Vec<f64> {
    let mut columns: HashMap<String, f64> = HashMap::new();

    for (name, value) in record.numeric_fields() {
        columns.insert(name.to_string(), value as f64);
    }
    for dummy in record.dummy_columns() {
        columns.insert(dummy, 1.0);
    }

    let mut zero_filled = 0usize;
    let vector: Vec<f64> = features
        .iter()
        .map(|col| match columns.remove(col) {
            Some(v) => v,
            None => {
                zero_filled += 1;
                0.0
            }
        })
        .collect();

    if !columns.is_empty() {
        let mut discarded: Vec<&String> = columns.keys().collect();
        discarded.sort();
        warn!(
            "⚠️ Encoded columns not in schema, discarded: {:?}",
            discarded
        );
    }
    debug!("Zero-filled {} of {} schema columns", zero_filled, features.len());

    vector
}
