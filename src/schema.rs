use arrow_array::RecordBatch;
use arrow_schema::Schema;

/// All column positions in `schema` whose field is named `name`.
///
/// Field names are not required to be unique, so this can return more than
/// one index.
pub fn field_indices(schema: &Schema, name: &str) -> Vec<usize> {
    schema
        .fields()
        .iter()
        .enumerate()
        .filter(|(_, field)| field.name() == name)
        .map(|(idx, _)| idx)
        .collect()
}

/// Compare the schemas of two batches.
///
/// With an empty `fields` slice this is full ordered equality: same field
/// count and same name, type, nullability and metadata at every position.
/// With `fields` given, every named field must exist in both schemas and
/// match in both directions; duplicate field names are compared as a full
/// cross product.
pub fn batch_schemas_equal(left: &RecordBatch, right: &RecordBatch, fields: &[&str]) -> bool {
    let left_schema = left.schema();
    let right_schema = right.schema();
    if fields.is_empty() {
        left_schema.as_ref() == right_schema.as_ref()
    } else {
        schema_subset_equal(&left_schema, &right_schema, fields)
            && schema_subset_equal(&right_schema, &left_schema, fields)
    }
}

/// One direction of the named-subset comparison: every `fields` entry must
/// name at least one field in both schemas, and every field with that name
/// in `left` must equal every field with that name in `right`.
pub fn schema_subset_equal(left: &Schema, right: &Schema, fields: &[&str]) -> bool {
    for name in fields {
        let left_indices = field_indices(left, name);
        let right_indices = field_indices(right, name);
        if left_indices.is_empty() || right_indices.is_empty() {
            return false;
        }
        for &left_idx in &left_indices {
            for &right_idx in &right_indices {
                if left.field(left_idx) != right.field(right_idx) {
                    return false;
                }
            }
        }
    }
    true
}

/// Content equality over the named columns of `left`.
///
/// Columns of `left` whose name is not in `fields` are skipped; the rest
/// are compared positionally against `right`.
pub fn batches_equal(left: &RecordBatch, right: &RecordBatch, fields: &[&str]) -> bool {
    let schema = left.schema();
    for (idx, field) in schema.fields().iter().enumerate() {
        if !fields.iter().any(|name| name == field.name()) {
            continue;
        }
        if idx >= right.num_columns() {
            return false;
        }
        if left.column(idx).to_data() != right.column(idx).to_data() {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow_schema::{DataType, Field};

    #[test]
    fn duplicate_names_resolve_to_all_positions() {
        let schema = Schema::new(vec![
            Field::new("a", DataType::Int32, false),
            Field::new("b", DataType::Utf8, true),
            Field::new("a", DataType::Int32, false),
        ]);
        assert_eq!(field_indices(&schema, "a"), vec![0, 2]);
        assert_eq!(field_indices(&schema, "b"), vec![1]);
        assert!(field_indices(&schema, "missing").is_empty());
    }

    #[test]
    fn subset_equality_compares_duplicates_cross_product() {
        let left = Schema::new(vec![
            Field::new("a", DataType::Int32, false),
            Field::new("a", DataType::Int32, false),
        ]);
        let right = Schema::new(vec![Field::new("a", DataType::Int32, false)]);
        assert!(schema_subset_equal(&left, &right, &["a"]));

        let mismatched = Schema::new(vec![
            Field::new("a", DataType::Int32, false),
            Field::new("a", DataType::Int64, false),
        ]);
        assert!(!schema_subset_equal(&mismatched, &right, &["a"]));
    }
}
