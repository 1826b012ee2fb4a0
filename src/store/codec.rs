//! JSON wire format for the persisted expense collection.

use crate::{errors::Result, expense::ExpenseRecord};

/// Encodes the collection as a JSON array of `{id, name, type, amount}` objects.
pub fn encode(records: &[ExpenseRecord]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(records)?)
}

/// Decodes a blob produced by [`encode`].
///
/// The whole blob is rejected when the top level is not an array or when any
/// element is missing a field or carries a field of the wrong kind.
pub fn decode(bytes: &[u8]) -> Result<Vec<ExpenseRecord>> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExpenseError;
    use crate::expense::{Amounted, Identifiable, NamedEntity};

    #[test]
    fn encode_then_decode_preserves_order_and_ids() {
        let records = vec![
            ExpenseRecord::new("Rent", "Personal", 900),
            ExpenseRecord::new("", "Business", 0),
            ExpenseRecord::new("Flight", "Business", 450),
        ];
        let decoded = decode(&encode(&records).expect("encode")).expect("decode");
        assert_eq!(decoded, records);
    }

    #[test]
    fn decodes_uppercase_ids_and_ignores_unknown_fields() {
        let blob = br#"[{"id":"E621E1F8-C36C-495A-93FC-0C247A3E6E5F","name":"Taxi","type":"Business","amount":23,"note":"airport"}]"#;
        let decoded = decode(blob).expect("decode");
        assert_eq!(decoded.len(), 1);
        assert_eq!(
            decoded[0].id().to_string(),
            "e621e1f8-c36c-495a-93fc-0c247a3e6e5f"
        );
        assert_eq!(decoded[0].name(), "Taxi");
        assert_eq!(decoded[0].category(), "Business");
        assert_eq!(decoded[0].amount(), 23);
    }

    #[test]
    fn rejects_non_array_top_level() {
        assert!(matches!(decode(b"{}"), Err(ExpenseError::Decode(_))));
        assert!(matches!(decode(b""), Err(ExpenseError::Decode(_))));
    }

    #[test]
    fn rejects_missing_or_mistyped_fields() {
        let missing_amount = br#"[{"id":"e621e1f8-c36c-495a-93fc-0c247a3e6e5f","name":"Taxi","type":"Business"}]"#;
        assert!(decode(missing_amount).is_err());

        let string_amount = br#"[{"id":"e621e1f8-c36c-495a-93fc-0c247a3e6e5f","name":"Taxi","type":"Business","amount":"23"}]"#;
        assert!(decode(string_amount).is_err());

        let negative_amount = br#"[{"id":"e621e1f8-c36c-495a-93fc-0c247a3e6e5f","name":"Taxi","type":"Business","amount":-5}]"#;
        assert!(decode(negative_amount).is_err());

        let bad_id = br#"[{"id":"not-a-uuid","name":"Taxi","type":"Business","amount":5}]"#;
        assert!(decode(bad_id).is_err());
    }
}
