//! Property-based tests using proptest
//!
//! These tests verify the custom-field accessors against randomized slot
//! contents: the slot count is fixed, and lookup always agrees with a
//! naive first-match scan.

use proptest::prelude::*;
use tpman::{CustomField, Password, CUSTOM_FIELD_SLOTS};

/// Generate one custom field slot; labels collide often on purpose so the
/// first-match rule actually gets exercised.
fn arb_slot() -> impl Strategy<Value = CustomField> {
    (
        prop_oneof![
            Just(String::new()),
            prop_oneof!["alpha", "beta", "gamma"],
            "[a-z_]{1,12}",
        ],
        "[ -~]{0,20}",
    )
        .prop_map(|(label, data)| CustomField { label, data })
}

fn arb_password() -> impl Strategy<Value = Password> {
    prop::collection::vec(arb_slot(), CUSTOM_FIELD_SLOTS).prop_map(|mut slots| {
        let mut password = Password::default();
        password.custom_field10 = slots.pop().unwrap();
        password.custom_field9 = slots.pop().unwrap();
        password.custom_field8 = slots.pop().unwrap();
        password.custom_field7 = slots.pop().unwrap();
        password.custom_field6 = slots.pop().unwrap();
        password.custom_field5 = slots.pop().unwrap();
        password.custom_field4 = slots.pop().unwrap();
        password.custom_field3 = slots.pop().unwrap();
        password.custom_field2 = slots.pop().unwrap();
        password.custom_field1 = slots.pop().unwrap();
        password
    })
}

proptest! {
    #[test]
    fn custom_fields_is_always_ten_slots(password in arb_password()) {
        prop_assert_eq!(password.custom_fields().len(), CUSTOM_FIELD_SLOTS);
    }

    #[test]
    fn lookup_agrees_with_naive_first_match(
        password in arb_password(),
        label in prop_oneof![Just(String::new()), prop_oneof!["alpha", "beta", "zeta"]],
    ) {
        let expected = password
            .custom_fields()
            .into_iter()
            .find(|field| field.label == label)
            .map(|field| field.data.clone());

        match password.custom_field(&label) {
            Ok(data) => prop_assert_eq!(Some(data.to_string()), expected),
            Err(_) => prop_assert_eq!(None, expected),
        }
    }

    #[test]
    fn decoded_payloads_reencode_losslessly(password in arb_password()) {
        let encoded = serde_json::to_string(&password).unwrap();
        let decoded: Password = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, password);
    }
}
