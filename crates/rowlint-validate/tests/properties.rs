//! Property tests: report invariants and determinism.

use proptest::prelude::*;

use rowlint_model::SourceMeta;
use rowlint_validate::validate_bytes;

fn uniform_csv() -> impl Strategy<Value = Vec<Vec<String>>> {
    (1usize..6).prop_flat_map(|cols| {
        proptest::collection::vec(
            proptest::collection::vec("[a-z]{1,8}", cols..=cols),
            2..10,
        )
    })
}

proptest! {
    #[test]
    fn count_invariants_hold_for_arbitrary_bytes(
        bytes in proptest::collection::vec(any::<u8>(), 0..512)
    ) {
        let report = validate_bytes(&bytes, &SourceMeta::new()).expect("in-memory read");
        prop_assert_eq!(report.error_count, report.errors.len());
        prop_assert_eq!(report.valid, report.error_count == 0);
        prop_assert!(report.warnings.is_empty());
        prop_assert!(report.informations.is_empty());
    }

    #[test]
    fn validation_is_deterministic(
        bytes in proptest::collection::vec(any::<u8>(), 0..512)
    ) {
        let meta = SourceMeta::new();
        let first = validate_bytes(&bytes, &meta).expect("in-memory read");
        let second = validate_bytes(&bytes, &meta).expect("in-memory read");
        prop_assert_eq!(
            serde_json::to_string(&first).expect("serialize report"),
            serde_json::to_string(&second).expect("serialize report")
        );
    }

    #[test]
    fn uniform_unquoted_csv_is_valid(rows in uniform_csv()) {
        let mut text = rows
            .iter()
            .map(|row| row.join(","))
            .collect::<Vec<_>>()
            .join("\n");
        text.push('\n');

        let report = validate_bytes(text.as_bytes(), &SourceMeta::new())
            .expect("in-memory read");
        prop_assert!(report.valid, "unexpected errors: {:?}", report.errors);
        prop_assert_eq!(report.row_count, rows.len() as u64 - 1);
        prop_assert_eq!(&report.headers, &rows[0]);
    }
}
