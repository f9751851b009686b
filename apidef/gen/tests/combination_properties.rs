//! Property tests for combination enumeration.

use apidef_define::Endpoint;
use apidef_gen::combinations::{case_count, combinations};
use proptest::prelude::*;

/// Per field: a list of (value, passing) pairs, 1..=4 long; 1..=5 fields.
fn column_layouts() -> impl Strategy<Value = Vec<Vec<bool>>> {
    prop::collection::vec(prop::collection::vec(any::<bool>(), 1..=4), 1..=5)
}

fn build(columns: &[Vec<bool>]) -> Endpoint {
    let mut endpoint = Endpoint::new("/prop", "POST").unwrap();
    for (i, column) in columns.iter().enumerate() {
        let field = endpoint.add_field(format!("f{i}"), "string").unwrap();
        for (j, passing) in column.iter().enumerate() {
            let value = format!("v{i}_{j}");
            if *passing {
                field.pass_with([value]).unwrap();
            } else {
                field.fail_with([value]).unwrap();
            }
        }
    }
    endpoint
}

proptest! {
    #[test]
    fn case_count_is_product_of_value_counts(columns in column_layouts()) {
        let endpoint = build(&columns);
        let expected: usize = columns.iter().map(Vec::len).product();

        prop_assert_eq!(case_count(&endpoint).unwrap(), expected);
        prop_assert_eq!(combinations(&endpoint).unwrap().count(), expected);
    }

    #[test]
    fn case_passes_iff_every_value_passes(columns in column_layouts()) {
        let endpoint = build(&columns);

        for case in combinations(&endpoint).unwrap() {
            let all_pass = case.assignments().iter().enumerate().all(|(i, a)| {
                let j: usize = a.value.rsplit('_').next().unwrap().parse().unwrap();
                columns[i][j]
            });
            prop_assert_eq!(case.passing(), all_pass);
        }
    }

    #[test]
    fn cases_are_distinct_and_lexicographic(columns in column_layouts()) {
        let endpoint = build(&columns);
        let keys: Vec<Vec<usize>> = combinations(&endpoint)
            .unwrap()
            .map(|case| {
                case.assignments()
                    .iter()
                    .map(|a| a.value.rsplit('_').next().unwrap().parse().unwrap())
                    .collect()
            })
            .collect();

        let mut sorted = keys.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(keys, sorted);
    }
}
