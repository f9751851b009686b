//! Exhaustive test-case enumeration.
//!
//! Every field contributes its test values, in registration order, as one
//! column. A case picks one value from each column; the full set of cases is
//! the cartesian product of the columns, enumerated lexicographically with
//! the last field varying fastest.
//!
//! A case is expected to pass only when every value it picked was registered
//! as passing.
//!
//! ## Examples
//!
//! ```
//! use apidef_define::Endpoint;
//! use apidef_gen::combinations::combinations;
//!
//! let mut endpoint = Endpoint::new("/signup", "POST").unwrap();
//! endpoint.add_field("name", "string").unwrap()
//!     .pass_with(["James123"]).unwrap()
//!     .fail_with(["user123"]).unwrap();
//! endpoint.add_field("email", "string").unwrap()
//!     .pass_with(["user@email.com"]).unwrap()
//!     .fail_with(["notanemail"]).unwrap();
//!
//! let outcomes: Vec<bool> = combinations(&endpoint).unwrap().map(|c| c.passing()).collect();
//! assert_eq!(outcomes, [true, false, false, false]);
//! ```

use std::iter::FusedIterator;

use apidef_define::{Endpoint, TestValue};

use crate::errors::GeneratorError;

/// One field's value within a [`Case`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'a> {
    pub field: &'a str,
    pub value: &'a str,
}

/// A single generated test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case<'a> {
    assignments: Vec<Assignment<'a>>,
    passing: bool,
}

impl<'a> Case<'a> {
    /// Field assignments in field-declaration order.
    pub fn assignments(&self) -> &[Assignment<'a>] {
        &self.assignments
    }

    /// Whether the request is expected to pass validation.
    pub fn passing(&self) -> bool {
        self.passing
    }
}

/// Iterator over every [`Case`] of an endpoint.
///
/// Walks an odometer of per-field indices, so memory use is one index per
/// field regardless of how many cases are produced.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    names: Vec<&'a str>,
    columns: Vec<&'a [TestValue]>,
    indices: Vec<usize>,
    remaining: usize,
}

/// Checks that `endpoint` can produce cases and returns how many it will.
///
/// ## Errors
///
/// - [`GeneratorError::NoFields`] if the endpoint has no fields
/// - [`GeneratorError::NoTestValues`] for the first field with no test values
/// - [`GeneratorError::CaseCountOverflow`] if the product overflows `usize`
pub fn case_count(endpoint: &Endpoint) -> Result<usize, GeneratorError> {
    if endpoint.fields().is_empty() {
        return Err(GeneratorError::NoFields {
            path: endpoint.path().to_string(),
            method: endpoint.method().to_string(),
        });
    }

    endpoint.fields().iter().try_fold(1usize, |count, field| {
        let len = field.test_values().len();
        if len == 0 {
            return Err(GeneratorError::NoTestValues {
                field: field.name().to_string(),
            });
        }
        count
            .checked_mul(len)
            .ok_or_else(|| GeneratorError::CaseCountOverflow {
                path: endpoint.path().to_string(),
                method: endpoint.method().to_string(),
            })
    })
}

/// Returns an iterator over every test case of `endpoint`.
///
/// ## Errors
///
/// Same as [`case_count`]; nothing is enumerated when validation fails.
pub fn combinations(endpoint: &Endpoint) -> Result<Combinations<'_>, GeneratorError> {
    let remaining = case_count(endpoint)?;
    let fields = endpoint.fields();

    Ok(Combinations {
        names: fields.iter().map(|f| f.name()).collect(),
        columns: fields.iter().map(|f| f.test_values()).collect(),
        indices: vec![0; fields.len()],
        remaining,
    })
}

impl<'a> Combinations<'a> {
    fn current(&self) -> Case<'a> {
        let mut passing = true;
        let assignments = self
            .names
            .iter()
            .copied()
            .zip(self.columns.iter().copied())
            .zip(&self.indices)
            .map(|((field, column), &idx)| {
                let test_value = &column[idx];
                passing &= test_value.is_passing();
                Assignment {
                    field,
                    value: test_value.value(),
                }
            })
            .collect();

        Case {
            assignments,
            passing,
        }
    }

    fn advance(&mut self) {
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.columns[pos].len() {
                return;
            }
            self.indices[pos] = 0;
        }
    }
}

impl<'a> Iterator for Combinations<'a> {
    type Item = Case<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let case = self.current();
        self.remaining -= 1;
        self.advance();
        Some(case)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Combinations<'_> {}

impl FusedIterator for Combinations<'_> {}
