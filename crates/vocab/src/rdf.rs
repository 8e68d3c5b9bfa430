// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! [RDF 1.1 syntax](
//! http://www.w3.org/TR/rdf-syntax-grammar/)
//! vocabulary.

use crate::named_node;

pub const NS_BASE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const NS_PREFERRED_PREFIX: &str = "rdf";

/// The common start of all container membership properties,
/// which are `rdf:_1`, `rdf:_2`, ...
pub const MEMBERSHIP_PREFIX: &str = const_format::concatcp!(NS_BASE, "_");

named_node!(
    TYPE,
    NS_BASE,
    "type",
    "The subject is an instance of a class."
);
named_node!(
    SEQ,
    NS_BASE,
    "Seq",
    "The class of ordered containers."
);
named_node!(
    BAG,
    NS_BASE,
    "Bag",
    "The class of unordered containers."
);
named_node!(
    ALT,
    NS_BASE,
    "Alt",
    "The class of containers of alternatives."
);
named_node!(VALUE, NS_BASE, "value", "Idiomatic property used for structured values.");

/// Returns the IRI of the container membership property
/// with the given (1-based) index, e.g. `rdf:_3`.
#[must_use]
pub fn membership(index: usize) -> String {
    format!("{MEMBERSHIP_PREFIX}{index}")
}

/// Extracts the (1-based) index out of a container membership property IRI.
/// Returns `None` for any other IRI.
#[must_use]
pub fn membership_index(predicate: &str) -> Option<usize> {
    predicate
        .strip_prefix(MEMBERSHIP_PREFIX)
        .and_then(|index| index.parse().ok())
        .filter(|index| *index > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_round_trips_through_its_index() {
        assert_eq!(membership_index(&membership(12)), Some(12));
    }

    #[test]
    fn membership_index_rejects_other_predicates() {
        assert_eq!(membership_index(TYPE.as_str()), None);
        assert_eq!(membership_index(MEMBERSHIP_PREFIX), None);
        assert_eq!(membership_index(&format!("{MEMBERSHIP_PREFIX}0")), None);
        assert_eq!(membership_index(&format!("{MEMBERSHIP_PREFIX}x")), None);
    }
}
