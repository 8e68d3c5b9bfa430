// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Navigation within RDF containers (`rdf:Seq`, `rdf:Bag`, `rdf:Alt`),
//! represented as a resource with the container membership properties
//! `rdf:_1`, `rdf:_2`, ...

use rdfresolve_vocab::rdf;

use crate::{PropertyValue, Resource};

/// Returns the container membership predicates present on `resource`,
/// ordered by their index (`rdf:_2` comes before `rdf:_10`).
#[must_use]
pub fn ordered_seq_predicates(resource: &Resource) -> Vec<&str> {
    let mut indexed: Vec<(usize, &str)> = resource
        .properties()
        .keys()
        .filter_map(|predicate| {
            rdf::membership_index(predicate).map(|index| (index, predicate.as_str()))
        })
        .collect();
    indexed.sort_unstable();
    indexed.into_iter().map(|(_, predicate)| predicate).collect()
}

/// Looks for the membership predicate whose object is `uri`.
#[must_use]
pub fn membership_predicate<'a>(resource: &'a Resource, uri: &str) -> Option<&'a str> {
    resource
        .properties()
        .iter()
        .find(|(predicate, value)| {
            rdf::membership_index(predicate).is_some() && value.value() == uri
        })
        .map(|(predicate, _)| predicate.as_str())
}

fn neighbour_in_sequence<'a>(
    resource: &'a Resource,
    uri: &str,
    step: fn(usize) -> Option<usize>,
) -> Option<&'a PropertyValue> {
    let member = membership_predicate(resource, uri)?;
    let ordered = ordered_seq_predicates(resource);
    let position = ordered.iter().position(|predicate| *predicate == member)?;
    let neighbour = ordered.get(step(position)?)?;
    resource.property(neighbour)
}

/// Returns the member following `uri` in the sequence,
/// or `None` if `uri` is the last member, or not a member at all.
#[must_use]
pub fn next_in_sequence<'a>(resource: &'a Resource, uri: &str) -> Option<&'a PropertyValue> {
    neighbour_in_sequence(resource, uri, |position| position.checked_add(1))
}

/// Returns the member preceding `uri` in the sequence,
/// or `None` if `uri` is the first member, or not a member at all.
#[must_use]
pub fn previous_in_sequence<'a>(resource: &'a Resource, uri: &str) -> Option<&'a PropertyValue> {
    neighbour_in_sequence(resource, uri, |position| position.checked_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(members: &[(usize, &str)]) -> Resource {
        let mut properties: Vec<(String, PropertyValue)> = members
            .iter()
            .map(|(index, uri)| (rdf::membership(*index), PropertyValue::named_node(*uri)))
            .collect();
        properties.push((
            rdf::TYPE.as_str().to_owned(),
            PropertyValue::named_node(rdf::SEQ.as_str()),
        ));
        Resource::new("u:seq", properties)
    }

    #[test]
    fn orders_numerically() {
        let res = seq(&[(10, "u:j"), (2, "u:b"), (1, "u:a")]);
        assert_eq!(
            ordered_seq_predicates(&res),
            vec![rdf::membership(1), rdf::membership(2), rdf::membership(10)]
        );
    }

    #[test]
    fn finds_the_membership_predicate() {
        let res = seq(&[(1, "u:a"), (2, "u:b")]);
        assert_eq!(
            membership_predicate(&res, "u:b"),
            Some(rdf::membership(2).as_str())
        );
        assert_eq!(membership_predicate(&res, rdf::SEQ.as_str()), None);
        assert_eq!(membership_predicate(&res, "u:z"), None);
    }

    #[test]
    fn steps_through_the_sequence() {
        let res = seq(&[(1, "u:a"), (2, "u:b"), (3, "u:c")]);
        assert_eq!(next_in_sequence(&res, "u:a").map(PropertyValue::value), Some("u:b"));
        assert_eq!(next_in_sequence(&res, "u:b").map(PropertyValue::value), Some("u:c"));
        assert_eq!(next_in_sequence(&res, "u:c"), None);
        assert_eq!(previous_in_sequence(&res, "u:c").map(PropertyValue::value), Some("u:b"));
        assert_eq!(previous_in_sequence(&res, "u:a"), None);
    }

    #[test]
    fn gaps_in_the_indices_are_skipped() {
        let res = seq(&[(1, "u:a"), (5, "u:e")]);
        assert_eq!(next_in_sequence(&res, "u:a").map(PropertyValue::value), Some("u:e"));
        assert_eq!(previous_in_sequence(&res, "u:e").map(PropertyValue::value), Some("u:a"));
    }

    #[test]
    fn non_members_have_no_neighbours() {
        let res = seq(&[(1, "u:a")]);
        assert_eq!(next_in_sequence(&res, "u:x"), None);
        assert_eq!(previous_in_sequence(&res, "u:x"), None);
    }
}
