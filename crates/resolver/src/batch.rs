// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Checks a batch of request definitions before anything gets requested.

use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::{Error, RequestDefinition};

/// Ensures that every identifier of the batch can eventually be resolved
/// as far as the shape of the batch is concerned:
/// identifiers are unique, every accessor is part of the batch
/// and chained definitions do not wait for each other in a cycle.
///
/// # Errors
///
/// Returns `Error::EmptyBatch` if there are no definitions.
/// Returns `Error::DuplicateIdentifier` if an identifier is used twice.
/// Returns `Error::UnknownAccessor` if a chained definition depends on
/// an identifier that is not in the batch.
/// Returns `Error::CyclicChain` if chained definitions depend on each other.
pub fn validate<C>(definitions: &[RequestDefinition<C>]) -> Result<(), Error> {
    if definitions.is_empty() {
        return Err(Error::EmptyBatch);
    }

    let mut dependencies: DiGraph<&str, ()> = DiGraph::new();
    let mut nodes: HashMap<&str, NodeIndex> = HashMap::with_capacity(definitions.len());
    for definition in definitions {
        let identifier = definition.identifier.as_str();
        if nodes.contains_key(identifier) {
            return Err(Error::DuplicateIdentifier {
                identifier: identifier.to_owned(),
            });
        }
        nodes.insert(identifier, dependencies.add_node(identifier));
    }

    for definition in definitions {
        if let Some(accessor) = definition.accessor() {
            let Some(accessor_idx) = nodes.get(accessor) else {
                return Err(Error::UnknownAccessor {
                    identifier: definition.identifier.clone(),
                    accessor: accessor.to_owned(),
                });
            };
            if let Some(dependant_idx) = nodes.get(definition.identifier.as_str()) {
                dependencies.add_edge(*accessor_idx, *dependant_idx, ());
            }
        }
    }

    let mut cyclic: Vec<String> = tarjan_scc(&dependencies)
        .into_iter()
        .filter(|component| {
            component.len() > 1
                || component
                    .first()
                    .is_some_and(|node| dependencies.contains_edge(*node, *node))
        })
        .flatten()
        .filter_map(|node| dependencies.node_weight(node))
        .map(|identifier| (*identifier).to_owned())
        .collect();
    if !cyclic.is_empty() {
        cyclic.sort();
        return Err(Error::CyclicChain {
            identifiers: cyclic,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{requestor_fn, RequestError, Requestor};

    fn requestor() -> Arc<dyn Requestor<()>> {
        requestor_fn(|uri: String, _context: &()| async move {
            Err::<rdfresolve_resource::Resource, _>(RequestError::NotFound(uri))
        })
    }

    fn direct(identifier: &str) -> RequestDefinition<()> {
        RequestDefinition::direct(identifier, format!("u:{identifier}"), requestor())
    }

    fn chained(identifier: &str, accessor: &str) -> RequestDefinition<()> {
        RequestDefinition::chained(identifier, accessor, "next", requestor())
    }

    #[test]
    fn accepts_a_valid_batch() {
        let batch = [direct("a"), chained("b", "a"), chained("c", "b"), chained("d", "a")];
        assert!(validate(&batch).is_ok());
    }

    #[test]
    fn rejects_an_empty_batch() {
        assert!(matches!(
            validate::<()>(&[]),
            Err(Error::EmptyBatch)
        ));
    }

    #[test]
    fn rejects_duplicate_identifiers() {
        let batch = [direct("a"), direct("b"), chained("a", "b")];
        match validate(&batch) {
            Err(Error::DuplicateIdentifier { identifier }) => assert_eq!(identifier, "a"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_accessors() {
        let batch = [direct("a"), chained("b", "x")];
        match validate(&batch) {
            Err(Error::UnknownAccessor {
                identifier,
                accessor,
            }) => {
                assert_eq!(identifier, "b");
                assert_eq!(accessor, "x");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn rejects_cycles() {
        let batch = [direct("a"), chained("b", "c"), chained("c", "b"), chained("d", "b")];
        match validate(&batch) {
            Err(Error::CyclicChain { identifiers }) => assert_eq!(identifiers, ["b", "c"]),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn rejects_self_dependencies() {
        let batch = [direct("a"), chained("b", "b")];
        match validate(&batch) {
            Err(Error::CyclicChain { identifiers }) => assert_eq!(identifiers, ["b"]),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
