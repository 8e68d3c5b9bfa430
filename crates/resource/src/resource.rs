// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashMap;
use std::fmt::Display;

use oxrdf::{Graph, NamedNodeRef};
use rdfresolve_vocab::rdf;

use crate::PropertyValue;

/// An abstract representation of a resource,
/// made up of the resources URI, its type and its direct properties.
///
/// A resource never changes after construction.
/// In particular, its type is extracted from the properties once,
/// when the resource is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resource {
    uri: String,
    rdf_type: Option<String>,
    properties: HashMap<String, PropertyValue>,
}

impl Resource {
    /// Creates a resource,
    /// taking its type from the `rdf:type` property, if present.
    #[must_use]
    pub fn new<U, I, K>(uri: U, properties: I) -> Self
    where
        U: Into<String>,
        I: IntoIterator<Item = (K, PropertyValue)>,
        K: Into<String>,
    {
        Self::with_type_predicate(uri, properties, rdf::TYPE.as_str())
    }

    /// Creates a resource,
    /// taking its type from the value of `type_predicate`, if present.
    #[must_use]
    pub fn with_type_predicate<U, I, K>(uri: U, properties: I, type_predicate: &str) -> Self
    where
        U: Into<String>,
        I: IntoIterator<Item = (K, PropertyValue)>,
        K: Into<String>,
    {
        let properties: HashMap<String, PropertyValue> = properties
            .into_iter()
            .map(|(predicate, value)| (predicate.into(), value))
            .collect();
        let rdf_type = properties
            .get(type_predicate)
            .map(|type_value| type_value.value().to_owned());
        Self {
            uri: uri.into(),
            rdf_type,
            properties,
        }
    }

    /// Extracts the resource with the IRI `subject` from an RDF graph.
    ///
    /// Each predicate maps to a single value;
    /// if the graph holds more then one object for a predicate,
    /// the first one (in graph order) is used.
    /// Quoted triples (RDF-star) are ignored.
    ///
    /// Returns `None` if `subject` is not the subject of any triple in `graph`.
    #[must_use]
    pub fn from_graph(graph: &Graph, subject: NamedNodeRef<'_>) -> Option<Self> {
        let mut properties = HashMap::new();
        let mut any_triple = false;
        for triple in graph.triples_for_subject(subject) {
            any_triple = true;
            let predicate = triple.predicate.as_str();
            if properties.contains_key(predicate) {
                tracing::trace!(
                    "Ignoring additional value for {predicate} on {subject}: {}",
                    triple.object
                );
                continue;
            }
            match PropertyValue::try_from(triple.object) {
                Ok(value) => {
                    properties.insert(predicate.to_owned(), value);
                }
                Err(err) => {
                    tracing::warn!("{err} -> ignored!");
                }
            }
        }

        if !any_triple {
            return None;
        }
        Some(Self::new(subject.as_str(), properties))
    }

    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The value of the type predicate, if the resource has one.
    #[must_use]
    pub fn rdf_type(&self) -> Option<&str> {
        self.rdf_type.as_deref()
    }

    #[must_use]
    pub const fn properties(&self) -> &HashMap<String, PropertyValue> {
        &self.properties
    }

    #[must_use]
    pub fn property(&self, predicate: &str) -> Option<&PropertyValue> {
        self.properties.get(predicate)
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.uri)?;
        if let Some(rdf_type) = &self.rdf_type {
            write!(f, " a <{rdf_type}>")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{Literal, NamedNode, Triple};

    const EX: &str = "http://example.org/";

    fn iri(local: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("{EX}{local}"))
    }

    #[test]
    fn type_is_unwrapped_from_the_type_property() {
        let res = Resource::new(
            "u:1",
            [
                (rdf::TYPE.as_str(), PropertyValue::named_node("T")),
                ("next", PropertyValue::named_node("u:2")),
            ],
        );
        assert_eq!(res.uri(), "u:1");
        assert_eq!(res.rdf_type(), Some("T"));
        assert_eq!(res.property("next").map(PropertyValue::value), Some("u:2"));
        assert_eq!(res.properties().len(), 2);
    }

    #[test]
    fn untyped_resource() {
        let res = Resource::new("u:1", Vec::<(String, PropertyValue)>::new());
        assert_eq!(res.rdf_type(), None);
        assert!(res.properties().is_empty());
    }

    #[test]
    fn custom_type_predicate() {
        let res = Resource::with_type_predicate(
            "u:1",
            [("rdf:type", PropertyValue::named_node("dummy-type"))],
            "rdf:type",
        );
        assert_eq!(res.rdf_type(), Some("dummy-type"));
    }

    #[test]
    fn extracts_from_graph() {
        let mut graph = Graph::new();
        let subject = iri("doc");
        graph.insert(&Triple::new(subject.clone(), rdf::TYPE, iri("Document")));
        graph.insert(&Triple::new(
            subject.clone(),
            iri("title"),
            Literal::new_simple_literal("A title"),
        ));
        graph.insert(&Triple::new(iri("other"), iri("title"), iri("x")));

        let res = Resource::from_graph(&graph, subject.as_ref()).unwrap();
        assert_eq!(res.uri(), subject.as_str());
        assert_eq!(res.rdf_type(), Some(iri("Document").as_str()));
        assert_eq!(
            res.property(iri("title").as_str()),
            Some(&PropertyValue::literal("A title"))
        );
        assert_eq!(res.properties().len(), 2);
    }

    #[test]
    fn keeps_a_single_value_per_predicate() {
        let mut graph = Graph::new();
        let subject = iri("doc");
        graph.insert(&Triple::new(subject.clone(), iri("part"), iri("a")));
        graph.insert(&Triple::new(subject.clone(), iri("part"), iri("b")));

        let res = Resource::from_graph(&graph, subject.as_ref()).unwrap();
        assert_eq!(res.properties().len(), 1);
        assert!(res.property(iri("part").as_str()).is_some());
    }

    #[test]
    fn subject_with_only_quoted_triples_is_found() {
        let mut graph = Graph::new();
        let subject = iri("claim");
        let quoted = Triple::new(iri("a"), iri("says"), iri("b"));
        graph.insert(&Triple::new(subject.clone(), iri("states"), quoted));

        let res = Resource::from_graph(&graph, subject.as_ref()).unwrap();
        assert_eq!(res.uri(), subject.as_str());
        assert!(res.properties().is_empty());
    }

    #[test]
    fn unknown_subject() {
        let graph = Graph::new();
        assert!(Resource::from_graph(&graph, iri("nothing").as_ref()).is_none());
    }
}
