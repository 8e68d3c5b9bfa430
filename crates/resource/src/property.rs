// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::Display;

use oxrdf::TermRef;

use crate::Error;

/// The kind of RDF node a property value was found as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A globally identified resource (an IRI).
    NamedNode,
    /// An anonymous resource, only identified within its graph.
    BlankNode,
    /// A plain data value.
    Literal,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::NamedNode => "NamedNode",
            Self::BlankNode => "BlankNode",
            Self::Literal => "Literal",
        };
        write!(f, "{name}")
    }
}

/// The object of a single predicate of a [`Resource`](crate::Resource).
///
/// The `kind` is always supplied by whoever produced the value;
/// it is never guessed from the shape of `value`.
/// If the kind is [`NodeKind::NamedNode`], the value is a URI,
/// and may be used as the target of a further request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyValue {
    value: String,
    kind: NodeKind,
}

impl PropertyValue {
    #[must_use]
    pub fn new<V: Into<String>>(kind: NodeKind, value: V) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }

    #[must_use]
    pub fn named_node<V: Into<String>>(iri: V) -> Self {
        Self::new(NodeKind::NamedNode, iri)
    }

    #[must_use]
    pub fn blank_node<V: Into<String>>(id: V) -> Self {
        Self::new(NodeKind::BlankNode, id)
    }

    #[must_use]
    pub fn literal<V: Into<String>>(value: V) -> Self {
        Self::new(NodeKind::Literal, value)
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            NodeKind::NamedNode => write!(f, "<{}>", self.value),
            NodeKind::BlankNode => write!(f, "_:{}", self.value),
            NodeKind::Literal => write!(f, "{:?}", self.value),
        }
    }
}

impl TryFrom<TermRef<'_>> for PropertyValue {
    type Error = Error;

    fn try_from(term: TermRef<'_>) -> Result<Self, Self::Error> {
        match term {
            TermRef::NamedNode(node) => Ok(Self::named_node(node.as_str())),
            TermRef::BlankNode(node) => Ok(Self::blank_node(node.as_str())),
            TermRef::Literal(lit) => Ok(Self::literal(lit.value())),
            TermRef::Triple(triple) => Err(Error::UnsupportedTerm(triple.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{BlankNode, Literal, NamedNode, Term, Triple};

    #[test]
    fn kind_is_kept_as_given() {
        // looks like an IRI, but was delivered as a literal
        let value = PropertyValue::literal("http://example.org/not-a-link");
        assert_eq!(value.kind(), NodeKind::Literal);
        assert_eq!(value.value(), "http://example.org/not-a-link");
    }

    #[test]
    fn converts_plain_terms() {
        let iri = NamedNode::new_unchecked("http://example.org/a");
        let from_iri = PropertyValue::try_from(TermRef::NamedNode(iri.as_ref())).unwrap();
        assert_eq!(from_iri, PropertyValue::named_node("http://example.org/a"));

        let bnode = BlankNode::new_unchecked("b0");
        let from_bnode = PropertyValue::try_from(TermRef::BlankNode(bnode.as_ref())).unwrap();
        assert_eq!(from_bnode, PropertyValue::blank_node("b0"));

        let lit = Literal::new_language_tagged_literal_unchecked("Hallo", "de");
        let from_lit = PropertyValue::try_from(TermRef::Literal(lit.as_ref())).unwrap();
        assert_eq!(from_lit, PropertyValue::literal("Hallo"));
    }

    #[test]
    fn rejects_quoted_triples() {
        let node = NamedNode::new_unchecked("http://example.org/a");
        let triple = Triple::new(node.clone(), node.clone(), node);
        let term = Term::Triple(Box::new(triple));
        assert!(matches!(
            PropertyValue::try_from(term.as_ref()),
            Err(Error::UnsupportedTerm(_))
        ));
    }

    #[test]
    fn emptiness() {
        assert!(PropertyValue::named_node("").is_empty());
        assert!(!PropertyValue::named_node("u:1").is_empty());
    }
}
