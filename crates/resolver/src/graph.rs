// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use async_trait::async_trait;
use oxrdf::{Graph, NamedNodeRef};
use rdfresolve_resource::Resource;

use crate::{RequestError, Requestor};

/// Answers requests from an in-memory RDF graph.
/// The resource at a URI consists of all triples with that URI as subject.
#[derive(Clone, Debug, Default)]
pub struct GraphRequestor {
    graph: Arc<Graph>,
}

impl GraphRequestor {
    #[must_use]
    pub const fn new(graph: Arc<Graph>) -> Self {
        Self { graph }
    }

    /// Looks up the resource at `uri` right away.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::Failed` if `uri` is not a valid IRI.
    /// Returns `RequestError::NotFound` if the graph has no triple about `uri`.
    pub fn lookup(&self, uri: &str) -> Result<Resource, RequestError> {
        let subject = NamedNodeRef::new(uri)
            .map_err(|err| RequestError::Failed(format!("<{uri}> is not a valid IRI: {err}")))?;
        Resource::from_graph(&self.graph, subject)
            .ok_or_else(|| RequestError::NotFound(uri.to_owned()))
    }
}

#[async_trait]
impl<C: Sync> Requestor<C> for GraphRequestor {
    async fn request(&self, uri: &str, _context: &C) -> Result<Resource, RequestError> {
        self.lookup(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{NamedNode, Triple};
    use rdfresolve_vocab::dcterms;

    #[tokio::test]
    async fn answers_from_the_graph() {
        let doc = NamedNode::new_unchecked("http://example.org/doc");
        let part = NamedNode::new_unchecked("http://example.org/part");
        let mut graph = Graph::new();
        graph.insert(&Triple::new(doc.clone(), dcterms::HAS_PART, part.clone()));
        let requestor = GraphRequestor::new(Arc::new(graph));

        let res = requestor.request(doc.as_str(), &()).await.unwrap();
        assert_eq!(
            res.property(dcterms::HAS_PART.as_str()).map(|value| value.value()),
            Some(part.as_str())
        );

        assert!(matches!(
            requestor.request(part.as_str(), &()).await,
            Err(RequestError::NotFound(_))
        ));
        assert!(matches!(
            requestor.request("not an iri", &()).await,
            Err(RequestError::Failed(_))
        ));
    }
}
