// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::{Debug, Display};
use std::sync::Arc;

use crate::Requestor;

/// Where to find the URI of the resource to request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// The URI is known up front.
    Direct(String),
    /// The URI is the value of `predicate`
    /// on the resource resolved under the identifier `accessor`
    /// within the same batch.
    Chained { accessor: String, predicate: String },
}

impl From<&str> for Target {
    fn from(uri: &str) -> Self {
        Self::Direct(uri.to_owned())
    }
}

impl From<String> for Target {
    fn from(uri: String) -> Self {
        Self::Direct(uri)
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct(uri) => write!(f, "<{uri}>"),
            Self::Chained {
                accessor,
                predicate,
            } => write!(f, "{accessor}/<{predicate}>"),
        }
    }
}

/// A single resource to request as part of a batch.
pub struct RequestDefinition<C> {
    /// The key under which the resolved resource ends up in the results.
    /// Unique within a batch.
    pub identifier: String,
    pub target: Target,
    /// Invoked once the URI of the target is known.
    pub requestor: Arc<dyn Requestor<C>>,
}

impl<C> RequestDefinition<C> {
    pub fn new<I, T>(identifier: I, target: T, requestor: Arc<dyn Requestor<C>>) -> Self
    where
        I: Into<String>,
        T: Into<Target>,
    {
        Self {
            identifier: identifier.into(),
            target: target.into(),
            requestor,
        }
    }

    pub fn direct<I, U>(identifier: I, uri: U, requestor: Arc<dyn Requestor<C>>) -> Self
    where
        I: Into<String>,
        U: Into<String>,
    {
        Self::new(identifier, Target::Direct(uri.into()), requestor)
    }

    pub fn chained<I, A, P>(
        identifier: I,
        accessor: A,
        predicate: P,
        requestor: Arc<dyn Requestor<C>>,
    ) -> Self
    where
        I: Into<String>,
        A: Into<String>,
        P: Into<String>,
    {
        Self::new(
            identifier,
            Target::Chained {
                accessor: accessor.into(),
                predicate: predicate.into(),
            },
            requestor,
        )
    }

    /// The identifier this definition waits for, if any.
    #[must_use]
    pub fn accessor(&self) -> Option<&str> {
        match &self.target {
            Target::Direct(_) => None,
            Target::Chained { accessor, .. } => Some(accessor),
        }
    }
}

impl<C> Clone for RequestDefinition<C> {
    fn clone(&self) -> Self {
        Self {
            identifier: self.identifier.clone(),
            target: self.target.clone(),
            requestor: Arc::clone(&self.requestor),
        }
    }
}

impl<C> Debug for RequestDefinition<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestDefinition")
            .field("identifier", &self.identifier)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
