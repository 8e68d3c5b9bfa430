// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::{HashMap, VecDeque};
use std::mem;
use std::sync::Arc;
use std::time::Duration;

use rdfresolve_resource::Resource;
use tokio::task::{self, JoinError, JoinSet};
use tokio::time::Instant;
use tracing::Instrument;

use crate::{batch, Config, Error, RequestDefinition, RequestError, ResourceCache, Results, Target};

/// Enables the concurrent execution of multiple resource requests,
/// gathering their results into a single map.
///
/// Request definitions with a [`Target::Chained`] target
/// are only dispatched once the resource they depend on is resolved
/// and carries a non-empty value for the required predicate.
#[derive(Debug)]
pub struct ConcurrentRequest<C> {
    definitions: Vec<RequestDefinition<C>>,
    config: Config,
}

impl<C> ConcurrentRequest<C>
where
    C: Send + Sync + 'static,
{
    /// Creates a concurrent request from a batch of request definitions.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyBatch` if there are no definitions.
    /// Returns `Error::DuplicateIdentifier` if an identifier is used twice.
    /// Returns `Error::UnknownAccessor` if a chained definition depends on
    /// an identifier that is not in the batch.
    /// Returns `Error::CyclicChain` if chained definitions depend on each other.
    pub fn new(definitions: Vec<RequestDefinition<C>>) -> Result<Self, Error> {
        batch::validate(&definitions)?;
        Ok(Self {
            definitions,
            config: Config::default(),
        })
    }

    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Requests all resources of the batch,
    /// and returns them once every single one of them is resolved.
    ///
    /// * `cache` - Consulted for every URI before invoking a requestor
    /// * `context` - Handed to every requestor invocation
    ///
    /// Without a deadline configured, the returned future never resolves
    /// if a chained definition never becomes ready,
    /// because the property it waits for is missing or empty.
    ///
    /// # Errors
    ///
    /// Returns `Error::Request` for the first request that fails;
    /// requests depending on it are never dispatched.
    /// Returns `Error::RequestAborted` if a requestor panics.
    /// Returns `Error::Timeout` if the configured deadline elapses.
    ///
    /// Requests still running when the batch fails get aborted.
    pub async fn execute(
        self,
        cache: Option<&dyn ResourceCache>,
        context: Arc<C>,
    ) -> Result<Results, Error> {
        let span = tracing::info_span!("resolve", batch_size = self.definitions.len());
        let coordinator = Coordinator::new(self.definitions.len(), self.config, cache, context);
        coordinator.run(self.definitions).instrument(span).await
    }
}

/// Creates and executes a [`ConcurrentRequest`] in one go,
/// with the default configuration.
///
/// # Errors
///
/// See [`ConcurrentRequest::new`] and [`ConcurrentRequest::execute`].
pub async fn resolve<C>(
    definitions: Vec<RequestDefinition<C>>,
    cache: Option<&dyn ResourceCache>,
    context: Arc<C>,
) -> Result<Results, Error>
where
    C: Send + Sync + 'static,
{
    ConcurrentRequest::new(definitions)?
        .execute(cache, context)
        .await
}

#[derive(Debug)]
struct Completion {
    identifier: String,
    uri: String,
    outcome: Result<Resource, RequestError>,
}

/// The state of a single batch.
///
/// Owned by exactly one future.
/// Dropping it aborts all requests still in flight.
struct Coordinator<'c, C> {
    total: usize,
    results: Results,
    pending: Vec<RequestDefinition<C>>,
    completed: usize,
    /// The requests in flight.
    tasks: JoinSet<Completion>,
    /// Identifier and URI of each task in `tasks`.
    running: HashMap<task::Id, (String, String)>,
    /// Cache hits, waiting to be processed like any other completion.
    immediate: VecDeque<Completion>,
    identifiers: Vec<String>,
    cache: Option<&'c dyn ResourceCache>,
    context: Arc<C>,
    deadline: Option<Duration>,
    deadline_at: Option<Instant>,
    stall_reported: bool,
}

impl<'c, C> Coordinator<'c, C>
where
    C: Send + Sync + 'static,
{
    fn new(
        total: usize,
        config: Config,
        cache: Option<&'c dyn ResourceCache>,
        context: Arc<C>,
    ) -> Self {
        Self {
            total,
            results: Results::with_capacity(total),
            pending: Vec::new(),
            completed: 0,
            tasks: JoinSet::new(),
            running: HashMap::with_capacity(total),
            immediate: VecDeque::new(),
            identifiers: Vec::with_capacity(total),
            cache,
            context,
            deadline: config.deadline,
            deadline_at: config.deadline.map(|deadline| Instant::now() + deadline),
            stall_reported: false,
        }
    }

    async fn run(mut self, definitions: Vec<RequestDefinition<C>>) -> Result<Results, Error> {
        for definition in definitions {
            self.identifiers.push(definition.identifier.clone());
            if let Target::Direct(uri) = &definition.target {
                let uri = uri.clone();
                self.dispatch(definition, uri);
            } else {
                self.pending.push(definition);
            }
        }
        self.dispatch_ready();

        loop {
            let completion = match self.immediate.pop_front() {
                Some(completion) => completion,
                None => self.next_completion().await?,
            };
            if let Some(results) = self.complete(completion)? {
                return Ok(results);
            }
            self.dispatch_ready();
        }
    }

    /// Requests the resource at `uri` for `definition`,
    /// unless the cache already has it.
    fn dispatch(&mut self, definition: RequestDefinition<C>, uri: String) {
        if let Some(resource) = self.cache.and_then(|cache| cache.get(&uri)) {
            tracing::debug!("Cache hit for '{}': <{uri}>", definition.identifier);
            self.immediate.push_back(Completion {
                identifier: definition.identifier,
                uri,
                outcome: Ok(resource),
            });
            return;
        }

        let span = tracing::debug_span!("request", identifier = %definition.identifier, %uri);
        let RequestDefinition {
            identifier,
            requestor,
            ..
        } = definition;
        let context = Arc::clone(&self.context);
        let running = (identifier.clone(), uri.clone());
        let handle = self.tasks.spawn(
            async move {
                tracing::trace!("Requesting ...");
                let outcome = requestor.request(&uri, &context).await;
                Completion {
                    identifier,
                    uri,
                    outcome,
                }
            }
            .instrument(span),
        );
        self.running.insert(handle.id(), running);
    }

    /// Dispatches every pending chained definition that became ready.
    fn dispatch_ready(&mut self) {
        let mut still_pending = Vec::with_capacity(self.pending.len());
        for definition in mem::take(&mut self.pending) {
            match self.ready_uri(&definition) {
                Some(uri) => {
                    tracing::debug!(
                        "'{}' is ready, as {} resolved to <{uri}>",
                        definition.identifier,
                        definition.target
                    );
                    self.dispatch(definition, uri);
                }
                None => still_pending.push(definition),
            }
        }
        self.pending = still_pending;
    }

    /// The URI to request for a chained definition,
    /// if the resource it depends on is resolved
    /// and has a non-empty value for the predicate.
    fn ready_uri(&self, definition: &RequestDefinition<C>) -> Option<String> {
        let Target::Chained {
            accessor,
            predicate,
        } = &definition.target
        else {
            return None;
        };
        self.results
            .get(accessor)?
            .property(predicate)
            .filter(|value| !value.is_empty())
            .map(|value| value.value().to_owned())
    }

    async fn next_completion(&mut self) -> Result<Completion, Error> {
        match (self.deadline, self.deadline_at) {
            (Some(deadline), Some(deadline_at)) => {
                let joined = tokio::time::timeout_at(deadline_at, self.join_next()).await;
                joined.unwrap_or_else(|_elapsed| {
                    Err(Error::Timeout {
                        deadline,
                        unresolved: self.unresolved(),
                    })
                })
            }
            _ => self.join_next().await,
        }
    }

    /// Waits for the next request in flight to finish.
    /// With nothing in flight, this never returns.
    async fn join_next(&mut self) -> Result<Completion, Error> {
        let Some(joined) = self.tasks.join_next_with_id().await else {
            if !self.stall_reported {
                tracing::warn!(
                    "Nothing in flight, but {} chained request(s) are not ready: {}; the batch is stalled",
                    self.pending.len(),
                    self.unresolved().join(", ")
                );
                self.stall_reported = true;
            }
            return std::future::pending().await;
        };
        match joined {
            Ok((id, completion)) => {
                self.running.remove(&id);
                Ok(completion)
            }
            Err(join_err) => Err(self.aborted(&join_err)),
        }
    }

    fn aborted(&mut self, join_err: &JoinError) -> Error {
        let (identifier, uri) = self.running.remove(&join_err.id()).unwrap_or_default();
        Error::RequestAborted {
            identifier,
            uri,
            cause: join_err.to_string(),
        }
    }

    /// Records a completion.
    /// Returns all results if this was the last outstanding one.
    fn complete(&mut self, completion: Completion) -> Result<Option<Results>, Error> {
        let Completion {
            identifier,
            uri,
            outcome,
        } = completion;

        if self.results.contains_key(&identifier) {
            tracing::warn!("Ignoring repeated completion for '{identifier}' (<{uri}>)");
            return Ok(None);
        }

        let resource = outcome.map_err(|source| Error::Request {
            identifier: identifier.clone(),
            uri: uri.clone(),
            source,
        })?;
        tracing::trace!("Resolved '{identifier}': {resource}");
        self.results.insert(identifier, resource);
        self.completed += 1;

        if self.completed == self.total {
            tracing::debug!("All {} request(s) resolved", self.total);
            return Ok(Some(mem::take(&mut self.results)));
        }
        Ok(None)
    }

    fn unresolved(&self) -> Vec<String> {
        let mut unresolved: Vec<String> = self
            .identifiers
            .iter()
            .filter(|identifier| !self.results.contains_key(identifier.as_str()))
            .cloned()
            .collect();
        unresolved.sort();
        unresolved
    }
}
