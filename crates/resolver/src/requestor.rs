// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use rdfresolve_resource::Resource;

#[derive(thiserror::Error, Debug)]
pub enum RequestError {
    #[error("No resource found at <{0}>")]
    NotFound(String),

    #[error("{0}")]
    Failed(String),
}

/// Fetches a single resource.
///
/// `C` is the context of the surrounding request
/// (for example, authentication info);
/// the resolver hands it to every requestor unchanged,
/// without ever looking at it.
#[async_trait]
pub trait Requestor<C>: Send + Sync {
    /// Fetches the resource at `uri`.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::NotFound` if there is no resource at `uri`.
    /// Returns `RequestError::*` if fetching failed.
    async fn request(&self, uri: &str, context: &C) -> Result<Resource, RequestError>;
}

/// A requestor made from a function;
/// see [`requestor_fn`].
pub struct FnRequestor<F, Fut> {
    func: F,
    _future: PhantomData<fn() -> Fut>,
}

#[async_trait]
impl<C, F, Fut> Requestor<C> for FnRequestor<F, Fut>
where
    C: Sync,
    F: Fn(String, &C) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Resource, RequestError>> + Send,
{
    async fn request(&self, uri: &str, context: &C) -> Result<Resource, RequestError> {
        (self.func)(uri.to_owned(), context).await
    }
}

/// Wraps a function returning a future into a requestor.
///
/// The returned future may not borrow from the context;
/// clone out of it whatever is needed.
pub fn requestor_fn<C, F, Fut>(func: F) -> Arc<dyn Requestor<C>>
where
    C: Sync + 'static,
    F: Fn(String, &C) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Resource, RequestError>> + Send + 'static,
{
    Arc::new(FnRequestor {
        func,
        _future: PhantomData,
    })
}
