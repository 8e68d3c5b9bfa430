// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

mod batch;
mod cache;
pub mod config;
mod definition;
mod error;
mod graph;
mod requestor;
mod resolve;

use std::collections::HashMap;

pub use cache::ResourceCache;
pub use config::Config;
pub use definition::{RequestDefinition, Target};
pub use error::Error;
pub use graph::GraphRequestor;
use git_version::git_version;
pub use rdfresolve_resource::{NodeKind, PropertyValue, Resource};
pub use requestor::{requestor_fn, FnRequestor, RequestError, Requestor};
pub use resolve::{resolve, ConcurrentRequest};

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

pub const VERSION: &str = git_version!(cargo_prefix = "", fallback = "unknown");

/// The resolved resources of a batch, by request identifier.
pub type Results = HashMap<String, Resource>;
