// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod collection;
mod property;
mod resource;

pub use property::{NodeKind, PropertyValue};
pub use resource::Resource;

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("RDF-star quoted triples can not be used as property values: {0}")]
    UnsupportedTerm(String),
}
