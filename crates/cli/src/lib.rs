// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use clap as _;
use cli_utils as _;
use const_format as _;
#[cfg(test)]
use tempfile as _;
use tokio as _;

pub mod config;

use std::fmt::{self, Write};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use config::Config;
use git_version::git_version;
use oxrdf::{Graph, Triple};
use oxrdfio::{RdfFormat, RdfParseError, RdfParser};
use rdfresolve_resolver::{
    ConcurrentRequest, GraphRequestor, RequestDefinition, Requestor, Results,
};
use rdfresolve_vocab::rdf;

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

pub const VERSION: &str = git_version!(cargo_prefix = "", fallback = "unknown");

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unable to tell the RDF format of '{0}' from its file extension")]
    UnknownFormat(String),

    #[error("The input file was not syntactically valid:\n{0}")]
    Syntax(String),

    #[error(transparent)]
    Resolve(#[from] rdfresolve_resolver::Error),

    /// Represents all cases of `std::io::Error`.
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn map_rdf_parse_error(parse_err: RdfParseError) -> Error {
    match parse_err {
        RdfParseError::Io(io_err) => Error::Io(io_err),
        RdfParseError::Syntax(syntax_err) => Error::Syntax(syntax_err.to_string()),
    }
}

/// Reads all triples of an RDF file into a graph.
/// Named graphs are merged into the default graph.
///
/// # Errors
///
/// Returns `Error::UnknownFormat` if the file extension is not a known RDF one.
/// Returns `Error::Io` if the file can not be read.
/// Returns `Error::Syntax` if the file content is not valid.
pub fn load_graph(file: &Path) -> Result<Graph, Error> {
    let format = file
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(RdfFormat::from_extension)
        .ok_or_else(|| Error::UnknownFormat(file.display().to_string()))?;
    tracing::debug!("Loading {} as {format} ...", file.display());

    let reader = io::BufReader::new(fs::File::open(file)?);
    let mut graph = Graph::new();
    for quad_res in RdfParser::from_format(format).for_reader(reader) {
        let quad = quad_res.map_err(map_rdf_parse_error)?;
        graph.insert(&Triple::new(quad.subject, quad.predicate, quad.object));
    }
    tracing::debug!("Loaded {} triples", graph.len());

    Ok(graph)
}

/// Resolves the configured batch against the configured data file.
///
/// # Errors
///
/// See [`load_graph`], and
/// [`ConcurrentRequest::new`] plus [`ConcurrentRequest::execute`].
pub async fn run(config: &Config) -> Result<Results, Error> {
    let graph = load_graph(&config.data)?;
    let requestor: Arc<dyn Requestor<()>> = Arc::new(GraphRequestor::new(Arc::new(graph)));
    let definitions = config
        .requests
        .iter()
        .map(|(identifier, target)| {
            RequestDefinition::new(identifier.as_str(), target.clone(), Arc::clone(&requestor))
        })
        .collect();
    let request = ConcurrentRequest::new(definitions)?.with_config(rdfresolve_resolver::Config {
        deadline: config.deadline,
    });

    Ok(request.execute(None, Arc::new(())).await?)
}

/// Formats the results as human readable text,
/// sorted by identifier and predicate.
///
/// # Errors
///
/// Only if formatting one of the resources fails.
pub fn render(results: &Results) -> Result<String, fmt::Error> {
    let mut entries: Vec<_> = results.iter().collect();
    entries.sort_by_key(|(identifier, _)| *identifier);

    let mut out = String::new();
    for (identifier, resource) in entries {
        writeln!(out, "{identifier} <{}>", resource.uri())?;
        if let Some(rdf_type) = resource.rdf_type() {
            writeln!(out, "  a <{rdf_type}>")?;
        }
        let mut properties: Vec<_> = resource
            .properties()
            .iter()
            .filter(|(predicate, _)| predicate.as_str() != rdf::TYPE.as_str())
            .collect();
        properties.sort_by(|(pred_a, _), (pred_b, _)| pred_a.cmp(pred_b));
        for (predicate, value) in properties {
            writeln!(out, "  <{predicate}> {value}")?;
        }
    }
    Ok(out)
}
