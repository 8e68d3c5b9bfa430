// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;
use std::time::Duration;

use rdfresolve_resolver::Target;

#[derive(Clone, Debug, Default)]
pub struct Config {
    /**
     * Path to a locally stored RDF file,
     * which all requests get answered from.
     */
    pub data: PathBuf,
    /**
     * The batch to resolve, as pairs of identifier and target.
     */
    pub requests: Vec<(String, Target)>,
    /**
     * How long resolving the batch may take at most.
     */
    pub deadline: Option<Duration>,
}
