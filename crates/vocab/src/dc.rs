// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! [Dublin Core Metadata Element Set, Version 1.1](
//! http://dublincore.org/documents/dces/)
//! vocabulary.

use crate::named_node;

pub const NS_BASE: &str = "http://purl.org/dc/elements/1.1/";
pub const NS_PREFERRED_PREFIX: &str = "dc";

named_node!(TITLE, NS_BASE, "title", "A name given to the resource.");
named_node!(
    CREATOR,
    NS_BASE,
    "creator",
    "An entity primarily responsible for making the resource."
);
named_node!(
    DESCRIPTION,
    NS_BASE,
    "description",
    "An account of the resource."
);
named_node!(
    IDENTIFIER,
    NS_BASE,
    "identifier",
    "An unambiguous reference to the resource within a given context."
);
