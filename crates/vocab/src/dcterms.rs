// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! [DCMI Metadata Terms](
//! http://dublincore.org/documents/dcmi-terms/)
//! vocabulary.

use crate::named_node;

pub const NS_BASE: &str = "http://purl.org/dc/terms/";
pub const NS_PREFERRED_PREFIX: &str = "dcterms";

named_node!(TITLE, NS_BASE, "title", "A name given to the resource.");
named_node!(
    CREATED,
    NS_BASE,
    "created",
    "Date of creation of the resource."
);
named_node!(
    MODIFIED,
    NS_BASE,
    "modified",
    "Date on which the resource was changed."
);
named_node!(
    HAS_PART,
    NS_BASE,
    "hasPart",
    "A related resource that is included either physically or logically in the described resource."
);
named_node!(
    IS_PART_OF,
    NS_BASE,
    "isPartOf",
    "A related resource in which the described resource is physically or logically included."
);
