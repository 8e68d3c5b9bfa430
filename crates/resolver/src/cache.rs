// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use rdfresolve_resource::Resource;

/// Previously resolved resources, by URI.
///
/// The resolver only ever reads from a cache;
/// keeping it up to date is the job of whoever supplies it.
pub trait ResourceCache: Send + Sync {
    fn get(&self, uri: &str) -> Option<Resource>;
}

impl<S: BuildHasher + Send + Sync> ResourceCache for HashMap<String, Resource, S> {
    fn get(&self, uri: &str) -> Option<Resource> {
        Self::get(self, uri).cloned()
    }
}

impl ResourceCache for BTreeMap<String, Resource> {
    fn get(&self, uri: &str) -> Option<Resource> {
        Self::get(self, uri).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_act_as_caches() {
        let res = Resource::new("u:1", Vec::<(String, _)>::new());
        let hash_map = HashMap::from([("u:1".to_owned(), res.clone())]);
        let btree_map = BTreeMap::from([("u:1".to_owned(), res.clone())]);
        for cache in [&hash_map as &dyn ResourceCache, &btree_map] {
            assert_eq!(cache.get("u:1"), Some(res.clone()));
            assert_eq!(cache.get("u:2"), None);
        }
    }
}
