use std::collections::{HashSet, VecDeque};

use crate::package::Package;

/// Every package in `all` (other than `pkg` itself) whose build configs hold
/// a reference resolving to `pkg`'s directory.
#[must_use]
pub fn find_dependents<'a>(pkg: &Package, all: &'a [Package]) -> Vec<&'a Package> {
    all.iter()
        .filter(|other| other.name != pkg.name && other.references_package(pkg))
        .collect()
}

/// The transitive set of workspace packages `pkg` needs present to run:
/// its workspace-member runtime dependencies, their dependencies, and so
/// on. De-duplicated by declared name; the root is never part of its own
/// closure. Graphs are expected to be acyclic, but a cycle only terminates
/// the walk early rather than hanging it.
#[must_use]
pub fn transitive_closure<'a>(pkg: &Package, all: &'a [Package]) -> Vec<&'a Package> {
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(pkg.name.as_str());

    let mut queue: VecDeque<&'a Package> = workspace_deps(pkg, all).into();
    let mut closure = Vec::new();

    while let Some(dep) = queue.pop_front() {
        if !visited.insert(dep.name.as_str()) {
            continue;
        }
        closure.push(dep);
        for next in workspace_deps(dep, all) {
            if !visited.contains(next.name.as_str()) {
                queue.push_back(next);
            }
        }
    }

    closure
}

fn workspace_deps<'a>(pkg: &Package, all: &'a [Package]) -> Vec<&'a Package> {
    pkg.manifest
        .dependencies
        .iter()
        .flatten()
        .filter_map(|(name, _)| all.iter().find(|candidate| &candidate.name == name))
        .collect()
}
