use std::collections::{HashMap, HashSet, VecDeque};

use crate::domain::model::{Port, Region};

/// Region/port membership index built once per query snapshot.
///
/// A reference resolves to the union of three match modes: the reference as
/// a port code, as the slug of a port's direct region, or as the slug of any
/// ancestor of that region. Nesting depth is unbounded; the tree is assumed
/// acyclic.
#[derive(Debug, Default)]
pub struct RegionIndex {
    children: HashMap<String, Vec<String>>,
    ports_by_region: HashMap<String, Vec<String>>,
    port_codes: HashSet<String>,
}

impl RegionIndex {
    pub fn build(regions: &[Region], ports: &[Port]) -> Self {
        let mut children: HashMap<String, Vec<String>> = HashMap::new();
        for region in regions {
            if let Some(parent) = &region.parent_slug {
                children
                    .entry(parent.clone())
                    .or_default()
                    .push(region.slug.clone());
            }
        }

        let mut ports_by_region: HashMap<String, Vec<String>> = HashMap::new();
        let mut port_codes = HashSet::new();
        for port in ports {
            ports_by_region
                .entry(port.parent_slug.clone())
                .or_default()
                .push(port.code.clone());
            port_codes.insert(port.code.clone());
        }

        Self {
            children,
            ports_by_region,
            port_codes,
        }
    }

    /// Strict descendant region slugs of `slug`, by breadth-first expansion
    /// over the parent-to-children adjacency until exhausted.
    pub fn descendants(&self, slug: &str) -> HashSet<String> {
        let mut reached = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(slug);

        while let Some(current) = queue.pop_front() {
            for child in self.children.get(current).into_iter().flatten() {
                if reached.insert(child.clone()) {
                    queue.push_back(child.as_str());
                }
            }
        }

        reached
    }

    /// Port codes denoted by `reference`. Unknown references resolve to the
    /// empty set, never an error.
    pub fn resolve(&self, reference: &str) -> HashSet<String> {
        let mut codes = HashSet::new();

        if self.port_codes.contains(reference) {
            codes.insert(reference.to_string());
        }

        if let Some(attached) = self.ports_by_region.get(reference) {
            codes.extend(attached.iter().cloned());
        }

        for slug in self.descendants(reference) {
            if let Some(attached) = self.ports_by_region.get(&slug) {
                codes.extend(attached.iter().cloned());
            }
        }

        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(slug: &str, parent: Option<&str>) -> Region {
        Region {
            slug: slug.to_string(),
            name: slug.to_string(),
            parent_slug: parent.map(str::to_string),
        }
    }

    fn port(code: &str, parent: &str) -> Port {
        Port {
            code: code.to_string(),
            name: code.to_string(),
            parent_slug: parent.to_string(),
        }
    }

    fn nested_index() -> RegionIndex {
        // northern_europe > baltic > {finland_main, poland_main}, with FIIMA
        // attached to the mid-tier baltic region directly.
        let regions = vec![
            region("northern_europe", None),
            region("baltic", Some("northern_europe")),
            region("finland_main", Some("baltic")),
            region("poland_main", Some("baltic")),
            region("china_east_main", None),
        ];
        let ports = vec![
            port("CNNBO", "china_east_main"),
            port("FIIMA", "baltic"),
            port("FIRAU", "finland_main"),
            port("PLGDY", "poland_main"),
        ];
        RegionIndex::build(&regions, &ports)
    }

    fn codes(values: &[&str]) -> HashSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_resolve_port_code() {
        let index = nested_index();
        assert_eq!(index.resolve("FIRAU"), codes(&["FIRAU"]));
    }

    #[test]
    fn test_resolve_direct_region() {
        let index = nested_index();
        assert_eq!(index.resolve("finland_main"), codes(&["FIRAU"]));
    }

    #[test]
    fn test_resolve_ancestor_includes_all_depths() {
        let index = nested_index();
        // Mid-tier port FIIMA and both leaf-region ports qualify.
        assert_eq!(
            index.resolve("northern_europe"),
            codes(&["FIIMA", "FIRAU", "PLGDY"])
        );
        assert_eq!(
            index.resolve("baltic"),
            codes(&["FIIMA", "FIRAU", "PLGDY"])
        );
    }

    #[test]
    fn test_resolve_is_monotonic_up_the_tree() {
        let index = nested_index();
        let from_code = index.resolve("FIRAU");
        let from_parent = index.resolve("finland_main");
        let from_ancestor = index.resolve("northern_europe");

        assert!(from_code.is_subset(&from_parent));
        assert!(from_parent.is_subset(&from_ancestor));
    }

    #[test]
    fn test_resolve_unknown_reference_is_empty() {
        let index = nested_index();
        assert!(index.resolve("atlantis").is_empty());
    }

    #[test]
    fn test_resolve_region_without_ports_is_empty() {
        let regions = vec![region("empty_region", None)];
        let index = RegionIndex::build(&regions, &[]);
        assert!(index.resolve("empty_region").is_empty());
    }

    #[test]
    fn test_descendants_are_strict() {
        let index = nested_index();
        let reached = index.descendants("northern_europe");
        assert!(!reached.contains("northern_europe"));
        assert_eq!(
            reached,
            codes(&["baltic", "finland_main", "poland_main"])
        );
        assert!(index.descendants("finland_main").is_empty());
    }

    #[test]
    fn test_deeply_nested_chain() {
        let mut regions = vec![region("r0", None)];
        for i in 1..64 {
            regions.push(region(&format!("r{}", i), Some(&format!("r{}", i - 1))));
        }
        let ports = vec![port("ZZDEE", "r63")];
        let index = RegionIndex::build(&regions, &ports);
        assert_eq!(index.resolve("r0"), codes(&["ZZDEE"]));
    }
}
