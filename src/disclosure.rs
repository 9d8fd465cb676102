use std::collections::HashMap;

/// Expanded/collapsed flags for project cards, keyed by project id.
///
/// The map is defined over all strings: toggling an id that was never seen
/// creates the entry expanded. Entries are never removed; an absent key reads
/// as collapsed.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct DisclosureMap {
    expanded: HashMap<String, bool>,
}

impl DisclosureMap {
    pub fn toggle(&mut self, id: &str) {
        let entry = self.expanded.entry(id.to_string()).or_insert(false);
        *entry = !*entry;
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_id_reads_collapsed() {
        let map = DisclosureMap::default();

        assert!(!map.is_expanded("ecom"));
    }

    #[test]
    fn first_toggle_expands_second_collapses() {
        let mut map = DisclosureMap::default();

        map.toggle("ecom");
        assert!(map.is_expanded("ecom"));

        map.toggle("ecom");
        assert!(!map.is_expanded("ecom"));
    }

    #[test]
    fn two_toggles_restore_the_original_state() {
        let mut map = DisclosureMap::default();
        map.toggle("captain");

        let before = map.clone();
        map.toggle("captain");
        map.toggle("captain");

        assert_eq!(map, before);
    }

    #[test]
    fn unknown_id_expands_without_touching_other_entries() {
        let mut map = DisclosureMap::default();
        map.toggle("ecom");

        map.toggle("unknown-id");

        assert!(map.is_expanded("unknown-id"));
        assert!(map.is_expanded("ecom"));
        assert!(!map.is_expanded("medihelp"));
    }
}
