//! Name-keyed grouping of media items with deferred membership filters.
//!
//! Grouping flattens every (item, credit) pair, applies the role filter, and
//! keeps the distinct credit names case-insensitively. Membership of a group
//! is not materialized up front: it is recomputed on demand from the key,
//! the original immutable item collection, and the filter. The recomputation
//! is a pure function, so groups can be evaluated repeatedly and from any
//! thread without synchronization.

use crate::domain::entities::MediaItem;
use std::collections::HashSet;

/// Case-insensitive set of credit roles to include.
///
/// An empty filter means "no filtering". Parsed from the caller-supplied
/// comma-separated role list; blank entries are dropped, so a filter string
/// of only whitespace or commas degrades to no filter rather than an error.
#[derive(Debug, Clone, Default)]
pub struct RoleFilter {
    roles: Vec<String>,
}

impl RoleFilter {
    /// Parses a comma-separated role list, e.g. `"Actor,Director"`.
    pub fn parse(input: Option<&str>) -> Self {
        let roles = input
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self { roles }
    }

    /// Returns true when no filtering is requested.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Returns true if a credit with the given role passes the filter.
    ///
    /// A missing role is compared as the empty string, so it never passes a
    /// non-empty filter. An empty filter passes everything.
    pub fn matches(&self, role: Option<&str>) -> bool {
        if self.roles.is_empty() {
            return true;
        }
        let role = role.unwrap_or("").to_lowercase();
        self.roles.contains(&role)
    }
}

/// The comparer used for every name comparison in this module. Grouping and
/// membership must fold the same way or keys and members drift apart.
fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// Collects the distinct credited names surviving the role filter.
///
/// Names are deduplicated case-insensitively; the first-encountered casing
/// is retained as the display form. Enumeration order is stable within one
/// call (items in input order, credits in item order). Names are never
/// trimmed or otherwise normalized beyond case folding.
pub fn credited_names(items: &[MediaItem], filter: &RoleFilter) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for item in items {
        for credit in &item.credits {
            if !filter.matches(credit.role.as_deref()) {
                continue;
            }
            if seen.insert(fold_name(&credit.name)) {
                names.push(credit.name.clone());
            }
        }
    }

    names
}

/// Recomputes the members of one name group.
///
/// An item belongs to the group when at least one of its credits matches the
/// name case-insensitively and, if the filter is non-empty, that same credit
/// also passes the role filter.
pub fn members_of<'a>(
    name: &str,
    items: &'a [MediaItem],
    filter: &RoleFilter,
) -> Vec<&'a MediaItem> {
    let key = fold_name(name);
    items
        .iter()
        .filter(|item| {
            item.credits
                .iter()
                .any(|c| fold_name(&c.name) == key && filter.matches(c.role.as_deref()))
        })
        .collect()
}

/// A name-indexed view over a snapshot of items.
///
/// Holds the item snapshot, the parsed role filter, and the ordered group
/// keys; [`PeopleIndex::members`] re-derives a group's subset on demand.
#[derive(Debug)]
pub struct PeopleIndex {
    items: Vec<MediaItem>,
    filter: RoleFilter,
    names: Vec<String>,
}

impl PeopleIndex {
    /// Builds the index over a snapshot of items.
    pub fn build(items: Vec<MediaItem>, filter: RoleFilter) -> Self {
        let names = credited_names(&items, &filter);
        Self {
            items,
            filter,
            names,
        }
    }

    /// The distinct group keys, in stable first-encountered order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Recomputes the item subset for one group key.
    pub fn members(&self, name: &str) -> Vec<&MediaItem> {
        members_of(name, &self.items, &self.filter)
    }

    /// Number of groups in the index.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true when the index holds no groups.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<MediaItem> {
        vec![
            MediaItem::new("i1", "Forrest Gump")
                .with_credit("Tom Hanks", Some("Actor"))
                .with_credit("Robert Zemeckis", Some("Director")),
            MediaItem::new("i2", "Cast Away")
                .with_credit("tom hanks", Some("Actor"))
                .with_credit("Helen Hunt", Some("Actor")),
            MediaItem::new("i3", "Back to the Future")
                .with_credit("Robert Zemeckis", Some("Director")),
        ]
    }

    #[test]
    fn test_role_filter_parse() {
        let filter = RoleFilter::parse(Some("Actor,Director"));
        assert!(!filter.is_empty());
        assert!(filter.matches(Some("actor")));
        assert!(filter.matches(Some("DIRECTOR")));
        assert!(!filter.matches(Some("Writer")));
    }

    #[test]
    fn test_role_filter_blank_entries_mean_no_filter() {
        assert!(RoleFilter::parse(None).is_empty());
        assert!(RoleFilter::parse(Some("")).is_empty());
        assert!(RoleFilter::parse(Some("  ,  , ")).is_empty());
    }

    #[test]
    fn test_role_filter_missing_role_is_empty_string() {
        let filter = RoleFilter::parse(Some("Actor"));
        assert!(!filter.matches(None));

        let no_filter = RoleFilter::parse(None);
        assert!(no_filter.matches(None));
    }

    #[test]
    fn test_names_collapse_case_insensitively() {
        let names = credited_names(&sample_items(), &RoleFilter::default());

        // "Tom Hanks" and "tom hanks" collapse to one key with the
        // first-encountered casing.
        assert_eq!(names, vec!["Tom Hanks", "Robert Zemeckis", "Helen Hunt"]);
    }

    #[test]
    fn test_names_respect_role_filter() {
        let filter = RoleFilter::parse(Some("Director"));
        let names = credited_names(&sample_items(), &filter);

        assert_eq!(names, vec!["Robert Zemeckis"]);
    }

    #[test]
    fn test_names_are_deterministic() {
        let items = sample_items();
        let filter = RoleFilter::default();

        assert_eq!(
            credited_names(&items, &filter),
            credited_names(&items, &filter)
        );
    }

    #[test]
    fn test_members_match_case_insensitively() {
        let items = sample_items();
        let members = members_of("TOM HANKS", &items, &RoleFilter::default());

        let ids: Vec<&str> = members.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["i1", "i2"]);
    }

    #[test]
    fn test_members_require_matching_role_on_same_credit() {
        let items = vec![
            MediaItem::new("i1", "A").with_credit("Jane Doe", Some("Director")),
            MediaItem::new("i2", "B").with_credit("Jane Doe", Some("Actor")),
        ];
        let filter = RoleFilter::parse(Some("Actor"));

        let members = members_of("Jane Doe", &items, &filter);
        let ids: Vec<&str> = members.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["i2"]);
    }

    #[test]
    fn test_filtered_out_items_appear_in_no_group() {
        let items = vec![MediaItem::new("i1", "A").with_credit("Jane Doe", Some("Director"))];
        let filter = RoleFilter::parse(Some("Actor"));

        assert!(credited_names(&items, &filter).is_empty());
        assert!(members_of("Jane Doe", &items, &filter).is_empty());
    }

    #[test]
    fn test_items_without_credits_are_excluded() {
        let items = vec![
            MediaItem::new("i1", "No People"),
            MediaItem::new("i2", "B").with_credit("Jane Doe", None),
        ];

        let names = credited_names(&items, &RoleFilter::default());
        assert_eq!(names, vec!["Jane Doe"]);

        let members = members_of("Jane Doe", &items, &RoleFilter::default());
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id, "i2");
    }

    #[test]
    fn test_empty_input_yields_empty_index() {
        let index = PeopleIndex::build(Vec::new(), RoleFilter::default());
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.names().is_empty());
    }

    #[test]
    fn test_index_members_recompute_identically() {
        let index = PeopleIndex::build(sample_items(), RoleFilter::default());

        let first: Vec<&str> = index
            .members("Tom Hanks")
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        let second: Vec<&str> = index
            .members("Tom Hanks")
            .iter()
            .map(|i| i.id.as_str())
            .collect();

        assert_eq!(first, second);
        assert_eq!(first, vec!["i1", "i2"]);
    }

    #[test]
    fn test_names_are_not_trimmed() {
        let items = vec![MediaItem::new("i1", "A").with_credit(" Spaced Name ", None)];
        let names = credited_names(&items, &RoleFilter::default());
        assert_eq!(names, vec![" Spaced Name "]);
    }
}
