//! Parsed XML values and collection normalization.

use std::fmt;

/// A parsed XML value.
///
/// Element text becomes [`XmlValue::Text`] (an empty element is `Text("")`), an element
/// with child elements or attributes becomes [`XmlValue::Map`], and a tag repeated
/// under one parent becomes [`XmlValue::List`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlValue {
    /// Text content.
    Text(String),
    /// Child elements and attributes by name.
    Map(XmlMap),
    /// Repeated sibling elements sharing one tag.
    List(Vec<XmlValue>),
}

impl XmlValue {
    /// The text content, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The child map, if this is a structured value.
    #[must_use]
    pub fn as_map(&self) -> Option<&XmlMap> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// True for the empty-element value `Text("")`.
    #[must_use]
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }

    /// View this value as a sequence: a list yields its items, any scalar yields a
    /// single item.
    #[must_use]
    pub fn items(&self) -> Vec<&XmlValue> {
        match self {
            Self::List(items) => items.iter().collect(),
            other => vec![other],
        }
    }
}

impl fmt::Display for XmlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Map(m) => write!(f, "{{{} entries}}", m.len()),
            Self::List(items) => write!(f, "[{} items]", items.len()),
        }
    }
}

/// Ordered tag-name to value mapping.
///
/// Insertion order is document order. Inserting a name twice turns its value into a
/// [`XmlValue::List`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlMap {
    entries: Vec<(String, XmlValue)>,
}

impl XmlMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, grouping repeated names into a list.
    pub fn insert(&mut self, name: impl Into<String>, value: XmlValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, XmlValue::List(items))) => items.push(value),
            Some((_, existing)) => {
                let first = std::mem::replace(existing, XmlValue::List(Vec::new()));
                *existing = XmlValue::List(vec![first, value]);
            }
            None => self.entries.push((name, value)),
        }
    }

    /// Look up a value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&XmlValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// True when `name` is present.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The text of a scalar child.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(XmlValue::as_text)
    }

    /// The map of a structured child.
    #[must_use]
    pub fn map(&self, name: &str) -> Option<&XmlMap> {
        self.get(name).and_then(XmlValue::as_map)
    }

    /// The first entry in document order.
    #[must_use]
    pub fn first(&self) -> Option<(&str, &XmlValue)> {
        self.entries.first().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &XmlValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, XmlValue)> for XmlMap {
    fn from_iter<T: IntoIterator<Item = (K, XmlValue)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Read a flattened collection whose members repeat directly under `parent`.
///
/// Returns `Some(vec![])` when the member tag is present but empty, the member(s)
/// as a sequence when present, and `None` when absent. A single occurrence is
/// returned as a one-element sequence.
#[must_use]
pub fn flattened_list<'a>(parent: &'a XmlMap, member: &str) -> Option<Vec<&'a XmlValue>> {
    let value = parent.get(member)?;
    if value.is_empty_text() {
        return Some(Vec::new());
    }
    Some(value.items())
}

/// Read a wrapped collection: a `container` element holding repeated `member`s.
///
/// Returns `Some(vec![])` when the container is present but empty, the members as a
/// sequence when present, and `None` when the container or its members are absent.
#[must_use]
pub fn wrapped_list<'a>(
    parent: &'a XmlMap,
    container: &str,
    member: &str,
) -> Option<Vec<&'a XmlValue>> {
    let value = parent.get(container)?;
    if value.is_empty_text() {
        return Some(Vec::new());
    }
    value.as_map()?.get(member).map(XmlValue::items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> XmlValue {
        XmlValue::Text(s.to_owned())
    }

    #[test]
    fn test_should_group_repeated_names_into_list() {
        let mut map = XmlMap::new();
        map.insert("Part", text("1"));
        map.insert("Other", text("x"));
        map.insert("Part", text("2"));
        map.insert("Part", text("3"));

        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get("Part"),
            Some(&XmlValue::List(vec![text("1"), text("2"), text("3")]))
        );
        assert_eq!(map.first().map(|(k, _)| k), Some("Part"));
    }

    #[test]
    fn test_should_normalize_single_flattened_member_to_one_item() {
        let map: XmlMap = [("Contents", XmlValue::Map(XmlMap::new()))]
            .into_iter()
            .collect();
        let items = flattened_list(&map, "Contents").expect("present");
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_should_return_empty_for_empty_member() {
        let map: XmlMap = [("Contents", text(""))].into_iter().collect();
        assert_eq!(flattened_list(&map, "Contents"), Some(Vec::new()));
        assert_eq!(flattened_list(&map, "Missing"), None);
    }

    #[test]
    fn test_should_read_wrapped_collections() {
        let mut set = XmlMap::new();
        set.insert("Tag", text("a"));
        let map: XmlMap = [("TagSet", XmlValue::Map(set)), ("Empty", text(""))]
            .into_iter()
            .collect();

        assert_eq!(wrapped_list(&map, "TagSet", "Tag"), Some(vec![&text("a")]));
        assert_eq!(wrapped_list(&map, "Empty", "Tag"), Some(Vec::new()));
        assert_eq!(wrapped_list(&map, "TagSet", "Other"), None);
        assert_eq!(wrapped_list(&map, "Absent", "Tag"), None);
    }
}
