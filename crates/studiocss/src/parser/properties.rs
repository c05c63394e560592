//! Declaration block parsing and the ordered property map.

/// Ordered property-name/value map for one declaration block.
///
/// Insertion order is preserved; inserting a duplicate name replaces the
/// value in place (standard CSS "last wins" semantics within one block).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: Vec<(String, String)>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a property, replacing the value of an existing entry with the
    /// same name.
    pub fn insert(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value.to_string();
        } else {
            self.entries.push((name.to_string(), value.to_string()));
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keeps only the properties for which the predicate returns true.
    pub fn retain(&mut self, mut pred: impl FnMut(&str, &str) -> bool) {
        self.entries.retain(|(n, v)| pred(n, v));
    }

    /// Renders the map as an inline `style` attribute value:
    /// `name: value; name: value`.
    pub fn to_inline_style(&self) -> String {
        self.entries
            .iter()
            .map(|(n, v)| format!("{n}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

/// Parses a declaration block (the text between `{` and `}`) into a
/// [`PropertyMap`].
///
/// Declarations split on `;`, then on the first `:`. Whitespace is trimmed on
/// both sides, property names are lowercased, and empty or colon-less
/// fragments are skipped. Never fails.
pub fn parse_declarations(block: &str) -> PropertyMap {
    let mut map = PropertyMap::new();
    for declaration in block.split(';') {
        let declaration = declaration.trim();
        if declaration.is_empty() {
            continue;
        }
        let Some(colon) = declaration.find(':') else {
            continue;
        };
        let name = declaration[..colon].trim().to_ascii_lowercase();
        let value = declaration[colon + 1..].trim();
        if name.is_empty() || value.is_empty() {
            continue;
        }
        map.insert(&name, value);
    }
    map
}
