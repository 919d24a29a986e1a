//! Ordered lists of group names

use std::fmt;

/// Names returned by registry enumeration, in case-insensitive order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList {
    names: Vec<String>,
}

impl NameList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }

    /// Join the names with `separator`, using `final_separator` (when
    /// non-empty) between the last two
    ///
    /// `["red", "green", "blue"]` with `", "` and `" and "` gives
    /// `"red, green and blue"`.
    pub fn implode(&self, separator: &str, final_separator: Option<&str>) -> String {
        let last_separator = final_separator
            .filter(|sep| !sep.is_empty())
            .unwrap_or(separator);

        let mut text = String::new();
        for (position, name) in self.names.iter().enumerate() {
            if position > 0 {
                if position + 1 == self.names.len() {
                    text.push_str(last_separator);
                } else {
                    text.push_str(separator);
                }
            }
            text.push_str(name);
        }
        text
    }

    /// Split text produced by [`implode`](Self::implode)
    ///
    /// The last occurrence of a non-empty `final_separator` splits off the
    /// final name; the rest is split on `separator`. An empty `separator`
    /// keeps the whole text as one name, and empty text gives an empty list.
    pub fn explode(text: &str, separator: &str, final_separator: Option<&str>) -> Self {
        if text.is_empty() {
            return Self::new();
        }
        if separator.is_empty() {
            return Self {
                names: vec![text.to_owned()],
            };
        }

        let (head, last) = match final_separator
            .filter(|sep| !sep.is_empty())
            .and_then(|sep| text.rfind(sep).map(|at| (at, sep.len())))
        {
            Some((at, len)) => (&text[..at], Some(&text[at + len..])),
            None => (text, None),
        };

        head.split(separator).chain(last).map(str::to_owned).collect()
    }
}

impl fmt::Display for NameList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.implode(", ", None))
    }
}

impl FromIterator<String> for NameList {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for NameList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

impl<'a> IntoIterator for &'a NameList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(names: &[&str]) -> NameList {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_implode() {
        let colors = list(&["red", "green", "blue"]);
        assert_eq!(colors.implode(", ", Some(" and ")), "red, green and blue");
        assert_eq!(colors.implode(", ", None), "red, green, blue");
        assert_eq!(colors.implode(", ", Some("")), "red, green, blue");
        assert_eq!(colors.implode("", None), "redgreenblue");

        assert_eq!(list(&["SI"]).implode(", ", Some(" and ")), "SI");
        assert_eq!(list(&["SI", "US"]).implode(", ", Some(" or ")), "SI or US");
        assert_eq!(NameList::new().implode(", ", None), "");
        assert_eq!(colors.to_string(), "red, green, blue");
    }

    #[test]
    fn test_explode() {
        let exploded = NameList::explode("red, green, yellow and blue", ", ", Some(" and "));
        assert_eq!(exploded.names(), ["red", "green", "yellow", "blue"]);

        let exploded = NameList::explode("a,b,c", ",", None);
        assert_eq!(exploded.names(), ["a", "b", "c"]);

        // only the last final separator counts
        let exploded = NameList::explode("salt and pepper, bread and butter", ", ", Some(" and "));
        assert_eq!(exploded.names(), ["salt and pepper", "bread", "butter"]);

        let exploded = NameList::explode("one and two", "", Some(" and "));
        assert_eq!(exploded.names(), ["one and two"]);

        assert!(NameList::explode("", ", ", None).is_empty());
    }

    #[test]
    fn test_accessors() {
        let mut names = NameList::new();
        names.push("SI");
        names.push(String::from("US"));
        assert_eq!(names.len(), 2);
        assert_eq!(names.get(1), Some("US"));
        assert_eq!(names.get(2), None);
        assert_eq!(names.iter().collect::<Vec<_>>(), ["SI", "US"]);
        assert_eq!(names.into_vec(), ["SI", "US"]);
    }
}
