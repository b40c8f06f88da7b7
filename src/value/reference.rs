//! References to properties of other objects.
//!
//! Canonical form: `#<identifier>#<segment>(.<segment>)*`. Backslash, `#` and
//! `.` inside an identifier or segment are escaped with a backslash.

use smallvec::SmallVec;
use std::fmt;

use crate::util::{Error, Result};

/// A reference to a property of another object in the document.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reference {
    identifier: String,
    path: SmallVec<[String; 2]>,
}

impl Reference {
    /// Reference a single property of `identifier`.
    pub fn new(identifier: impl Into<String>, property: impl Into<String>) -> Result<Self> {
        Self::with_path(identifier, [property.into()])
    }

    /// Reference a nested property of `identifier` by path segments.
    pub fn with_path<I, S>(identifier: impl Into<String>, path: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let identifier = identifier.into();
        let path: SmallVec<[String; 2]> = path.into_iter().map(Into::into).collect();
        if identifier.is_empty() {
            return Err(Error::invalid_argument("reference identifier is empty"));
        }
        if path.is_empty() {
            return Err(Error::invalid_argument(format!(
                "reference to '{identifier}' has no property path"
            )));
        }
        if path.iter().any(String::is_empty) {
            return Err(Error::invalid_argument(format!(
                "reference to '{identifier}' has an empty path segment"
            )));
        }
        Ok(Self { identifier, path })
    }

    /// Parse the canonical string form.
    pub fn parse(value: &str) -> Result<Self> {
        let rest = value.strip_prefix('#').ok_or_else(|| {
            Error::invalid_argument(format!("reference '{value}' must start with '#'"))
        })?;

        let mut identifier = String::new();
        let mut path: SmallVec<[String; 2]> = SmallVec::new();
        let mut current = String::new();
        let mut in_path = false;
        let mut chars = rest.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some(escaped) => current.push(escaped),
                    None => {
                        return Err(Error::invalid_argument(format!(
                            "reference '{value}' ends with a dangling escape"
                        )))
                    }
                },
                '#' if !in_path => {
                    identifier = std::mem::take(&mut current);
                    in_path = true;
                }
                '.' if in_path => path.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        if !in_path {
            return Err(Error::invalid_argument(format!(
                "reference '{value}' has no '#' before its property path"
            )));
        }
        path.push(current);
        Self::with_path(identifier, path)
    }

    /// Referenced object identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Property path segments.
    pub fn path(&self) -> &[String] {
        &self.path
    }
}

fn push_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        if matches!(c, '\\' | '#' | '.') {
            out.push('\\');
        }
        out.push(c);
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::with_capacity(self.identifier.len() + 16);
        s.push('#');
        push_escaped(&mut s, &self.identifier);
        s.push('#');
        for (i, segment) in self.path.iter().enumerate() {
            if i > 0 {
                s.push('.');
            }
            push_escaped(&mut s, segment);
        }
        f.write_str(&s)
    }
}

/// Everything a reference can be built from.
pub trait IntoReference {
    fn into_reference(self) -> Result<Reference>;
}

impl IntoReference for Reference {
    fn into_reference(self) -> Result<Reference> {
        Ok(self)
    }
}

impl IntoReference for &Reference {
    fn into_reference(self) -> Result<Reference> {
        Ok(self.clone())
    }
}

impl IntoReference for &str {
    fn into_reference(self) -> Result<Reference> {
        Reference::parse(self)
    }
}

impl IntoReference for String {
    fn into_reference(self) -> Result<Reference> {
        Reference::parse(&self)
    }
}

impl IntoReference for (&str, &str) {
    fn into_reference(self) -> Result<Reference> {
        Reference::new(self.0, self.1)
    }
}

impl IntoReference for (&str, &[&str]) {
    fn into_reference(self) -> Result<Reference> {
        Reference::with_path(self.0, self.1.iter().copied())
    }
}

impl<const N: usize> IntoReference for (&str, [&str; N]) {
    fn into_reference(self) -> Result<Reference> {
        Reference::with_path(self.0, self.1)
    }
}

impl IntoReference for (&str, Vec<String>) {
    fn into_reference(self) -> Result<Reference> {
        Reference::with_path(self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        let a = ("id", "path").into_reference().unwrap();
        let b = ("id", ["path"]).into_reference().unwrap();
        let c = "#id#path".into_reference().unwrap();
        assert_eq!(a.to_string(), "#id#path");
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_multi_segment() {
        let r = Reference::with_path("rect", ["material", "solidColor", "color"]).unwrap();
        assert_eq!(r.to_string(), "#rect#material.solidColor.color");
        assert_eq!(Reference::parse(&r.to_string()).unwrap(), r);
        assert_eq!(r.path().len(), 3);
    }

    #[test]
    fn test_escaping() {
        let r = Reference::new("a#b.c", "x.y").unwrap();
        let s = r.to_string();
        assert_eq!(s, r"#a\#b\.c#x\.y");
        let back = Reference::parse(&s).unwrap();
        assert_eq!(back.identifier(), "a#b.c");
        assert_eq!(back.path(), &["x.y".to_string()]);
    }

    #[test]
    fn test_invalid() {
        assert!(Reference::parse("id#path").unwrap_err().is_invalid_argument());
        assert!(Reference::parse("#idonly").unwrap_err().is_invalid_argument());
        assert!(Reference::parse("##path").unwrap_err().is_invalid_argument());
        assert!(Reference::parse("#id#a..b").unwrap_err().is_invalid_argument());
        assert!(Reference::parse("#id#a\\").unwrap_err().is_invalid_argument());
        let empty: [&str; 0] = [];
        assert!(Reference::with_path("id", empty).is_err());
    }
}
