//! Path element and path types.

use std::fmt;

/// PathStyle selects the textual syntax of a path expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathStyle {
    /// Slash separated, named entries spelled `identifier=name`: `/spec/containers/name=web`.
    GoPatch,
    /// Dot separated, named entries spelled by name only: `spec.containers.web`.
    Dot,
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStyle::GoPatch => write!(f, "go-patch"),
            PathStyle::Dot => write!(f, "dot"),
        }
    }
}

/// PathElement represents one level of path navigation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathElement {
    /// Field of a record.
    Key(String),
    /// Entry of a named list, selected by the value of its identifier field.
    Named { identifier: String, name: String },
    /// Entry of a list, selected by position.
    Index(usize),
}

impl PathElement {
    /// Creates a new record key element.
    pub fn key(key: impl Into<String>) -> Self {
        PathElement::Key(key.into())
    }

    /// Creates a new named entry element.
    pub fn named(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        PathElement::Named {
            identifier: identifier.into(),
            name: name.into(),
        }
    }

    /// Creates a new index element.
    pub fn index(i: usize) -> Self {
        PathElement::Index(i)
    }

    fn write_styled(&self, f: &mut fmt::Formatter<'_>, style: PathStyle) -> fmt::Result {
        match (self, style) {
            (PathElement::Key(key), _) => write!(f, "{}", key),
            (PathElement::Named { identifier, name }, PathStyle::GoPatch) => {
                write!(f, "{}={}", identifier, name)
            }
            (PathElement::Named { name, .. }, PathStyle::Dot) => write!(f, "{}", name),
            (PathElement::Index(i), _) => write!(f, "{}", i),
        }
    }
}

/// Path represents the location of a value inside a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    /// Creates a new empty path pointing at the document root.
    pub fn new() -> Self {
        Path {
            elements: Vec::new(),
        }
    }

    /// Creates a path from a vector of elements.
    pub fn from_elements(elements: Vec<PathElement>) -> Self {
        Path { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the path points at the document root.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathElement> {
        self.elements.iter()
    }

    pub fn push(&mut self, element: PathElement) {
        self.elements.push(element);
    }

    pub fn as_slice(&self) -> &[PathElement] {
        &self.elements
    }

    /// Returns a displayable rendering of the path in the given style.
    pub fn styled(&self, style: PathStyle) -> StyledPath<'_> {
        StyledPath { path: self, style }
    }
}

impl FromIterator<PathElement> for Path {
    fn from_iter<T: IntoIterator<Item = PathElement>>(iter: T) -> Self {
        Path {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathElement;
    type IntoIter = std::slice::Iter<'a, PathElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// StyledPath renders a [`Path`] in a specific [`PathStyle`].
#[derive(Debug, Clone, Copy)]
pub struct StyledPath<'a> {
    path: &'a Path,
    style: PathStyle,
}

impl fmt::Display for StyledPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            PathStyle::GoPatch => {
                if self.path.is_empty() {
                    return write!(f, "/");
                }
                for element in self.path {
                    write!(f, "/")?;
                    element.write_styled(f, PathStyle::GoPatch)?;
                }
                Ok(())
            }
            PathStyle::Dot => {
                if self.path.is_empty() {
                    return write!(f, "(root)");
                }
                for (i, element) in self.path.iter().enumerate() {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    element.write_styled(f, PathStyle::Dot)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.styled(PathStyle::GoPatch))
    }
}
