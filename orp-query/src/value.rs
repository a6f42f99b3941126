/// Value(s) recorded for one query parameter.
///
/// A name seen once holds a [`Single`](Self::Single) value; the second
/// occurrence turns it into [`Multiple`](Self::Multiple), and later ones
/// append in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum QueryValue {
    Single(String),
    Multiple(Vec<String>),
}

impl QueryValue {
    /// Records another occurrence of the same parameter.
    pub fn push(&mut self, value: String) {
        match self {
            Self::Single(prev) => {
                let prev = std::mem::take(prev);
                *self = Self::Multiple(vec![prev, value]);
            }
            Self::Multiple(values) => values.push(value),
        }
    }

    /// First value in order of appearance.
    pub fn first(&self) -> &str {
        self.as_slice().first().map_or("", String::as_str)
    }

    /// All values in order of appearance.
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Single(v) => std::slice::from_ref(v),
            Self::Multiple(values) => values,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}
