// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{
    HeaderName,
    HeaderValue,
};

/// An ordered list of header fields. Duplicate names are permitted and the
/// insertion order is preserved, since both are significant on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderMap {
    headers: Vec<(HeaderName, HeaderValue)>,
}

impl HeaderMap {
    pub fn new() -> HeaderMap {
        HeaderMap::default()
    }

    pub fn new_with_vec(headers: Vec<(HeaderName, HeaderValue)>) -> HeaderMap {
        HeaderMap { headers }
    }

    /// Appends a header to the list of headers, keeping any existing headers
    /// of the same name.
    pub fn append(&mut self, header_name: impl Into<HeaderName>, value: impl Into<HeaderValue>) {
        self.headers.push((header_name.into(), value.into()));
    }

    pub fn clear(&mut self) {
        self.headers.clear();
    }

    #[must_use]
    pub fn contains(&self, header_name: &HeaderName) -> bool {
        self.headers.iter().any(|(name, _)| name == header_name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Returns the value of the first header with the given name.
    #[must_use]
    pub fn get(&self, header_name: &HeaderName) -> Option<&HeaderValue> {
        for (name, value) in &self.headers {
            if name == header_name {
                return Some(value);
            }
        }

        None
    }

    /// Returns the values of all headers with the given name, in insertion
    /// order.
    pub fn get_all<'a>(&'a self, header_name: &'a HeaderName) -> impl Iterator<Item = &'a HeaderValue> + 'a {
        self.headers.iter()
            .filter(move |(name, _)| name == header_name)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn get_last(&self, header_name: &HeaderName) -> Option<&HeaderValue> {
        self.headers.iter()
            .rev()
            .find(|(name, _)| name == header_name)
            .map(|(_, value)| value)
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(HeaderName, HeaderValue)> {
        self.headers.iter()
    }

    /// Removes all headers with the given name.
    pub fn remove(&mut self, header_name: &HeaderName) {
        self.headers.retain(|(name, _)| name != header_name);
    }

    /// Removes the first header matching both the name and the value.
    /// Returns `false` if there was no such header.
    pub fn remove_entry(&mut self, header_name: &HeaderName, value: &HeaderValue) -> bool {
        let position = self.headers.iter()
            .position(|(name, existing_value)| name == header_name && existing_value == value);

        match position {
            Some(index) => {
                self.headers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replaces all headers with the given name by a single one. The first
    /// header of that name keeps its position; if there is none, the header
    /// is appended.
    pub fn set(&mut self, header_name: impl Into<HeaderName>, value: impl Into<HeaderValue>) {
        let header_name = header_name.into();
        let mut value = Some(value.into());

        self.headers.retain_mut(|(name, existing_value)| {
            if *name != header_name {
                return true;
            }

            match value.take() {
                Some(value) => {
                    *existing_value = value;
                    true
                }
                None => false,
            }
        });

        if let Some(value) = value {
            self.headers.push((header_name, value));
        }
    }

    /// Replaces the complete contents of the map.
    pub fn set_all(&mut self, headers: impl IntoIterator<Item = (HeaderName, HeaderValue)>) {
        self.headers.clear();
        self.headers.extend(headers);
    }
}

impl FromIterator<(HeaderName, HeaderValue)> for HeaderMap {
    fn from_iter<T: IntoIterator<Item = (HeaderName, HeaderValue)>>(iter: T) -> Self {
        Self::new_with_vec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = &'a (HeaderName, HeaderValue);
    type IntoIter = std::slice::Iter<'a, (HeaderName, HeaderValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.iter()
    }
}
