use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// Canonical identity of a city within the road network.
///
/// Keys are produced by [`normalize`] so that `"new delhi"`, `"New Delhi"` and
/// `" New Delhi "` all address the same graph node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CityKey(String);

impl CityKey {
    /// Normalize a raw city name into a key.
    pub fn new(raw: &str) -> Self {
        normalize(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` when the raw input was empty or whitespace only.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CityKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CityKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Trim surrounding whitespace and title-case a city name.
///
/// The first letter of every run of alphabetic characters is upper-cased and
/// the remainder lower-cased, so `"navi MUMBAI"` becomes `"Navi Mumbai"`.
/// Inner whitespace is kept as-is.
pub fn normalize(raw: &str) -> CityKey {
    let trimmed = raw.trim();
    let mut key = String::with_capacity(trimmed.len());
    let mut previous_alphabetic = false;

    for ch in trimmed.chars() {
        if ch.is_alphabetic() {
            if previous_alphabetic {
                key.extend(ch.to_lowercase());
            } else {
                key.extend(ch.to_uppercase());
            }
            previous_alphabetic = true;
        } else {
            key.push(ch);
            previous_alphabetic = false;
        }
    }

    CityKey(key)
}
