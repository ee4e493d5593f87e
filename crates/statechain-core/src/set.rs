use std::collections::HashSet;

/// Insertion-ordered set of state identifiers.
///
/// Membership is by identifier, iteration follows insertion order so that
/// traversal and rendering are deterministic. Equality compares membership
/// only.
#[derive(Debug, Clone, Default)]
pub struct StateSet {
  order: Vec<String>,
  members: HashSet<String>,
}

impl StateSet {
  pub fn new() -> Self {
    Self::default()
  }

  /// Add an identifier. Returns `false` if it was already present.
  pub fn insert(&mut self, id: impl Into<String>) -> bool {
    let id = id.into();
    if self.members.contains(&id) {
      return false;
    }
    self.members.insert(id.clone());
    self.order.push(id);
    true
  }

  pub fn contains(&self, id: &str) -> bool {
    self.members.contains(id)
  }

  pub fn len(&self) -> usize {
    self.order.len()
  }

  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.order.iter().map(String::as_str)
  }

  /// Add every identifier of `other`, keeping the existing order first.
  pub fn extend_from(&mut self, other: &StateSet) {
    for id in other.iter() {
      self.insert(id);
    }
  }

  pub fn is_subset(&self, other: &StateSet) -> bool {
    self.members.iter().all(|id| other.contains(id))
  }
}

impl PartialEq for StateSet {
  fn eq(&self, other: &Self) -> bool {
    self.members == other.members
  }
}

impl Eq for StateSet {}

impl<S: Into<String>> FromIterator<S> for StateSet {
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    let mut set = StateSet::new();
    for id in iter {
      set.insert(id);
    }
    set
  }
}

impl<'a> IntoIterator for &'a StateSet {
  type Item = &'a str;
  type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

  fn into_iter(self) -> Self::IntoIter {
    self.order.iter().map(String::as_str as fn(&'a String) -> &'a str)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_insert_keeps_first_position() {
    let mut set = StateSet::new();
    assert!(set.insert("b"));
    assert!(set.insert("a"));
    assert!(!set.insert("b"));

    assert_eq!(set.iter().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(set.len(), 2);
  }

  #[test]
  fn test_equality_ignores_order() {
    let left: StateSet = ["a", "b"].into_iter().collect();
    let right: StateSet = ["b", "a"].into_iter().collect();
    assert_eq!(left, right);
  }

  #[test]
  fn test_subset() {
    let small: StateSet = ["a"].into_iter().collect();
    let big: StateSet = ["a", "b"].into_iter().collect();
    assert!(small.is_subset(&big));
    assert!(!big.is_subset(&small));
    assert!(StateSet::new().is_subset(&small));
  }

  #[test]
  fn test_extend_from() {
    let mut set: StateSet = ["a", "b"].into_iter().collect();
    let other: StateSet = ["b", "c"].into_iter().collect();
    set.extend_from(&other);
    assert_eq!(set.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
  }
}
