//! The sequence engine: an ordered, duplicate-permitting list of owned
//! strings with 0-based contiguous indexing.
//!
//! Storage is a persistent vector, so cloning a list (and carving a
//! [`StrList::splice`] out of one) shares structure cheaply while the result
//! stays semantically independent of its source.

use im_rc::Vector;
use std::fmt;
use std::rc::Rc;


/// Ordered sequence of owned string elements.
///
/// Duplicates are permitted, indices are `0`-based and contiguous over
/// `[0, count())`, and elements have no identity beyond value and position.
/// Every mutating operation either fully succeeds or leaves the list in its
/// prior state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StrList {
    items: Vector<Rc<String>>,
}

impl StrList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            items: Vector::new(),
        }
    }

    /// Create a list holding the given values in order.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: values.into_iter().map(|v| Rc::new(v.into())).collect(),
        }
    }

    /// Number of elements currently held. O(1).
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove all elements. Always succeeds.
    pub fn clear(&mut self) {
        self.items = Vector::new();
    }

    /// Linear scan for an exact value match.
    pub fn contains(&self, value: &str) -> bool {
        self.items.iter().any(|item| item.as_str() == value)
    }

    /// Position of the first occurrence of `value`, if any.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.items.iter().position(|item| item.as_str() == value)
    }

    /// Borrowed view of the element at `index`, or `None` when
    /// `index >= count()`. The view is invalidated by the next mutation of
    /// this list, which the borrow checker enforces.
    pub fn item(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(|item| item.as_str())
    }

    /// Append values at the tail, preserving their order.
    ///
    /// Appending zero values is a semantic no-op and reports `false` —
    /// "nothing happened", distinct from an error.
    pub fn append<I, S>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut appended = false;
        for value in values {
            self.items.push_back(Rc::new(value.into()));
            appended = true;
        }
        appended
    }

    /// Insert an ordered (possibly empty) run of values starting at
    /// `position`. Valid positions are `[0, count()]` inclusive; a position
    /// past the end is rejected with no mutation. Inserting zero values at a
    /// valid position succeeds and leaves the list unchanged.
    pub fn insert<I, S>(&mut self, position: usize, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if position > self.items.len() {
            return false;
        }
        let incoming: Vector<Rc<String>> =
            values.into_iter().map(|v| Rc::new(v.into())).collect();
        if incoming.is_empty() {
            return true;
        }
        let tail = self.items.split_off(position);
        self.items.append(incoming);
        self.items.append(tail);
        true
    }

    /// Remove every occurrence of `value` in a single pass, preserving the
    /// relative order of the remainder. Returns the number removed.
    pub fn remove(&mut self, value: &str) -> usize {
        let before = self.items.len();
        self.items = self
            .items
            .iter()
            .filter(|item| item.as_str() != value)
            .cloned()
            .collect();
        before - self.items.len()
    }

    /// Remove exactly the element at `index`. Fails without mutation when
    /// `index >= count()`, including on an empty list.
    pub fn erase(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }

    /// Replace every occurrence of `old` with `new` in place, preserving
    /// positions. Returns the number replaced.
    pub fn replace(&mut self, old: &str, new: &str) -> usize {
        let replacement = Rc::new(new.to_string());
        let mut replaced = 0;
        self.items = self
            .items
            .iter()
            .map(|item| {
                if item.as_str() == old {
                    replaced += 1;
                    Rc::clone(&replacement)
                } else {
                    Rc::clone(item)
                }
            })
            .collect();
        replaced
    }

    /// In-place ascending lexicographic sort. Always succeeds, empty list
    /// included.
    pub fn sort(&mut self) {
        let mut sorted: Vec<Rc<String>> = self.items.iter().cloned().collect();
        sorted.sort();
        self.items = sorted.into_iter().collect();
    }

    /// In-place order reversal. Always succeeds.
    pub fn reverse(&mut self) {
        self.items = self.items.iter().rev().cloned().collect();
    }

    /// New, independently owned list of up to `length` elements starting at
    /// `origin`; `length` defaults to the remainder of the list.
    ///
    /// The range is clamped once up front: an origin at or past the end
    /// degrades to an empty result rather than an error, and a length past
    /// the end is capped at the remainder. Never returns a "null" list —
    /// always a valid, possibly-empty one.
    pub fn splice(&self, origin: usize, length: Option<usize>) -> StrList {
        if origin >= self.items.len() {
            return StrList::new();
        }
        let remainder = self.items.len() - origin;
        let taken = length.map_or(remainder, |length| length.min(remainder));
        StrList {
            items: self.items.clone().slice(origin..origin + taken),
        }
    }

    /// Iterate the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.as_str())
    }

    /// Positional cursor over this list. Cloning the cursor forks its
    /// traversal state.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor {
            list: self,
            index: 0,
        }
    }
}

impl<S: Into<String>> FromIterator<S> for StrList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        StrList::from_values(iter)
    }
}

impl fmt::Display for StrList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "\"{item}\"")?;
        }
        write!(f, "]")
    }
}

/// Cursor over a [`StrList`].
///
/// The cursor borrows the list, so it cannot outlive a mutation of it —
/// "read immediately, do not retain across a mutating call" is enforced
/// rather than documented.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    list: &'a StrList,
    index: usize,
}

impl<'a> Cursor<'a> {
    /// Whether the cursor has moved past the last element.
    pub fn is_end(&self) -> bool {
        self.index >= self.list.count()
    }

    /// Step to the next position. Returns `false` once the end is reached.
    pub fn advance(&mut self) -> bool {
        if self.is_end() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Rewind to the first element.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Element at the current position, or `None` at the end.
    pub fn value(&self) -> Option<&'a str> {
        self.list.item(self.index)
    }
}
