use std::collections::VecDeque;

/// Bounded FIFO buffer that drops its oldest element once `capacity` is reached.
///
/// Values are kept in chronological order, oldest first. A window with a
/// capacity of zero never holds anything.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedWindow<T> {
    capacity: usize,
    values: VecDeque<T>,
}

impl<T> FixedWindow<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            values: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a value, returning the element that was evicted to make room.
    pub fn push(&mut self, value: T) -> Option<T> {
        self.values.push_back(value);
        if self.values.len() > self.capacity {
            self.values.pop_front()
        } else {
            None
        }
    }

    /// Push several values in order, evicting after each one.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.push(value);
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True once the window holds `capacity` values.
    pub fn is_full(&self) -> bool {
        self.capacity > 0 && self.values.len() == self.capacity
    }

    pub fn oldest(&self) -> Option<&T> {
        self.values.front()
    }

    pub fn newest(&self) -> Option<&T> {
        self.values.back()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.values.iter()
    }
}

impl<'a, T> IntoIterator for &'a FixedWindow<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
