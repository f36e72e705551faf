/// A forward-only reader over an immutable slice.
///
/// The cursor tracks one index into the slice; it can look at the next item
/// without consuming it and never moves backwards.
///
/// # Examples
/// ```
/// use ban::interpreter::cursor::Cursor;
///
/// let items = [1, 2, 3];
/// let mut cursor = Cursor::new(&items);
///
/// assert_eq!(cursor.peek(), Some(&1));
/// assert_eq!(cursor.next_if(|n| *n == 2), None);
/// assert_eq!(cursor.advance(), Some(&1));
/// assert_eq!(cursor.next_if(|n| *n == 2), Some(&2));
/// assert_eq!(cursor.previous(), Some(&2));
/// assert_eq!(cursor.advance(), Some(&3));
/// assert_eq!(cursor.peek(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a, T> {
    items: &'a [T],
    index: usize,
}

impl<'a, T> Cursor<'a, T> {
    /// Places a cursor before the first item.
    #[must_use]
    pub const fn new(items: &'a [T]) -> Self {
        Self { items, index: 0 }
    }

    /// The next item, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a T> {
        self.items.get(self.index)
    }

    /// Consumes and returns the next item.
    pub fn advance(&mut self) -> Option<&'a T> {
        let item = self.items.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    /// Consumes the next item only if it satisfies `predicate`.
    pub fn next_if(&mut self, predicate: impl FnOnce(&T) -> bool) -> Option<&'a T> {
        match self.peek() {
            Some(item) if predicate(item) => self.advance(),
            _ => None,
        }
    }

    /// The most recently consumed item.
    #[must_use]
    pub fn previous(&self) -> Option<&'a T> {
        self.index.checked_sub(1).and_then(|i| self.items.get(i))
    }
}
