use std::collections::{BTreeSet, LinkedList, VecDeque};

/// A collection with a defined front-to-back order that can be consumed from
/// the front and extended at the back.
pub trait OrderedSequence<T> {
    fn peek_front(&self) -> Option<&T>;
    fn pop_front(&mut self) -> Option<T>;
    fn push_back(&mut self, item: T);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> OrderedSequence<T> for VecDeque<T> {
    fn peek_front(&self) -> Option<&T> {
        self.front()
    }

    fn pop_front(&mut self) -> Option<T> {
        VecDeque::pop_front(self)
    }

    fn push_back(&mut self, item: T) {
        VecDeque::push_back(self, item)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> OrderedSequence<T> for LinkedList<T> {
    fn peek_front(&self) -> Option<&T> {
        self.front()
    }

    fn pop_front(&mut self) -> Option<T> {
        LinkedList::pop_front(self)
    }

    fn push_back(&mut self, item: T) {
        LinkedList::push_back(self, item)
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}

/// Sets keep their own order, so `push_back` inserts by value and equal
/// elements collapse into one.
impl<T: Ord> OrderedSequence<T> for BTreeSet<T> {
    fn peek_front(&self) -> Option<&T> {
        self.first()
    }

    fn pop_front(&mut self) -> Option<T> {
        self.pop_first()
    }

    fn push_back(&mut self, item: T) {
        self.insert(item);
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}

/// Returns true if every element is `<=` the one after it.
pub fn is_non_decreasing<I>(items: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    let mut iter = items.into_iter();
    let Some(mut prev) = iter.next() else {
        return true;
    };
    for item in iter {
        if item < prev {
            return false;
        }
        prev = item;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deque_front_ops() {
        let mut d: VecDeque<i32> = VecDeque::from([3, 1]);
        assert_eq!(d.peek_front(), Some(&3));
        OrderedSequence::push_back(&mut d, 7);
        assert_eq!(OrderedSequence::pop_front(&mut d), Some(3));
        assert_eq!(OrderedSequence::len(&d), 2);
        assert!(!OrderedSequence::is_empty(&d));
    }

    #[test]
    fn set_pops_in_order() {
        let mut s = BTreeSet::from([9, 2, 5]);
        OrderedSequence::push_back(&mut s, 1);
        assert_eq!(s.peek_front(), Some(&1));
        let mut out = vec![];
        while let Some(x) = OrderedSequence::pop_front(&mut s) {
            out.push(x);
        }
        assert_eq!(out, vec![1, 2, 5, 9]);
        assert!(OrderedSequence::is_empty(&s));
    }

    #[test]
    fn list_is_fifo() {
        let mut l = LinkedList::new();
        OrderedSequence::push_back(&mut l, "a");
        OrderedSequence::push_back(&mut l, "b");
        assert_eq!(OrderedSequence::pop_front(&mut l), Some("a"));
        assert_eq!(l.peek_front(), Some(&"b"));
    }

    #[test]
    fn non_decreasing_check() {
        assert!(is_non_decreasing(Vec::<i32>::new()));
        assert!(is_non_decreasing([4]));
        assert!(is_non_decreasing([1, 1, 2, 6, 6]));
        assert!(!is_non_decreasing([1, 3, 2]));
    }
}
