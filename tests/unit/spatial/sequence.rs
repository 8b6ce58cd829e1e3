//! Tests for the immutable piece sequence and size ordering

#[cfg(test)]
mod tests {
    use rectpack::spatial::sequence::sort_descending_by_size;
    use rectpack::spatial::{Piece, Sequence};

    fn pieces() -> Vec<Piece> {
        vec![
            Piece::new('a', 1, 1),
            Piece::new('b', 1, 3),
            Piece::new('c', 2, 2),
            Piece::new('d', 3, 1),
        ]
    }

    // Tests head and tail walk the chain in order
    // Verified by advancing the cursor by two in tail
    #[test]
    fn test_head_and_tail() {
        let sequence = Sequence::new(pieces());

        assert_eq!(sequence.head().map(Piece::id), Some('a'));
        assert_eq!(sequence.tail().head().map(Piece::id), Some('b'));
        assert_eq!(sequence.tail().tail().tail().head().map(Piece::id), Some('d'));
        assert_eq!(sequence.len(), 4);
    }

    // Tests taking the tail leaves the original position untouched
    // Verified by advancing the cursor in place
    #[test]
    fn test_tail_does_not_mutate() {
        let sequence = Sequence::new(pieces());
        let first = sequence.tail();
        let second = sequence.tail();

        assert_eq!(first, second);
        assert_eq!(sequence.head().map(Piece::id), Some('a'));
    }

    // Tests an exhausted sequence stays exhausted
    // Verified by letting the cursor run past the end
    #[test]
    fn test_exhausted_sequence() {
        let sequence = Sequence::new(vec![Piece::new('a', 1, 1)]).tail();

        assert!(sequence.is_empty());
        assert_eq!(sequence.len(), 0);
        assert!(sequence.head().is_none());
        assert!(sequence.tail().is_empty());
        assert!(sequence.remaining().is_empty());
        assert!(Sequence::new(Vec::new()).is_empty());
    }

    // Tests the descending sort orders by longest side and keeps ties stable
    // Verified by sorting by area instead
    #[test]
    fn test_sort_descending_by_size() {
        let mut list = pieces();
        sort_descending_by_size(&mut list);
        let ids: String = list.iter().map(Piece::id).collect();

        assert_eq!(ids, "bdca");
    }

    // Tests ordered only sorts when asked to
    // Verified by always sorting
    #[test]
    fn test_ordered() {
        let unsorted: String = Sequence::ordered(pieces(), false)
            .remaining()
            .iter()
            .map(Piece::id)
            .collect();
        let sorted: String = Sequence::ordered(pieces(), true)
            .remaining()
            .iter()
            .map(Piece::id)
            .collect();

        assert_eq!(unsorted, "abcd");
        assert_eq!(sorted, "bdca");
    }
}
