/// Number of consecutive records assigned to a column before moving on to
/// the next one.
pub const BLOCK: usize = 10;

/// Number of display columns.
pub const COLUMNS: usize = 3;

/// Partition records into three display columns by block-of-ten round-robin
/// on the cumulative index: records 0-9 go to the first column, 10-19 to the
/// second, 20-29 to the third, 30-39 back to the first, and so on.
///
/// The partition is a pure function of the whole collection and is meant to
/// be recomputed after every append, so later pages continue the block
/// pattern from the running total rather than restarting per page. Each
/// entry carries its index in the source slice so callers can refer back to
/// the collection. Order within each column follows source order.
pub fn split_columns<T>(records: &[T]) -> [Vec<(usize, &T)>; COLUMNS] {
    let mut columns: [Vec<(usize, &T)>; COLUMNS] = Default::default();

    for (index, record) in records.iter().enumerate() {
        let column = (index / BLOCK) % COLUMNS;
        columns[column].push((index, record));
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_yields_empty_columns() {
        let records: Vec<u32> = Vec::new();
        let cols = split_columns(&records);
        assert!(cols.iter().all(|c| c.is_empty()));
    }

    #[test]
    fn thirty_records_split_evenly() {
        let records: Vec<usize> = (0..30).collect();
        let [a, b, c] = split_columns(&records);

        assert_eq!(a.len(), 10);
        assert_eq!(b.len(), 10);
        assert_eq!(c.len(), 10);

        // First block in column A, second in B, third in C
        assert_eq!(a.first().map(|(i, _)| *i), Some(0));
        assert_eq!(b.first().map(|(i, _)| *i), Some(10));
        assert_eq!(c.first().map(|(i, _)| *i), Some(20));
    }

    #[test]
    fn sixty_records_continue_the_block_pattern() {
        let records: Vec<usize> = (0..60).collect();
        let [a, b, c] = split_columns(&records);

        assert_eq!(a.len(), 20);
        assert_eq!(b.len(), 20);
        assert_eq!(c.len(), 20);

        // The second page's first block (30-39) lands back in column A,
        // directly after the first page's block 0-9.
        assert_eq!(a[9].0, 9);
        assert_eq!(a[10].0, 30);
    }

    #[test]
    fn partial_trailing_block_stays_in_one_column() {
        let records: Vec<usize> = (0..45).collect();
        let [a, b, c] = split_columns(&records);

        // Blocks: 0-9 A, 10-19 B, 20-29 C, 30-39 A, 40-44 B
        assert_eq!(a.len(), 20);
        assert_eq!(b.len(), 15);
        assert_eq!(c.len(), 10);
        assert_eq!(b.last().map(|(i, _)| *i), Some(44));
    }

    #[test]
    fn order_within_a_column_follows_source_order() {
        let records: Vec<usize> = (0..90).collect();
        for column in split_columns(&records) {
            let indices: Vec<usize> = column.iter().map(|(i, _)| *i).collect();
            let mut sorted = indices.clone();
            sorted.sort_unstable();
            assert_eq!(indices, sorted);
        }
    }

    #[test]
    fn every_record_appears_exactly_once() {
        let records: Vec<usize> = (0..77).collect();
        let cols = split_columns(&records);

        let mut seen: Vec<usize> = cols
            .iter()
            .flat_map(|c| c.iter().map(|(i, _)| *i))
            .collect();
        seen.sort_unstable();
        let expected: Vec<usize> = (0..77).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn duplicate_values_are_assigned_by_position() {
        // Identical values (e.g. repeated photo ids) must not collapse
        let records = vec!["42"; 25];
        let [a, b, c] = split_columns(&records);
        assert_eq!(a.len() + b.len() + c.len(), 25);
        assert_eq!(c.len(), 5);
    }
}
