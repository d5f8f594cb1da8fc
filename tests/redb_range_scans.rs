//! Integration tests for range scans over redb tables keyed by LexKey.

#[cfg(test)]
mod tests {
    use lexkey::{lexkey, LexKey, LexKeyRangeExt as _, PrimaryKey, RangeKey};
    use redb::{Database, ReadableDatabase, TableDefinition};
    use tempfile::NamedTempFile;

    const ROWS: TableDefinition<LexKey, &str> = TableDefinition::new("rows");

    fn primary(partition: &str, row: i64) -> LexKey {
        PrimaryKey::new(Some(lexkey!(partition).unwrap()), Some(lexkey!(row).unwrap()))
            .unwrap()
            .encode()
    }

    fn seeded_db(temp_file: &NamedTempFile) -> Database {
        let db = Database::create(temp_file.path()).unwrap();
        let write_txn = db.begin_write().unwrap();
        {
            let mut table = write_txn.open_table(ROWS).unwrap();
            table.insert(primary("alpha", -5), "alpha/-5").unwrap();
            table.insert(primary("alpha", 0), "alpha/0").unwrap();
            table.insert(primary("alpha", 7), "alpha/7").unwrap();
            table.insert(primary("alpha", 12), "alpha/12").unwrap();
            table.insert(primary("beta", 3), "beta/3").unwrap();
        }
        write_txn.commit().unwrap();
        db
    }

    fn collect(range: redb::Range<'_, LexKey, &'static str>) -> Vec<String> {
        range
            .map(|entry| entry.unwrap().1.value().to_string())
            .collect()
    }

    #[test]
    fn test_scan_bounded_rows() {
        let temp_file = NamedTempFile::new().unwrap();
        let db = seeded_db(&temp_file);
        let read_txn = db.begin_read().unwrap();
        let table = read_txn.open_table(ROWS).unwrap();

        let range = RangeKey::new(
            lexkey!("alpha").unwrap(),
            Some(lexkey!(0i64).unwrap()),
            Some(lexkey!(7i64).unwrap()),
        );
        let rows = collect(table.scan_range(&range, true).unwrap());
        assert_eq!(rows, vec!["alpha/0", "alpha/7"]);
    }

    #[test]
    fn test_scan_whole_partition() {
        let temp_file = NamedTempFile::new().unwrap();
        let db = seeded_db(&temp_file);
        let read_txn = db.begin_read().unwrap();
        let table = read_txn.open_table(ROWS).unwrap();

        let range = RangeKey::prefix(lexkey!("alpha").unwrap());
        let rows = collect(table.scan_range(&range, true).unwrap());
        assert_eq!(rows, vec!["alpha/-5", "alpha/0", "alpha/7", "alpha/12"]);

        let rows = collect(table.scan_prefix(&lexkey!("beta").unwrap()).unwrap());
        assert_eq!(rows, vec!["beta/3"]);
    }

    #[test]
    fn test_scan_open_ended_rows() {
        let temp_file = NamedTempFile::new().unwrap();
        let db = seeded_db(&temp_file);
        let read_txn = db.begin_read().unwrap();
        let table = read_txn.open_table(ROWS).unwrap();

        let from_seven = RangeKey::new(
            lexkey!("alpha").unwrap(),
            Some(lexkey!(7i64).unwrap()),
            None,
        );
        let rows = collect(table.scan_range(&from_seven, true).unwrap());
        assert_eq!(rows, vec!["alpha/7", "alpha/12"]);

        let up_to_zero = RangeKey::new(
            lexkey!("alpha").unwrap(),
            None,
            Some(lexkey!(0i64).unwrap()),
        );
        let rows = collect(table.scan_range(&up_to_zero, true).unwrap());
        assert_eq!(rows, vec!["alpha/-5", "alpha/0"]);
    }

    #[test]
    fn test_scan_missing_partition_is_empty() {
        let temp_file = NamedTempFile::new().unwrap();
        let db = seeded_db(&temp_file);
        let read_txn = db.begin_read().unwrap();
        let table = read_txn.open_table(ROWS).unwrap();

        let range = RangeKey::prefix(lexkey!("gamma").unwrap());
        assert!(collect(table.scan_range(&range, true).unwrap()).is_empty());
    }

    #[test]
    fn test_open_scans_reach_longer_partitions() {
        let temp_file = NamedTempFile::new().unwrap();
        let db = seeded_db(&temp_file);
        let write_txn = db.begin_write().unwrap();
        {
            let mut table = write_txn.open_table(ROWS).unwrap();
            table.insert(primary("alphabet", 1), "alphabet/1").unwrap();
        }
        write_txn.commit().unwrap();

        let read_txn = db.begin_read().unwrap();
        let table = read_txn.open_table(ROWS).unwrap();

        // "alphabet" extends "alpha" with bytes below the end marker, so an
        // open upper bound on "alpha" also covers it.
        let open = RangeKey::prefix(lexkey!("alpha").unwrap());
        let rows = collect(table.scan_range(&open, true).unwrap());
        assert_eq!(
            rows,
            vec!["alpha/-5", "alpha/0", "alpha/7", "alpha/12", "alphabet/1"]
        );

        // A bounded end row stays inside the partition.
        let bounded = RangeKey::new(
            lexkey!("alpha").unwrap(),
            None,
            Some(lexkey!(i64::MAX).unwrap()),
        );
        let rows = collect(table.scan_range(&bounded, true).unwrap());
        assert_eq!(rows, vec!["alpha/-5", "alpha/0", "alpha/7", "alpha/12"]);
    }

    #[test]
    fn test_scan_without_partition_component() {
        const ROW_ONLY: TableDefinition<LexKey, u64> = TableDefinition::new("row_only");

        let temp_file = NamedTempFile::new().unwrap();
        let db = Database::create(temp_file.path()).unwrap();
        let write_txn = db.begin_write().unwrap();
        {
            let mut table = write_txn.open_table(ROW_ONLY).unwrap();
            for row in [1u64, 2, 3, 4] {
                // Row-only keys keep the leading separator of the range layout.
                let mut key = vec![lexkey::SEPARATOR];
                key.extend_from_slice(&row.to_be_bytes());
                let key = LexKey::from_bytes(key);
                table.insert(key, row).unwrap();
            }
        }
        write_txn.commit().unwrap();

        let read_txn = db.begin_read().unwrap();
        let table = read_txn.open_table(ROW_ONLY).unwrap();
        let range = RangeKey::new(
            lexkey!("ignored").unwrap(),
            Some(lexkey!(2u64).unwrap()),
            Some(lexkey!(3u64).unwrap()),
        );
        let rows: Vec<u64> = table
            .scan_range(&range, false)
            .unwrap()
            .map(|entry| entry.unwrap().1.value())
            .collect();
        assert_eq!(rows, vec![2, 3]);
    }
}
