//! Integration tests for sg-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{HEADER, TrialRow};
    use crate::writer::OutputWriter;
    use crate::OutputError;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn row(run: u64, ticks: i64) -> TrialRow {
        TrialRow {
            run,
            size:         100,
            vision:       3,
            tolerance:    0.5,
            init_blocks:  40,
            final_blocks: if ticks < 0 { -1 } else { 4 },
            ticks,
        }
    }

    #[test]
    fn csv_file_created_with_header() {
        let dir = tmp();
        let path = dir.path().join("runs.csv");
        let mut w = CsvWriter::new(&path).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, HEADER);
        assert_eq!(rdr.records().count(), 0);
    }

    #[test]
    fn csv_rows_written_in_order() {
        let dir = tmp();
        let path = dir.path().join("runs.csv");
        let mut w = CsvWriter::new(&path).unwrap();
        w.write_row(&row(2, 17)).unwrap();
        w.write_row(&row(1, -1)).unwrap();
        assert_eq!(w.rows_written(), 2);
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["2", "100", "3", "0.500000", "40", "4", "17"]);
        assert_eq!(rows[1].iter().collect::<Vec<_>>(), ["1", "100", "3", "0.500000", "40", "-1", "-1"]);
    }

    #[test]
    fn raw_file_text() {
        let dir = tmp();
        let path = dir.path().join("runs.csv");
        let mut w = CsvWriter::new(&path).unwrap();
        w.write_row(&row(1, 9)).unwrap();
        w.finish().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "run,size,vision,tolerance,init.blocks,final.blocks,ticks\n1,100,3,0.500000,40,4,9\n"
        );
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(&dir.path().join("runs.csv")).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tmp();
        let path = dir.path().join("missing").join("runs.csv");
        assert!(matches!(CsvWriter::new(&path), Err(OutputError::Csv(_))));
    }
}

#[cfg(test)]
mod row_tests {
    use sg_trial::TrialResult;

    use crate::row::TrialRow;

    #[test]
    fn abandoned_trial_maps_to_sentinels() {
        let result = TrialResult {
            run: 7, size: 50, vision: 2, tolerance: 0.25,
            initial_groups: 21, final_groups: None, ticks: None,
        };
        let row = TrialRow::from(&result);
        assert_eq!((row.final_blocks, row.ticks), (-1, -1));
        assert_eq!(row.to_record()[3], "0.250000");
    }

    #[test]
    fn converged_trial_keeps_values() {
        let result = TrialResult {
            run: 1, size: 50, vision: 2, tolerance: 0.5,
            initial_groups: 21, final_groups: Some(3), ticks: Some(88),
        };
        let row = TrialRow::from(&result);
        assert_eq!(row.to_record(), ["1", "50", "2", "0.500000", "21", "3", "88"].map(String::from));
    }
}

#[cfg(test)]
mod observer_tests {
    use std::collections::BTreeSet;

    use tempfile::TempDir;

    use sg_batch::{BatchConfig, run_batch};
    use sg_core::ModelConfig;
    use sg_trial::NoopObserver;

    use crate::row::TrialRow;
    use crate::writer::OutputWriter;
    use crate::{BatchOutputObserver, CsvWriter, OutputResult};

    fn log_runs(workers: usize) -> (TempDir, Vec<csv::StringRecord>) {
        let model = ModelConfig::new(40, 2, 0.5).unwrap();
        let config = BatchConfig::new(model, 9, workers, 11, false).unwrap();

        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("runs.csv");
        let mut sink = BatchOutputObserver::new(CsvWriter::new(&path).unwrap());
        run_batch(&config, &mut NoopObserver, &mut sink).unwrap();
        assert_eq!(sink.into_writer().rows_written(), 9);

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (dir, rows)
    }

    /// Writer that keeps rows in memory.
    #[derive(Default)]
    struct MemoryWriter {
        rows:     Vec<TrialRow>,
        finishes: usize,
    }

    impl OutputWriter for MemoryWriter {
        fn write_row(&mut self, row: &TrialRow) -> OutputResult<()> {
            self.rows.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    #[test]
    fn observer_drives_any_writer() {
        let model = ModelConfig::new(30, 1, 0.5).unwrap();
        let config = BatchConfig::new(model, 5, 1, 4, false).unwrap();

        let mut sink = BatchOutputObserver::new(MemoryWriter::default());
        run_batch(&config, &mut NoopObserver, &mut sink).unwrap();

        let writer = sink.into_writer();
        assert_eq!(writer.finishes, 1);
        let runs: Vec<u64> = writer.rows.iter().map(|r| r.run).collect();
        assert_eq!(runs, [1, 2, 3, 4, 5]);
        assert!(writer.rows.iter().all(|r| r.size == 30 && r.vision == 1));
    }

    #[test]
    fn serial_batch_logs_runs_in_order() {
        let (_dir, rows) = log_runs(1);
        let runs: Vec<&str> = rows.iter().map(|r| &r[0]).collect();
        assert_eq!(runs, ["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    }

    #[test]
    fn parallel_batch_logs_every_run_once() {
        let (_dir, rows) = log_runs(4);
        let runs: BTreeSet<u64> = rows.iter().map(|r| r[0].parse().unwrap()).collect();
        assert_eq!(runs, (1..=9).collect::<BTreeSet<u64>>());
        for r in &rows {
            assert_eq!((&r[1], &r[2], &r[3]), ("40", "2", "0.500000"));
        }
    }

    #[test]
    fn serial_and_parallel_logs_match_as_sets() {
        let (_a, serial) = log_runs(1);
        let (_b, parallel) = log_runs(3);
        let key = |rows: &[csv::StringRecord]| -> BTreeSet<Vec<String>> {
            rows.iter().map(|r| r.iter().map(str::to_owned).collect()).collect()
        };
        assert_eq!(key(&serial), key(&parallel));
    }
}
