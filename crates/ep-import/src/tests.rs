//! Unit tests for ep-import.

use chrono::NaiveDate;

use crate::error::ImportError;
use crate::parse::{import_case_counts, parse_case_counts};
use crate::upload::{is_allowed_upload, UploadedFile};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 3, d).unwrap()
}

const CSV: &str = "\
time,cases,deaths,icu,hospitalized
2020-03-01,5,,,
2020-03-02,7,1,,2
";

// ── File selection ────────────────────────────────────────────────────────────

#[cfg(test)]
mod selection {
    use super::*;

    #[test]
    fn no_file_is_rejected() {
        assert_eq!(import_case_counts(&[]), Err(ImportError::NoFileUploaded));
    }

    #[test]
    fn multiple_files_are_rejected_before_parsing() {
        // The second file would fail row validation; the selection error must
        // win because parsing never begins.
        let files = [
            UploadedFile::new("a.csv", CSV),
            UploadedFile::new("b.csv", "time\nnot a date\n"),
        ];
        assert_eq!(import_case_counts(&files), Err(ImportError::MultipleFilesSelected));
    }

    #[test]
    fn single_file_is_imported() {
        let files = [UploadedFile::new("cases.csv", CSV)];
        let imported = import_case_counts(&files).unwrap();
        assert_eq!(imported.file_name, "cases.csv");
        assert_eq!(imported.data.len(), 2);
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod parsing {
    use super::*;

    #[test]
    fn csv_rows_become_datums() {
        let imported = parse_case_counts("cases.csv", CSV).unwrap();
        assert_eq!(imported.data[0].time, day(1));
        assert_eq!(imported.data[0].cases, Some(5));
        assert_eq!(imported.data[0].deaths, None);
        assert_eq!(imported.data[1].deaths, Some(1));
        assert_eq!(imported.data[1].hospitalized, Some(2));
    }

    #[test]
    fn tsv_is_sniffed_from_the_header() {
        let tsv = "time\tcases\tdeaths\n2020-03-01\t5\t0\n";
        let imported = parse_case_counts("cases.tsv", tsv).unwrap();
        assert_eq!(imported.data[0].cases, Some(5));
        assert_eq!(imported.data[0].deaths, Some(0));
    }

    #[test]
    fn comment_and_blank_lines_are_skipped() {
        let text = "\
# exported 2020-03-05
time,cases

2020-03-01,5
# revised after reporting backlog
2020-03-02,7
";
        let imported = parse_case_counts("cases.csv", text).unwrap();
        assert_eq!(imported.data.len(), 2);
    }

    #[test]
    fn unknown_columns_are_ignored() {
        let text = "time,cases,source\n2020-03-01,5,hospital registry\n";
        let imported = parse_case_counts("cases.csv", text).unwrap();
        assert_eq!(imported.data[0].cases, Some(5));
    }

    #[test]
    fn header_columns_match_case_insensitively() {
        let text = "Time,Cases\n2020-03-01,5\n";
        let imported = parse_case_counts("cases.csv", text).unwrap();
        assert_eq!(imported.data[0].cases, Some(5));
    }

    #[test]
    fn rfc3339_times_are_accepted() {
        let text = "time,cases\n2020-03-01T00:00:00.000Z,5\n";
        let imported = parse_case_counts("cases.csv", text).unwrap();
        assert_eq!(imported.data[0].time, day(1));
    }
}

// ── Unreadable files ──────────────────────────────────────────────────────────

#[cfg(test)]
mod unreadable {
    use super::*;

    #[test]
    fn empty_file() {
        assert_eq!(parse_case_counts("cases.csv", ""), Err(ImportError::FileUnreadable));
    }

    #[test]
    fn header_without_data_rows() {
        assert_eq!(
            parse_case_counts("cases.csv", "time,cases\n"),
            Err(ImportError::FileUnreadable)
        );
    }

    #[test]
    fn comments_only() {
        assert_eq!(
            parse_case_counts("cases.csv", "# nothing here\n# at all\n"),
            Err(ImportError::FileUnreadable)
        );
    }
}

// ── Row validation ────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_validation {
    use super::*;

    #[test]
    fn missing_time_aborts_with_no_partial_sequence() {
        // Row 1 is valid; row 2 lacks its time.  The whole import fails with
        // the single time-field report.
        let text = "time,cases\n2020-03-01,5\n,7\n";
        assert_eq!(parse_case_counts("cases.csv", text), Err(ImportError::MissingTimeField));
    }

    #[test]
    fn absent_time_column_reports_the_time_field() {
        let text = "cases,deaths\n5,1\n";
        assert_eq!(parse_case_counts("cases.csv", text), Err(ImportError::MissingTimeField));
    }

    #[test]
    fn unparseable_date_reports_the_value() {
        let text = "time,cases\nnot-a-date,5\n";
        assert_eq!(
            parse_case_counts("cases.csv", text),
            Err(ImportError::InvalidFieldValue("not-a-date".to_string()))
        );
    }

    #[test]
    fn unparseable_count_reports_the_value() {
        let text = "time,cases\n2020-03-01,many\n";
        assert_eq!(
            parse_case_counts("cases.csv", text),
            Err(ImportError::InvalidFieldValue("many".to_string()))
        );
    }

    #[test]
    fn negative_count_reports_the_value() {
        let text = "time,deaths\n2020-03-01,-2\n";
        assert_eq!(
            parse_case_counts("cases.csv", text),
            Err(ImportError::InvalidFieldValue("-2".to_string()))
        );
    }

    #[test]
    fn first_violation_wins() {
        // Both rows are bad; only the first is reported.
        let text = "time,cases\n,1\n2020-03-02,many\n";
        assert_eq!(parse_case_counts("cases.csv", text), Err(ImportError::MissingTimeField));
    }

    #[test]
    fn exact_messages() {
        assert_eq!(ImportError::NoFileUploaded.to_string(), "No file has been uploaded.");
        assert_eq!(
            ImportError::MultipleFilesSelected.to_string(),
            "Only one CSV or TSV file can be imported."
        );
        assert_eq!(
            ImportError::FileUnreadable.to_string(),
            "The file could not be loaded. Make sure that it's a valid CSV file."
        );
        assert_eq!(ImportError::MissingTimeField.to_string(), "The time field is missing.");
        assert_eq!(
            ImportError::InvalidFieldValue("many".to_string()).to_string(),
            "many is not a valid field value."
        );
    }
}

// ── Session-blob shape ────────────────────────────────────────────────────────

#[cfg(test)]
mod blob_shape {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let imported = parse_case_counts("cases.csv", CSV).unwrap();
        let json = serde_json::to_value(&imported).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("fileName"));
        assert!(object.contains_key("data"));
    }

    #[test]
    fn round_trips_through_json() {
        let imported = parse_case_counts("cases.csv", CSV).unwrap();
        let json = serde_json::to_string(&imported).unwrap();
        let back: crate::ImportedCaseCounts = serde_json::from_str(&json).unwrap();
        assert_eq!(back, imported);
    }
}

// ── Accepted upload kinds ─────────────────────────────────────────────────────

#[cfg(test)]
mod upload_kinds {
    use super::*;

    #[test]
    fn csv_and_tsv_variants_are_accepted() {
        for kind in ["text/csv", "text/tab-separated-values", ".csv", ".tsv", "TEXT/CSV"] {
            assert!(is_allowed_upload(kind), "{kind} should be accepted");
        }
    }

    #[test]
    fn other_kinds_are_rejected() {
        for kind in ["application/json", "image/png", ".xlsx"] {
            assert!(!is_allowed_upload(kind), "{kind} should be rejected");
        }
    }
}
