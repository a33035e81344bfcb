//! Unit tests for the CSV decoder.

use super::*;
use crate::csv_codec::schema::HEADERS;

fn header_line() -> String {
    HEADERS.join(",")
}

mod split_records_tests {
    use super::*;

    #[test]
    fn splits_plain_fields() {
        let records = split_records("a,b,c");
        assert_eq!(records, vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn quoted_field_keeps_commas() {
        let records = split_records("\"Niv-Mizzet, the Firemind\",P");
        assert_eq!(records, vec![vec!["Niv-Mizzet, the Firemind", "P"]]);
    }

    #[test]
    fn doubled_quote_inside_quotes_is_literal() {
        let records = split_records("\"say \"\"hi\"\"\",x");
        assert_eq!(records, vec![vec!["say \"hi\"", "x"]]);
    }

    #[test]
    fn quoted_field_keeps_line_breaks() {
        let records = split_records("\"line one\nline two\",x");
        assert_eq!(records, vec![vec!["line one\nline two", "x"]]);
    }

    #[test]
    fn newline_outside_quotes_breaks_records() {
        let records = split_records("a,b\nc,d");
        assert_eq!(records, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn handles_crlf_separators() {
        let records = split_records("a,b\r\nc,d\r\n");
        assert_eq!(records, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn trailing_newline_adds_no_record() {
        let records = split_records("a,b\n");
        assert_eq!(records, vec![vec!["a", "b"]]);
    }

    #[test]
    fn blank_lines_are_discarded() {
        let records = split_records("a,b\n\n   \nc,d\n");
        assert_eq!(records, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn lone_quote_pair_is_an_empty_field() {
        let records = split_records("\"\",x,\"\"");
        assert_eq!(records, vec![vec!["", "x", ""]]);
    }

    #[test]
    fn characters_after_closing_quote_are_kept() {
        // Not well-formed input, but the scanner takes them verbatim
        let records = split_records("ab\"cd\"ef,x");
        assert_eq!(records, vec![vec!["abcdef", "x"]]);
    }

    #[test]
    fn trailing_empty_field_is_preserved() {
        let records = split_records("a,b,");
        assert_eq!(records, vec![vec!["a", "b", ""]]);
    }

    #[test]
    fn empty_input_has_no_records() {
        assert!(split_records("").is_empty());
    }
}

mod normalize_field_tests {
    use super::*;

    #[test]
    fn empty_is_null() {
        assert_eq!(normalize_field(""), None);
    }

    #[test]
    fn whitespace_only_is_null() {
        assert_eq!(normalize_field("   "), None);
    }

    #[test]
    fn legacy_quote_pair_literal_is_null() {
        // A doubly-encoded blank marker decodes to the two-character string
        // `""`; it must normalize to null, not survive as text
        assert_eq!(normalize_field("\"\""), None);
    }

    #[test]
    fn values_are_trimmed() {
        assert_eq!(normalize_field("  Static Orb  "), Some("Static Orb".to_string()));
    }

    #[test]
    fn plain_value_passes_through() {
        assert_eq!(normalize_field("16.36"), Some("16.36".to_string()));
    }
}

mod decode_tests {
    use super::*;

    #[test]
    fn decodes_a_complete_row() {
        let text = format!(
            "{}\n\"17173\",\"Magic\",\"7th Edition\",\"Static Orb\",\"\",\"319\",\"R\",\"Near Mint\",\"16.36\",\"0\",\"16.39\",\"16.39\",\"1\",\"0\",\"16.39\",\"\"\n",
            header_line()
        );

        let import = decode(&text).unwrap();

        assert_eq!(import.rows.len(), 1);
        assert_eq!(import.skipped_rows, 0);
        let row = &import.rows[0];
        assert_eq!(row.tcgplayer_id.as_deref(), Some("17173"));
        assert_eq!(row.product_name.as_deref(), Some("Static Orb"));
        assert_eq!(row.title, None);
        assert_eq!(row.photo_url, None);
        assert_eq!(row.quantity_value(), 1);
    }

    #[test]
    fn decodes_unquoted_fields() {
        let text = format!(
            "{}\n17173,Magic,7th Edition,Static Orb,,319,R,Near Mint,16.36,0,16.39,16.39,1,0,16.39,\n",
            header_line()
        );

        let import = decode(&text).unwrap();
        assert_eq!(import.rows[0].set_name.as_deref(), Some("7th Edition"));
        assert_eq!(import.rows[0].title, None);
    }

    #[test]
    fn maps_columns_by_header_name_not_position() {
        let text = "Product Name,Total Quantity,TCG Marketplace Price\nStatic Orb,3,16.39\n";

        let import = decode(text).unwrap();

        let row = &import.rows[0];
        assert_eq!(row.product_name.as_deref(), Some("Static Orb"));
        assert_eq!(row.quantity_value(), 3);
        assert_eq!(row.marketplace_price_value(), Some(16.39));
        assert_eq!(row.tcgplayer_id, None);
    }

    #[test]
    fn skips_and_counts_malformed_rows() {
        let text = "Product Name,Total Quantity\nStatic Orb,1\nonly one field\nMox Pearl,2\n";

        let import = decode(text).unwrap();

        assert_eq!(import.rows.len(), 2);
        assert_eq!(import.skipped_rows, 1);
        assert_eq!(import.rows[1].product_name.as_deref(), Some("Mox Pearl"));
    }

    #[test]
    fn drops_out_of_stock_rows() {
        let text = "Product Name,Total Quantity\nStatic Orb,0\nMox Pearl,1\nNo Quantity,\n";

        let import = decode(text).unwrap();

        assert_eq!(import.rows.len(), 1);
        assert_eq!(import.rows[0].product_name.as_deref(), Some("Mox Pearl"));
        assert_eq!(import.out_of_stock_rows, 2);
    }

    #[test]
    fn fails_without_any_recognized_header() {
        let result = decode("foo,bar,baz\n1,2,3\n");
        assert!(matches!(result, Err(InventoryError::MissingHeader)));
    }

    #[test]
    fn fails_on_empty_input() {
        assert!(matches!(decode(""), Err(InventoryError::MissingHeader)));
        assert!(matches!(decode("\n\n"), Err(InventoryError::MissingHeader)));
    }

    #[test]
    fn ignores_unrecognized_extra_columns() {
        let text = "Product Name,Total Quantity,Scanner Notes\nStatic Orb,1,shelf B\n";

        let import = decode(text).unwrap();

        assert_eq!(import.rows.len(), 1);
        assert_eq!(import.rows[0].product_name.as_deref(), Some("Static Orb"));
    }

    #[test]
    fn quoted_empty_fields_normalize_to_null() {
        let text = "Product Name,Number,Total Quantity\n\"Static Orb\",\"\",\"1\"\n";

        let import = decode(text).unwrap();

        assert_eq!(import.rows[0].number, None);
    }
}
