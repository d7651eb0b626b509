//! End-to-end table output: CSV source in, formatted table out.

use std::io::Write;
use tabrec::prelude::*;

const PORTFOLIO: &str = "name,shares,price\n\
                         \"AA\",100,32.20\n\
                         \"IBM\",50,91.10\n\
                         \"CAT\",150,83.44\n\
                         \"MSFT\",200,51.23\n";

const FIELDS: [&str; 3] = ["name", "shares", "price"];

fn portfolio() -> Vec<Stock> {
    let outcome: ReadOutcome<Stock> = read_csv_as_instances(PORTFOLIO.as_bytes()).unwrap();
    assert!(outcome.is_clean());
    outcome.records
}

fn render(formatter: &dyn TableFormatter, fields: &[&str]) -> String {
    let mut out = Vec::new();
    print_table(&portfolio(), fields, formatter, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_text_table_from_csv_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PORTFOLIO.as_bytes()).unwrap();

    let outcome: ReadOutcome<Stock> = read_csv_file(file.path()).unwrap();
    let mut out = Vec::new();
    print_table(&outcome.records, &FIELDS, &TextTableFormatter::new(), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "      name     shares      price");
    assert_eq!(lines[1], "---------- ---------- ---------- ");
    assert_eq!(lines[2], "        AA        100       32.2");
    assert_eq!(lines[5], "      MSFT        200      51.23");
}

#[test]
fn test_column_formats_over_csv() {
    let formatter = ColumnFormatter::new(CsvTableFormatter, &["%s", "%d", "%0.2f"]).unwrap();
    assert_eq!(
        render(&formatter, &FIELDS),
        "name,shares,price\nAA,100,32.20\nIBM,50,91.10\nCAT,150,83.44\nMSFT,200,51.23\n"
    );
}

#[test]
fn test_html_with_both_decorators() {
    let formatter = UpperHeaders::new(
        ColumnFormatter::new(HtmlTableFormatter, &["%s", "%d", "%0.2f"]).unwrap(),
    );
    let output = render(&formatter, &FIELDS);
    let mut lines = output.lines();
    assert_eq!(
        lines.next(),
        Some("<tr> <th>NAME</th> <th>SHARES</th> <th>PRICE</th> </tr>")
    );
    assert_eq!(
        lines.next(),
        Some("<tr> <td>AA</td> <td>100</td> <td>32.20</td> </tr>")
    );
}

#[test]
fn test_formatter_from_config() {
    let config = FormatConfig::from_toml_str(
        "format = \"csv\"\ncolumn_formats = [\"%s\", \"%d\", \"%0.1f\"]\nupper_headers = true\n",
    )
    .unwrap();
    let formatter = create_formatter(&config).unwrap();
    let output = render(formatter.as_ref(), &FIELDS);
    assert!(output.starts_with("NAME,SHARES,PRICE\nAA,100,32.2\n"));
}

#[test]
fn test_unknown_format_name() {
    let err = match create_formatter(&FormatConfig::new("xml")) {
        Err(err) => err,
        Ok(_) => panic!("xml should not be a registered format"),
    };
    assert!(matches!(err, TableError::UnsupportedFormatter { ref name, .. } if name == "xml"));
    assert!(err.to_string().contains("xml"));
}

#[test]
fn test_column_arity_mismatch_is_an_error() {
    let formatter = ColumnFormatter::new(CsvTableFormatter, &["%s", "%d"]).unwrap();
    let mut out = Vec::new();
    let err = print_table(&portfolio(), &FIELDS, &formatter, &mut out).unwrap_err();
    assert!(matches!(err, TableError::ArityMismatch { expected: 2, got: 3 }));
}

#[test]
fn test_printing_twice_is_identical() {
    let formatter = UpperHeaders::new(TextTableFormatter::new());
    assert_eq!(render(&formatter, &FIELDS), render(&formatter, &FIELDS));
}

#[test]
fn test_generic_records_print_like_stocks() {
    let schema = std::sync::Arc::new(
        RecordSchema::builder("Holding")
            .field("ticker", &tabrec::validation::kind::non_empty_string())
            .field("lots", &tabrec::validation::kind::positive_integer())
            .build()
            .unwrap(),
    );
    let records = vec![
        Record::new(schema.clone(), vec![Value::from("AA"), Value::Integer(3)]).unwrap(),
        Record::new(schema, vec![Value::from("IBM"), Value::Integer(1)]).unwrap(),
    ];

    let mut out = Vec::new();
    print_table(&records, &["lots", "ticker"], &CsvTableFormatter, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "lots,ticker\n3,AA\n1,IBM\n");
}

#[test]
fn test_portfolio_total() {
    let total = portfolio_cost(&portfolio());
    let expected = 100.0 * 32.2 + 50.0 * 91.1 + 150.0 * 83.44 + 200.0 * 51.23;
    assert!((total - expected).abs() < 1e-9);
}
