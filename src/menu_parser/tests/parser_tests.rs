//! Tests for the main menu CSV parser functionality

use super::*;
use crate::error::{Error, NumericField};
use crate::menu_parser::parse_menu;
use crate::models::MenuItem;

#[test]
fn test_parse_complete_export() {
    let result = parse_default(&create_test_menu_csv()).unwrap();
    let menu = &result.menu;

    let names: Vec<&str> = menu.categories().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Soups", "Salads"]);

    let soups = menu.category("Soups").unwrap();
    assert_eq!(soups.items()[0], MenuItem::new(1, "Borscht", 300.0, 45.5));
    assert_eq!(
        soups.items()[1],
        MenuItem::new(2, "Solyanka \"Meat\"", 350.0, 52.0)
    );

    let salads = menu.category("Salads").unwrap();
    assert_eq!(salads.items()[0], MenuItem::new(3, "Olivier", 150.0, 30.0));
    assert_eq!(
        salads.items()[1],
        MenuItem::new(4, "Caesar with chicken", 200.0, 65.25)
    );

    assert_eq!(menu.item_count(), 4);
}

#[test]
fn test_identifiers_strictly_increasing() {
    let result = parse_default(&create_test_menu_csv()).unwrap();

    let ids: Vec<u32> = result.menu.items().map(MenuItem::id).collect();
    assert_eq!(ids.first(), Some(&1));
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_empty_categories_never_returned() {
    let result = parse_default(&create_test_menu_csv()).unwrap();

    assert!(result.menu.category("Desserts").is_none());
    assert!(result.menu.categories().iter().all(|c| !c.is_empty()));
    assert_eq!(result.stats.empty_categories_dropped, 1);
}

#[test]
fn test_header_followed_by_header_yields_no_category() {
    let content = with_preamble(
        "Breakfast,,
Lunch,,
Pancakes,\"0,200\",25-00
",
    );

    let menu = parse_default(&content).unwrap().menu;

    assert_eq!(menu.len(), 1);
    assert!(menu.category("Breakfast").is_none());
    assert_eq!(menu.categories()[0].name(), "Lunch");
}

#[test]
fn test_parse_is_idempotent() {
    let content = create_test_menu_csv();
    let parser = MenuCsvParser::default();

    let first = parser.parse(&content).unwrap();
    let second = parser.parse(&content).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_quoted_comma_is_one_field() {
    let content = with_preamble(
        "Bakery,,
Bun,\"5,25\",3-00
",
    );

    let menu = parse_default(&content).unwrap().menu;
    let item = &menu.categories()[0].items()[0];

    assert_eq!(item.name(), "Bun");
    assert_eq!(item.weight(), 5250.0);
    assert_eq!(item.price(), 3.0);
}

#[test]
fn test_doubled_quote_unescaped() {
    let content = with_preamble(
        "Drinks,,
\"a\"\"b\",\"0,5\",10-00
",
    );

    let menu = parse_default(&content).unwrap().menu;
    assert_eq!(menu.categories()[0].items()[0].name(), "a\"b");
}

#[test]
fn test_numeric_conversion() {
    let content = with_preamble(
        "Mains,,
Steak,\"1,250\",12-50
",
    );

    let menu = parse_default(&content).unwrap().menu;
    let item = &menu.categories()[0].items()[0];

    assert_eq!(item.weight(), 1250.0);
    assert_eq!(item.price(), 12.5);
}

#[test]
fn test_preamble_skip_with_single_item() {
    let content = with_preamble(
        "Soups,,
Borscht,\"0,300\",45-50
",
    );

    let result = parse_default(&content).unwrap();

    assert_eq!(result.menu.len(), 1);
    assert_eq!(result.menu.item_count(), 1);
    assert_eq!(result.stats.preamble_rows, 5);
    assert_eq!(result.stats.total_rows, 7);
}

#[test]
fn test_preamble_rows_never_contribute_data() {
    // Rows that would be a header and an item are inside the preamble
    let content = "Soups,,
Borscht,\"0,300\",45-50
x,,
y,,
z,,
Salads,,
Olivier,\"0,150\",30-00
";

    let menu = parse_default(content).unwrap().menu;

    assert_eq!(menu.len(), 1);
    assert_eq!(menu.categories()[0].name(), "Salads");
    assert_eq!(menu.categories()[0].items()[0].id(), 1);
}

#[test]
fn test_item_before_header_is_malformed_row() {
    let content = with_preamble("Borscht,\"0,300\",45-50\n");

    let err = parse_default(&content).unwrap_err();

    match err {
        Error::MalformedRow { row, name } => {
            assert_eq!(row, 6);
            assert_eq!(name, "Borscht");
        }
        other => panic!("expected MalformedRow, got {:?}", other),
    }
}

#[test]
fn test_malformed_row_reported_before_numeric_errors() {
    let content = with_preamble("Borscht,abc,xyz\n");

    let err = parse_default(&content).unwrap_err();
    assert!(matches!(err, Error::MalformedRow { .. }));
}

#[test]
fn test_invalid_weight_reports_row_and_value() {
    let content = with_preamble(
        "Soups,,
Borscht,\"0,300\",45-50
Solyanka,heavy,52-00
",
    );

    let err = parse_default(&content).unwrap_err();

    match err {
        Error::InvalidNumericField { row, field, value } => {
            assert_eq!(row, 8);
            assert_eq!(field, NumericField::Weight);
            assert_eq!(value, "heavy");
        }
        other => panic!("expected InvalidNumericField, got {:?}", other),
    }
}

#[test]
fn test_missing_price_is_invalid() {
    let content = with_preamble(
        "Bakery,,
Bread,\"0,050\",
",
    );

    let err = parse_default(&content).unwrap_err();

    match err {
        Error::InvalidNumericField { field, value, .. } => {
            assert_eq!(field, NumericField::Price);
            assert_eq!(value, "");
        }
        other => panic!("expected InvalidNumericField, got {:?}", other),
    }
}

#[test]
fn test_non_finite_and_negative_values_rejected() {
    for (weight, price) in [("inf", "1-00"), ("\"0,1\"", "NaN"), ("\"-0,5\"", "1-00")] {
        let content = with_preamble(&format!("Misc,,\nThing,{},{}\n", weight, price));
        let err = parse_default(&content).unwrap_err();
        assert!(
            matches!(err, Error::InvalidNumericField { .. }),
            "weight={} price={} gave {:?}",
            weight,
            price,
            err
        );
    }
}

#[test]
fn test_no_partial_menu_on_failure() {
    let mut content = create_test_menu_csv();
    content.push_str("Desserts,,\nCake,oops,10-00\n");

    assert!(parse_default(&content).is_err());
}

#[test]
fn test_empty_input_succeeds_by_default() {
    let result = parse_default(TEST_PREAMBLE).unwrap();

    assert!(result.menu.is_empty());
    assert!(result.stats.is_empty_input());

    let result = parse_default("").unwrap();
    assert!(result.menu.is_empty());
    assert_eq!(result.stats.total_rows, 0);
}

#[test]
fn test_short_input_is_empty() {
    let result = parse_default("Daily Menu,,\nDate,01.05.2024,\n").unwrap();

    assert!(result.menu.is_empty());
    assert_eq!(result.stats.preamble_rows, 2);
}

#[test]
fn test_empty_input_rejected_when_configured() {
    let config = ParserConfig::default().with_reject_empty_input();

    let err = parse_with(config, TEST_PREAMBLE).unwrap_err();

    assert!(matches!(err, Error::EmptyInput { preamble_rows: 5 }));
}

#[test]
fn test_blank_data_rows_are_not_empty_input() {
    let config = ParserConfig::default().with_reject_empty_input();
    let content = with_preamble(",,\n,12,\n");

    let result = parse_with(config, &content).unwrap();

    assert!(result.menu.is_empty());
    assert_eq!(result.stats.blank_rows, 2);
}

#[test]
fn test_repeated_category_keeps_last_items() {
    let content = with_preamble(
        "Soups,,
Borscht,\"0,300\",45-50
Salads,,
Olivier,\"0,150\",30-00
Soups,,
Solyanka,\"0,350\",52-00
",
    );

    let result = parse_default(&content).unwrap();
    let menu = &result.menu;

    let names: Vec<&str> = menu.categories().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Soups", "Salads"]);

    let soups = menu.category("Soups").unwrap();
    assert_eq!(soups.len(), 1);
    assert_eq!(soups.items()[0], MenuItem::new(1, "Solyanka", 350.0, 52.0));
    assert_eq!(
        menu.category("Salads").unwrap().items()[0],
        MenuItem::new(2, "Olivier", 150.0, 30.0)
    );
    assert_eq!(result.stats.categories_overwritten, 1);
    assert_eq!(result.stats.items_parsed, 3);
}

#[test]
fn test_custom_preamble_and_separators() {
    let config = ParserConfig::default()
        .with_preamble_rows(0)
        .with_weight(crate::config::NumericFieldConfig::new('.', 1.0))
        .with_price(crate::config::NumericFieldConfig::new(',', 1.0));
    let content = "Grill,,
Kebab,250,\"7,90\"
";

    let menu = parse_with(config, content).unwrap().menu;
    let item = &menu.categories()[0].items()[0];

    assert_eq!(item.weight(), 250.0);
    assert_eq!(item.price(), 7.9);
}

#[test]
fn test_short_and_long_rows() {
    let content = with_preamble(
        "Soups
Borscht,\"0,300\",45-50,extra,columns
",
    );

    let menu = parse_default(&content).unwrap().menu;

    assert_eq!(menu.categories()[0].name(), "Soups");
    assert_eq!(menu.categories()[0].items()[0].price(), 45.5);
}

#[test]
fn test_padded_quoted_fields_stay_whole() {
    let content = with_preamble("Soups,,\nBorscht, \"0,300\", 45-50\n");

    let result = parse_default(&content).unwrap();

    assert_eq!(
        result.menu.categories()[0].items(),
        &[MenuItem::new(1, "Borscht", 300.0, 45.5)]
    );
}

#[test]
fn test_cells_are_trimmed() {
    let content = with_preamble(
        "  Soups  ,  ,
  Borscht ,\"0,300\",  45-50  
",
    );

    let menu = parse_default(&content).unwrap().menu;
    let item = &menu.categories()[0].items()[0];

    assert_eq!(menu.categories()[0].name(), "Soups");
    assert_eq!(item.name(), "Borscht");
    assert_eq!(item.weight(), 300.0);
}

#[test]
fn test_crlf_and_bom() {
    let content = format!(
        "\u{feff}{}",
        with_preamble("Soups,,\nBorscht,\"0,300\",45-50\n").replace('\n', "\r\n")
    );

    let menu = parse_default(&content).unwrap().menu;

    assert_eq!(menu.categories()[0].name(), "Soups");
    assert_eq!(menu.categories()[0].items()[0].name(), "Borscht");
}

#[test]
fn test_parse_menu_rejects_invalid_config() {
    let config = ParserConfig::default().with_weight(crate::config::NumericFieldConfig::new(' ', 1.0));

    let err = parse_menu("", &config).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_parser_shared_across_threads() {
    let parser = MenuCsvParser::default();
    let content = create_test_menu_csv();
    let expected = parser.parse(&content).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| parser.parse(&content).unwrap()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
