use actionable_list::{
    slugify, CellOutput, Column, ColumnBuilder, ColumnError, Formatter, HtmlString, Htmlable,
};
use serde_json::{json, Value};

fn sum(args: &[Value]) -> String {
    args.iter().filter_map(Value::as_i64).sum::<i64>().to_string()
}

struct Badge;

impl Htmlable for Badge {
    fn to_html(&self) -> String {
        "<b>X</b>".to_string()
    }
}

#[test]
fn test_slug_follows_name_when_not_set() {
    for name in ["Age", "Created At", "user_name", "Price, net"] {
        let column = Column::builder().set_name(name).build();
        assert_eq!(column.slug(), slugify(name));
    }
}

#[test]
fn test_explicit_slug_overrides_in_any_order() {
    let column = Column::builder().set_name("Age").set_slug("years").build();
    assert_eq!(column.slug(), "years");

    let column = Column::builder().set_slug("years").set_name("Age").build();
    assert_eq!(column.slug(), "years");
}

#[test]
fn test_sortable_name_controls_sorting() {
    let column = Column::builder()
        .set_name("Age")
        .set_sortable_name(None)
        .build();
    assert!(!column.is_sortable());

    let column = Column::builder()
        .set_name("Age")
        .set_sortable_name(Some("x"))
        .build();
    assert_eq!(column.sortable_name(), Some("x"));
}

#[test]
fn test_actions_column_has_defaults() {
    let column = ColumnBuilder::actions().build();
    assert!(column.has_actions());
    assert_eq!(column.name(), "");
    assert_eq!(column.slug(), "");
    assert_eq!(column.sortable_name(), None);
}

#[test]
fn test_literal_formatter_ignores_row() {
    let column = Column::builder().set_name("Greeting").set_formatter("Hello").build();
    for row in [json!(null), json!(7), json!([1, 2]), json!({"id": 1})] {
        assert_eq!(
            column.cell_output(&row).unwrap(),
            CellOutput::Text("Hello".to_string())
        );
    }
}

#[test]
fn test_computed_formatter_spreads_row() {
    let column = Column::builder()
        .set_name("Total")
        .set_formatter(Formatter::computed(sum))
        .build();

    assert_eq!(column.cell_output(&json!([2, 3])).unwrap().as_str(), "5");
    assert_eq!(column.cell_output(&json!(7)).unwrap().as_str(), "7");
    assert_eq!(column.cell_output_empty().unwrap().as_str(), "0");
}

#[test]
fn test_computed_formatter_sees_single_argument_for_non_sequence() {
    let column = Column::builder()
        .set_name("Arity")
        .set_formatter(Formatter::computed(|args: &[Value]| {
            format!("{}:{}", args.len(), args[0])
        }))
        .build();
    assert_eq!(column.cell_output(&json!({"a": 1})).unwrap().as_str(), r#"1:{"a":1}"#);
}

#[test]
fn test_rendered_formatter_returns_markup() {
    let column = Column::builder()
        .set_name("Badge")
        .set_formatter(Formatter::rendered(Badge))
        .build();
    let output = column.cell_output(&json!("anything")).unwrap();
    assert_eq!(output, CellOutput::Html(HtmlString::new("<b>X</b>")));
    assert_eq!(output.to_html(), "<b>X</b>");
}

#[test]
fn test_invalid_formatter_is_rejected_at_set_time() {
    let err = Column::builder().try_set_formatter(json!(42)).unwrap_err();
    assert!(matches!(err, ColumnError::InvalidFormatter(_)));
}

#[test]
fn test_missing_formatter_is_an_error() {
    let column = Column::builder().set_name("Age").build();
    assert!(matches!(
        column.cell_output(&json!([])),
        Err(ColumnError::MissingFormatter { .. })
    ));
}

#[test]
fn test_fluent_chain() {
    let column = Column::builder()
        .set_name("Age")
        .set_sortable_name(Some("age"))
        .set_formatter(Formatter::computed(|args: &[Value]| {
            args[0]["age"].to_string()
        }))
        .build();

    assert_eq!(column.name(), "Age");
    assert_eq!(column.slug(), "age");
    assert_eq!(column.sortable_name(), Some("age"));
    assert_eq!(column.cell_output(&json!({"age": 36})).unwrap().as_str(), "36");
}

#[test]
fn test_frozen_column_renders_rows_in_parallel() {
    let column = Column::builder()
        .set_name("Total")
        .set_formatter(Formatter::computed(sum))
        .build();
    let rows: Vec<Value> = (0..8).map(|i| json!([i, i])).collect();

    let column = &column;
    let outputs: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = rows
            .iter()
            .map(|row| scope.spawn(move || column.cell_output(row).unwrap().to_string()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let expected: Vec<String> = (0..8).map(|i: i64| (i * 2).to_string()).collect();
    assert_eq!(outputs, expected);
}
