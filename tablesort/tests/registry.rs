use tablesort::{
    Cell, EngineConfig, EventResult, Header, Modifiers, RegistryError, Row, SortKey, Table, TableMessage,
    TableRegistry, TableRow,
};

fn check_results() -> Table {
    Table::new(vec![
        Header::new("Subject"),
        Header::new("Check"),
        Header::new("Failing since"),
    ])
    .with_sort_initial(r#"[{"c":2,"o":1}]"#)
    .with_rows(vec![
        Row::new([
            Cell::new("web-01"),
            Cell::new("disk"),
            Cell::new("Oct 3").with_sort_value("20261003"),
        ]),
        Row::new([
            Cell::new("db-02"),
            Cell::new("load"),
            Cell::new("Sep 28").with_sort_value("20260928"),
        ]),
    ])
}

fn subjects<R: TableRow>(registry: &TableRegistry<R>, id: tablesort::TableId) -> Vec<String> {
    registry
        .get(id)
        .unwrap()
        .rows()
        .iter()
        .map(|r| r.cell_text(0).unwrap_or_default().to_string())
        .collect()
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_attach_sorts_and_registers() {
    let mut registry = TableRegistry::new();
    let id = registry.attach(check_results());

    assert_eq!(registry.len(), 1);
    assert!(registry.contains(id));
    assert_eq!(registry.ids(), &[id]);
    assert_eq!(subjects(&registry, id), vec!["db-02", "web-01"]);
}

#[test]
fn test_dispatch_header_click() {
    let mut registry = TableRegistry::new();
    let id = registry.attach(check_results());

    let result = registry
        .dispatch(TableMessage::header_click(id, 0, Modifiers::NONE))
        .unwrap();
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(subjects(&registry, id), vec!["db-02", "web-01"]);
    assert_eq!(
        registry.get(id).unwrap().sort_config().sort_order(),
        &[SortKey::asc(0)]
    );

    registry
        .dispatch(TableMessage::header_click(id, 0, Modifiers::NONE))
        .unwrap();
    assert_eq!(subjects(&registry, id), vec!["web-01", "db-02"]);
}

#[test]
fn test_update_after_out_of_band_append() {
    let mut registry = TableRegistry::new();
    let id = registry.attach(check_results());

    let table = registry.get_mut(id).unwrap();
    table.rows_mut().push(Row::new([
        Cell::new("lb-03"),
        Cell::new("ping"),
        Cell::new("Jan 1").with_sort_value("20260101"),
    ]));
    assert_eq!(subjects(&registry, id), vec!["db-02", "web-01", "lb-03"]);

    let result = registry.dispatch(TableMessage::update(id)).unwrap();
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(subjects(&registry, id), vec!["lb-03", "db-02", "web-01"]);
}

#[test]
fn test_push_row_resorts() {
    let mut registry = TableRegistry::new();
    let id = registry.attach(check_results());

    registry.get_mut(id).unwrap().push_row(Row::new([
        Cell::new("mq-04"),
        Cell::new("queue"),
        Cell::new("Oct 1").with_sort_value("20261001"),
    ]));
    assert_eq!(subjects(&registry, id), vec!["db-02", "mq-04", "web-01"]);
}

#[test]
fn test_rows_keep_their_data_across_sorts() {
    let mut registry = TableRegistry::new();
    let id = registry.attach(
        Table::new(vec![Header::new("Subject")]).with_rows(vec![
            Row::new(["b"]).with_data("subject-id", "2b"),
            Row::new(["a"]).with_data("subject-id", "1a"),
        ]),
    );

    registry
        .dispatch(TableMessage::header_click(id, 0, Modifiers::NONE))
        .unwrap();
    let rows = registry.get(id).unwrap().rows();
    assert_eq!(rows[0].data("subject-id"), Some("1a"));
    assert_eq!(rows[1].data("subject-id"), Some("2b"));
}

// ============================================================================
// Isolation
// ============================================================================

#[test]
fn test_tables_are_independent() {
    let mut registry = TableRegistry::new();
    let first = registry.attach(check_results());
    let second = registry.attach(check_results());
    assert_ne!(first, second);

    registry
        .dispatch(TableMessage::header_click(first, 1, Modifiers::NONE))
        .unwrap();
    registry
        .dispatch(TableMessage::header_click(first, 1, Modifiers::NONE))
        .unwrap();

    assert_eq!(
        registry.get(first).unwrap().sort_config().sort_order(),
        &[SortKey::desc(1)]
    );
    assert_eq!(
        registry.get(second).unwrap().sort_config().sort_order(),
        &[SortKey::asc(2)]
    );
    assert_eq!(subjects(&registry, first), vec!["db-02", "web-01"]);
    assert_eq!(subjects(&registry, second), vec!["db-02", "web-01"]);
    assert!(registry.get(second).unwrap().headers()[2].has_class("sortHeaderAsc"));
    assert!(!registry.get(second).unwrap().headers()[1].has_class("sortHeaderDesc"));
}

#[test]
fn test_detach_returns_markup_and_forgets_table() {
    let mut registry = TableRegistry::new();
    let id = registry.attach(check_results());
    registry
        .dispatch(TableMessage::header_click(id, 0, Modifiers::NONE))
        .unwrap();

    let table = registry.detach(id).unwrap();
    assert!(registry.is_empty());
    assert_eq!(table.rows[0].cells[0].text, "db-02");
    assert_eq!(table.sort_initial.as_deref(), Some(r#"[{"c":0,"o":1}]"#));

    let err = registry.dispatch(TableMessage::update(id)).unwrap_err();
    assert_eq!(err, RegistryError::UnknownTable(id));
    assert!(registry.detach(id).is_none());
}

#[test]
fn test_reattach_restores_order() {
    let mut registry = TableRegistry::new();
    let id = registry.attach(check_results());
    registry
        .dispatch(TableMessage::header_click(id, 0, Modifiers::NONE))
        .unwrap();
    registry
        .dispatch(TableMessage::header_click(id, 1, Modifiers::shift()))
        .unwrap();

    let table = registry.detach(id).unwrap();
    let id = registry.attach(table);
    assert_eq!(
        registry.get(id).unwrap().sort_config().sort_order(),
        &[SortKey::asc(0), SortKey::asc(1)]
    );
}

#[test]
fn test_extend_rows_resorts_once() {
    let mut registry = TableRegistry::new();
    let id = registry.attach(check_results());

    registry.get_mut(id).unwrap().extend_rows(vec![
        Row::new([
            Cell::new("mq-04"),
            Cell::new("queue"),
            Cell::new("Oct 1").with_sort_value("20261001"),
        ]),
        Row::new([Cell::new("dns-05"), Cell::new("resolve")]),
    ]);
    assert_eq!(registry.get(id).unwrap().row_count(), 4);
    assert_eq!(
        subjects(&registry, id),
        vec!["dns-05", "db-02", "mq-04", "web-01"]
    );
}

#[test]
fn test_reattach_with_other_classes_replaces_markers() {
    let mut registry = TableRegistry::new();
    let id = registry.attach(check_results());
    registry
        .dispatch(TableMessage::header_click(id, 0, Modifiers::NONE))
        .unwrap();
    let table = registry.detach(id).unwrap();
    assert!(table.headers[0].has_class("sortHeaderAsc"));

    let mut registry = TableRegistry::with_config(
        EngineConfig::new()
            .sortable_class("s")
            .ascending_class("up")
            .descending_class("down"),
    );
    assert_eq!(registry.config().ascending_class, "up");
    let id = registry.attach(table);
    registry
        .dispatch(TableMessage::header_click(id, 1, Modifiers::NONE))
        .unwrap();

    let headers = registry.get(id).unwrap().headers();
    assert_eq!(headers[0].classes(), &["s".to_string()]);
    assert_eq!(headers[1].classes(), &["s".to_string(), "up".to_string()]);
    assert_eq!(headers[2].classes(), &["s".to_string()]);
}
