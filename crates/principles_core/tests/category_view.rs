use principles_core::db::open_db_in_memory;
use principles_core::{CatalogError, CategoryService, RecordRef};
use rusqlite::Connection;

fn seed(conn: &Connection) {
    conn.execute_batch(
        "INSERT INTO categories (id, name) VALUES (2, 'Teamwork'), (1, 'Craft');
         INSERT INTO principles (id, title, description, category_id) VALUES
            (1, 'A', 'first', 1),
            (2, 'B', 'second', 2),
            (3, 'C', 'third', 1),
            (4, 'D', 'fourth', NULL);",
    )
    .unwrap();
}

#[test]
fn landing_lists_categories_without_selection() {
    let conn = open_db_in_memory().unwrap();
    seed(&conn);

    let view = CategoryService::sqlite(&conn).assemble(None).unwrap();
    let names = view
        .categories
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Craft", "Teamwork"]);
    assert!(view.selected.is_none());
}

#[test]
fn selected_category_lists_its_principles_and_keeps_navigation() {
    let conn = open_db_in_memory().unwrap();
    seed(&conn);

    let view = CategoryService::sqlite(&conn).assemble(Some(1)).unwrap();
    assert_eq!(view.categories.len(), 2);

    let selected = view.selected.expect("category 1 should be selected");
    assert_eq!(selected.category.name, "Craft");
    let listed = selected
        .principles
        .iter()
        .map(|p| (p.id, p.title.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(listed, vec![(1, "A"), (3, "C")]);
}

#[test]
fn empty_category_has_no_principles() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("INSERT INTO categories (id, name) VALUES (9, 'Empty');")
        .unwrap();

    let view = CategoryService::sqlite(&conn).assemble(Some(9)).unwrap();
    assert!(view.selected.unwrap().principles.is_empty());
}

#[test]
fn unknown_category_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    seed(&conn);

    let err = CategoryService::sqlite(&conn).assemble(Some(99)).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(RecordRef::Category(99))));
}
