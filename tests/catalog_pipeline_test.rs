use std::io::Write;

use assert_float_eq::assert_float_absolute_eq;
use tempfile::{Builder, NamedTempFile};

use menu_planner_rs::catalog::{load_catalog, RowPolicy};
use menu_planner_rs::interface::format_menus;
use menu_planner_rs::planner::{generate_menus, split_labels, MenuRequest, NO_MENUS_MESSAGE};
use menu_planner_rs::MenuError;

const CATALOG: &str = "\
name,course,diet,Price,No Of Peoples Can Eat,Images
Hara Bhara Kabab,Starter,Vegetarian,6,2,https://img.example/kabab.jpg
Chicken Tikka,Starter,Non Vegetarian,9,2,
Veg Manchurian,starter,vegetarian,4,2,
Paneer Lababdar,Main Course,Vegetarian,22,4,https://img.example/paneer.jpg
Mutton Rogan Josh,Main Course,Non Vegetarian,30,4,
Chole Bhature,Main Course,Vegetarian,14,2,
Gulab Jamun,Dessert,Vegetarian,5,4,
Caramel Custard,Dessert,Non Vegetarian,7,2,
";

fn catalog_file(content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn vegetarian_request(budget: f64) -> MenuRequest {
    MenuRequest::new(
        budget,
        4,
        split_labels("Starter, Main Course, Dessert"),
        split_labels("vegetarian"),
    )
}

#[test]
fn test_csv_catalog_to_menus() {
    let file = catalog_file(CATALOG);
    let report = load_catalog(file.path(), RowPolicy::Reject).unwrap();
    assert_eq!(report.catalog.len(), 8);

    let menus = generate_menus(report.catalog.dishes(), &vegetarian_request(60.0)).unwrap();
    assert_eq!(menus.len(), 2);

    // Kabab 12 + Chole 28 + Custard 14 (desserts skip the diet filter).
    let first = &menus.menus[0];
    let names: Vec<&str> = first.items.iter().map(|i| i.dish.as_str()).collect();
    assert_eq!(names, vec!["Hara Bhara Kabab", "Chole Bhature", "Caramel Custard"]);
    assert_float_absolute_eq!(first.total_cost, 54.0, 1e-9);
    assert_eq!(
        first.items[0].image_link.as_deref(),
        Some("https://img.example/kabab.jpg")
    );

    // Manchurian 8 + Paneer 22 + Jamun 5.
    let second = &menus.menus[1];
    let names: Vec<&str> = second.items.iter().map(|i| i.dish.as_str()).collect();
    assert_eq!(names, vec!["Veg Manchurian", "Paneer Lababdar", "Gulab Jamun"]);
    assert_float_absolute_eq!(second.total_cost, 35.0, 1e-9);

    let text = format_menus(&menus);
    assert!(text.contains("Menu 2:"));
    assert!(text.contains("Image Link: No image available"));
}

#[test]
fn test_unsatisfiable_request_renders_message() {
    let file = catalog_file(CATALOG);
    let report = load_catalog(file.path(), RowPolicy::Reject).unwrap();

    let menus = generate_menus(report.catalog.dishes(), &vegetarian_request(20.0)).unwrap();
    assert!(menus.is_empty());
    assert_eq!(format_menus(&menus).trim(), NO_MENUS_MESSAGE);
}

#[test]
fn test_malformed_rows_under_each_policy() {
    let content = format!("{}Broken Platter,Starter,Vegetarian,10,0,\n", CATALOG);
    let file = catalog_file(&content);

    assert!(matches!(
        load_catalog(file.path(), RowPolicy::Reject),
        Err(MenuError::MalformedCatalogRow { row: 8, .. })
    ));

    let report = load_catalog(file.path(), RowPolicy::Skip).unwrap();
    assert_eq!(report.catalog.len(), 8);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].name, "Broken Platter");

    let menus = generate_menus(report.catalog.dishes(), &vegetarian_request(60.0)).unwrap();
    assert_eq!(menus.len(), 2);
}

#[test]
fn test_empty_catalog_still_validates_and_reports_no_menus() {
    let file = catalog_file("name,course,diet,Price,No Of Peoples Can Eat,Images\n");
    let report = load_catalog(file.path(), RowPolicy::Reject).unwrap();
    assert!(report.catalog.is_empty());

    let invalid = MenuRequest::new(0.0, 4, split_labels("starter"), split_labels("vegetarian"));
    assert!(matches!(
        generate_menus(report.catalog.dishes(), &invalid),
        Err(MenuError::InvalidConstraint(_))
    ));

    let menus = generate_menus(report.catalog.dishes(), &vegetarian_request(60.0)).unwrap();
    assert!(menus.is_empty());
    assert_eq!(format_menus(&menus).trim(), NO_MENUS_MESSAGE);
}
