//! Builds the navigation tree and display areas from configuration.

use std::rc::Rc;

use anyhow::Result;
use log::{info, warn};

use crate::config::{CategoryConfig, Config, ItemConfig};
use crate::nav::{AreaController, ContentRef, NavigationTree, TextVisualFactory, VisualFactory, VisualKind};

fn item(label: &str, text: &str) -> ItemConfig {
    ItemConfig {
        label: label.to_string(),
        text: Some(text.to_string()),
    }
}

fn category(label: &str, items: Vec<ItemConfig>) -> CategoryConfig {
    CategoryConfig {
        label: label.to_string(),
        items,
    }
}

/// Shop catalog used when the config does not define categories
pub fn demo_catalog() -> Vec<CategoryConfig> {
    vec![
        category(
            "Electronics",
            vec![
                item("Smartphones", "Smartphones\n\nLatest models available:\n- iPhone 15 Pro\n- Samsung Galaxy S24\n- Google Pixel 8"),
                item("Laptops", "Laptops\n\nTop picks:\n- MacBook Pro M3\n- Dell XPS 15\n- ThinkPad X1 Carbon"),
                item("Headphones", "Headphones\n\nBest sellers:\n- Sony WH-1000XM5\n- AirPods Pro\n- Bose QuietComfort"),
                item("Cameras", "Cameras\n\nProfessional gear:\n- Sony A7 IV\n- Canon R6\n- Nikon Z8"),
            ],
        ),
        category(
            "Clothing",
            vec![
                item("Men", "Men's Clothing\n\n- Shirts\n- Pants\n- Shoes\n- Accessories"),
                item("Women", "Women's Clothing\n\n- Dresses\n- Tops\n- Skirts\n- Accessories"),
                item("Kids", "Kids Clothing\n\n- Boys\n- Girls\n- Toddlers\n- Babies"),
            ],
        ),
        category(
            "Books",
            vec![
                item("Fiction", "Fiction Books\n\n- Mystery\n- Romance\n- Sci-Fi\n- Fantasy"),
                item("Non-Fiction", "Non-Fiction Books\n\n- Biography\n- History\n- Science\n- Self-Help"),
                item("Technical", "Technical Books\n\n- Programming\n- AI/ML\n- Cloud Computing\n- Cybersecurity"),
            ],
        ),
        category(
            "Sports",
            vec![
                item("Football", "Football Equipment\n\n- Balls\n- Boots\n- Jerseys\n- Shin Guards"),
                item("Basketball", "Basketball Equipment\n\n- Balls\n- Shoes\n- Jerseys\n- Hoops"),
                item("Tennis", "Tennis Equipment\n\n- Rackets\n- Balls\n- Shoes\n- Bags"),
                ItemConfig {
                    label: "Swimming".to_string(),
                    text: None,
                },
            ],
        ),
    ]
}

/// Populate a tree from category definitions. Duplicate labels are
/// skipped with a warning.
pub fn build_tree(categories: &[CategoryConfig], factory: Rc<dyn VisualFactory>) -> NavigationTree {
    let mut tree = NavigationTree::with_factory(factory.clone());

    for category in categories {
        let Some(index) = tree.add_category(category.label.as_str()) else {
            warn!("Skipping duplicate category '{}'", category.label);
            continue;
        };

        for item in &category.items {
            let content = item
                .text
                .as_ref()
                .map(|text| ContentRef::from_boxed(factory.create_visual(VisualKind::Text(text.clone()))));

            if tree.add_item(index, item.label.as_str(), content).is_none() {
                warn!("Skipping duplicate item '{}' in '{}'", item.label, category.label);
            }
        }
    }

    tree
}

/// Tree, areas and initial render, all from one config
pub fn build_controller(config: &Config) -> Result<AreaController> {
    let factory: Rc<dyn VisualFactory> = Rc::new(TextVisualFactory::new(config.placeholder_text.clone()));

    let categories = if config.categories.is_empty() {
        demo_catalog()
    } else {
        config.categories.clone()
    };

    let mut tree = build_tree(&categories, factory);
    tree.set_tab_width(config.tab_width);
    info!(
        "Built navigation tree with {} categories for {} areas",
        tree.category_count(),
        config.areas.len()
    );

    let mut controller = AreaController::new(tree, config.display_areas())?;
    controller.initialize();
    Ok(controller)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_shape() {
        let catalog = demo_catalog();
        let labels: Vec<_> = catalog.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Electronics", "Clothing", "Books", "Sports"]);
        assert_eq!(catalog[0].items.len(), 4);
    }

    #[test]
    fn test_build_tree_skips_duplicates() {
        let categories = vec![
            category("A", vec![item("x", "x"), item("x", "again")]),
            category("A", vec![item("y", "y")]),
        ];
        let tree = build_tree(&categories, Rc::new(TextVisualFactory::default()));
        assert_eq!(tree.category_count(), 1);
        assert_eq!(tree.item_labels(0usize), vec!["x"]);
    }

    #[test]
    fn test_items_without_text_get_placeholders() {
        let tree = build_tree(&demo_catalog(), Rc::new(TextVisualFactory::default()));
        let swimming = tree.get_content("Sports", "Swimming").unwrap();
        let tennis = tree.get_content("Sports", "Tennis").unwrap();
        assert!(swimming.is_placeholder());
        assert!(!tennis.is_placeholder());
    }

    #[test]
    fn test_build_controller_from_default_config() {
        let controller = build_controller(&Config::default()).unwrap();
        assert_eq!(controller.area_count(), 2);
        assert_eq!(controller.tree().category_count(), 4);
        assert!(controller.areas().iter().all(|area| area.visible_content().is_some()));
    }

    #[test]
    fn test_build_controller_without_areas_fails() {
        let config = Config {
            areas: Vec::new(),
            ..Config::default()
        };
        assert!(build_controller(&config).is_err());
    }
}
