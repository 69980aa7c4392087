use super::{Action, Transition};
use crate::models::{Catalog, Flow};
use crate::services::replies;

const LEAVE: &[&str] = &["back", "menu", "exit", "cancel"];

pub fn show_category(name: &str, catalog: &Catalog) -> Transition {
    match catalog.category(name) {
        Some(category) => Transition::Continue {
            flow: Flow::Menu {
                category: Some(category.name.clone()),
            },
            reply: replies::category_detail(catalog, category),
        },
        None => Transition::Continue {
            flow: Flow::Menu { category: None },
            reply: replies::menu_not_understood(),
        },
    }
}

/// Browsing order: leave words, `order <item>`, an item name (current category first),
/// then a category name. Item and category matches are substring matches.
pub fn advance(current: Option<&str>, normalized: &str, catalog: &Catalog) -> Transition {
    if LEAVE.contains(&normalized) {
        return Transition::Exit {
            reply: replies::main_menu(catalog),
        };
    }

    let stay = || Transition::Continue {
        flow: Flow::Menu {
            category: current.map(str::to_string),
        },
        reply: replies::menu_not_understood(),
    };

    if let Some(wanted) = normalized.strip_prefix("order ") {
        return match find_item(current, wanted.trim(), catalog) {
            Some((category, item)) => Transition::Resolve(Action::MenuOrder {
                item,
                category: Some(category),
            }),
            None => stay(),
        };
    }

    if let Some((category, item)) = find_item(current, normalized, catalog) {
        if let Some(cat) = catalog.category(&category) {
            return Transition::Continue {
                reply: replies::item_price(catalog, cat, &item),
                flow: Flow::Menu {
                    category: Some(category),
                },
            };
        }
    }

    if let Some(category) = catalog.find_category_in(normalized) {
        return Transition::Continue {
            flow: Flow::Menu {
                category: Some(category.name.clone()),
            },
            reply: replies::category_detail(catalog, category),
        };
    }

    stay()
}

fn find_item(current: Option<&str>, text: &str, catalog: &Catalog) -> Option<(String, String)> {
    let in_current = current
        .and_then(|name| catalog.category(name))
        .and_then(|cat| catalog.find_item_in(cat, text).map(|item| (cat, item)));

    in_current
        .or_else(|| catalog.find_item_anywhere(text))
        .map(|(cat, item)| (cat.name.clone(), item.to_string()))
}
