use std::collections::BTreeMap;

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub hours: String,
    pub address: Vec<String>,
    pub maps_url: String,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategory {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub restaurant: Restaurant,
    pub categories: Vec<MenuCategory>,
    /// Keyed by item name; lookups are case-insensitive.
    #[serde(default)]
    pub prices: BTreeMap<String, u32>,
    #[serde(default)]
    pub cake_flavours: Vec<String>,
}

impl Catalog {
    pub fn from_json(s: &str) -> anyhow::Result<Self> {
        let catalog: Catalog = serde_json::from_str(s).context("invalid catalog JSON")?;
        anyhow::ensure!(
            !catalog.categories.is_empty(),
            "catalog must define at least one menu category"
        );
        Ok(catalog)
    }

    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p)
                    .with_context(|| format!("failed to read catalog file: {p}"))?;
                Self::from_json(&raw)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn category(&self, name: &str) -> Option<&MenuCategory> {
        let name = name.trim().to_lowercase();
        self.categories
            .iter()
            .find(|c| c.name.to_lowercase() == name)
    }

    /// First category (in catalog order) whose name appears anywhere in the text.
    pub fn find_category_in(&self, normalized: &str) -> Option<&MenuCategory> {
        self.categories
            .iter()
            .find(|c| normalized.contains(&c.name.to_lowercase()))
    }

    pub fn price_of(&self, item: &str) -> Option<u32> {
        let item = item.trim().to_lowercase();
        self.prices
            .iter()
            .find(|(name, _)| name.to_lowercase() == item)
            .map(|(_, price)| *price)
    }

    pub fn format_price(&self, item: &str) -> String {
        match self.price_of(item) {
            Some(p) => format!("{}{p}", self.restaurant.currency),
            None => "price on request".to_string(),
        }
    }

    /// Longest item name from the category that appears in the text, so
    /// "iced matcha" wins over "matcha latte" style near-misses.
    pub fn find_item_in<'a>(&self, category: &'a MenuCategory, normalized: &str) -> Option<&'a str> {
        category
            .items
            .iter()
            .filter(|item| normalized.contains(&item.to_lowercase()))
            .max_by_key(|item| item.len())
            .map(|s| s.as_str())
    }

    pub fn find_item_anywhere(&self, normalized: &str) -> Option<(&MenuCategory, &str)> {
        self.categories
            .iter()
            .filter_map(|c| self.find_item_in(c, normalized).map(|item| (c, item)))
            .max_by_key(|(_, item)| item.len())
    }

    pub fn match_flavour(&self, text: &str) -> Option<&str> {
        let lower = text.to_lowercase();
        self.cake_flavours
            .iter()
            .find(|f| lower.contains(&f.to_lowercase()))
            .map(|s| s.as_str())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let category = |name: &str, icon: &str, items: &[&str]| MenuCategory {
            name: name.to_string(),
            icon: icon.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        };

        let prices = [
            ("Espresso", 120),
            ("Americano", 140),
            ("Cappuccino", 160),
            ("Latte", 180),
            ("Mocha", 200),
            ("Matcha Latte", 220),
            ("Iced Matcha", 240),
            ("Matcha Smoothie", 260),
            ("Spiced Chai Latte", 180),
            ("Golden Turmeric Latte", 200),
            ("Hot Chocolate Supreme", 220),
            ("Iced Vanilla Latte", 200),
            ("Cold Brew Float", 240),
            ("Frappuccino Special", 280),
            ("Virgin Mojito", 180),
            ("Fruit Punch", 160),
            ("Lemon Mint Cooler", 140),
        ]
        .into_iter()
        .map(|(name, price)| (name.to_string(), price))
        .collect();

        Self {
            restaurant: Restaurant {
                name: "The Estate Deli".to_string(),
                hours: "11:00 AM - 11:00 PM".to_string(),
                address: vec![
                    "#3162, 60 Feet Road, 12th Cross,".to_string(),
                    "HAL 2nd Stage, Defence Colony,".to_string(),
                    "Indiranagar, Bengaluru - 560008".to_string(),
                ],
                maps_url: "https://share.google/CxHVtC53L9wvzHQ01".to_string(),
                currency: "₹".to_string(),
            },
            categories: vec![
                category(
                    "coffee",
                    "☕",
                    &["Espresso", "Americano", "Cappuccino", "Latte", "Mocha"],
                ),
                category(
                    "matcha",
                    "🍵",
                    &["Matcha Latte", "Iced Matcha", "Matcha Smoothie"],
                ),
                category(
                    "signature hot beverages",
                    "🔥",
                    &["Spiced Chai Latte", "Golden Turmeric Latte", "Hot Chocolate Supreme"],
                ),
                category(
                    "signature iced beverages",
                    "🧊",
                    &["Iced Vanilla Latte", "Cold Brew Float", "Frappuccino Special"],
                ),
                category(
                    "mocktails",
                    "🍹",
                    &["Virgin Mojito", "Fruit Punch", "Lemon Mint Cooler"],
                ),
            ],
            prices,
            cake_flavours: [
                "Red Velvet",
                "Black Forest",
                "Blueberry Cheesecake",
                "Chocolate",
                "Vanilla",
                "Butterscotch",
                "Pineapple",
                "Strawberry",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}
