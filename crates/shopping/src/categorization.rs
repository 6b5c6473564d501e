/// One grocery-aisle rule: a label and the keywords that map an
/// ingredient into it.
#[derive(Debug, Clone)]
pub struct ClassifierRule {
    label: String,
    keywords: Vec<String>,
}

impl ClassifierRule {
    pub fn new(label: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            label: label.into(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }
}

/// Maps an ingredient name to a grocery-aisle label by keyword
/// substring matching.
///
/// Rules are checked in declaration order and the first rule with any
/// matching keyword wins. Reordering the rule list changes results
/// ("lemon pepper" belongs to whichever of vegetables and spices comes
/// first), so the default table's order is part of the contract.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<ClassifierRule>,
    fallback: String,
}

impl Classifier {
    pub fn new(rules: Vec<ClassifierRule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    pub fn classify(&self, ingredient_name: &str) -> &str {
        let normalized = ingredient_name.trim().to_lowercase();

        for rule in &self.rules {
            if rule.keywords.iter().any(|k| normalized.contains(k)) {
                return &rule.label;
            }
        }

        &self.fallback
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(
            vec![
                ClassifierRule::new(
                    "Meat & Fish",
                    &[
                        "chicken", "beef", "pork", "fish", "salmon", "tuna", "turkey", "lamb",
                        "meat",
                    ],
                ),
                ClassifierRule::new(
                    "Vegetables & Fruit",
                    &[
                        "tomato", "onion", "garlic", "pepper", "carrot", "potato", "lettuce",
                        "apple", "banana", "lemon",
                    ],
                ),
                ClassifierRule::new(
                    "Dairy",
                    &["milk", "cheese", "butter", "cream", "yogurt", "egg"],
                ),
                ClassifierRule::new(
                    "Grains & Baked Goods",
                    &["rice", "pasta", "bread", "flour", "noodles"],
                ),
                ClassifierRule::new(
                    "Spices & Oils",
                    &["salt", "pepper", "oil", "sugar", "spice", "herb"],
                ),
                ClassifierRule::new("Canned Goods", &["tomato paste", "stock", "broth"]),
            ],
            "Other",
        )
    }
}
