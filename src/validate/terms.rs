//! Static term sets consulted by the validator.
//!
//! The built-in lists are the defaults; either list can be replaced at
//! runtime with a file (one term per line).

use std::collections::HashSet;
use std::path::Path;

use crate::error::AppError;
use crate::lexicon::read_entries;

/// Marketing adjectives and intensifiers. Any of these disqualifies a name.
pub const FILLER_WORDS: &[&str] = &[
    "just", "great", "stuff", "my", "an", "best", "delicious", "yummy", "tasty", "favorite",
    "simple", "quick", "amazing", "awesome", "perfect", "ultimate", "super", "really", "very",
    "truly", "absolutely", "incredibly", "wonderfully", "fantastic", "fabulous", "excellent",
    "literally", "amazingly", "perfectly", "incredible", "terrific", "magnificent",
    "wonderful", "delightful", "satisfying", "simply", "heavenly", "deliciously", "ugly",
    "wickedly", "easy", "friendly", "slightly", "lightly", "family", "refreshingly", "basic",
    "prickly", "bubbly", "bubly", "recipe", "no.",
];

/// Culinary vocabulary. A valid name contains at least one of these as a
/// contiguous token sequence.
pub const CULINARY_TERMS: &[&str] = &[
    // Cooking methods
    "bake", "roast", "fry", "grill", "boil", "steam", "sauté", "broil", "poach", "simmer",
    "braise", "stir-fry", "deep-fry", "pan-fry", "slow-cook", "pressure-cook", "barbecue",
    "smoke", "blanch", "caramelize", "flambe", "marinate", "pickle",
    // Dish types
    "soup", "stew", "salad", "sandwich", "casserole", "pie", "cake", "bread", "cookie",
    "pasta", "rice", "curry", "burger", "wrap", "taco", "burrito", "pizza", "quiche",
    "omelette", "frittata", "risotto", "pilaf", "paella", "jambalaya", "chowder", "bisque",
    "smoothie", "shake",
    // Main ingredients
    "chicken", "beef", "pork", "lamb", "fish", "salmon", "tuna", "shrimp", "tofu", "egg",
    "cheese", "vegetable", "potato", "carrot", "broccoli", "spinach", "tomato", "onion",
    "garlic", "mushroom", "bean", "lentil", "quinoa", "avocado", "zucchini", "eggplant",
    "cauliflower", "pepper",
    // Fruits
    "apple", "banana", "orange", "lemon", "lime", "strawberry", "blueberry", "raspberry",
    "blackberry", "peach", "pear", "plum", "cherry", "mango", "pineapple", "coconut", "kiwi",
    "grape", "watermelon", "melon",
    // Grains and starches
    "noodle", "flour", "oat", "barley", "couscous", "polenta", "cornmeal", "tortilla", "pita",
    // Dairy and alternatives
    "milk", "cream", "yogurt", "butter", "sour cream", "almond milk", "coconut milk",
    "soy milk", "oat milk",
    // Seasonings and flavorings
    "herb", "spice", "salt", "ginger", "cinnamon", "cumin", "paprika", "oregano", "basil",
    "thyme", "rosemary", "chili", "mustard", "vinegar", "soy sauce", "honey", "maple syrup",
    // Meal types
    "breakfast", "lunch", "dinner", "brunch", "snack", "appetizer", "dessert", "side dish",
    "main course", "entree",
    // Dietary terms
    "vegan", "vegetarian", "gluten-free", "dairy-free", "keto", "paleo", "low-carb", "low-fat",
    "sugar-free", "whole30", "mediterranean",
    // Preparation terms
    "fresh", "slow cooker", "instant pot", "one-pot", "no-bake", "raw", "stuffed", "grilled",
    "roasted", "baked", "fried", "sautéed", "sauteed", "steamed", "pickled", "marinated",
    "barbecued", "broiled", "boiled", "simmered", "poached", "braised", "stewed", "smoked",
    "caramelized", "blanched",
    // Cuisine types
    "italian", "mexican", "chinese", "indian", "japanese", "thai", "french", "greek",
    "american", "cajun", "creole", "korean", "vietnamese", "middle eastern", "spanish",
    "german", "british",
    // Seasonal and holiday terms
    "summer", "winter", "spring", "fall", "christmas", "thanksgiving", "halloween", "easter",
    "holiday", "party",
    // Texture and consistency
    "crispy", "crunchy", "creamy", "smooth", "chunky", "tender", "juicy", "moist", "fluffy",
    "chewy", "gooey", "sticky",
    // Cooking equipment
    "skillet", "pan", "pot", "oven", "air fryer", "food processor", "blender",
    // Miscellaneous common terms
    "classic", "traditional", "fusion", "modern", "healthy", "comfort food", "gourmet",
    "rustic", "spicy", "sweet", "savory", "tangy", "zesty", "hearty", "light", "rich",
    "decadent", "indulgent", "refreshing", "satisfying", "nutritious", "wholesome", "filling",
    "colorful", "flavorful", "aromatic",
];

/// Immutable, lowercase term lookup.
#[derive(Debug, Clone, Default)]
pub struct TermSet {
    terms: HashSet<String>,
}

impl TermSet {
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn filler_words() -> Self {
        Self::from_terms(FILLER_WORDS)
    }

    pub fn culinary_terms() -> Self {
        Self::from_terms(CULINARY_TERMS)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let entries = read_entries(path, "term list")?;
        if entries.is_empty() {
            return Err(AppError::config(format!("Term list '{}' is empty.", path.display())));
        }
        Ok(Self::from_terms(entries))
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
