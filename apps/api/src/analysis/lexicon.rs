//! Fixed category lexicons used by the industry classifier.
//!
//! Entries are matched by plain substring containment, so an entry can fire
//! inside a longer unrelated word ("rich" inside "enrichment").

use crate::analysis::models::IndustryCategory;

/// Weight of a primary-term match.
pub const PRIMARY_WEIGHT: f64 = 2.0;
/// Weight of a secondary-term match.
pub const SECONDARY_WEIGHT: f64 = 1.0;

const WEALTH_PRIMARY: &[&str] = &[
    "money", "wealth", "income", "revenue", "profit", "investment", "financial", "finance",
    "stock", "crypto", "trading", "business", "entrepreneur", "passive income", "dividend",
    "roi", "portfolio", "real estate", "property", "asset", "net worth", "millionaire",
    "billionaire", "rich", "wealthy", "affluent", "prosperity",
];

const WEALTH_SECONDARY: &[&str] = &[
    "budget", "savings", "debt", "credit", "loan", "mortgage", "insurance", "retirement",
    "401k", "ira", "pension", "tax", "accounting", "bookkeeping", "payroll", "salary", "wage",
    "bonus", "commission", "equity", "shares", "securities",
];

const RELATIONSHIPS_PRIMARY: &[&str] = &[
    "relationship", "dating", "love", "romance", "marriage", "wedding", "partner", "spouse",
    "boyfriend", "girlfriend", "couple", "family", "parenting", "children", "kids", "baby",
    "pregnancy", "adoption", "friendship", "social", "networking", "community", "connection",
];

const RELATIONSHIPS_SECONDARY: &[&str] = &[
    "divorce", "breakup", "therapy", "counseling", "communication", "intimacy", "sex",
    "attraction", "compatibility", "trust", "commitment", "engagement", "anniversary",
    "valentine", "gift", "advice", "tips", "help", "support", "guidance",
];

const HEALTH_PRIMARY: &[&str] = &[
    "health", "fitness", "wellness", "medical", "doctor", "hospital", "disease", "illness",
    "condition", "treatment", "therapy", "cure", "medicine", "drug", "supplement", "vitamin",
    "nutrition", "diet", "weight loss", "exercise", "workout", "gym", "training", "yoga",
    "mental health", "depression", "anxiety", "stress", "mindfulness",
];

const HEALTH_SECONDARY: &[&str] = &[
    "symptom", "diagnosis", "prevention", "recovery", "healing", "pain", "injury", "surgery",
    "prescription", "pharmacy", "insurance", "healthcare", "clinic", "patient", "nurse",
    "physical", "mental", "emotional", "spiritual", "holistic", "organic", "natural",
    "alternative", "traditional",
];

/// Primary and secondary terms for one category.
#[derive(Debug, Clone)]
pub struct CategoryLexicon {
    pub category: IndustryCategory,
    pub primary: &'static [&'static str],
    pub secondary: &'static [&'static str],
}

impl CategoryLexicon {
    /// Sum of weighted matches of this category's terms inside `text`.
    /// `text` must already be lower-cased.
    pub fn score(&self, text: &str) -> f64 {
        let primary = self.primary.iter().filter(|t| text.contains(**t)).count() as f64;
        let secondary = self.secondary.iter().filter(|t| text.contains(**t)).count() as f64;
        primary * PRIMARY_WEIGHT + secondary * SECONDARY_WEIGHT
    }
}

/// All category lexicons, in tie-break priority order (first wins).
#[derive(Debug, Clone)]
pub struct IndustryLexicon {
    pub categories: Vec<CategoryLexicon>,
}

impl Default for IndustryLexicon {
    fn default() -> Self {
        Self {
            categories: vec![
                CategoryLexicon {
                    category: IndustryCategory::Wealth,
                    primary: WEALTH_PRIMARY,
                    secondary: WEALTH_SECONDARY,
                },
                CategoryLexicon {
                    category: IndustryCategory::Relationships,
                    primary: RELATIONSHIPS_PRIMARY,
                    secondary: RELATIONSHIPS_SECONDARY,
                },
                CategoryLexicon {
                    category: IndustryCategory::Health,
                    primary: HEALTH_PRIMARY,
                    secondary: HEALTH_SECONDARY,
                },
            ],
        }
    }
}
