//! Template-driven narrative text. Every function here reads values the
//! scorers already produced; none of them introduces a new score.

use crate::analysis::difficulty::TierThresholds;
use crate::analysis::models::{
    CompetitionTier, DifficultyResult, IndustryCategory, IndustryClassification, IndustryNarrative,
    MasteryLevel, PassionAssessment, PassionBucket, SpeedToValuePlan, StrategyNotes,
};
use crate::analysis::rules::{is_quick_win, lead_then_table, MAX_OPPORTUNITIES};
use crate::analysis::scores::PassionFactors;

/// Passion score from which long-term potential reads as high.
const HIGH_PASSION_SCORE: u32 = 70;

const QUICK_WIN_CHANNEL: &str = "LOW COMPETITION = Quick wins possible! Fast path to monetization.";

const WEALTH_CHANNELS: &[&str] = &[
    "High-ticket affiliate products (financial tools, investment platforms)",
    "Premium courses and coaching ($500-$5000+ price points)",
    "Subscription newsletters with exclusive financial insights",
    "Consulting services for businesses/individuals",
    "Digital products (spreadsheets, calculators, templates)",
    "Sponsored content from financial brands",
];

const RELATIONSHIPS_CHANNELS: &[&str] = &[
    "Coaching and consulting services",
    "Membership communities (monthly recurring revenue)",
    "Online courses and workshops",
    "Books and digital guides",
    "Affiliate products (dating apps, relationship tools)",
    "Speaking engagements and workshops",
];

const HEALTH_CHANNELS: &[&str] = &[
    "Supplement and product affiliates (high commissions)",
    "Online fitness/wellness programs",
    "Coaching and personalized plans",
    "Digital products (meal plans, workout programs)",
    "Brand partnerships and sponsorships",
    "Certification programs and training",
];

const OTHER_CHANNELS: &[&str] = &[
    "Affiliate marketing opportunities",
    "Digital products and courses",
    "Consulting or coaching services",
    "Sponsored content",
    "Ad revenue from high traffic",
];

fn revenue_table(category: IndustryCategory) -> &'static [&'static str] {
    match category {
        IndustryCategory::Wealth => WEALTH_CHANNELS,
        IndustryCategory::Relationships => RELATIONSHIPS_CHANNELS,
        IndustryCategory::Health => HEALTH_CHANNELS,
        IndustryCategory::Other => OTHER_CHANNELS,
    }
}

fn summary(category: IndustryCategory, term: &str, confidence: f64) -> String {
    match category {
        IndustryCategory::Wealth => format!(
            "'{term}' sits in the Wealth industry, one of the three most profitable niches. \
             Financial content earns high engagement and monetizes well through affiliate \
             products, courses and consulting. Build trust with data-driven content and real results."
        ),
        IndustryCategory::Relationships => format!(
            "'{term}' sits in the Relationships industry, one of the three most profitable niches. \
             Relationship content drives emotional engagement and loyalty. Monetize through \
             coaching, courses, membership communities and affiliate products."
        ),
        IndustryCategory::Health => format!(
            "'{term}' sits in the Health industry, one of the three most profitable niches. \
             Demand is massive and monetization is strong through supplements, programs, \
             coaching and affiliate products. Lead with transformation and expertise."
        ),
        IndustryCategory::Other if confidence > 0.0 => format!(
            "'{term}' touches the profitable niches but does not fit cleanly into Wealth, \
             Relationships or Health. Emphasize a financial, relationship or health angle for \
             higher profitability."
        ),
        IndustryCategory::Other => format!(
            "'{term}' is outside the three most profitable niches (Wealth, Relationships, Health). \
             Consider angling the content toward one of them for higher monetization potential."
        ),
    }
}

fn content_angles(category: IndustryCategory, term: &str) -> Vec<String> {
    match category {
        IndustryCategory::Wealth => vec![
            format!("How to make money with {term}"),
            format!("{term} for beginners: Complete guide"),
            format!("Best {term} strategies this year"),
            format!("Case study: What {term} earned in 90 days"),
            format!("{term} mistakes to avoid (and what to do instead)"),
        ],
        IndustryCategory::Relationships => vec![
            format!("How to improve your {term}"),
            format!("{term} advice from experts"),
            format!("Transform your {term} in 30 days"),
            format!("The psychology of {term}"),
            format!("Real stories: How {term} changed lives"),
        ],
        IndustryCategory::Health => vec![
            format!("Complete guide to {term}"),
            format!("Science-backed {term} strategies"),
            format!("Before and after: {term} transformations"),
            format!("{term} for busy professionals"),
            format!("Common {term} mistakes and how to fix them"),
        ],
        IndustryCategory::Other => vec![
            format!("Ultimate guide to {term}"),
            format!("{term} tips and tricks"),
            format!("How to master {term}"),
            format!("{term} for beginners"),
            format!("Advanced {term} strategies"),
        ],
    }
}

fn monetization_strategies(category: IndustryCategory) -> Vec<String> {
    let strategies: &[&str] = match category {
        IndustryCategory::Wealth => &[
            "Affiliate partnerships with financial platforms (high commissions)",
            "Premium courses ($500-$2000) on mastering the topic in 90 days",
            "Consulting packages ($1000-$10000): Personalized financial strategies",
            "Subscription newsletter ($20-$100/month): Exclusive insights and analysis",
        ],
        IndustryCategory::Relationships => &[
            "Coaching programs ($500-$5000): 1-on-1 or group coaching",
            "Membership community ($20-$50/month): Ongoing support and resources",
            "Online courses ($100-$500): Self-paced relationship transformation",
            "Books and guides ($10-$50): Digital or physical products",
        ],
        IndustryCategory::Health => &[
            "Supplement affiliates (20-40% commissions on recurring purchases)",
            "Fitness/wellness programs ($100-$1000): Structured transformation plans",
            "Coaching services ($500-$3000): Personalized health guidance",
            "Digital products ($20-$200): Meal plans, workout programs, guides",
        ],
        IndustryCategory::Other => &[
            "Affiliate marketing: Promote relevant products/services",
            "Digital courses: Package your expertise",
            "Consulting: Offer personalized guidance",
            "Ad revenue: Build traffic and monetize with ads",
        ],
    };
    strategies.iter().map(|s| s.to_string()).collect()
}

fn target_demographics(category: IndustryCategory) -> &'static str {
    match category {
        IndustryCategory::Wealth => {
            "Ages 25-55, professionals and entrepreneurs seeking financial growth. High intent to \
             invest in education and tools. Willing to pay premium prices for proven strategies."
        }
        IndustryCategory::Relationships => {
            "Ages 20-60, individuals seeking to improve personal relationships. Emotionally \
             engaged, loyal audience that values authenticity and transformation stories."
        }
        IndustryCategory::Health => {
            "Ages 25-65, health-conscious individuals seeking transformation. Highly motivated \
             and willing to invest in supplements, programs and coaching."
        }
        IndustryCategory::Other => {
            "Demographics vary - analyze your specific niche for precise targeting."
        }
    }
}

fn competition_notes(
    category: IndustryCategory,
    difficulty: &DifficultyResult,
    tiers: &TierThresholds,
) -> String {
    let mut notes = Vec::new();

    if category != IndustryCategory::Other {
        notes.push("You're in one of the three most profitable industries - high potential!");
    }

    match difficulty.competition_tier {
        CompetitionTier::High => notes.push(
            "High competition means proven market demand. Focus on superior UX/design and unique \
             angles to differentiate.",
        ),
        CompetitionTier::Low => notes.push(
            "Low competition = opportunity! Move fast to establish authority before others \
             discover this keyword.",
        ),
        CompetitionTier::Medium => {}
    }

    if difficulty.score < tiers.medium_from {
        notes.push("Low difficulty = quick wins possible. This is a great starting point.");
    } else if difficulty.score > tiers.high_from {
        notes.push(
            "High difficulty - consider long-tail variations or niche angles to build authority \
             first.",
        );
    }

    notes.join(" ")
}

/// Category guidance for the classified industry.
pub fn industry_narrative(
    term: &str,
    industry: &IndustryClassification,
    difficulty: &DifficultyResult,
    tiers: &TierThresholds,
) -> IndustryNarrative {
    let category = industry.category;
    let lead = is_quick_win(difficulty, tiers).then_some(QUICK_WIN_CHANNEL);

    IndustryNarrative {
        summary: summary(category, term, industry.confidence),
        revenue_channels: lead_then_table(lead, revenue_table(category), MAX_OPPORTUNITIES),
        content_angles: content_angles(category, term),
        monetization_strategies: monetization_strategies(category),
        target_demographics: target_demographics(category).to_string(),
        competition_notes: competition_notes(category, difficulty, tiers),
    }
}

/// Passion score with the reasoning behind it.
pub fn passion_assessment(factors: &PassionFactors) -> PassionAssessment {
    let mut reasons = Vec::new();

    match &factors.matched_interests {
        Some(matches) if !matches.is_empty() => reasons.push(format!(
            "Strong alignment with your interests: {}",
            matches.join(", ")
        )),
        Some(_) => reasons.push("Limited alignment with stated interests".to_string()),
        None => {}
    }
    if factors.audience_identified {
        reasons.push("Clear target audience identified - easier to stay passionate".to_string());
    }
    if factors.monetization_identified {
        reasons.push(
            "Strong monetization potential - financial motivation helps sustain passion"
                .to_string(),
        );
    }

    let reasoning = if reasons.is_empty() {
        "Neutral passion alignment - success depends on developing genuine interest".to_string()
    } else {
        reasons.join(" | ")
    };

    let bucket = PassionBucket::from_score(factors.score);
    let sustainability = match bucket {
        PassionBucket::Excellent => {
            "Excellent - High passion alignment suggests strong long-term sustainability. You'll \
             enjoy the journey, not just the destination."
        }
        PassionBucket::Good => {
            "Good - Moderate passion alignment. Find the aspects you genuinely enjoy to keep \
             momentum through challenges."
        }
        PassionBucket::Caution => {
            "Caution - Low passion alignment may lead to burnout. Check whether this truly \
             excites you, or explore related keywords that resonate more."
        }
    };

    let long_term_potential = if factors.score >= HIGH_PASSION_SCORE {
        "High potential for mastery. Genuine interest will carry you through the unglamorous \
         work that excellence requires."
    } else {
        "Moderate potential. Success is possible but may require extra discipline. Build passion \
         through small wins and visible progress."
    };

    PassionAssessment {
        score: factors.score,
        bucket,
        reasoning,
        sustainability: sustainability.to_string(),
        long_term_potential: long_term_potential.to_string(),
    }
}

/// Strategy text keyed by mastery level, weaknesses, plan length and passion.
pub fn strategy_notes(
    term: &str,
    mastery_level: MasteryLevel,
    weaknesses: &[String],
    plan: &SpeedToValuePlan,
    passion_score: u32,
    monetization_opportunities: &[String],
) -> StrategyNotes {
    let mut improvement = vec![match mastery_level {
        MasteryLevel::Expert => "You can dominate this keyword with focused effort.",
        MasteryLevel::Advanced => "Strong opportunity - implement a systematic approach for success.",
        MasteryLevel::Intermediate => {
            "Moderate challenge - focus on superior UX and design to differentiate."
        }
        MasteryLevel::Beginner => {
            "High challenge - start with long-tail variations to build authority."
        }
    }
    .to_string()];
    if !weaknesses.is_empty() {
        let top: Vec<&str> = weaknesses.iter().take(3).map(String::as_str).collect();
        improvement.push(format!("Key opportunities: {}", top.join("; ")));
    }
    improvement.push(
        "Core principles: superior UX/design, solve one problem exceptionally well, use AI to \
         accelerate development, launch fast and iterate."
            .to_string(),
    );

    let days = plan.total_days;
    let simplified_approach = match mastery_level {
        MasteryLevel::Expert => format!(
            "Simple path: Create exceptional content for '{term}', focus on superior design, \
             launch within {days} days. Quick wins are achievable at this mastery level."
        ),
        MasteryLevel::Advanced => format!(
            "Simple path: Research the top 10 competitors, identify their weakest points, create \
             10x better content with superior UX. Launch in {days} days, iterate based on feedback."
        ),
        MasteryLevel::Intermediate => format!(
            "Simple path: Don't compete head-on. Find a specific angle or sub-niche within \
             '{term}' and create the best resource for it. Use AI to accelerate, focus on design. \
             {days}-day timeline."
        ),
        MasteryLevel::Beginner => format!(
            "Simple path: Start with long-tail variations of '{term}'. Build authority gradually. \
             Focus on one sub-topic, master it, then expand. {days}-day sprints."
        ),
    };

    let mut focus = vec![format!(
        "Build an asset, not just content. '{term}' can become a valuable property with \
         consistent effort."
    )];
    if let Some(first) = monetization_opportunities.first() {
        focus.push(format!("Monetization: {first}"));
    }
    focus.push(if passion_score >= HIGH_PASSION_SCORE {
        "High passion alignment is your secret weapon - you'll outlast competitors who are just \
         chasing trends."
            .to_string()
    } else {
        "Build passion through progress. Small wins will fuel your motivation.".to_string()
    });
    focus.push(
        "Every business needs technology. You're building a tech-enabled asset that can scale \
         without a proportional increase in resources."
            .to_string(),
    );

    StrategyNotes {
        improvement_strategy: improvement.join(" "),
        simplified_approach,
        creator_focus: focus.join(" | "),
    }
}
