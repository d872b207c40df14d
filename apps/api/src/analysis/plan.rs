//! Speed-to-value plan: a three-state machine keyed by difficulty.
//!
//! ```text
//! difficulty < medium_from  → ThreeDay   (research → strategy → build)
//! difficulty < high_from    → FiveDay    (+ polish → launch)
//! otherwise                 → SevenDay   (+ iterate → scale)
//! ```
//!
//! The breakpoints are the competition-tier [`TierThresholds`] (40 and 70
//! by default). Every plan is cut from the same ordered step table, so a
//! shorter plan is always a strict prefix of a longer one.

use crate::analysis::difficulty::TierThresholds;
use crate::analysis::models::{PlanStep, Priority, SpeedToValuePlan};

/// Characters of a supplied content strategy quoted in the day-2 step.
const STRATEGY_EXCERPT_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanLength {
    ThreeDay,
    FiveDay,
    SevenDay,
}

impl PlanLength {
    pub fn for_difficulty(score: u32, tiers: &TierThresholds) -> Self {
        if score < tiers.medium_from {
            PlanLength::ThreeDay
        } else if score < tiers.high_from {
            PlanLength::FiveDay
        } else {
            PlanLength::SevenDay
        }
    }

    pub fn total_days(&self) -> u32 {
        match self {
            PlanLength::ThreeDay => 3,
            PlanLength::FiveDay => 5,
            PlanLength::SevenDay => 7,
        }
    }

    pub fn timeline(&self) -> &'static str {
        match self {
            PlanLength::ThreeDay => "3 days (this weekend)",
            PlanLength::FiveDay => "5 days (this week)",
            PlanLength::SevenDay => "7 days (next week)",
        }
    }
}

struct StepTemplate {
    action: &'static str,
    time_estimate: &'static str,
    priority: Priority,
}

const STEP_TEMPLATES: [StepTemplate; 7] = [
    StepTemplate {
        action: "Research & Validate",
        time_estimate: "2-3 hours",
        priority: Priority::High,
    },
    StepTemplate {
        action: "Content Strategy",
        time_estimate: "3-4 hours",
        priority: Priority::High,
    },
    StepTemplate {
        action: "Build & Create",
        time_estimate: "4-6 hours",
        priority: Priority::High,
    },
    StepTemplate {
        action: "Polish & Optimize",
        time_estimate: "2-3 hours",
        priority: Priority::Medium,
    },
    StepTemplate {
        action: "Launch & Promote",
        time_estimate: "2-4 hours",
        priority: Priority::High,
    },
    StepTemplate {
        action: "Iterate Based on Feedback",
        time_estimate: "2-3 hours",
        priority: Priority::Medium,
    },
    StepTemplate {
        action: "Scale & Monetize",
        time_estimate: "3-4 hours",
        priority: Priority::Medium,
    },
];

const QUICK_WINS: &[&str] = &[
    "Use AI to create content 10x faster",
    "Focus on design - it's your competitive advantage",
    "Solve one problem exceptionally well",
    "Launch fast, iterate based on real feedback",
];

const SUCCESS_METRICS: &[&str] = &[
    "Content published and live",
    "Initial traffic/users acquired",
    "Positive feedback received",
    "Monetization strategy implemented",
    "Foundation for scaling established",
];

fn step_description(day: u32, term: &str, content_strategy: Option<&str>) -> String {
    match day {
        1 => format!(
            "Deep dive into '{term}'. Study the top 10 competitors, identify their weaknesses \
             (design, content gaps, UX issues). Validate market demand."
        ),
        2 => match content_strategy {
            Some(strategy) => format!(
                "Implement content strategy: {}...",
                excerpt(strategy, STRATEGY_EXCERPT_CHARS)
            ),
            None => format!(
                "Create a comprehensive content outline for '{term}'. Focus on solving one \
                 problem exceptionally well."
            ),
        },
        3 => "Create your content/product. Use AI to accelerate (write, design, code). Focus on \
              superior UX and design - this is your competitive edge."
            .to_string(),
        4 => "Refine your work. Improve design, optimize for SEO, add engaging elements (images, \
              videos, interactivity). Make it 10x better than competitors."
            .to_string(),
        5 => "Publish your content/product. Share on social media, relevant communities and your \
              email list. Get initial feedback and traffic."
            .to_string(),
        6 => "Analyze initial performance. Make improvements based on user feedback. Fix any \
              issues quickly."
            .to_string(),
        _ => "Implement your monetization strategy. Create related content. Build on your \
              success with a systematic approach."
            .to_string(),
    }
}

/// First `max_chars` characters of `text`, never splitting a code point.
fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Builds the plan for `difficulty`. `content_strategy` feeds the day-2 step.
pub fn speed_to_value_plan(
    term: &str,
    difficulty: u32,
    tiers: &TierThresholds,
    content_strategy: Option<&str>,
) -> SpeedToValuePlan {
    let length = PlanLength::for_difficulty(difficulty, tiers);

    let steps = STEP_TEMPLATES
        .iter()
        .zip(1u32..)
        .take(length.total_days() as usize)
        .map(|(template, day)| PlanStep {
            day,
            action: template.action.to_string(),
            time_estimate: template.time_estimate.to_string(),
            priority: template.priority,
            description: step_description(day, term, content_strategy),
        })
        .collect();

    SpeedToValuePlan {
        timeline: length.timeline().to_string(),
        total_days: length.total_days(),
        steps,
        quick_wins: QUICK_WINS.iter().map(|s| s.to_string()).collect(),
        success_metrics: SUCCESS_METRICS.iter().map(|s| s.to_string()).collect(),
    }
}
