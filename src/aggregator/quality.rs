use tracing::trace;

use crate::aggregator::constants::*;
use crate::models::{DietQualityScore, Grade, QualityComponent};

/// The scored components, in the fixed order they are reported and tie-broken in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    MacroBalance,
    Fiber,
    AddedSugar,
    Sodium,
    Produce,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::MacroBalance,
        ComponentKind::Fiber,
        ComponentKind::AddedSugar,
        ComponentKind::Sodium,
        ComponentKind::Produce,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ComponentKind::MacroBalance => "Macro Balance",
            ComponentKind::Fiber => "Fiber",
            ComponentKind::AddedSugar => "Added Sugar",
            ComponentKind::Sodium => "Sodium",
            ComponentKind::Produce => "Produce",
        }
    }

    pub fn weight(&self) -> f64 {
        match self {
            ComponentKind::MacroBalance => WEIGHT_MACROS,
            ComponentKind::Fiber => WEIGHT_FIBER,
            ComponentKind::AddedSugar => WEIGHT_SUGAR,
            ComponentKind::Sodium => WEIGHT_SODIUM,
            ComponentKind::Produce => WEIGHT_PRODUCE,
        }
    }

    /// Actionable advice shown when the component scores poorly.
    pub fn focus(&self) -> &'static str {
        match self {
            ComponentKind::MacroBalance => {
                "Balance your macros using protein, carbs, and healthy fats."
            }
            ComponentKind::Fiber => {
                "Add more fiber-rich foods like vegetables, beans, or whole grains."
            }
            ComponentKind::AddedSugar => {
                "Limit sweets and sugary drinks to stay within guidelines."
            }
            ComponentKind::Sodium => "Reduce salty or processed foods to keep sodium in check.",
            ComponentKind::Produce => "Aim for at least five servings of fruits and vegetables.",
        }
    }
}

/// Raw day-level values the calculator scores.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QualityInputs {
    pub protein_progress: f64,
    pub carb_progress: f64,
    pub fat_progress: f64,
    pub fiber: f64,
    pub fiber_target: f64,
    pub added_sugar: f64,
    pub added_sugar_limit: f64,
    pub sodium: f64,
    pub sodium_limit: f64,
    pub vegetable_servings: f64,
    pub vegetable_target: f64,
    pub fruit_servings: f64,
    pub fruit_target: f64,
}

/// Score a progress ratio: full credit in `[0.8, 1.2]`, linear falloff either side.
///
/// Exactly zero scores zero.
pub fn normalize(ratio: f64) -> f64 {
    if ratio == 0.0 {
        0.0
    } else if ratio < NORMALIZE_LOW {
        ratio * UNDERSHOOT_SLOPE
    } else if ratio > NORMALIZE_HIGH {
        f64::max(0.0, OVERSHOOT_CEILING - ratio)
    } else {
        1.0
    }
}

/// Mean of [`normalize`] over `ratios`.
pub fn average_normalized(ratios: &[f64]) -> f64 {
    if ratios.is_empty() {
        return 0.0;
    }
    ratios.iter().map(|&r| normalize(r)).sum::<f64>() / ratios.len() as f64
}

/// Goal score: proportional up to the target, no penalty past it.
pub fn capped_score(consumed: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    let ratio = consumed / target;
    if ratio >= 1.0 {
        1.0
    } else {
        f64::max(0.0, ratio)
    }
}

/// Limit score: full credit up to the limit, then `1.2 - ratio` floored at 0.
pub fn inverse_score(consumed: f64, limit: f64) -> f64 {
    if limit <= 0.0 {
        return 1.0;
    }
    let ratio = consumed / limit;
    if ratio <= 1.0 {
        1.0
    } else {
        f64::max(0.0, LIMIT_PENALTY_CEILING - ratio)
    }
}

/// Serving ratio against a target of at least 1, capped at 1.2.
fn produce_ratio(servings: f64, target: f64) -> f64 {
    f64::min(servings / f64::max(target, 1.0), PRODUCE_RATIO_CAP)
}

pub fn letter_grade(total: u8) -> Grade {
    match total {
        t if t >= GRADE_A_MIN => Grade::A,
        t if t >= GRADE_B_MIN => Grade::B,
        t if t >= GRADE_C_MIN => Grade::C,
        t if t >= GRADE_D_MIN => Grade::D,
        _ => Grade::E,
    }
}

pub fn component_message(score: f64, focus: &str) -> String {
    if score >= ON_TRACK_MIN {
        MESSAGE_ON_TRACK.to_string()
    } else if score >= ALMOST_THERE_MIN {
        MESSAGE_ALMOST_THERE.to_string()
    } else {
        focus.to_string()
    }
}

/// Raw `[0, 1]` score of a single component.
pub fn component_score(kind: ComponentKind, inputs: &QualityInputs) -> f64 {
    match kind {
        ComponentKind::MacroBalance => average_normalized(&[
            inputs.protein_progress,
            inputs.carb_progress,
            inputs.fat_progress,
        ]),
        ComponentKind::Fiber => capped_score(inputs.fiber, inputs.fiber_target),
        ComponentKind::AddedSugar => inverse_score(inputs.added_sugar, inputs.added_sugar_limit),
        ComponentKind::Sodium => inverse_score(inputs.sodium, inputs.sodium_limit),
        ComponentKind::Produce => average_normalized(&[
            produce_ratio(inputs.vegetable_servings, inputs.vegetable_target),
            produce_ratio(inputs.fruit_servings, inputs.fruit_target),
        ]),
    }
}

/// Weighted sum of component scores scaled to 0-100, clamped and rounded.
pub fn weighted_total(components: &[QualityComponent]) -> u8 {
    let weighted: f64 = components.iter().map(|c| c.score * c.weight).sum();
    (weighted * 100.0).clamp(0.0, 100.0).round() as u8
}

/// Message of the lowest-scoring component; the first one wins a tie.
pub fn top_opportunity(components: &[QualityComponent]) -> Option<&QualityComponent> {
    components.iter().fold(None, |lowest, c| match lowest {
        Some(l) if l.score <= c.score => Some(l),
        _ => Some(c),
    })
}

/// Compute the full diet quality score for one day.
pub fn score_diet_quality(inputs: &QualityInputs) -> DietQualityScore {
    let components: Vec<QualityComponent> = ComponentKind::ALL
        .iter()
        .map(|&kind| {
            let score = component_score(kind, inputs);
            trace!(component = kind.name(), score, "Scored diet quality component");
            QualityComponent {
                name: kind.name().to_string(),
                score,
                weight: kind.weight(),
                message: component_message(score, kind.focus()),
            }
        })
        .collect();

    let total = weighted_total(&components);
    let opportunity = top_opportunity(&components)
        .map(|c| c.message.clone())
        .unwrap_or_else(|| MESSAGE_ON_TRACK.to_string());

    DietQualityScore {
        total,
        grade: letter_grade(total),
        components,
        top_opportunity: opportunity,
    }
}
