// fixed association table: benchmark category -> playbook topic keywords + tier
use crate::core::types::WeightTier;

/// One row of the compiled-in association table.
///
/// `keywords` are matched as case-insensitive substrings against the topic
/// tags of playbook entries.
#[derive(Debug, Clone, Copy)]
pub struct CategoryAssociation {
    pub category: &'static str,
    pub keywords: &'static [&'static str],
    pub tier: WeightTier,
}

//table order is the report order, keep it stable
pub const CATEGORY_ASSOCIATIONS: &[CategoryAssociation] = &[
    CategoryAssociation {
        category: "accuracy",
        keywords: &["Validity and Reliability"],
        tier: WeightTier::High,
    },
    CategoryAssociation {
        category: "calibration",
        keywords: &["Validity and Reliability"],
        tier: WeightTier::Medium,
    },
    CategoryAssociation {
        category: "calibration_detailed",
        keywords: &["Validity and Reliability"],
        tier: WeightTier::Medium,
    },
    CategoryAssociation {
        category: "robustness",
        keywords: &["Secure and Resilient", "Safety"],
        tier: WeightTier::High,
    },
    CategoryAssociation {
        category: "robustness_detailed",
        keywords: &["Secure and Resilient", "Safety"],
        tier: WeightTier::High,
    },
    CategoryAssociation {
        category: "fairness",
        keywords: &["Fairness and Bias"],
        tier: WeightTier::High,
    },
    CategoryAssociation {
        category: "fairness_detailed",
        keywords: &["Fairness and Bias"],
        tier: WeightTier::High,
    },
    CategoryAssociation {
        category: "bias",
        keywords: &["Fairness and Bias"],
        tier: WeightTier::High,
    },
    CategoryAssociation {
        category: "toxicity",
        keywords: &["Safety"],
        tier: WeightTier::High,
    },
    CategoryAssociation {
        category: "efficiency",
        keywords: &["Accountability and Transparency"],
        tier: WeightTier::Medium,
    },
    CategoryAssociation {
        category: "efficiency_detailed",
        keywords: &["Accountability and Transparency"],
        tier: WeightTier::Medium,
    },
    CategoryAssociation {
        category: "summarization_metrics",
        keywords: &["Validity and Reliability"],
        tier: WeightTier::Medium,
    },
    CategoryAssociation {
        category: "copyright_metrics",
        keywords: &["Legal and Regulatory"],
        tier: WeightTier::Medium,
    },
    CategoryAssociation {
        category: "disinformation_metrics",
        keywords: &["Safety", "Risky Emergent Behavior"],
        tier: WeightTier::High,
    },
    CategoryAssociation {
        category: "bbq_metrics",
        keywords: &["Fairness and Bias"],
        tier: WeightTier::High,
    },
    CategoryAssociation {
        category: "classification_metrics",
        keywords: &["Validity and Reliability"],
        tier: WeightTier::Medium,
    },
];

pub fn association_for(category: &str) -> Option<&'static CategoryAssociation> {
    CATEGORY_ASSOCIATIONS.iter().find(|a| a.category == category)
}
