//! Starter routine suggested after the onboarding scan.

use serde::Serialize;

use super::SkinType;

/// One of the three fixed routine steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutineStep {
    pub order: u8,
    pub title: &'static str,
    pub description: &'static str,
    /// Product category suggested for this skin type.
    pub suggestion: &'static str,
}

/// Cleanse / moisturize / protect routine for a skin type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarterRoutine {
    pub skin_type: SkinType,
    pub steps: [RoutineStep; 3],
}

impl StarterRoutine {
    pub fn for_skin_type(skin_type: SkinType) -> Self {
        let (cleanse, moisturize, protect) = match skin_type {
            SkinType::Oily => (
                "Foaming or Gel Cleanser",
                "Oil-Free, Lightweight Moisturizer",
                "Gel or Fluid Sunscreen (SPF 30+)",
            ),
            SkinType::Dry => (
                "Hydrating Cream or Milk Cleanser",
                "Rich Cream with Ceramides",
                "Moisturizing Sunscreen (SPF 30+)",
            ),
            SkinType::Combination => (
                "Gentle Gel Cleanser",
                "Lightweight Lotion or Gel-Cream",
                "Non-Comedogenic Sunscreen (SPF 30+)",
            ),
            SkinType::Normal => (
                "Gentle, pH-balanced Cleanser",
                "Standard Hydrating Lotion",
                "Broad-Spectrum Sunscreen (SPF 30+)",
            ),
        };

        Self {
            skin_type,
            steps: [
                RoutineStep {
                    order: 1,
                    title: "Cleanse",
                    description: "Wash your face morning and night to remove dirt, oil, and impurities.",
                    suggestion: cleanse,
                },
                RoutineStep {
                    order: 2,
                    title: "Moisturize",
                    description: "Hydrate your skin to maintain its barrier, preventing dryness and irritation.",
                    suggestion: moisturize,
                },
                RoutineStep {
                    order: 3,
                    title: "Protect",
                    description: "Apply sunscreen every morning to protect against sun damage and premature aging.",
                    suggestion: protect,
                },
            ],
        }
    }
}
