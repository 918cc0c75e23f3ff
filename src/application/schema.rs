//! Fixed instructions and declared response shapes sent with each analysis.
//!
//! Schemas use the inference service's OpenAPI subset (`OBJECT`, `STRING`,
//! `ARRAY`). Enumerated fields carry an `enum` constraint so the model is
//! steered toward values the typed results accept.

use serde_json::{json, Value};

use crate::domain::analysis::{SkinType, MAX_TOP_CONCERNS, MIN_TOP_CONCERNS};

pub const ONBOARDING_INSTRUCTION: &str = "Perform a quick, initial analysis of this selfie for a new user onboarding. Focus on identifying the basic skin type and the top 1-2 most prominent concerns. Provide a brief, encouraging summary statement. You must return a valid JSON object adhering to the provided schema.";

pub const DETAILED_INSTRUCTION: &str = "Analyze the attached image of a man's skin. Based on the visual information, provide a detailed analysis. You must return a valid JSON object adhering to the provided schema. Do not include any text, markdown, or formatting outside of the JSON object.";

/// Response shape for the onboarding selfie scan.
pub fn onboarding_schema() -> Value {
    let skin_types: Vec<&str> = SkinType::ALL.iter().map(SkinType::as_str).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "skinType": {
                "type": "STRING",
                "description": "Determine the user's basic skin type from the image. Options: 'Oily', 'Dry', 'Combination', 'Normal'.",
                "enum": skin_types
            },
            "topConcerns": {
                "type": "ARRAY",
                "description": "Identify the top 1 or 2 most visible skin concerns.",
                "minItems": MIN_TOP_CONCERNS,
                "maxItems": MAX_TOP_CONCERNS,
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": {
                            "type": "STRING",
                            "description": "The name of the concern (e.g., 'Acne', 'Uneven Texture', 'Redness', 'Fine Lines')."
                        },
                        "description": {
                            "type": "STRING",
                            "description": "A very brief, one-sentence description of the concern visible in the image."
                        }
                    },
                    "required": ["name", "description"]
                }
            },
            "summary": {
                "type": "STRING",
                "description": "A concise, encouraging, one-sentence summary for the user. Example: 'It looks like you might have some mild acne and uneven texture, which we can definitely work on!'"
            }
        },
        "required": ["skinType", "topConcerns", "summary"]
    })
}

/// Response shape for the detailed dashboard analysis.
pub fn detailed_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "analysis": {
                "type": "STRING",
                "description": "A general overview of the skin's condition as seen in the image."
            },
            "potentialIssues": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": {
                            "type": "STRING",
                            "description": "The name of the potential issue (e.g., Acne, Rosacea, Dryness, Sun Damage)."
                        },
                        "description": {
                            "type": "STRING",
                            "description": "A brief description of why you identified this potential issue."
                        },
                        "severity": {
                            "type": "STRING",
                            "description": "Estimate the severity as 'Low', 'Medium', or 'High'.",
                            "enum": ["Low", "Medium", "High"]
                        }
                    },
                    "required": ["name", "description", "severity"]
                }
            },
            "recommendations": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": {
                            "type": "STRING",
                            "description": "A short, actionable title for the recommendation."
                        },
                        "details": {
                            "type": "STRING",
                            "description": "Detailed explanation of the recommendation."
                        },
                        "category": {
                            "type": "STRING",
                            "description": "Categorize as 'Product', 'Lifestyle', or 'Routine'.",
                            "enum": ["Product", "Lifestyle", "Routine"]
                        }
                    },
                    "required": ["title", "details", "category"]
                }
            },
            "disclaimer": {
                "type": "STRING",
                "description": "This is an AI-powered analysis and not a substitute for professional medical advice. Consult a dermatologist for any health concerns."
            }
        },
        "required": ["analysis", "potentialIssues", "recommendations", "disclaimer"]
    })
}
