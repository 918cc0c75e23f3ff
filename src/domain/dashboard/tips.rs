//! Daily tips shown on the dashboard.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyTip {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub const DAILY_TIPS: [DailyTip; 5] = [
    DailyTip {
        id: 1,
        title: "Drink 2L water daily 💧",
        description: "Hydration starts from within. Proper water intake helps maintain your skin's elasticity and combat dryness.",
        category: "Lifestyle",
    },
    DailyTip {
        id: 2,
        title: "Change Your Pillowcase Weekly",
        description: "Pillowcases can accumulate oils, dirt, and bacteria, which can contribute to breakouts. Keep it clean!",
        category: "Habits",
    },
    DailyTip {
        id: 3,
        title: "Don't Skip Sunscreen",
        description: "Even on cloudy days, UV rays can damage your skin. Make applying SPF 30+ a non-negotiable part of your morning routine.",
        category: "Routine",
    },
    DailyTip {
        id: 4,
        title: "Avoid Hot Showers",
        description: "Super hot water can strip your skin of its natural oils, leading to dryness and irritation. Opt for lukewarm water instead.",
        category: "Habits",
    },
    DailyTip {
        id: 5,
        title: "Get 7-8 Hours of Sleep",
        description: "Your skin repairs itself while you sleep. Prioritizing rest can lead to a healthier complexion.",
        category: "Lifestyle",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tip_ids_are_unique_and_ordered() {
        let ids: Vec<u32> = DAILY_TIPS.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
