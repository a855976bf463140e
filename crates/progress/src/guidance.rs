//! Guidance tiers for acclimation progress.

use serde::{Deserialize, Serialize};

/// What the traveler should be doing at a given level of progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GuidanceTier {
    /// Under 30 %
    TakeItEasy,
    /// 30 % to under 70 %
    LightActivitiesOk,
    /// 70 % to under 100 %
    RampingUp,
    /// 100 %
    FullyAcclimated,
}

impl GuidanceTier {
    /// Tier for a percent-complete value.
    pub fn from_percent(percent: f64) -> Self {
        if percent < 30.0 {
            GuidanceTier::TakeItEasy
        } else if percent < 70.0 {
            GuidanceTier::LightActivitiesOk
        } else if percent < 100.0 {
            GuidanceTier::RampingUp
        } else {
            GuidanceTier::FullyAcclimated
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            GuidanceTier::TakeItEasy => "Take It Easy",
            GuidanceTier::LightActivitiesOk => "Light Activities OK",
            GuidanceTier::RampingUp => "Ramping Up",
            GuidanceTier::FullyAcclimated => "Fully Acclimated!",
        }
    }

    /// Display color token.
    pub fn color(&self) -> &'static str {
        match self {
            GuidanceTier::TakeItEasy => "#ef4444",
            GuidanceTier::LightActivitiesOk => "#f59e0b",
            GuidanceTier::RampingUp => "#3b82f6",
            GuidanceTier::FullyAcclimated => "#10b981",
        }
    }

    /// Tips for the tier.
    pub fn tips(&self) -> &'static [&'static str] {
        match self {
            GuidanceTier::TakeItEasy => &[
                "Rest is the priority today",
                "Short, easy walks only",
                "Drink water steadily through the day",
                "Skip alcohol and heavy meals",
            ],
            GuidanceTier::LightActivitiesOk => &[
                "Easy hikes and sightseeing are fine",
                "Keep your pace conversational",
                "Keep fluid intake high",
                "Back off if a headache appears",
            ],
            GuidanceTier::RampingUp => &[
                "Build toward your normal routine",
                "Take breaks on long climbs",
                "Fuel with extra carbohydrates",
                "Watch for lingering symptoms",
            ],
            GuidanceTier::FullyAcclimated => &[
                "Full intensity is OK",
                "Keep hydrating",
                "Sleep well to recover",
                "Listen to your body",
            ],
        }
    }
}

impl std::fmt::Display for GuidanceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
