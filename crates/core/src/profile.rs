//! User profile.

use serde::{Deserialize, Serialize};

use crate::elevation::city_elevation;
use crate::Time;

/// The traveler's saved details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: Option<String>,

    /// Home city, e.g. "Denver, CO"
    pub home_city: Option<String>,

    /// Home elevation in feet
    pub home_altitude_feet: Option<i32>,

    /// Last updated
    pub updated_at: Option<Time>,
}

impl UserProfile {
    /// Home altitude to use for new trips.
    ///
    /// An explicit altitude wins; otherwise the home city is looked up.
    pub fn effective_home_altitude(&self) -> Option<i32> {
        self.home_altitude_feet
            .or_else(|| self.home_city.as_deref().and_then(city_elevation))
    }
}
