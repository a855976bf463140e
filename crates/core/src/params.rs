//! Trip parameters - the validated input to plan computation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Date format accepted for arrival and departure dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Traveler's baseline conditioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    /// Little regular exercise
    Beginner,
    /// Regular moderate exercise
    #[default]
    Average,
    /// Trains several times a week
    Fit,
    /// Competitive or endurance athlete
    Athlete,
}

impl FitnessLevel {
    /// All levels, least to most conditioned.
    pub const ALL: [FitnessLevel; 4] = [
        FitnessLevel::Beginner,
        FitnessLevel::Average,
        FitnessLevel::Fit,
        FitnessLevel::Athlete,
    ];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Average => "average",
            FitnessLevel::Fit => "fit",
            FitnessLevel::Athlete => "athlete",
        }
    }
}

impl std::fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FitnessLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(FitnessLevel::Beginner),
            "average" => Ok(FitnessLevel::Average),
            "fit" => Ok(FitnessLevel::Fit),
            "athlete" => Ok(FitnessLevel::Athlete),
            other => Err(CoreError::invalid_input(
                "fitness_level",
                format!("unrecognized fitness level '{}'", other),
            )),
        }
    }
}

/// Planned exertion at the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Walking, sightseeing
    Light,
    /// Hiking, casual skiing
    #[default]
    Moderate,
    /// Running, hard skiing
    Intense,
    /// Racing, mountaineering
    Extreme,
}

impl ActivityLevel {
    /// All levels, lightest first.
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Intense,
        ActivityLevel::Extreme,
    ];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Intense => "intense",
            ActivityLevel::Extreme => "extreme",
        }
    }

    /// Example activities shown next to the level.
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Light => "walking, sightseeing",
            ActivityLevel::Moderate => "hiking, casual skiing",
            ActivityLevel::Intense => "running, hard skiing",
            ActivityLevel::Extreme => "racing, mountaineering",
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "intense" => Ok(ActivityLevel::Intense),
            "extreme" => Ok(ActivityLevel::Extreme),
            other => Err(CoreError::invalid_input(
                "activity_level",
                format!("unrecognized activity level '{}'", other),
            )),
        }
    }
}

/// Validated trip parameters.
///
/// Altitudes are plain signed feet; locations below sea level are valid.
/// Dates are only needed for progress tracking, never for the plan itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripParameters {
    /// Elevation of the traveler's baseline location
    pub home_altitude_feet: i32,

    /// Elevation of the trip destination
    pub destination_altitude_feet: i32,

    /// Baseline conditioning
    pub fitness_level: FitnessLevel,

    /// Planned exertion at destination
    pub activity_level: ActivityLevel,

    /// Arrival at destination
    #[serde(default)]
    pub arrival_date: Option<NaiveDate>,

    /// Departure from destination
    #[serde(default)]
    pub departure_date: Option<NaiveDate>,
}

impl TripParameters {
    /// Create parameters without trip dates.
    pub fn new(
        home_altitude_feet: i32,
        destination_altitude_feet: i32,
        fitness_level: FitnessLevel,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            home_altitude_feet,
            destination_altitude_feet,
            fitness_level,
            activity_level,
            arrival_date: None,
            departure_date: None,
        }
    }

    /// Attach trip dates, rejecting zero- or negative-length stays.
    pub fn with_dates(mut self, arrival: NaiveDate, departure: NaiveDate) -> Result<Self> {
        validate_trip_dates(arrival, departure)?;
        self.arrival_date = Some(arrival);
        self.departure_date = Some(departure);
        Ok(self)
    }
}

/// Reject trips whose departure is not strictly after arrival.
pub fn validate_trip_dates(arrival: NaiveDate, departure: NaiveDate) -> Result<()> {
    if departure <= arrival {
        return Err(CoreError::invalid_input(
            "departure_date",
            format!(
                "departure {} must be after arrival {}",
                departure, arrival
            ),
        ));
    }
    Ok(())
}

/// Raw, unvalidated trip input as it arrives from a form or command line.
///
/// Altitudes are required. Missing enum selections fall back to
/// `average` fitness and `moderate` activity; present but unrecognized
/// values are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripInput {
    /// Home altitude in feet
    pub home_altitude: Option<String>,
    /// Destination altitude in feet
    pub destination_altitude: Option<String>,
    /// Fitness level name
    pub fitness_level: Option<String>,
    /// Activity level name
    pub activity_level: Option<String>,
    /// Arrival date (YYYY-MM-DD)
    pub arrival_date: Option<String>,
    /// Departure date (YYYY-MM-DD)
    pub departure_date: Option<String>,
}

impl TripInput {
    /// Validate into `TripParameters`.
    pub fn validate(&self) -> Result<TripParameters> {
        let home = parse_altitude("home_altitude", self.home_altitude.as_deref())?;
        let destination =
            parse_altitude("destination_altitude", self.destination_altitude.as_deref())?;

        let fitness_level = match self.fitness_level.as_deref() {
            Some(s) => s.parse()?,
            None => FitnessLevel::default(),
        };
        let activity_level = match self.activity_level.as_deref() {
            Some(s) => s.parse()?,
            None => ActivityLevel::default(),
        };

        let mut params = TripParameters::new(home, destination, fitness_level, activity_level);
        params.arrival_date = parse_date("arrival_date", self.arrival_date.as_deref())?;
        params.departure_date = parse_date("departure_date", self.departure_date.as_deref())?;

        if let (Some(arrival), Some(departure)) = (params.arrival_date, params.departure_date) {
            validate_trip_dates(arrival, departure)?;
        }

        Ok(params)
    }
}

fn parse_altitude(field: &'static str, raw: Option<&str>) -> Result<i32> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    let Some(raw) = raw else {
        return Err(CoreError::invalid_input(field, "required"));
    };
    raw.parse::<i32>().map_err(|_| {
        CoreError::invalid_input(field, format!("'{}' is not a whole number of feet", raw))
    })
}

fn parse_date(field: &'static str, raw: Option<&str>) -> Result<Option<NaiveDate>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Some)
            .map_err(|_| CoreError::invalid_input(field, format!("'{}' is not a YYYY-MM-DD date", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(home: &str, dest: &str) -> TripInput {
        TripInput {
            home_altitude: Some(home.to_string()),
            destination_altitude: Some(dest.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_defaults_enum_selections() {
        let params = input("500", "10000").validate().unwrap();
        assert_eq!(params.home_altitude_feet, 500);
        assert_eq!(params.destination_altitude_feet, 10000);
        assert_eq!(params.fitness_level, FitnessLevel::Average);
        assert_eq!(params.activity_level, ActivityLevel::Moderate);
        assert!(params.arrival_date.is_none());
    }

    #[test]
    fn test_validate_accepts_below_sea_level() {
        let params = input("-282", " 5280 ").validate().unwrap();
        assert_eq!(params.home_altitude_feet, -282);
        assert_eq!(params.destination_altitude_feet, 5280);
    }

    #[test]
    fn test_missing_altitude_is_invalid_input() {
        let mut raw = input("500", "");
        let err = raw.validate().unwrap_err();
        assert_eq!(err.field(), "destination_altitude");

        raw.destination_altitude = None;
        assert_eq!(raw.validate().unwrap_err().field(), "destination_altitude");

        raw = input("", "9000");
        assert_eq!(raw.validate().unwrap_err().field(), "home_altitude");
    }

    #[test]
    fn test_non_numeric_altitude_is_invalid_input() {
        let err = input("five hundred", "10000").validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput { field: "home_altitude", .. }));
    }

    #[test]
    fn test_unrecognized_enum_is_invalid_input() {
        let mut raw = input("500", "10000");
        raw.fitness_level = Some("superhuman".to_string());
        assert_eq!(raw.validate().unwrap_err().field(), "fitness_level");

        raw.fitness_level = Some("Athlete".to_string());
        raw.activity_level = Some("".to_string());
        assert_eq!(raw.validate().unwrap_err().field(), "activity_level");
    }

    #[test]
    fn test_zero_length_trip_is_rejected() {
        let mut raw = input("500", "10000");
        raw.arrival_date = Some("2026-01-10".to_string());
        raw.departure_date = Some("2026-01-10".to_string());
        assert_eq!(raw.validate().unwrap_err().field(), "departure_date");

        raw.departure_date = Some("2026-01-09".to_string());
        assert_eq!(raw.validate().unwrap_err().field(), "departure_date");

        raw.departure_date = Some("2026-01-15".to_string());
        let params = raw.validate().unwrap();
        assert_eq!(params.departure_date, NaiveDate::from_ymd_opt(2026, 1, 15));
    }

    #[test]
    fn test_bad_date_is_invalid_input() {
        let mut raw = input("500", "10000");
        raw.arrival_date = Some("01/10/2026".to_string());
        assert_eq!(raw.validate().unwrap_err().field(), "arrival_date");
    }

    #[test]
    fn test_level_names_parse_back() {
        for level in FitnessLevel::ALL {
            assert_eq!(level.as_str().parse::<FitnessLevel>().unwrap(), level);
        }
        for level in ActivityLevel::ALL {
            assert_eq!(level.to_string().parse::<ActivityLevel>().unwrap(), level);
        }
    }
}
