//! Elevations of common US cities and mountain towns.
//!
//! Used to fill in home or destination altitude from a place name.

/// Maximum number of results returned by [`search_cities`].
pub const MAX_SEARCH_RESULTS: usize = 10;

/// Minimum query length for [`search_cities`].
pub const MIN_QUERY_LEN: usize = 2;

/// A known place and its elevation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    /// Lowercase city name
    pub name: &'static str,
    /// Lowercase two-letter state code
    pub state: &'static str,
    /// Elevation in feet
    pub elevation_feet: i32,
    /// Extra lookup keys
    pub aliases: &'static [&'static str],
}

impl City {
    const fn new(name: &'static str, state: &'static str, elevation_feet: i32) -> Self {
        Self { name, state, elevation_feet, aliases: &[] }
    }

    const fn aliased(
        name: &'static str,
        state: &'static str,
        elevation_feet: i32,
        aliases: &'static [&'static str],
    ) -> Self {
        Self { name, state, elevation_feet, aliases }
    }

    /// Lookup keys in display order: "city, st", "city", then aliases.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        [format!("{}, {}", self.name, self.state), self.name.to_string()]
            .into_iter()
            .chain(self.aliases.iter().map(|a| a.to_string()))
    }
}

/// Known places, grouped by region.
pub static CITIES: &[City] = &[
    // Colorado
    City::new("denver", "co", 5280),
    City::new("colorado springs", "co", 6035),
    City::new("boulder", "co", 5430),
    City::new("aspen", "co", 7908),
    City::new("vail", "co", 8150),
    City::new("breckenridge", "co", 9600),
    City::new("leadville", "co", 10152),
    // California
    City::new("los angeles", "ca", 305),
    City::new("san francisco", "ca", 52),
    City::new("san diego", "ca", 62),
    City::new("sacramento", "ca", 30),
    City::new("lake tahoe", "ca", 6225),
    // New York
    City::aliased("new york", "ny", 33, &["nyc"]),
    City::new("buffalo", "ny", 600),
    // Other major cities
    City::new("chicago", "il", 594),
    City::new("houston", "tx", 80),
    City::new("phoenix", "az", 1086),
    City::new("philadelphia", "pa", 39),
    City::new("seattle", "wa", 175),
    City::new("boston", "ma", 141),
    City::new("atlanta", "ga", 1050),
    City::new("miami", "fl", 6),
    City::new("dallas", "tx", 430),
    City::new("austin", "tx", 489),
    City::new("portland", "or", 50),
    City::new("las vegas", "nv", 2001),
    City::new("salt lake city", "ut", 4226),
    City::new("minneapolis", "mn", 830),
    City::new("detroit", "mi", 600),
    City::new("nashville", "tn", 597),
    // Mountain towns
    City::new("jackson", "wy", 6237),
    City::new("park city", "ut", 7000),
    City::new("sun valley", "id", 5920),
    City::new("telluride", "co", 8750),
    City::new("mammoth lakes", "ca", 7880),
    City::new("flagstaff", "az", 6910),
    City::new("santa fe", "nm", 7199),
    City::new("reno", "nv", 4505),
];

/// Elevation in feet for a place name, ignoring case and surrounding space.
pub fn city_elevation(name: &str) -> Option<i32> {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    CITIES
        .iter()
        .find(|city| city.keys().any(|key| key == normalized))
        .map(|city| city.elevation_feet)
}

/// Lookup keys containing `query`, at most [`MAX_SEARCH_RESULTS`].
///
/// Queries shorter than [`MIN_QUERY_LEN`] characters return nothing.
pub fn search_cities(query: &str) -> Vec<String> {
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }
    let normalized = query.to_lowercase();
    CITIES
        .iter()
        .flat_map(|city| city.keys())
        .filter(|key| key.contains(&normalized))
        .take(MAX_SEARCH_RESULTS)
        .collect()
}
