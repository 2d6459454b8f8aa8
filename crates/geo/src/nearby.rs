//! Random placement of nearby cats.
//!
//! Points are sampled uniformly over a disk around the center using the
//! square-root radius transform, converted to degree offsets with a flat
//! meters-per-degree approximation, annotated with their Haversine distance
//! from the center, and returned closest first.
//!
//! The longitude offset divides by `cos(latitude)`, so centers at or near the
//! poles produce infinite or meaningless longitudes. This is left as is.

use crate::{DistanceCalculator, GeoConfig, GeoPosition};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

const CAT_NAMES: &[&str] = &[
    "Boss Orange", "Mochi", "Shadow", "Luna", "Coco",
    "Neko", "Mimi", "Ginger", "Whiskers", "Bella",
    "Xiao Ju", "Doudou", "Charcoal", "Snowball", "Huahua",
];

const CAT_STATUSES: &[CatStatus] = &[CatStatus::Active, CatStatus::Sleeping, CatStatus::Hidden];

const CAT_AVATARS: &[&str] = &[
    "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?w=200&q=80",
    "https://images.unsplash.com/photo-1573865526739-10659fec78a5?w=200&q=80",
    "https://images.unsplash.com/photo-1495360019602-e001922271aa?w=200&q=80",
    "https://images.unsplash.com/photo-1526336024174-e58f5cdd8e13?w=200&q=80",
    "https://images.unsplash.com/photo-1533738363-b7f9aef128ce?w=200&q=80",
];

const CAT_BADGES: &[[&str; 2]] = &[
    ["Pharmacy Guardian", "King of the Street"],
    ["Cafe Manager", "Professional Napper"],
    ["Ninja", "Fishmonger's Nemesis"],
    ["Night Walker", "Mouse Catcher"],
    ["Sunbathing Expert", "Neighbourhood Beauty"],
];

const CAT_DESCRIPTIONS: &[&str] = &[
    "Undisputed ruler of the block. Loves scallops, hates scooters.",
    "Sleeps on the espresso machine because it is warm. Very friendly if you bring snacks.",
    "Hard to spot, usually hiding behind the boxes at the old bookshop.",
    "A mysterious night owl, rarely seen during the day.",
    "Naps in the sun whenever there is any.",
];

const LAST_SEEN: &[&str] = &[
    "just now",
    "5 minutes ago",
    "10 minutes ago",
    "30 minutes ago",
    "1 hour ago",
    "2 hours ago",
    "yesterday",
];

/// What a cat is currently up to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatStatus {
    /// Out and about
    Active,
    /// Asleep somewhere visible
    Sleeping,
    /// Known to be nearby but out of sight
    Hidden,
}

/// A cat placed on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cat {
    /// Stable identifier, `"1"` for the first generated cat
    pub id: String,
    /// Display name
    pub name: String,
    /// Avatar image URL
    pub avatar: String,
    /// Cover image URL
    pub cover_image: String,
    /// Where the cat is
    pub position: GeoPosition,
    /// Current status
    pub status: CatStatus,
    /// Badge labels
    pub badges: Vec<String>,
    /// Distance from the generation center at generation time, in meters
    ///
    /// Saturates at `u32::MAX`. A NaN distance (non-finite center) is stored as 0.
    pub distance_meters: u32,
    /// Friendliness score, 1 to 5
    pub friendliness: u8,
    /// Short description
    pub description: String,
    /// When the cat was last seen
    pub last_seen: String,
}

/// Generates cats around a center point.
#[derive(Debug, Clone, Copy)]
pub struct NearbyGenerator {
    calculator: DistanceCalculator,
    meters_per_degree: f64,
}

impl Default for NearbyGenerator {
    fn default() -> Self {
        Self::from_config(&GeoConfig::default())
    }
}

impl NearbyGenerator {
    /// Create a generator using the constants in `config`.
    pub fn from_config(config: &GeoConfig) -> Self {
        Self {
            calculator: DistanceCalculator::new(config.earth_radius_m),
            meters_per_degree: config.meters_per_degree,
        }
    }

    /// Generate `count` cats uniformly within `radius_m` of `center`, closest first.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        center: GeoPosition,
        count: usize,
        radius_m: f64,
        rng: &mut R,
    ) -> Vec<Cat> {
        let mut cats: Vec<Cat> = (0..count)
            .map(|i| {
                let position = self.random_position(center, radius_m, rng);
                let distance = self.calculator.between(&center, &position);
                build_cat(i, position, distance_to_u32(distance), rng)
            })
            .collect();

        cats.sort_by_key(|cat| cat.distance_meters);

        tracing::debug!(count, radius_m, "Generated nearby cats");
        cats
    }

    /// Uniform random point within `radius_m` of `center`.
    pub fn random_position<R: Rng + ?Sized>(
        &self,
        center: GeoPosition,
        radius_m: f64,
        rng: &mut R,
    ) -> GeoPosition {
        let angle = rng.gen_range(0.0..TAU);
        // sqrt keeps the density uniform over the disk area
        let distance = radius_m * rng.gen_range(0.0f64..1.0).sqrt();

        let lat_offset = (distance / self.meters_per_degree) * angle.cos();
        let lng_offset = (distance
            / (self.meters_per_degree * center.latitude.to_radians().cos()))
            * angle.sin();

        GeoPosition::new(center.latitude + lat_offset, center.longitude + lng_offset)
    }
}

/// Generate `count` cats within `radius_m` of `center` with the default constants.
///
/// # Example
/// ```
/// use catmap_geo::{generate_nearby, GeoPosition};
///
/// let center = GeoPosition::new(31.2079, 121.4737);
/// let cats = generate_nearby(center, 8, 2000.0, &mut rand::thread_rng());
///
/// assert_eq!(cats.len(), 8);
/// assert!(cats.windows(2).all(|w| w[0].distance_meters <= w[1].distance_meters));
/// ```
pub fn generate_nearby<R: Rng + ?Sized>(
    center: GeoPosition,
    count: usize,
    radius_m: f64,
    rng: &mut R,
) -> Vec<Cat> {
    NearbyGenerator::default().generate(center, count, radius_m, rng)
}

/// Generate the configured number of cats within the configured radius,
/// using a thread-local random source.
pub fn generate_nearby_with_defaults(center: GeoPosition, config: &GeoConfig) -> Vec<Cat> {
    NearbyGenerator::from_config(config).generate(
        center,
        config.nearby_count,
        config.nearby_radius_m,
        &mut rand::thread_rng(),
    )
}

fn build_cat<R: Rng + ?Sized>(index: usize, position: GeoPosition, distance: u32, rng: &mut R) -> Cat {
    let avatar = CAT_AVATARS[index % CAT_AVATARS.len()];

    Cat {
        id: (index + 1).to_string(),
        name: CAT_NAMES[index % CAT_NAMES.len()].to_string(),
        avatar: avatar.to_string(),
        cover_image: avatar.to_string(),
        position,
        status: CAT_STATUSES[index % CAT_STATUSES.len()],
        badges: CAT_BADGES[index % CAT_BADGES.len()]
            .iter()
            .map(|b| b.to_string())
            .collect(),
        distance_meters: distance,
        friendliness: rng.gen_range(1..=5),
        description: CAT_DESCRIPTIONS[index % CAT_DESCRIPTIONS.len()].to_string(),
        last_seen: LAST_SEEN[rng.gen_range(0..LAST_SEEN.len())].to_string(),
    }
}

/// Saturating conversion; NaN maps to 0.
#[inline]
fn distance_to_u32(meters: f64) -> u32 {
    meters as u32
}
