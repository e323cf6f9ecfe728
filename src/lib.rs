//! # Shape Tracer
//!
//! GPS shape-tracing score engine for location-based drawing games.
//!
//! One player (the Painter) places a target shape on the map; the others
//! (the Brushes) walk it while their GPS positions are recorded as trails.
//! At game end this library scores how closely the combined trails
//! reproduce the target boundary and converts the similarity into a
//! competitive point value.
//!
//! This library provides:
//! - Target boundary construction for parametric, catalog and freehand templates
//! - Coverage / precision / F1 scoring of GPS trails against a boundary
//! - A difficulty-weighted points formula for leaderboards
//!
//! ## Features
//!
//! - **`parallel`** - Enable parallel per-player scoring with rayon
//! - **`ffi`** - Enable FFI bindings for mobile platforms (iOS/Android)
//! - **`full`** - Enable all features
//!
//! ## Quick Start
//!
//! ```rust
//! use shape_tracer::{GameParams, GeoPoint, GpsPoint, ScoreConfig, TemplateDescriptor, score_game};
//! use std::collections::HashMap;
//!
//! // A 100m square target in central London
//! let template = TemplateDescriptor {
//!     template_id: Some("square".to_string()),
//!     center: Some(GeoPoint::new(51.5074, -0.1278)),
//!     radius_meters: Some(100.0),
//!     ..TemplateDescriptor::default()
//! };
//!
//! // One brush walked a short stretch of the top edge
//! let mut trails: HashMap<String, Vec<GpsPoint>> = HashMap::new();
//! trails.insert(
//!     "alice".to_string(),
//!     vec![
//!         GpsPoint::new(51.50830, -0.12920),
//!         GpsPoint::new(51.50830, -0.12780),
//!         GpsPoint::new(51.50830, -0.12640),
//!     ],
//! );
//!
//! let score = score_game(&trails, &template, &GameParams::default(), &ScoreConfig::default());
//! println!(
//!     "team: {}% accurate, {} points",
//!     score.team.breakdown.accuracy_pct, score.team.points
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Planar projection of geographic coordinates
pub mod projection;
pub use projection::PlanarPoint;

// Target boundary construction
pub mod boundary;
pub use boundary::build_boundary;

// Trail cleaning, resampling and boundary densification
pub mod sampling;

// Point-to-polyline proximity queries
pub mod distance;

// Coverage / precision scoring model
pub mod scoring;
pub use scoring::{score_game, score_trails, tolerance_for_radius};

#[cfg(feature = "parallel")]
pub use scoring::score_game_parallel;

// Leaderboard points formula
pub mod points;
pub use points::{difficulty_multiplier, game_points};

// Haversine trail statistics
pub mod geo_utils;

#[cfg(feature = "ffi")]
uniffi::setup_scaffolding!();

/// Initialize logging for Android (only used in FFI)
#[cfg(all(feature = "ffi", target_os = "android"))]
fn init_logging() {
    use android_logger::Config;
    use log::LevelFilter;

    android_logger::init_once(
        Config::default()
            .with_max_level(LevelFilter::Debug)
            .with_tag("ShapeTracerRust"),
    );
}

#[cfg(all(feature = "ffi", not(target_os = "android")))]
fn init_logging() {
    // No-op on non-Android platforms
}

// ============================================================================
// Core Types
// ============================================================================

/// A template/boundary coordinate with `lat`/`lng` field names.
///
/// Templates and generated boundaries use `lat`/`lng`, while recorded trail
/// samples use `latitude`/`longitude` (see [`GpsPoint`]). The two naming
/// schemes come from different subsystems of the surrounding application
/// and are kept distinct at this boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Create a new template coordinate.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A recorded GPS trail sample.
///
/// # Example
/// ```
/// use shape_tracer::GpsPoint;
/// let sample = GpsPoint::new(51.5074, -0.1278); // London
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct GpsPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsPoint {
    /// Create a new GPS sample.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Check if the sample has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Bridge the trail-sample field names onto the template coordinate names.
    pub fn as_geo(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// A unit-scale vertex offset from a catalog template definition.
///
/// Roughly in `[-1, 1]` on both axes; scaled by the template radius when
/// the boundary is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct UnitVertex {
    pub x: f64,
    pub y: f64,
}

/// The parametric shape kinds the engine can generate directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum ShapeKind {
    Square,
    Triangle,
    Star,
    Circle,
}

/// A resolved target shape, dispatched by variant instead of by id string.
///
/// Parametric and Catalog boundaries are closed (the outline wraps from the
/// last vertex back to the first); freehand Polygon boundaries are open and
/// never auto-closed. The asymmetry is intentional and load-bearing for
/// densification and distance queries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum ShapeTemplate {
    /// A regular shape generated from a center and radius.
    Parametric {
        kind: ShapeKind,
        center: GeoPoint,
        radius_meters: f64,
    },
    /// A catalog shape: unit-scale vertices scaled by the radius.
    Catalog {
        center: GeoPoint,
        radius_meters: f64,
        base_vertices: Vec<UnitVertex>,
    },
    /// A freehand boundary, used verbatim as an open polyline.
    Polygon { vertices: Vec<GeoPoint> },
}

impl ShapeTemplate {
    /// The template center, when the variant has one.
    pub fn center(&self) -> Option<GeoPoint> {
        match self {
            ShapeTemplate::Parametric { center, .. } | ShapeTemplate::Catalog { center, .. } => {
                Some(*center)
            }
            ShapeTemplate::Polygon { .. } => None,
        }
    }

    /// The template radius in meters, when the variant has one.
    pub fn radius_meters(&self) -> Option<f64> {
        match self {
            ShapeTemplate::Parametric { radius_meters, .. }
            | ShapeTemplate::Catalog { radius_meters, .. } => Some(*radius_meters),
            ShapeTemplate::Polygon { .. } => None,
        }
    }

    /// Whether the boundary wraps from its last vertex back to the first.
    ///
    /// Freehand polygons stay open; every other variant closes.
    pub fn is_closed(&self) -> bool {
        !matches!(self, ShapeTemplate::Polygon { .. })
    }
}

/// The JSON wire form of a target template, as produced by the backend.
///
/// All fields are optional: the descriptor is resolved into a
/// [`ShapeTemplate`] with [`TemplateDescriptor::resolve`], and anything
/// that cannot be resolved scores as a soft zero rather than an error.
///
/// # Example
/// ```
/// use shape_tracer::TemplateDescriptor;
///
/// let json = r#"{"templateId":"star","center":{"lat":59.33,"lng":18.07},"radiusMeters":80}"#;
/// let descriptor: TemplateDescriptor = serde_json::from_str(json).unwrap();
/// assert!(descriptor.resolve().is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct TemplateDescriptor {
    /// Shape id: "square", "triangle", "star", "circle", "polygon",
    /// or a catalog template id.
    pub template_id: Option<String>,
    pub center: Option<GeoPoint>,
    pub radius_meters: Option<f64>,
    /// Explicit freehand vertices (polygon templates only).
    pub vertices: Option<Vec<GeoPoint>>,
    /// Unit-scale vertex offsets (catalog templates only).
    pub base_vertices: Option<Vec<UnitVertex>>,
    /// Difficulty multiplier assigned by the template catalog.
    pub multiplier: Option<f64>,
    /// Catalog override for the circle segment count.
    pub point_count: Option<u32>,
    /// Catalog override for the star inner-vertex radius ratio.
    pub inner_ratio: Option<f64>,
}

impl TemplateDescriptor {
    /// Resolve the wire descriptor into a typed shape.
    ///
    /// Freehand polygons take precedence, then catalog base vertices, then
    /// the known parametric ids; unknown ids fall back to a circle
    /// approximation. Returns `None` when a center-based shape is missing
    /// its center or a positive radius.
    pub fn resolve(&self) -> Option<ShapeTemplate> {
        if self.template_id.as_deref() == Some("polygon") {
            if let Some(vertices) = &self.vertices {
                if vertices.len() >= 2 {
                    return Some(ShapeTemplate::Polygon {
                        vertices: vertices.clone(),
                    });
                }
            }
        }

        let center = self
            .center
            .filter(|c| c.lat.is_finite() && c.lng.is_finite())?;
        let radius_meters = self.radius_meters.filter(|r| *r > 0.0)?;

        if let Some(base_vertices) = &self.base_vertices {
            if !base_vertices.is_empty() {
                return Some(ShapeTemplate::Catalog {
                    center,
                    radius_meters,
                    base_vertices: base_vertices.clone(),
                });
            }
        }

        let kind = match self.template_id.as_deref() {
            Some("square") => ShapeKind::Square,
            Some("triangle") => ShapeKind::Triangle,
            Some("star") => ShapeKind::Star,
            // Unknown and missing ids keep the circle fallback
            _ => ShapeKind::Circle,
        };

        Some(ShapeTemplate::Parametric {
            kind,
            center,
            radius_meters,
        })
    }

    /// Copy of `base` with this template's catalog overrides applied
    /// (`pointCount` for circle sampling, `innerRatio` for star vertices).
    pub fn effective_config(&self, base: &ScoreConfig) -> ScoreConfig {
        let mut config = base.clone();
        if let Some(n) = self.point_count {
            if n >= 3 {
                config.circle_segments = n;
            }
        }
        if let Some(r) = self.inner_ratio {
            if r > 0.0 && r < 1.0 {
                config.star_inner_ratio = r;
            }
        }
        config
    }
}

/// Configuration for boundary sampling, tolerance and the points formula.
///
/// Every tuning constant of the engine lives here so values can be adjusted
/// without touching the algorithms.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct ScoreConfig {
    /// Arc-length step for trail resampling and boundary densification, in meters.
    /// Default: 2.0
    pub sample_step_meters: f64,

    /// Lower bound for the on-shape tolerance, in meters.
    /// Default: 3.0 (GPS variance makes tighter tolerances unfair)
    pub tolerance_min_meters: f64,

    /// Upper bound for the on-shape tolerance, in meters.
    /// Default: 10.0
    pub tolerance_max_meters: f64,

    /// Fraction of the template radius used as the on-shape tolerance,
    /// between the min/max bounds. Default: 0.06
    pub tolerance_radius_fraction: f64,

    /// Radius assumed for templates that carry none, in meters.
    /// Default: 50.0
    pub default_radius_meters: f64,

    /// Number of vertices approximating a circle boundary.
    /// Default: 64
    pub circle_segments: u32,

    /// Inner vertex radius of the star, relative to the outer radius.
    /// Default: 0.5
    pub star_inner_ratio: f64,

    /// Scale from the team's adjusted percentage (0-100) to base points.
    /// Default: 12.0
    pub points_base_scale: f64,

    /// Radius at which the radius factor is neutral, in meters.
    /// Default: 100.0
    pub radius_baseline_meters: f64,

    /// Lower clamp for the radius factor. Default: 0.8
    pub radius_factor_min: f64,

    /// Upper clamp for the radius factor. Default: 1.5
    pub radius_factor_max: f64,

    /// Game duration rewarded with a neutral time factor, in seconds.
    /// Default: 90.0
    pub time_baseline_seconds: f64,

    /// Durations below this count as this long, in seconds. Default: 30.0
    pub time_floor_seconds: f64,

    /// Lower clamp for the time factor. Default: 0.8
    pub time_factor_min: f64,

    /// Upper clamp for the time factor. Default: 1.2
    pub time_factor_max: f64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            sample_step_meters: 2.0,
            tolerance_min_meters: 3.0,
            tolerance_max_meters: 10.0,
            tolerance_radius_fraction: 0.06, // 6% of the template radius
            default_radius_meters: 50.0,
            circle_segments: 64,
            star_inner_ratio: 0.5,
            points_base_scale: 12.0, // adjustedPct 0-100 => base 0-1200
            radius_baseline_meters: 100.0,
            radius_factor_min: 0.8,
            radius_factor_max: 1.5,
            time_baseline_seconds: 90.0,
            time_floor_seconds: 30.0,
            time_factor_min: 0.8,
            time_factor_max: 1.2,
        }
    }
}

/// Game-level parameters supplied by the session layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct GameParams {
    /// Elapsed game time in seconds.
    pub time_seconds: f64,
    /// Players to report on. When `None`, every trail contributor is
    /// reported, in sorted username order.
    pub roster: Option<Vec<String>>,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            time_seconds: 60.0,
            roster: None,
        }
    }
}

/// Trail snapshot: player username to ordered GPS samples.
pub type TrailMap = HashMap<String, Vec<GpsPoint>>;

/// Coverage/precision metrics for one scoring pass.
///
/// Zero-valued with a `reason` when the input was degenerate (no usable
/// boundary, or no trail points); the game still renders a results screen
/// in that case, so this is data rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct ScoreBreakdown {
    /// Fraction of boundary samples with a trail nearby (0-1).
    pub coverage: f64,
    /// Fraction of trail samples near the boundary (0-1).
    pub precision: f64,
    /// Harmonic mean of coverage and precision (0-1); the reported accuracy.
    pub f1: f64,
    /// precision * coverage; the stricter metric used for points (0-1).
    pub adjusted: f64,
    /// `round(f1 * 100)`
    pub accuracy_pct: u32,
    /// `round(adjusted * 100)`
    pub adjusted_pct: u32,
    /// Why the metrics are zero, when they are zero by construction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ScoreBreakdown {
    /// An all-zero breakdown annotated with a diagnostic reason.
    pub fn zeroed(reason: &str) -> Self {
        Self {
            coverage: 0.0,
            precision: 0.0,
            f1: 0.0,
            adjusted: 0.0,
            accuracy_pct: 0,
            adjusted_pct: 0,
            reason: Some(reason.to_string()),
        }
    }

    pub(crate) fn from_rates(coverage: f64, precision: f64) -> Self {
        let f1 = if coverage + precision > 0.0 {
            2.0 * coverage * precision / (coverage + precision)
        } else {
            0.0
        };
        let adjusted = precision * coverage;
        Self {
            coverage,
            precision,
            f1,
            adjusted,
            accuracy_pct: (f1 * 100.0).round() as u32,
            adjusted_pct: (adjusted * 100.0).round() as u32,
            reason: None,
        }
    }
}

/// One player's result record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct PlayerScore {
    pub username: String,
    /// Haversine length of the player's cleaned trail, in meters.
    pub walked_meters: f64,
    #[serde(flatten)]
    pub breakdown: ScoreBreakdown,
}

/// The team-wide result record, scored over the union of all trails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct TeamScore {
    /// Combined walked length of all cleaned trails, in meters.
    pub walked_meters: f64,
    #[serde(flatten)]
    pub breakdown: ScoreBreakdown,
    /// Final leaderboard point value.
    pub points: u32,
}

/// The full result of scoring one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct GameScore {
    pub per_player: Vec<PlayerScore>,
    pub team: TeamScore,
}

// ============================================================================
// FFI Exports (only when feature enabled)
// ============================================================================

#[cfg(feature = "ffi")]
mod ffi {
    use super::*;
    use log::info;

    /// One player's recorded trail (flat record for FFI batch calls).
    #[derive(Debug, Clone, uniffi::Record)]
    pub struct PlayerTrail {
        pub username: String,
        pub points: Vec<GpsPoint>,
    }

    /// Score a finished game: per-player records plus the team record.
    #[uniffi::export]
    pub fn ffi_score_game(
        trails: Vec<PlayerTrail>,
        template: TemplateDescriptor,
        params: GameParams,
        config: ScoreConfig,
    ) -> GameScore {
        init_logging();
        info!(
            "[ShapeTracerRust] score_game called for {} players",
            trails.len()
        );

        let start = std::time::Instant::now();
        let trail_map: TrailMap = trails.into_iter().map(|t| (t.username, t.points)).collect();

        #[cfg(feature = "parallel")]
        let score = score_game_parallel(&trail_map, &template, &params, &config);

        #[cfg(not(feature = "parallel"))]
        let score = score_game(&trail_map, &template, &params, &config);

        let elapsed = start.elapsed();
        info!(
            "[ShapeTracerRust] scored {} players: team {}% / {} points in {:?}",
            score.per_player.len(),
            score.team.breakdown.accuracy_pct,
            score.team.points,
            elapsed
        );

        score
    }

    /// Boundary vertices for rendering the target outline on the map.
    ///
    /// Returns the same vertices the engine scores against, so the drawn
    /// shape and the scored shape cannot drift apart.
    #[uniffi::export]
    pub fn ffi_build_boundary(template: TemplateDescriptor, config: ScoreConfig) -> Vec<GeoPoint> {
        init_logging();
        let config = template.effective_config(&config);
        match template.resolve() {
            Some(shape) => build_boundary(&shape, &config),
            None => Vec::new(),
        }
    }

    /// Get default scoring configuration.
    #[uniffi::export]
    pub fn default_score_config() -> ScoreConfig {
        init_logging();
        ScoreConfig::default()
    }

    /// Get default game parameters.
    #[uniffi::export]
    pub fn default_game_params() -> GameParams {
        GameParams::default()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gps_point_validation() {
        assert!(GpsPoint::new(51.5074, -0.1278).is_valid());
        assert!(!GpsPoint::new(91.0, 0.0).is_valid());
        assert!(!GpsPoint::new(0.0, 181.0).is_valid());
        assert!(!GpsPoint::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_resolve_known_shapes() {
        for (id, kind) in [
            ("square", ShapeKind::Square),
            ("triangle", ShapeKind::Triangle),
            ("star", ShapeKind::Star),
            ("circle", ShapeKind::Circle),
        ] {
            let descriptor = TemplateDescriptor {
                template_id: Some(id.to_string()),
                center: Some(GeoPoint::new(51.5, -0.12)),
                radius_meters: Some(100.0),
                ..TemplateDescriptor::default()
            };
            match descriptor.resolve() {
                Some(ShapeTemplate::Parametric { kind: k, .. }) => assert_eq!(k, kind),
                other => panic!("expected parametric {id}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_resolve_unknown_id_falls_back_to_circle() {
        let descriptor = TemplateDescriptor {
            template_id: Some("heart".to_string()),
            center: Some(GeoPoint::new(51.5, -0.12)),
            radius_meters: Some(100.0),
            ..TemplateDescriptor::default()
        };
        assert!(matches!(
            descriptor.resolve(),
            Some(ShapeTemplate::Parametric {
                kind: ShapeKind::Circle,
                ..
            })
        ));
    }

    #[test]
    fn test_resolve_polygon_is_open_and_verbatim() {
        let vertices = vec![
            GeoPoint::new(51.50, -0.13),
            GeoPoint::new(51.51, -0.12),
            GeoPoint::new(51.50, -0.11),
        ];
        let descriptor = TemplateDescriptor {
            template_id: Some("polygon".to_string()),
            vertices: Some(vertices.clone()),
            ..TemplateDescriptor::default()
        };
        let shape = descriptor.resolve().unwrap();
        assert!(!shape.is_closed());
        assert_eq!(shape, ShapeTemplate::Polygon { vertices });
    }

    #[test]
    fn test_resolve_catalog_takes_precedence_over_kind() {
        let descriptor = TemplateDescriptor {
            template_id: Some("square".to_string()),
            center: Some(GeoPoint::new(51.5, -0.12)),
            radius_meters: Some(100.0),
            base_vertices: Some(vec![
                UnitVertex { x: 0.0, y: 1.0 },
                UnitVertex { x: 1.0, y: -1.0 },
                UnitVertex { x: -1.0, y: -1.0 },
            ]),
            ..TemplateDescriptor::default()
        };
        assert!(matches!(
            descriptor.resolve(),
            Some(ShapeTemplate::Catalog { .. })
        ));
    }

    #[test]
    fn test_resolve_rejects_missing_center_or_radius() {
        let no_center = TemplateDescriptor {
            template_id: Some("square".to_string()),
            radius_meters: Some(100.0),
            ..TemplateDescriptor::default()
        };
        assert_eq!(no_center.resolve(), None);

        let zero_radius = TemplateDescriptor {
            template_id: Some("square".to_string()),
            center: Some(GeoPoint::new(51.5, -0.12)),
            radius_meters: Some(0.0),
            ..TemplateDescriptor::default()
        };
        assert_eq!(zero_radius.resolve(), None);
    }

    #[test]
    fn test_resolve_accepts_equator_center() {
        // lat 0 / lng 0 is a legitimate center, not a missing one
        let descriptor = TemplateDescriptor {
            template_id: Some("square".to_string()),
            center: Some(GeoPoint::new(0.0, 0.0)),
            radius_meters: Some(100.0),
            ..TemplateDescriptor::default()
        };
        assert!(descriptor.resolve().is_some());
    }

    #[test]
    fn test_descriptor_wire_field_names() {
        let json = r#"{
            "templateId": "star",
            "center": {"lat": 59.33, "lng": 18.07},
            "radiusMeters": 80,
            "multiplier": 1.6,
            "innerRatio": 0.4,
            "pointCount": 32
        }"#;
        let descriptor: TemplateDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.template_id.as_deref(), Some("star"));
        assert_eq!(descriptor.radius_meters, Some(80.0));
        assert_eq!(descriptor.multiplier, Some(1.6));
        assert_eq!(descriptor.inner_ratio, Some(0.4));
        assert_eq!(descriptor.point_count, Some(32));
    }

    #[test]
    fn test_trail_wire_field_names() {
        let json = r#"{"alice": [{"latitude": 51.5074, "longitude": -0.1278}]}"#;
        let trails: TrailMap = serde_json::from_str(json).unwrap();
        assert_eq!(trails["alice"][0], GpsPoint::new(51.5074, -0.1278));
    }

    #[test]
    fn test_effective_config_overrides() {
        let descriptor = TemplateDescriptor {
            point_count: Some(32),
            inner_ratio: Some(0.4),
            ..TemplateDescriptor::default()
        };
        let config = descriptor.effective_config(&ScoreConfig::default());
        assert_eq!(config.circle_segments, 32);
        assert_eq!(config.star_inner_ratio, 0.4);

        // Out-of-range overrides are ignored
        let bad = TemplateDescriptor {
            point_count: Some(2),
            inner_ratio: Some(1.5),
            ..TemplateDescriptor::default()
        };
        let config = bad.effective_config(&ScoreConfig::default());
        assert_eq!(config.circle_segments, 64);
        assert_eq!(config.star_inner_ratio, 0.5);
    }

    #[test]
    fn test_score_result_serializes_flat() {
        let player = PlayerScore {
            username: "alice".to_string(),
            walked_meters: 123.4,
            breakdown: ScoreBreakdown::from_rates(0.5, 0.5),
        };
        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(json["username"], "alice");
        assert_eq!(json["accuracyPct"], 50);
        assert_eq!(json["walkedMeters"], 123.4);
        // Reason is omitted entirely when metrics are real
        assert!(json.get("reason").is_none());
    }
}
