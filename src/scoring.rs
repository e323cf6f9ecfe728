//! # Scoring Model
//!
//! Scores GPS trails against a target boundary.
//!
//! One scoring pass projects the boundary and the trails into a shared
//! planar frame, brings both to uniform sample density, then counts
//! proximity in both directions:
//!
//! - **Coverage** - fraction of boundary samples with a trail nearby:
//!   how much of the target outline was traced
//! - **Precision** - fraction of trail samples near the boundary:
//!   how much of the walked path stayed on-shape
//! - **F1** - harmonic mean of the two; the accuracy shown to players
//! - **Adjusted** - their product; stricter, used for the points formula
//!
//! The pass is pure and stateless: it takes an immutable trail snapshot
//! and template and returns records, so per-player and team passes can run
//! independently (see [`score_game_parallel`]). Degenerate input never
//! errors - the results screen must render even for a brush who never
//! moved - it yields zero metrics with a diagnostic reason instead.

use log::debug;

use crate::boundary::build_boundary;
use crate::distance::point_polyline_distance;
use crate::geo_utils::trail_length;
use crate::points::{difficulty_multiplier, game_points};
use crate::projection::{to_planar, PlanarPoint};
use crate::sampling::{clean_trail, densify, resample};
use crate::{
    GameParams, GameScore, GeoPoint, GpsPoint, PlayerScore, ScoreBreakdown, ScoreConfig,
    ShapeTemplate, TeamScore, TemplateDescriptor, TrailMap,
};

/// Reason attached to zero scores when no usable boundary exists.
pub const REASON_NO_BOUNDARY: &str = "No template boundary";

/// Reason attached to zero scores when a trail has no usable points.
pub const REASON_NO_TRAIL: &str = "No trail points";

/// Tolerance in meters for a sample to count as on-shape.
///
/// A fraction of the template radius, clamped between the configured floor
/// and cap; templates without a radius use the configured default.
pub fn tolerance_for_radius(radius_meters: Option<f64>, config: &ScoreConfig) -> f64 {
    let radius = radius_meters.unwrap_or(config.default_radius_meters);
    (config.tolerance_radius_fraction * radius)
        .min(config.tolerance_max_meters)
        .max(config.tolerance_min_meters)
}

/// Score a finished game: one record per rostered player plus the team
/// record over the union of all trails.
pub fn score_game(
    trails: &TrailMap,
    template: &TemplateDescriptor,
    params: &GameParams,
    config: &ScoreConfig,
) -> GameScore {
    let config = template.effective_config(config);
    let shape = template.resolve();
    let usernames = roster(trails, params);

    let Some(frame) = shape
        .as_ref()
        .and_then(|s| BoundaryFrame::prepare(s, &config))
    else {
        return zero_game(usernames, REASON_NO_BOUNDARY);
    };

    debug!(
        "scoring {} players against {} boundary samples (tol {:.1}m)",
        usernames.len(),
        frame.samples.len(),
        tolerance_for_radius(frame.radius_meters, &config)
    );

    let per_player: Vec<PlayerScore> = usernames
        .iter()
        .map(|username| score_player(username, trails, &frame, &config))
        .collect();

    let team = score_team(trails, template, shape.as_ref(), &frame, params, &config);
    GameScore { per_player, team }
}

/// Score a finished game with per-player passes fanned out with rayon.
///
/// Produces the same records as [`score_game`]; each player's pass is an
/// independent boundary-by-trail scan, so larger lobbies parallelize
/// cleanly.
#[cfg(feature = "parallel")]
pub fn score_game_parallel(
    trails: &TrailMap,
    template: &TemplateDescriptor,
    params: &GameParams,
    config: &ScoreConfig,
) -> GameScore {
    use rayon::prelude::*;

    let config = template.effective_config(config);
    let shape = template.resolve();
    let usernames = roster(trails, params);

    let Some(frame) = shape
        .as_ref()
        .and_then(|s| BoundaryFrame::prepare(s, &config))
    else {
        return zero_game(usernames, REASON_NO_BOUNDARY);
    };

    let per_player: Vec<PlayerScore> = usernames
        .par_iter()
        .map(|username| score_player(username, trails, &frame, &config))
        .collect();

    let team = score_team(trails, template, shape.as_ref(), &frame, params, &config);
    GameScore { per_player, team }
}

/// Team-only metrics for a trail snapshot against a template.
///
/// The lighter entry point for callers that only need the combined
/// accuracy; [`score_game`] adds per-player records and points.
pub fn score_trails(
    trails: &TrailMap,
    template: &TemplateDescriptor,
    config: &ScoreConfig,
) -> ScoreBreakdown {
    let config = template.effective_config(config);
    let shape = template.resolve();
    match shape
        .as_ref()
        .and_then(|s| BoundaryFrame::prepare(s, &config))
    {
        Some(frame) => score_lines(&frame, &merged_lines(trails), &config),
        None => ScoreBreakdown::zeroed(REASON_NO_BOUNDARY),
    }
}

// ============================================================================
// Internals
// ============================================================================

/// Densified boundary and projection frame shared by every scoring pass of
/// one game.
struct BoundaryFrame {
    origin: GeoPoint,
    samples: Vec<PlanarPoint>,
    radius_meters: Option<f64>,
}

impl BoundaryFrame {
    fn prepare(shape: &ShapeTemplate, config: &ScoreConfig) -> Option<Self> {
        let boundary = build_boundary(shape, config);
        if boundary.len() < 3 {
            return None;
        }
        // The origin is fixed once per run so every pass shares one frame
        let origin = shape.center().unwrap_or(boundary[0]);
        let xy: Vec<PlanarPoint> = boundary.iter().map(|p| to_planar(p, &origin)).collect();
        let samples = densify(&xy, config.sample_step_meters, shape.is_closed());
        Some(Self {
            origin,
            samples,
            radius_meters: shape.radius_meters(),
        })
    }
}

/// Score a set of cleaned trails against a prepared boundary.
fn score_lines(
    frame: &BoundaryFrame,
    lines: &[Vec<GpsPoint>],
    config: &ScoreConfig,
) -> ScoreBreakdown {
    // Resample every trail, then flatten into one sequence. Distance
    // queries treat the flattened sequence as a single polyline in both
    // directions.
    let mut trail_xy: Vec<PlanarPoint> = Vec::new();
    for line in lines {
        let xy: Vec<PlanarPoint> = line
            .iter()
            .map(|p| to_planar(&p.as_geo(), &frame.origin))
            .collect();
        trail_xy.extend(resample(&xy, config.sample_step_meters));
    }
    if trail_xy.is_empty() {
        return ScoreBreakdown::zeroed(REASON_NO_TRAIL);
    }

    let tol = tolerance_for_radius(frame.radius_meters, config);

    let covered = frame
        .samples
        .iter()
        .filter(|p| point_polyline_distance(p, &trail_xy) <= tol)
        .count();
    let coverage = covered as f64 / frame.samples.len() as f64;

    let on_shape = trail_xy
        .iter()
        .filter(|p| point_polyline_distance(p, &frame.samples) <= tol)
        .count();
    let precision = on_shape as f64 / trail_xy.len() as f64;

    ScoreBreakdown::from_rates(coverage, precision)
}

fn score_player(
    username: &str,
    trails: &TrailMap,
    frame: &BoundaryFrame,
    config: &ScoreConfig,
) -> PlayerScore {
    let cleaned = trails
        .get(username)
        .map(|t| clean_trail(t))
        .unwrap_or_default();
    let walked_meters = trail_length(&cleaned);
    let breakdown = score_lines(frame, std::slice::from_ref(&cleaned), config);
    PlayerScore {
        username: username.to_string(),
        walked_meters,
        breakdown,
    }
}

fn score_team(
    trails: &TrailMap,
    template: &TemplateDescriptor,
    shape: Option<&ShapeTemplate>,
    frame: &BoundaryFrame,
    params: &GameParams,
    config: &ScoreConfig,
) -> TeamScore {
    let lines = merged_lines(trails);
    let walked_meters = lines.iter().map(|l| trail_length(l)).sum();
    let breakdown = score_lines(frame, &lines, config);

    let difficulty = difficulty_multiplier(template.multiplier, shape);
    let radius = frame
        .radius_meters
        .unwrap_or(config.default_radius_meters);
    let points = game_points(
        breakdown.adjusted_pct,
        difficulty,
        radius,
        trails.len(),
        params.time_seconds,
        config,
    );

    TeamScore {
        walked_meters,
        breakdown,
        points,
    }
}

/// All non-empty cleaned trails, in sorted username order so team metrics
/// are deterministic regardless of map iteration order.
fn merged_lines(trails: &TrailMap) -> Vec<Vec<GpsPoint>> {
    let mut names: Vec<&String> = trails.keys().collect();
    names.sort();
    names
        .into_iter()
        .filter_map(|name| {
            let cleaned = clean_trail(&trails[name]);
            (!cleaned.is_empty()).then_some(cleaned)
        })
        .collect()
}

/// The players to report on: the explicit roster when given, otherwise
/// every trail contributor in sorted order.
fn roster(trails: &TrailMap, params: &GameParams) -> Vec<String> {
    if let Some(roster) = &params.roster {
        if !roster.is_empty() {
            return roster.clone();
        }
    }
    let mut names: Vec<String> = trails.keys().cloned().collect();
    names.sort();
    names
}

fn zero_game(usernames: Vec<String>, reason: &str) -> GameScore {
    let per_player = usernames
        .into_iter()
        .map(|username| PlayerScore {
            username,
            walked_meters: 0.0,
            breakdown: ScoreBreakdown::zeroed(reason),
        })
        .collect();
    GameScore {
        per_player,
        team: TeamScore {
            walked_meters: 0.0,
            breakdown: ScoreBreakdown::zeroed(reason),
            points: 0,
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
