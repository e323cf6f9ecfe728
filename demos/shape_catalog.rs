//! Walk through the template variants the engine understands: parametric
//! shapes, a catalog shape with stored unit vertices, and a freehand
//! polygon straight off the wire format.
//!
//! Run with: cargo run --example shape_catalog

use shape_tracer::sampling::densify;
use shape_tracer::projection::to_planar;
use shape_tracer::{
    build_boundary, difficulty_multiplier, tolerance_for_radius, GeoPoint, ScoreConfig,
    TemplateDescriptor, UnitVertex,
};

fn describe(label: &str, descriptor: &TemplateDescriptor, config: &ScoreConfig) {
    let config = descriptor.effective_config(config);
    let Some(shape) = descriptor.resolve() else {
        println!("{label:>12}: unresolvable descriptor");
        return;
    };

    let boundary = build_boundary(&shape, &config);
    let origin = shape.center().unwrap_or(boundary[0]);
    let xy: Vec<_> = boundary.iter().map(|p| to_planar(p, &origin)).collect();
    let samples = densify(&xy, config.sample_step_meters, shape.is_closed());

    println!(
        "{label:>12}: {} vertices -> {} samples, {}, tol {:.1}m, difficulty x{:.2}",
        boundary.len(),
        samples.len(),
        if shape.is_closed() { "closed" } else { "open" },
        tolerance_for_radius(shape.radius_meters(), &config),
        difficulty_multiplier(descriptor.multiplier, Some(&shape)),
    );
}

fn main() {
    let config = ScoreConfig::default();
    let center = GeoPoint::new(48.8566, 2.3522); // Paris

    println!("Template Catalog\n");

    for id in ["square", "triangle", "star", "circle"] {
        let descriptor = TemplateDescriptor {
            template_id: Some(id.to_string()),
            center: Some(center),
            radius_meters: Some(120.0),
            ..TemplateDescriptor::default()
        };
        describe(id, &descriptor, &config);
    }

    // A catalog diamond stored as unit vertices, with its own difficulty
    let diamond = TemplateDescriptor {
        template_id: Some("diamond".to_string()),
        center: Some(center),
        radius_meters: Some(120.0),
        base_vertices: Some(vec![
            UnitVertex { x: 0.0, y: 1.0 },
            UnitVertex { x: 0.7, y: 0.0 },
            UnitVertex { x: 0.0, y: -1.0 },
            UnitVertex { x: -0.7, y: 0.0 },
        ]),
        multiplier: Some(1.25),
        ..TemplateDescriptor::default()
    };
    describe("diamond", &diamond, &config);

    // A freehand polygon exactly as it arrives from the wire
    let json = r#"{
        "templateId": "polygon",
        "vertices": [
            {"lat": 48.8570, "lng": 2.3510},
            {"lat": 48.8580, "lng": 2.3525},
            {"lat": 48.8570, "lng": 2.3540},
            {"lat": 48.8560, "lng": 2.3525}
        ]
    }"#;
    let freehand: TemplateDescriptor = serde_json::from_str(json).expect("valid wire JSON");
    describe("freehand", &freehand, &config);

    // Catalog overrides: a coarse circle and a spiky star
    let coarse_circle = TemplateDescriptor {
        template_id: Some("circle".to_string()),
        center: Some(center),
        radius_meters: Some(120.0),
        point_count: Some(16),
        ..TemplateDescriptor::default()
    };
    describe("circle/16", &coarse_circle, &config);

    let spiky_star = TemplateDescriptor {
        template_id: Some("star".to_string()),
        center: Some(center),
        radius_meters: Some(120.0),
        inner_ratio: Some(0.4),
        ..TemplateDescriptor::default()
    };
    describe("star/0.4", &spiky_star, &config);
}
