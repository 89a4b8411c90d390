//! CLI command implementations.

use drape_mesh::generators::quad_grid;
use drape_mesh::normals::compute_vertex_normals;
use drape_mesh::{Topology, TriangleMesh};
use drape_sim::{ClothSim, PinConstraint, SimulationConfig};
use drape_telemetry::{EventBus, EventKind, SimEvent, TracingSink};

/// Cloth sheet dimensions for the drop scenario (meters and quads).
const SHEET_SIZE: f32 = 4.0;
const SHEET_RESOLUTION: usize = 10;

/// Run a headless cloth-drop scenario.
pub fn simulate(
    config_path: Option<&str>,
    frames: u32,
    pin_corners: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            let config: SimulationConfig = toml::from_str(&content)?;
            config.validate()?;
            config
        }
        None => SimulationConfig::default(),
    };

    let mut mesh = quad_grid(SHEET_RESOLUTION, SHEET_RESOLUTION, SHEET_SIZE, SHEET_SIZE);
    let mut sim = ClothSim::new(&mesh, config)?;

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink));

    if pin_corners {
        let top_right = SHEET_RESOLUTION as u32;
        sim.add_pin(PinConstraint::new(0, mesh.position_vec3(0)))?;
        sim.add_pin(PinConstraint::new(
            top_right,
            mesh.position_vec3(top_right as usize),
        ))?;
        bus.emit(SimEvent::new(
            0,
            EventKind::PinsChanged {
                active: sim.pins().active_count() as u32,
            },
        ));
    }

    println!("Drape Simulation");
    println!("────────────────");
    println!(
        "Sheet:   {}×{} quads, {:.1}m",
        SHEET_RESOLUTION, SHEET_RESOLUTION, SHEET_SIZE
    );
    println!(
        "Config:  dt={}s, {} steps/frame, {} passes/step",
        sim.config().time_step,
        sim.config().steps_per_frame,
        sim.config().relaxation_passes
    );
    println!("Frames:  {frames}");
    println!();

    let gravity = sim.config().gravity_vec3();
    let dt = sim.config().time_step as f64;
    let mut total_wall = 0.0f64;

    for frame in 0..frames {
        bus.emit(SimEvent::new(
            sim.steps_taken(),
            EventKind::StepBegin {
                sim_time: sim.steps_taken() as f64 * dt,
            },
        ));

        let report = sim.step_frame(&mut mesh);
        total_wall += report.wall_time;

        if report.contacts_resolved > 0 {
            bus.emit(SimEvent::new(
                sim.steps_taken(),
                EventKind::Contacts {
                    resolved: report.contacts_resolved,
                    max_penetration: report.max_penetration,
                },
            ));
        }
        bus.emit(SimEvent::new(
            sim.steps_taken(),
            EventKind::StepEnd {
                wall_time: report.wall_time,
            },
        ));

        if (frame + 1) % 60 == 0 {
            let state = sim.state();
            bus.emit(SimEvent::new(
                sim.steps_taken(),
                EventKind::Energy {
                    kinetic: state.kinetic_energy(),
                    potential: state.potential_energy(gravity),
                },
            ));
            println!(
                "frame {:>4}  KE={:.6e}  contacts={}",
                frame + 1,
                state.kinetic_energy(),
                report.contacts_resolved
            );
        }

        bus.flush();
    }

    compute_vertex_normals(&mut mesh);
    bus.finalize();

    let min_y = mesh.pos_y.iter().copied().fold(f32::INFINITY, f32::min);
    let max_y = mesh.pos_y.iter().copied().fold(f32::NEG_INFINITY, f32::max);

    println!();
    println!("Steps:      {}", sim.steps_taken());
    println!("Wall time:  {:.3}s", total_wall);
    println!("Y range:    [{:.4}, {:.4}]", min_y, max_y);
    println!("Final KE:   {:.6e}", sim.state().kinetic_energy());

    Ok(())
}

/// Validate a config or mesh file.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Drape Validator");
    println!("───────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating config: {path}");
        let content = std::fs::read_to_string(path)?;
        let config: SimulationConfig = toml::from_str(&content)?;
        config.validate()?;
        println!("Config is valid.");
    } else if path.ends_with(".json") {
        println!("Validating mesh: {path}");
        let content = std::fs::read_to_string(path)?;
        let mesh: TriangleMesh = serde_json::from_str(&content)?;
        mesh.validate()?;
        let topology = Topology::build(&mesh)?;
        println!(
            "Mesh is valid ({} verts, {} tris, {} bend quads).",
            mesh.vertex_count(),
            mesh.triangle_count(),
            topology.bend_quad_count()
        );
    } else {
        println!("Unsupported file format. Use .toml (config) or .json (mesh).");
    }

    Ok(())
}
