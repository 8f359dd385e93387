use anyhow::Result;
use backdrop_engine::{
    primitive_mesh, BodyKind, EngineConfig, PointerEvent, SceneComposer, Section,
};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "backdrop")]
#[command(about = "Pointer-reactive 3D backdrop engine, headless host")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive the engine headless at a fixed rate (prints a summary as it runs)
    Run {
        /// Section identifier (free text; unknown falls back to default)
        #[arg(short, long, default_value = "hero")]
        section: String,
        /// Duration to run (seconds)
        #[arg(short, long, default_value = "5")]
        duration: f32,
        /// Tick rate (frames per second)
        #[arg(long, default_value = "60")]
        fps: u32,
        /// Move the pointer on a slow circle instead of holding center
        #[arg(long, default_value_t = false)]
        orbit_pointer: bool,
        /// Engine config JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Particle placement seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Compose a single frame and write it as JSON
    Frame {
        #[arg(short, long, default_value = "hero")]
        section: String,
        /// Elapsed time (seconds since engine start)
        #[arg(short, long, default_value = "0")]
        elapsed: f32,
        /// Normalized pointer x in [-1, 1]
        #[arg(long, default_value = "0")]
        pointer_x: f32,
        /// Normalized pointer y in [-1, 1]
        #[arg(long, default_value = "0")]
        pointer_y: f32,
        /// Particle placement seed
        #[arg(long, default_value = "42")]
        seed: u64,
        /// Output file (stdout when absent)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the section -> camera vantage table
    Presets,

    /// Inspect a procedural primitive mesh
    Mesh {
        /// Shape: sphere, box or torus
        #[arg(short, long, default_value = "sphere")]
        shape: String,
        /// Dump the full mesh as JSON instead of a summary
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            section,
            duration,
            fps,
            orbit_pointer,
            config,
            seed,
        } => {
            let mut engine_config = match config {
                Some(path) => EngineConfig::from_json_file(&path)?,
                None => EngineConfig::default(),
            };
            if seed.is_some() {
                engine_config.seed = seed;
            }

            run_headless(&section, duration, fps, orbit_pointer, engine_config)?;
        }

        Commands::Frame {
            section,
            elapsed,
            pointer_x,
            pointer_y,
            seed,
            output,
        } => {
            let mut composer = SceneComposer::with_config(
                &section,
                EngineConfig {
                    seed: Some(seed),
                    ..EngineConfig::default()
                },
            );

            // A synthetic event on a unit viewport reproduces the
            // requested normalized coordinates exactly.
            composer.pointer_moved(PointerEvent {
                client_x: (pointer_x + 1.0) / 2.0,
                client_y: (1.0 - pointer_y) / 2.0,
                viewport_width: 1.0,
                viewport_height: 1.0,
            });

            let frame = composer.advance(elapsed);
            let json = serde_json::to_string_pretty(&frame)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    tracing::info!("Wrote frame to {}", path.display());
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(json.as_bytes())?;
                    stdout.write_all(b"\n")?;
                }
            }
        }

        Commands::Presets => {
            println!("Section camera presets:");
            for section in Section::all() {
                let p = section.camera_preset();
                println!("  {:<10} ({:>5.1}, {:>5.1}, {:>5.1})", section.name(), p.x, p.y, p.z);
            }
            println!("  {:<10} ({:>5.1}, {:>5.1}, {:>5.1})", "(other)", 0.0, 0.0, 5.0);
        }

        Commands::Mesh { shape, json } => {
            let kind = match shape.as_str() {
                "sphere" => BodyKind::Sphere,
                "box" => BodyKind::Box,
                "torus" => BodyKind::Torus,
                other => anyhow::bail!("unknown shape: {other} (expected sphere, box or torus)"),
            };

            let mesh = primitive_mesh(kind);
            if json {
                println!("{}", serde_json::to_string(&mesh)?);
            } else {
                println!("{} mesh:", kind.name());
                println!("  vertices:  {}", mesh.vertex_count());
                println!("  triangles: {}", mesh.triangle_count());
            }
        }
    }

    Ok(())
}

fn run_headless(
    section: &str,
    duration: f32,
    fps: u32,
    orbit_pointer: bool,
    config: EngineConfig,
) -> Result<()> {
    let fps = fps.max(1);
    let tick = Duration::from_secs_f64(1.0 / fps as f64);
    let total_ticks = (duration.max(0.0) * fps as f32) as u64;

    let mut composer = SceneComposer::with_config(section, config);
    tracing::info!(section, fps, total_ticks, "starting headless run");

    let started = Instant::now();
    for frame_index in 0..total_ticks {
        let elapsed = frame_index as f32 / fps as f32;

        if orbit_pointer {
            // Slow circular sweep across the viewport, one lap per 8 s.
            let angle = elapsed * std::f32::consts::TAU / 8.0;
            composer.pointer_moved(PointerEvent {
                client_x: (angle.cos() * 0.5 + 0.5) * 1920.0,
                client_y: (angle.sin() * 0.5 + 0.5) * 1080.0,
                viewport_width: 1920.0,
                viewport_height: 1080.0,
            });
        }

        let frame = composer.advance(elapsed);

        if frame_index % (fps as u64) == 0 {
            let cam = frame.camera.position;
            tracing::info!(
                t = elapsed,
                camera = %format!("({:.3}, {:.3}, {:.3})", cam.x, cam.y, cam.z),
                sphere_y = frame.bodies[0].pose.position.y,
                "tick"
            );
        }
        composer.mark_particles_clean();

        // Hold the frame slot like a render loop would.
        let target = tick * (frame_index as u32 + 1);
        if let Some(sleep) = target.checked_sub(started.elapsed()) {
            std::thread::sleep(sleep);
        }
    }

    tracing::info!(
        real_elapsed = started.elapsed().as_secs_f32(),
        "headless run complete"
    );
    Ok(())
}
