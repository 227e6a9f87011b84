//! Run command — drives the simulation without a renderer

use anyhow::Result;
use std::path::Path;
use vapor_core::VaporError;
use vapor_runtime::{ConfigStore, FrameClock, FrameSystem};
use vapor_sim::{SmokeConfig, SmokeSystem};

pub struct RunArgs {
    pub seconds: f64,
    pub dt: f64,
    pub realtime: bool,
    pub config: Option<String>,
    pub seed: Option<u32>,
}

pub fn run(args: RunArgs) -> Result<()> {
    let mut config = SmokeConfig::default();
    if let Some(path) = &args.config {
        let mut store = ConfigStore::new();
        store
            .load_from_file(Path::new(path))
            .map_err(|e| VaporError::ConfigError(format!("{path}: {e}")))?;
        config.apply_table(&store.as_table());
        println!("[run] merged configuration from {path}");
    }

    let mut sys = match args.seed {
        Some(seed) => SmokeSystem::with_seed(config, seed),
        None => SmokeSystem::new(config),
    };
    sys.initialize()?;

    let mut simulated = 0.0f64;
    let mut ticks = 0u64;
    let mut next_report = 1.0f64;
    let mut clock = FrameClock::new();

    while simulated < args.seconds {
        let dt = if args.realtime {
            std::thread::sleep(std::time::Duration::from_millis(16));
            clock.tick()
        } else {
            args.dt
        };
        sys.update(dt)?;
        simulated += dt;
        ticks += 1;

        if simulated >= next_report {
            report(&sys, simulated);
            next_report += 1.0;
        }
    }

    println!(
        "[run] done: {ticks} ticks, {:.1}s simulated, {} particles",
        simulated,
        sys.particle_count()
    );
    sys.shutdown()?;
    Ok(())
}

fn report(sys: &SmokeSystem, t: f64) {
    let particles = sys.particles();
    let mean_opacity: f32 =
        particles.iter().map(|p| p.opacity).sum::<f32>() / particles.len().max(1) as f32;
    let visible = sys
        .instances()
        .iter()
        .filter(|i| i.opacity[0] > 0.003)
        .count();
    println!(
        "[run] t={t:.1}s visible={visible}/{} mean_opacity={mean_opacity:.3}",
        particles.len()
    );
}
