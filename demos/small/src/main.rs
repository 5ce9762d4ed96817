//! swim-small — smallest runnable demo of the swim mobility engine.
//!
//! Runs 20 nodes on a 1000 × 1000 area for one simulated hour and writes the
//! trace to `output/small/trace.csv`.  Pass a JSON file as the first argument
//! to override the configuration (camelCase keys: `x`, `y`,
//! `nn`, `nodeRadius`, `duration`, `ignore`, `randomSeed`, …) and an output
//! path as the second.
//!
//! Set `RUST_LOG=debug` (or `trace`) for per-event logging.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use swim_core::{NodeId, SimTime, SwimConfig};
use swim_output::{CsvTraceWriter, TraceOutputObserver, TraceWriter};
use swim_schedule::{Event, EventKind};
use swim_sim::{SimBuilder, SimObserver, TraceRecord};

// ── Constants ─────────────────────────────────────────────────────────────────

const NODE_COUNT: usize = 20;
const SEED:       i64   = 42;
const AREA:       f64   = 1_000.0;
const DURATION:   f64   = 3_600.0;
const OUTPUT:     &str  = "output/small/trace.csv";

// ── Observer wrapper to count events ─────────────────────────────────────────

struct CountingObserver<W: TraceWriter> {
    inner:  TraceOutputObserver<W>,
    meets:  usize,
    leaves: usize,
    trips:  usize,
}

impl<W: TraceWriter> CountingObserver<W> {
    fn new(inner: TraceOutputObserver<W>) -> Self {
        Self { inner, meets: 0, leaves: 0, trips: 0 }
    }
}

impl<W: TraceWriter> SimObserver for CountingObserver<W> {
    fn on_event(&mut self, event: &Event) {
        match event.kind {
            EventKind::Meet => self.meets += 1,
            EventKind::Leave => self.leaves += 1,
            EventKind::StartMoving => self.trips += 1,
            _ => {}
        }
    }

    fn on_trace(&mut self, record: &TraceRecord) {
        self.inner.on_trace(record);
    }

    fn on_sim_end(&mut self, final_time: SimTime) {
        self.inner.on_sim_end(final_time);
    }
}

fn load_config(path: Option<&Path>) -> Result<SwimConfig> {
    let Some(path) = path else {
        return Ok(SwimConfig {
            area_width: AREA,
            area_height: AREA,
            node_count: NODE_COUNT,
            duration: DURATION,
            seed: SEED,
            ..SwimConfig::default()
        });
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// Surface a deferred write error; otherwise the number of records written.
fn finish_trace<W: TraceWriter>(obs: &mut TraceOutputObserver<W>, path: &Path) -> Result<u64> {
    if let Some(e) = obs.take_error() {
        bail!("writing trace {}: {e}", path.display());
    }
    Ok(obs.written())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(OUTPUT));

    // 1. Configuration.
    let config = load_config(config_path.as_deref())?;
    println!("=== swim-small ===");
    println!(
        "Nodes: {}  |  Area: {} × {}  |  Duration: {} s (+{} s warm-up)  |  Seed: {}",
        config.node_count, config.area_width, config.area_height, config.duration, config.ignore, config.seed
    );
    println!();

    // 2. Build sim.
    let mut sim = SimBuilder::new(config.clone()).build()?;

    // 3. Set up output.
    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let writer = CsvTraceWriter::new(&output)?;
    let mut obs = CountingObserver::new(TraceOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    let written = finish_trace(&mut obs.inner, &output)?;
    info!(path = %output.display(), records = written, "trace written");

    // 5. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  events processed : {}", sim.events_processed);
    println!("  trips            : {}", obs.trips);
    println!("  meets / leaves   : {} / {}", obs.meets, obs.leaves);
    println!("  trace records    : {written}");
    println!();

    // 6. Final node positions table.
    println!("{:<8} {:>10} {:>10} {:>8}", "Node", "x", "y", "Cell");
    println!("{}", "-".repeat(40));
    for i in 0..config.node_count {
        let id = NodeId::try_from(i)?;
        let p = sim.area_position_at(id, sim.now)?;
        let cell = sim.mobility.store.get(id)?.current_cell;
        println!("{:<8} {:>10.3} {:>10.3} {:>8}", i, p.x, p.y, cell.0);
    }

    Ok(())
}
