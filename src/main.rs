use tbsim::{Scenario, ScenarioConfig, Driver, Snapshot};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "figure8.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn print_snapshot(label: &str, s: &Snapshot) {
    println!(
        "{label}: E = {:12.8} (K = {:.8}, U = {:.8}), p = ({:+.3e}, {:+.3e}), com = ({:+.3e}, {:+.3e})",
        s.total, s.kinetic, s.potential, s.momentum.x, s.momentum.y, s.com.x, s.com.y
    );
}

fn main() -> Result<()> {
    let scenario_cfg = load_scenario_from_yaml()?;
    let scenario = Scenario::build_scenario(scenario_cfg);

    let steps_per_frame = scenario.engine.steps_per_frame.max(1);
    let total_steps = (scenario.parameters.t_end / scenario.parameters.h0).round() as usize;

    let mut driver = Driver::new(scenario);

    println!(
        "running {} bodies to t_end = {} at h0 = {} ({} steps)",
        driver.current_state().bodies.len(),
        driver.parameters.t_end,
        driver.parameters.h0,
        total_steps
    );

    let initial = driver.snapshot();
    print_snapshot("initial", &initial);

    let mut remaining = total_steps;
    while remaining > 0 {
        let batch = remaining.min(steps_per_frame);
        driver.advance(batch);
        remaining -= batch;
    }

    let final_snap = driver.snapshot();
    print_snapshot("final  ", &final_snap);

    let energy_drift = (final_snap.total - initial.total).abs() / initial.total.abs();
    let momentum_drift = (final_snap.momentum - initial.momentum).norm();
    let com_drift = (final_snap.com - initial.com).norm();

    println!("drift: energy = {energy_drift:.3e} (relative), momentum = {momentum_drift:.3e}, com = {com_drift:.3e}");

    Ok(())
}
