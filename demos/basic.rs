use std::time::Instant;

use rand::{rngs::StdRng, SeedableRng};
use tiny_md::prelude::*;

const TEQ: usize = 500;
const TRUN: usize = 2000;
const TMES: usize = 10;

fn main() -> Result<(), tiny_md::Error> {
    tracing_subscriber::fmt::init();

    let num_atoms = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(256);
    let params: Parameters<f64> = Parameters::default().with_num_atoms(num_atoms);
    let mut rng = StdRng::from_entropy();

    let start = Instant::now();
    let mut sim = Simulation::new(&params, &mut rng)?;
    println!("# Number of particles: {}", sim.num_atoms());
    println!("# Initial temperature: {:.6}", sim.initial_temperature());
    println!("# density volume mean_potential_energy mean_pressure");

    let mut rho = params.rho;
    let mut total_steps = 0;
    while rho > 0.55 {
        if rho != sim.density() {
            sim.set_density(rho);
        }

        let mut epot_sum = 0.0;
        let mut pres_sum = 0.0;
        let mut samples = 0;
        for i in 1..TRUN {
            let thermo = *sim.step();
            if i % TMES != 0 {
                continue;
            }
            if i < TEQ {
                sim.rescale_to(params.temperature);
            } else {
                epot_sum += thermo.potential_energy / sim.num_atoms() as f64;
                pres_sum += thermo.pressure;
                samples += 1;
            }
        }
        total_steps += TRUN - 1;

        println!(
            "{:.6}\t{:.6}\t{:.6}\t{:.6}",
            rho,
            sim.container().volume(),
            epot_sum / samples as f64,
            pres_sum / samples as f64
        );
        rho -= 0.1;
    }

    let elapsed = start.elapsed().as_secs_f64();
    println!("# Total simulation time = {elapsed:.6} seconds");
    println!(
        "# Simulated time = {:.6} [fs]",
        total_steps as f64 * params.timestep * 1.6 / 0.005
    );
    Ok(())
}
