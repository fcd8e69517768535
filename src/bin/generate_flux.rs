use std::path::Path;

use anyhow::Result;

use flux_plot::sim::{self, Slab};

const HISTORIES: usize = 100_000;
const SEED: u64 = 42;
const OUTPUT: &str = "flux_output.txt";

fn main() -> Result<()> {
    env_logger::init();

    let slab = Slab::two_region();
    let tally = sim::simulate(&slab, HISTORIES, SEED);
    sim::write_flux(Path::new(OUTPUT), &tally.flux)?;

    log::info!(
        "{} leaked, {} absorbed, {} fission neutrons",
        tally.leaked,
        tally.absorbed,
        tally.fission_neutrons
    );
    println!("keff= {:.5}", tally.k_eff);
    println!(
        "Wrote {} flux bins ({} histories) to {OUTPUT}",
        tally.flux.len(),
        tally.histories
    );
    Ok(())
}
