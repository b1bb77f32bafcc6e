use epimodels::{config::*, prelude::*, utils::*};
use log::*;
use simple_logger::SimpleLogger;

pub fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init().unwrap();

    let mut cfg = Config::from_path_or_default("conf.toml")?;
    cfg.set_model(ModelKind::Sir);
    if cfg.verbose() {
        println!("{:#?}", cfg);
    }

    let mut sim = cfg.build()?;
    println!(
        "SIR model, beta = {:.2}, gamma = {:.2}, R0 = {:.2}",
        cfg.beta(),
        cfg.gamma(),
        sim.r0()
    );
    sim.run(cfg.num_iter())?;

    let state = sim.state();
    println!(
        "Susceptible: {:.0} - Infectious: {:.0} - Recovered: {:.0}",
        state[0], state[1], state[2]
    );
    plot_vbars(&downsample(&sim.infectious_curve(), 100), 20);

    // Compare cumulated cases (I + R) with observations, if any.
    if let Some(path) = cfg.cases() {
        let observed = read_cases(path)?;
        for (day, diff) in residuals(&observed, &sim.cumulative_cases()) {
            println!("day {:>3}: simulated - observed = {:+.1}", day, diff);
        }
    }

    if let Some(path) = cfg.output() {
        sim.write_csv(path)?;
        info!("epicurve written to {}", path);
    }
    Ok(())
}
