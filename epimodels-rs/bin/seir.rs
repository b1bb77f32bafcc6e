use epimodels::{config::*, prelude::*, utils::*};
use log::*;
use simple_logger::SimpleLogger;

pub fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init().unwrap();

    let mut cfg = Config::from_path_or_default("conf.toml")?;
    cfg.set_model(ModelKind::Seir);
    if cfg.verbose() {
        println!("{:#?}", cfg);
    }

    let mut sim = cfg.build()?;
    sim.run(cfg.num_iter())?;

    let state = sim.state();
    let fatalities = sim.fatalities(cfg.mortality_ratio());
    println!("Final numbers:");
    println!(
        "Susceptible: {:.0} - Exposed: {:.0} - Infectious: {:.0} - Recovered: {:.0} - Fatalities {:.0}",
        state[0],
        state[1],
        state[2],
        state[3],
        fatalities.last().copied().unwrap_or(0.0),
    );
    if let Some((t, peak)) = sim.peak_infectious() {
        println!("Max infected at the same time: {:.0} (day {})", peak, t);
    }
    plot_vbars(&downsample(&sim.infectious_curve(), 100), 20);

    if let Some(path) = cfg.output() {
        sim.write_csv(path)?;
        info!("epicurve written to {}", path);
    }
    Ok(())
}
