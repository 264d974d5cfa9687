use std::path::Path;
use std::process::ExitCode;

use svc_bay_assignment::config::Config;
use svc_bay_assignment::error::BapError;
use svc_bay_assignment::{costs, decomposer, inputs, layout, model, schedule::Generator, solver};

fn main() -> ExitCode {
    let config = Config::try_from_env().unwrap_or_else(|e| {
        eprintln!("(main) could not load config from environment, using defaults: {e}");
        Config::default()
    });
    svc_bay_assignment::init_logger(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!(target: "app", "(main) run failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), BapError> {
    let date = chrono::NaiveDate::from_ymd_opt(2010, 6, 15).expect("valid fixed reference date");
    let loaded = inputs::load(config, date)?;

    let bays = layout::build_bays(&loaded.terminals);
    log::info!(target: "app", "(run) built {} bays", bays.len());

    let mut generator = Generator::new(config.seed, &loaded.features, &loaded.schedule_params, &loaded.aircraft, &bays);
    let schedule = generator.generate(config.default_nflights)?;
    log::info!(target: "app", "(run) generated {} turns", schedule.len());

    let ttow = loaded.schedule_params.ttow;
    let turns = decomposer::decompose(schedule, &loaded.aircraft, ttow)?;
    log::info!(target: "app", "(run) decomposed into {} assignable turns", turns.len());

    let cost_matrix = costs::build(&turns, &bays, &loaded.costs, &loaded.aircraft)?;

    let time_buffer = chrono::Duration::minutes(config.time_buffer_minutes);
    let formulation = model::build(&turns, &bays, &cost_matrix, &loaded.aircraft, &loaded.adjacency, time_buffer)?;

    let assignment = solver::solve(&formulation, Path::new(&config.lp_output_path), config.solver_path.as_deref())?;

    let assigned = formulation.variables.iter().filter(|v| assignment.assigned(v)).count();
    log::info!(
        target: "app",
        "(run) solved in {:.3}s, objective={:.2}, {assigned} variables set",
        assignment.solve_time_secs,
        assignment.objective
    );

    Ok(())
}
