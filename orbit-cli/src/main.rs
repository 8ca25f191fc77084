use clap::{Parser, Subcommand, ValueEnum};
use orbit_core::{
    format_domain_error, format_state, integrate_euler, propagate, propagate_final, CentralBody,
    DomainError, GravitationalParameter, GravityModel, StateVector, LEO_SAMPLE,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "orbit")]
#[command(about = "Two-body gravity and forward Euler orbit stepping", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Step a low-Earth-orbit sample state forward by one second
    Demo,
    /// Propagate a state with repeated forward Euler steps
    Step {
        /// Initial state as x,y,z,vx,vy,vz (meters, meters/second)
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        state: Option<Vec<f64>>,
        /// Time step in seconds (may be negative)
        #[arg(long, default_value = "1.0", allow_negative_numbers = true)]
        dt: f64,
        /// Number of steps
        #[arg(long, default_value = "1")]
        steps: usize,
        /// Central body at the origin
        #[arg(long, value_enum, default_value = "earth")]
        body: Body,
        /// Gravitational parameter in m^3/s^2, overrides --body
        #[arg(long)]
        mu: Option<f64>,
        /// Print only the final state
        #[arg(long)]
        final_only: bool,
        /// Report the change in specific orbital energy
        #[arg(long)]
        energy: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Body {
    Earth,
    Moon,
    Mars,
    Sun,
}

impl From<Body> for CentralBody {
    fn from(body: Body) -> Self {
        match body {
            Body::Earth => CentralBody::Earth,
            Body::Moon => CentralBody::Moon,
            Body::Mars => CentralBody::Mars,
            Body::Sun => CentralBody::Sun,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Demo => run_demo(),
        Commands::Step {
            state,
            dt,
            steps,
            body,
            mu,
            final_only,
            energy,
        } => {
            let model = match mu {
                Some(mu) => GravityModel::new(GravitationalParameter::new(mu)),
                None => {
                    let body = CentralBody::from(body);
                    tracing::debug!(body = body.name(), "using central body preset");
                    GravityModel::for_body(body)
                }
            };
            run_step(model, state, dt, steps, final_only, energy)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_demo() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", demo_report().map_err(domain_error)?);
    Ok(())
}

/// Step the low-Earth-orbit sample by one second and describe both states
fn demo_report() -> Result<String, DomainError> {
    let state = StateVector::from(LEO_SAMPLE);
    let new_state = integrate_euler(state, 1.0)?;

    Ok(format!(
        "Initial state: {}\nAfter one second: {}",
        format_state(&state),
        format_state(&new_state)
    ))
}

fn run_step(
    model: GravityModel,
    state: Option<Vec<f64>>,
    dt: f64,
    steps: usize,
    final_only: bool,
    energy: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let components: [f64; 6] = match state {
        Some(values) => values
            .try_into()
            .map_err(|v: Vec<f64>| format!("--state needs 6 components, got {}", v.len()))?,
        None => LEO_SAMPLE,
    };
    let initial: StateVector = components.into();

    tracing::info!(mu = model.mu.value(), dt, steps, "propagating");
    let final_state = if final_only {
        let final_state = propagate_final(&model, initial, dt, steps).map_err(domain_error)?;
        println!("{}", format_state(&final_state));
        final_state
    } else {
        let trajectory = propagate(&model, initial, dt, steps).map_err(domain_error)?;
        for (i, state) in trajectory.states().iter().enumerate() {
            println!("{}", format_row(i, dt, state));
        }
        trajectory.final_state()
    };

    if energy {
        let start = initial.specific_energy(model.mu).map_err(domain_error)?;
        let end = final_state.specific_energy(model.mu).map_err(domain_error)?;
        println!("specific energy: {:.6e} J/kg, drift: {:+.6e} J/kg", start, end - start);
    }

    Ok(())
}

/// One trajectory line: step index, elapsed time, state
fn format_row(step: usize, dt: f64, state: &StateVector) -> String {
    // + 0.0 turns a -0 elapsed time into 0
    let t = (step as f64) * dt + 0.0;
    format!("{:>6} t={:<12} {}", step, t, format_state(state))
}

fn domain_error(e: DomainError) -> Box<dyn std::error::Error> {
    format_domain_error(&e).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_state(args: &[&str]) -> Vec<f64> {
        let cli = Cli::try_parse_from(args).expect("arguments should parse");
        match cli.command {
            Commands::Step { state, .. } => state.expect("state should be set"),
            Commands::Demo => panic!("expected step command"),
        }
    }

    #[test]
    fn test_state_with_leading_negative_component() {
        let state = parse_state(&["orbit", "step", "--state", "-7e6,0,0,0,-7500,0"]);
        assert_eq!(state, vec![-7e6, 0.0, 0.0, 0.0, -7500.0, 0.0]);
    }

    #[test]
    fn test_state_followed_by_other_flags() {
        let cli = Cli::try_parse_from([
            "orbit", "step", "--state", "-7e6,0,0,0,-7500,0", "--dt", "-2", "--steps", "3",
        ])
        .expect("arguments should parse");
        match cli.command {
            Commands::Step { state, dt, steps, .. } => {
                assert_eq!(state.map(|s| s.len()), Some(6));
                assert_eq!(dt, -2.0);
                assert_eq!(steps, 3);
            }
            Commands::Demo => panic!("expected step command"),
        }
    }

    #[test]
    fn test_demo_report() {
        let report = demo_report().expect("demo should not fail");
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Initial state: [7000000.0, 0.0, 0.0, 0.0, 7500.0, 0.0]");
        assert!(lines[1].starts_with("After one second: [7000000.0, 7500.0, 0.0, -8.1347"));
        assert!(lines[1].ends_with(", 7500.0, 0.0]"));
    }

    #[test]
    fn test_first_row_time_is_zero_for_backward_steps() {
        let state = StateVector::from(LEO_SAMPLE);
        let row = format_row(0, -1.0, &state);
        assert!(row.contains("t=0 "));
        assert!(!row.contains("t=-0"));
        assert!(format_row(2, -1.0, &state).contains("t=-2 "));
    }
}
