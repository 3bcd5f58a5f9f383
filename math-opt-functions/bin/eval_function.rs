use clap::Parser;
use math_audio_opt_functions::{Evaluator, OptFunctionError, registry};
use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "eval_function",
    about = "Evaluate a registered test function at a point given in the input domain"
)]
struct Cli {
    /// Name of the test function (use --list to see available options)
    #[arg(short, long)]
    function: Option<String>,

    /// Comma-separated coordinates, e.g. 0.5,0.25,1.0
    #[arg(short, long, allow_hyphen_values = true)]
    point: Option<String>,

    /// Lower bound of the input domain
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    lower: f64,

    /// Upper bound of the input domain
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    upper: f64,

    /// Standard deviation of additive Gaussian noise (noise is off when omitted)
    #[arg(long)]
    noise_stddev: Option<f64>,

    /// Optional random seed for reproducible noise
    #[arg(long)]
    seed: Option<u64>,

    /// List registered functions and exit
    #[arg(long, default_value_t = false)]
    list: bool,
}

fn list_available_functions() {
    println!("{:<16} {:>10} {:>10}  description", "name", "lower", "upper");
    for spec in registry() {
        println!(
            "{:<16} {:>10.4} {:>10.4}  {}",
            spec.name, spec.canonical_lower, spec.canonical_upper, spec.description
        );
    }
}

fn parse_point(s: &str) -> Result<Array1<f64>, String> {
    s.split(',')
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid coordinate '{}': {}", v.trim(), e))
        })
        .collect::<Result<Vec<f64>, String>>()
        .map(Array1::from)
}

fn run(cli: &Cli, name: &str, x: &Array1<f64>) -> Result<f64, OptFunctionError> {
    let f = Evaluator::builder(name)
        .noise(cli.noise_stddev.is_some())
        .noise_stddev(cli.noise_stddev.unwrap_or(0.0))
        .input_bounds(cli.lower, cli.upper)
        .build()?;
    log::info!(
        "{} on [{}, {}]^{} (canonical [{}, {}])",
        f.name(),
        cli.lower,
        cli.upper,
        x.len(),
        f.spec().canonical_lower,
        f.spec().canonical_upper
    );

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    f.evaluate_point(x, &mut rng)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list {
        list_available_functions();
        return;
    }

    let Some(name) = cli.function.as_deref() else {
        eprintln!("Error: --function must be provided unless --list is used.");
        process::exit(2);
    };
    let Some(point) = cli.point.as_deref() else {
        eprintln!("Error: --point must be provided.");
        process::exit(2);
    };
    let x = match parse_point(point) {
        Ok(x) => x,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    match run(&cli, name, &x) {
        Ok(y) => println!("{y}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
