use std::env;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use dotenv::dotenv;
use pi_chudnovsky::{cli::parse_digits, compute_pi, errors::PiError, output::write_artifacts};

/// Environment variable naming the directory the artifacts go to.
const OUTPUT_DIR_VAR: &str = "IEXEC_OUT";

fn main() {
    dotenv().ok();

    let digits = match parse_digits(env::args().skip(1)) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Please input the digit count you need as a positive integer ({})", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(digits) {
        eprintln!("Fatal: {}", e);
        process::exit(1);
    }
}

fn run(digits: usize) -> Result<(), PiError> {
    let out_dir = env::var(OUTPUT_DIR_VAR)
        .map(PathBuf::from)
        .map_err(|_| PiError::MissingOutputDir(OUTPUT_DIR_VAR.into()))?;

    let start = Instant::now();
    let pi = compute_pi(digits);
    println!("{}", pi);
    println!("Computed {} digits in {} ms", digits, start.elapsed().as_millis());

    let result_path = write_artifacts(&out_dir, &pi)?;
    println!("Result written to {}", result_path.display());
    Ok(())
}
