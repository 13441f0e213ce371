//! Grover's Search Algorithm Demo
//!
//! Builds the reference search cases (or a custom one), runs them on the
//! local statevector simulator, and reports the measurement histograms.

use anyhow::Result;
use clap::Parser;
use indicatif::ProgressBar;
use tracing::error;
use tracing_subscriber::EnvFilter;

use grover_adapter_sim::SimulatorBackend;
use grover_demos::cases::reference_cases;
use grover_demos::{print_header, print_result, print_section, print_success, render_histogram};
use grover_hal::Backend;
use grover_synth::GroverSearch;

#[derive(Parser, Debug)]
#[command(name = "demo-grover")]
#[command(about = "Run Grover's search on the local statevector simulator")]
struct Args {
    /// Number of qubits for a custom case (omit to run the reference cases)
    #[arg(short = 'n', long)]
    qubits: Option<u32>,

    /// Comma-separated marked indices for the custom case
    #[arg(short, long, value_delimiter = ',', requires = "qubits")]
    solutions: Vec<u64>,

    /// Shots per case
    #[arg(long, default_value = "3000", env = "GROVER_SHOTS")]
    shots: u32,

    /// Emit per-case results as JSON instead of styled text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let backend = SimulatorBackend::new();

    print_header("Grover's Search Algorithm Demo");

    if let Some(qubits) = args.qubits {
        run_case(
            &backend,
            "custom",
            qubits,
            &args.solutions,
            args.shots,
            args.json,
        )
        .await?;
    } else {
        // Cases are independent: log a failure, keep running the rest,
        // and propagate the first error at the end. Never swallow it.
        let mut first_error = None;
        for case in reference_cases() {
            if let Err(err) = run_case(
                &backend,
                case.name,
                case.num_qubits,
                case.solutions,
                args.shots,
                args.json,
            )
            .await
            {
                error!(case = case.name, %err, "case failed");
                first_error.get_or_insert(err);
            }
        }
        if let Some(err) = first_error {
            return Err(err);
        }
    }

    println!();
    print_success("Grover demo complete!");
    Ok(())
}

async fn run_case(
    backend: &SimulatorBackend,
    name: &str,
    qubits: u32,
    solutions: &[u64],
    shots: u32,
    json: bool,
) -> Result<()> {
    print_section(name);

    let search = GroverSearch::new(qubits, solutions.to_vec())?;
    let iterations = search.iterations();
    let circuit = search.circuit()?;

    print_result("Qubits", qubits);
    print_result("Search space size", search.space_size());
    print_result("Marked states", format!("{solutions:?}"));
    print_result("Grover iterations", iterations);
    print_result("Circuit depth", circuit.depth());

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("simulating {shots} shots"));
    let job_id = backend.submit(&circuit, shots).await?;
    let result = backend.wait(&job_id).await?;
    spinner.finish_and_clear();

    let expected: Vec<String> = solutions
        .iter()
        .map(|&s| format!("{s:0width$b}", width = qubits as usize))
        .collect();
    let hit = result
        .counts
        .combined_probability(expected.iter().map(String::as_str));

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "case": name,
                "qubits": qubits,
                "solutions": solutions,
                "iterations": iterations,
                "shots": result.shots,
                "counts": result.counts,
                "hit_probability": hit,
            }))?
        );
        return Ok(());
    }

    print_section("Measurement histogram");
    print!("{}", render_histogram(&result.counts, &expected));

    // One iteration rotates the state by 2θ with θ = arcsin(√(M/N));
    // after k iterations the success probability is sin²((2k+1)θ).
    let theta = (search.num_solutions() as f64 / search.space_size() as f64)
        .sqrt()
        .asin();
    let theoretical = ((2 * iterations + 1) as f64 * theta).sin().powi(2);

    print_result("Measured hit probability", format!("{:.1}%", hit * 100.0));
    print_result(
        "Theoretical hit probability",
        format!("{:.1}%", theoretical * 100.0),
    );
    if let Some((bits, count)) = result.counts.most_frequent() {
        print_result("Most frequent outcome", format!("{bits} ({count} shots)"));
    }

    Ok(())
}
