//! Fincalc CLI
//!
//! Demonstrates each calculation on a fixed set of showcase inputs and prints
//! the results as formatted text, or as JSON with `--json` for downstream
//! tooling. Calculation failures are logged to stderr via the `log` facade
//! and never mixed into the result values themselves.

use clap::Parser;
use fincalc::{
    compound_interest, future_value, internal_rate_of_return, net_present_value, present_value,
    simple_interest,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "fincalc", version, about = "Financial math demonstrations")]
struct Args {
    /// Emit results as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Results of the showcase computations. `None` marks a calculation that
/// failed; the reason has already gone to the log.
#[derive(Serialize)]
struct DemoResults {
    future_value: f64,
    present_value: Option<f64>,
    net_present_value: Option<f64>,
    simple_interest: Option<f64>,
    compound_amount: Option<f64>,
    irr: Option<f64>,
    irr_no_sign_change: Option<f64>,
}

/// Log a failure and map it to `None`, keeping the demo running
fn report<T>(label: &str, result: fincalc::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("{} failed: {}", label, e);
            None
        }
    }
}

fn run_demos() -> DemoResults {
    let npv_flows = [-10000.0, 3000.0, 4000.0, 5000.0, 3000.0];
    let irr_flows = [-1000.0, 300.0, 400.0, 500.0, 600.0];
    let all_negative = [-1000.0, -200.0, -50.0];

    DemoResults {
        // $1000 at 5% for 10 years
        future_value: future_value(1000.0, 0.05, 10),
        // $2000 discounted at 8% over 5 years
        present_value: report("present value", present_value(2000.0, 0.08, 5)),
        net_present_value: report("NPV", net_present_value(0.10, &npv_flows)),
        // $5000 at 6% for 3 years
        simple_interest: report("simple interest", simple_interest(5000.0, 0.06, 3.0)),
        // $1000 at 7% compounded monthly for 5 years
        compound_amount: report("compound interest", compound_interest(1000.0, 0.07, 12, 5.0)),
        irr: report("IRR", internal_rate_of_return(&irr_flows)),
        // All-outflow sequence: expected to fail the sign-change check
        irr_no_sign_change: report(
            "IRR (no sign change)",
            internal_rate_of_return(&all_negative),
        ),
    }
}

/// Render a dollar result, falling back to $0.00 for failed closed-form
/// calculations (their neutral value; the diagnostic is on stderr)
fn dollars_or_zero(value: Option<f64>) -> String {
    format!("${:.2}", value.unwrap_or(0.0))
}

fn print_text(results: &DemoResults) {
    println!("Fincalc v{}", env!("CARGO_PKG_VERSION"));
    println!("=======\n");

    println!("Future value of $1000 at 5% over 10 years:");
    println!("  ${:.2}\n", results.future_value);

    println!("Present value of $2000 at 8% over 5 years:");
    println!("  {}\n", dollars_or_zero(results.present_value));

    println!("NPV of [-10000, 3000, 4000, 5000, 3000] at 10%:");
    match results.net_present_value {
        Some(npv) => println!("  ${:.2}\n", npv),
        None => println!("  calculation failed\n"),
    }

    println!("Simple interest on $5000 at 6% over 3 years:");
    println!("  {}\n", dollars_or_zero(results.simple_interest));

    println!("Total amount on $1000 at 7%, compounded monthly, over 5 years:");
    println!("  {}\n", dollars_or_zero(results.compound_amount));

    println!("IRR of [-1000, 300, 400, 500, 600]:");
    match results.irr {
        Some(irr) => println!("  {:.2}%\n", irr * 100.0),
        None => println!("  calculation failed\n"),
    }

    println!("IRR of [-1000, -200, -50] (no sign change):");
    match results.irr_no_sign_change {
        Some(irr) => println!("  {:.2}%", irr * 100.0),
        None => println!("  calculation failed (expected)"),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let results = run_demos();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_text(&results);
    }

    Ok(())
}
