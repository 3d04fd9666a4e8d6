//! # Bolted-Joint CLI
//!
//! Console runner for the bolted-joint calculation engine. Prompts for the
//! joint parameters with the classic 1/2-13 worked example as defaults,
//! prints the preload / stiffness / capacity chain, and finishes with the
//! summary as JSON.

use std::io::{self, BufRead, Write};

use joint_core::joints::{calculate, JointInput};
use joint_core::units::{FtLb, InLb, Kips, KipPerIn, LbPerIn, Pounds};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_bool(prompt: &str, default: bool) -> bool {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    match input.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" => true,
        "n" | "no" | "false" => false,
        _ => default,
    }
}

fn main() {
    println!("Bolted-Joint Calculator");
    println!("=======================");
    println!();
    println!("Defaults reproduce the 1/2-13 worked example");
    println!("(Sy = 130 ksi, At = 0.1419 in^2, steel member, 1 in grip).");
    println!();

    let d_nominal_in = prompt_f64("Nominal diameter (in) [0.5]: ", 0.5);
    let yield_strength_psi = prompt_f64("Tensile yield strength (psi) [130000]: ", 130_000.0);
    let stress_area_in2 = prompt_f64("Tensile stress area (in^2) [0.1419]: ", 0.1419);
    let reuse = prompt_bool("Fastener will be reused? (y/n) [y]: ", true);
    let k_factor = prompt_f64("Torque coefficient K [0.2]: ", 0.2);
    let grip_in = prompt_f64("Grip length (in) [1.0]: ", 1.0);
    let bolt_modulus_psi = prompt_f64("Bolt modulus (psi) [29e6]: ", 29e6);
    let member_thickness_in = prompt_f64("Member thickness (in) [1.0]: ", 1.0);
    let hole_diameter_in = prompt_f64("Hole diameter (in) [0.5156]: ", 0.5156);
    let member_modulus_psi = prompt_f64("Member modulus (psi) [29e6]: ", 29e6);
    // The original worked example tightened with FS = 1 while its notes said
    // "assume FS of 4" - the factor is prompted and echoed so the choice is
    // always visible in the output.
    let safety_factor = prompt_f64("Safety factor on service load [1.0]: ", 1.0);

    let input = JointInput {
        label: "CLI-Demo".to_string(),
        d_nominal_in,
        yield_strength_psi,
        stress_area_in2,
        reuse,
        k_factor,
        grip_in,
        bolt_modulus_psi,
        member_thickness_in,
        hole_diameter_in,
        member_modulus_psi,
        safety_factor,
    };

    println!();
    match calculate(&input) {
        Ok(summary) => {
            println!("═══════════════════════════════════════");
            println!("  BOLTED-JOINT RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Bolt:");
            println!(
                "  Preload force:  {:.1} lb ({:.2} kips)",
                summary.preload_lb,
                Kips::from(Pounds(summary.preload_lb)).value()
            );
            println!(
                "  Torque:         {:.1} in-lb ({:.1} ft-lb)",
                summary.torque_inlb,
                FtLb::from(InLb(summary.torque_inlb)).value()
            );
            println!("  Preload stress: {:.0} psi", summary.preload_stress_psi);
            println!(
                "  Stiffness:      {:.0} lb/in ({:.0} k/in)",
                summary.bolt_stiffness_lb_per_in,
                KipPerIn::from(LbPerIn(summary.bolt_stiffness_lb_per_in)).value()
            );
            println!();
            println!("Member:");
            println!(
                "  Stiffness:      {:.0} lb/in ({:.0} k/in)",
                summary.member_stiffness_lb_per_in,
                KipPerIn::from(LbPerIn(summary.member_stiffness_lb_per_in)).value()
            );
            println!();
            println!("Joint:");
            println!("  Stiffness constant C: {:.4}", summary.stiffness_constant);
            println!("  Safety factor:        {:.2}", summary.safety_factor);
            println!();
            println!("Failure:");
            println!("  Bolt failure force: {:.1} lb", summary.failure_lb);
            println!(
                "  Service load:       {:.1} lb ({:.2} kips)",
                summary.service_load_lb,
                Kips::from(Pounds(summary.service_load_lb)).value()
            );
            println!();
            println!("═══════════════════════════════════════");
            println!(
                "  RESULT: {}",
                if summary.passes() { "PASS" } else { "FAIL" }
            );
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output:");
            if let Ok(json) = serde_json::to_string_pretty(&summary) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
