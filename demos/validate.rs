use sirene::business::{Siren, Siret, Tva};
use sirene::geo::PostalCode;

fn main() {
    // Identifier format validation
    println!("=== SIREN / SIRET Validation ===\n");

    let test_sirens = [
        "523247930",
        "005420120",
        "52324793",   // too short
        "5232479301", // too long
        "52324793A",  // letter
    ];

    for raw in &test_sirens {
        match Siren::parse(*raw) {
            Ok(siren) => println!("  {raw} => valid SIREN ({siren})"),
            Err(e) => println!("  {raw} => INVALID: {e}"),
        }
    }

    println!();

    let test_sirets = ["52324793012345", "00542012000015", "1234567890123"];

    for raw in &test_sirets {
        match Siret::parse(*raw) {
            Ok(siret) => println!(
                "  {raw} => valid SIRET (siren={}, nic={})",
                siret.siren(),
                siret.nic()
            ),
            Err(e) => println!("  {raw} => INVALID: {e}"),
        }
    }

    // TVA number validation (pattern + key)
    println!("\n=== TVA Validation ===\n");

    let test_tvas = [
        "FR77523247930",
        "FR09637293879",
        "FR00523247930", // wrong key
        "FR7752324793",  // one digit short
        "77523247930",   // missing prefix
    ];

    for raw in &test_tvas {
        match Tva::parse(*raw) {
            Ok(tva) => println!(
                "  {raw} => valid (key={}, siren={}, country={})",
                tva.key(),
                tva.siren(),
                tva.country()
            ),
            Err(e) => println!("  {raw} => INVALID: {e}"),
        }
    }

    // Postal codes
    println!("\n=== Postal Code Validation ===\n");

    let test_codes = ["75001", "01000", "7500", "7500a"];

    for raw in &test_codes {
        match PostalCode::parse(*raw) {
            Ok(code) => println!("  {raw} => valid ({code})"),
            Err(e) => println!("  {raw} => INVALID: {e}"),
        }
    }
}
