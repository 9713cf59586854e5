use sirene::business::{Siren, Siret, Tva};

fn main() {
    // Derive a company's TVA number from its SIREN.
    let siren = Siren::parse("523247930").expect("valid SIREN");
    let tva = Tva::from_siren(&siren);
    println!("SIREN {siren} => TVA {tva} (key {})", tva.key());

    // Single-digit keys are stored zero-padded.
    let siren = Siren::parse("637293879").expect("valid SIREN");
    let tva = Tva::from_siren(&siren);
    println!("SIREN {siren} => TVA {tva} (key {})", tva.key());

    // Or start from an establishment's SIRET.
    let siret = Siret::parse("52324793012345").expect("valid SIRET");
    let tva = Tva::from_siret(&siret);
    println!(
        "SIRET {siret} => siren={}, nic={}, TVA {tva}",
        siret.siren(),
        siret.nic()
    );

    // Every derived number re-validates.
    assert!(Tva::is_valid(tva.as_str()));
    println!("re-parse: {:?}", Tva::parse(tva.to_string()).is_ok());
}
