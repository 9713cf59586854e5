use criterion::{Criterion, black_box, criterion_group, criterion_main};

use sirene::business::{Siren, Siret, Tva};
use sirene::geo::{Country, PostalCode};

fn bench_siret_parse(c: &mut Criterion) {
    c.bench_function("siret_parse", |b| {
        b.iter(|| black_box(Siret::parse(black_box("52324793012345"))));
    });
}

fn bench_siret_decompose(c: &mut Criterion) {
    let siret = Siret::parse("52324793012345").unwrap();
    c.bench_function("siret_decompose", |b| {
        b.iter(|| {
            let siret = black_box(&siret);
            black_box((siret.siren(), siret.nic()))
        });
    });
}

fn bench_tva_is_valid(c: &mut Criterion) {
    c.bench_function("tva_is_valid", |b| {
        b.iter(|| black_box(Tva::is_valid(black_box("FR77523247930"))));
    });
}

fn bench_tva_from_siren(c: &mut Criterion) {
    let siren = Siren::parse("523247930").unwrap();
    c.bench_function("tva_from_siren", |b| {
        b.iter(|| black_box(Tva::from_siren(black_box(&siren))));
    });
}

fn bench_postal_code_parse(c: &mut Criterion) {
    c.bench_function("postal_code_parse", |b| {
        b.iter(|| black_box(PostalCode::parse(black_box("75001"))));
    });
}

fn bench_country_lookup(c: &mut Criterion) {
    c.bench_function("country_from_alpha2", |b| {
        b.iter(|| black_box(Country::from_alpha2(black_box("FR"))));
    });
}

criterion_group!(
    benches,
    bench_siret_parse,
    bench_siret_decompose,
    bench_tva_is_valid,
    bench_tva_from_siren,
    bench_postal_code_parse,
    bench_country_lookup,
);
criterion_main!(benches);
