use criterion::{Criterion, black_box, criterion_group, criterion_main};
use taqvim_search::{
    EquinoxConfig, Season, estimate_prior_solar_longitude, season_in_gregorian_year,
    solar_longitude_on_or_before,
};
use taqvim_solar::solar_longitude;
use taqvim_time::IRAN;

fn solar_longitude_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("solar_position");
    group.bench_function("solar_longitude", |b| {
        b.iter(|| solar_longitude(black_box(738_965.5)))
    });
    group.finish();
}

fn equinox_bench(c: &mut Criterion) {
    let config = EquinoxConfig::default();

    let mut group = c.benchmark_group("search_equinox");
    group.bench_function("estimate_prior_solar_longitude", |b| {
        b.iter(|| estimate_prior_solar_longitude(black_box(0.0), black_box(739_000.5)))
    });
    group.bench_function("solar_longitude_on_or_before", |b| {
        b.iter(|| {
            solar_longitude_on_or_before(
                black_box(0.0),
                black_box(739_000),
                black_box(&IRAN),
                black_box(&config),
            )
            .expect("search should converge")
        })
    });
    group.bench_function("winter_solstice", |b| {
        b.iter(|| {
            season_in_gregorian_year(Season::Winter, black_box(2024), &IRAN, &config)
                .expect("search should converge")
        })
    });
    group.finish();
}

criterion_group!(benches, solar_longitude_bench, equinox_bench);
criterion_main!(benches);
