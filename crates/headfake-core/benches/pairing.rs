use criterion::{black_box, criterion_group, criterion_main, Criterion};

use headfake_core::bank::parse_bank_str;
use headfake_core::engine::{PairingEngine, Phase, SidePicker};
use headfake_core::model::{BatchKind, GameSettings, Side};
use headfake_core::traits::{normalize_title, RawHeadline};

struct AlwaysLeft;

impl SidePicker for AlwaysLeft {
    fn pick(&mut self) -> Side {
        Side::Left
    }
}

fn make_batch(prefix: &str, n: usize) -> Vec<RawHeadline> {
    (0..n)
        .map(|i| RawHeadline {
            title: format!("{prefix} HEADLINE NUMBER {i} WITH SOME EXTRA WORDS"),
            thumbnail_url: "https://thumbs.example/pic.jpg".into(),
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_title");

    let short = "MAN BITES DOG";
    let long = "LOCAL COUNCIL VOTES TO RENAME EVERY STREET AFTER THE SAME BELOVED \
                RETIRED SCHOOLTEACHER DESPITE NAVIGATION CONCERNS RAISED BY EMERGENCY SERVICES";

    group.bench_function("short", |b| b.iter(|| normalize_title(black_box(short))));
    group.bench_function("long", |b| b.iter(|| normalize_title(black_box(long))));
    group.bench_function("already_lower", |b| {
        b.iter(|| normalize_title(black_box("already lower cased headline text")))
    });

    group.finish();
}

fn bench_full_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_drain");

    for n in [25usize, 100, 500] {
        let real = make_batch("REAL", n);
        let fake = make_batch("FAKE", n);

        group.bench_function(format!("{n}_rounds"), |b| {
            b.iter(|| {
                let mut engine =
                    PairingEngine::with_picker(GameSettings::default(), Box::new(AlwaysLeft));
                engine.on_batch_arrived(BatchKind::Real, black_box(real.clone()));
                engine.on_batch_arrived(BatchKind::Fake, black_box(fake.clone()));
                while engine.phase() == Phase::Ready {
                    engine.submit_guess(black_box(Side::Left));
                }
                engine.score()
            })
        });
    }

    group.finish();
}

fn bench_bank_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("bank_parsing");

    let small = generate_bank_toml(10);
    let large = generate_bank_toml(200);

    group.bench_function("10_entries", |b| {
        b.iter(|| parse_bank_str(black_box(&small), black_box("bench.toml".as_ref())))
    });
    group.bench_function("200_entries", |b| {
        b.iter(|| parse_bank_str(black_box(&large), black_box("bench.toml".as_ref())))
    });

    group.finish();
}

fn generate_bank_toml(n: usize) -> String {
    let mut s = String::from(
        r#"[bank]
name = "Benchmark bank"
"#,
    );
    for i in 0..n {
        s.push_str(&format!(
            r#"
[[real]]
title = "Real headline number {i}"
thumbnail = "https://thumbs.example/real_{i}.jpg"

[[fake]]
title = "Fake Headline Number {i}"
"#
        ));
    }
    s
}

criterion_group!(benches, bench_normalize, bench_full_drain, bench_bank_parsing);
criterion_main!(benches);
