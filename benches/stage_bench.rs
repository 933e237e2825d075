use std::{borrow::Cow, time::Duration};

use cleancolumns::{
    DEU, ENG, LanguageSymbols, LowerCase, NormalizeSeparators, POL, SPA, SlugConfig,
    SmartTruncate, Transliterate, TrimWhitespace, context::Context, lang::Lang, stage::Stage,
};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

const SAMPLES: &[(&str, Lang)] = &[
    //  1. English – symbols + curly quotes
    ("  Profit & Loss — “Q3” report  ", ENG),
    //  2. German  – sharp-s + umlauts
    ("Größe der Straße & Hausnummer", DEU),
    //  3. Polish  – ogonek + kreska
    ("Łódź @ Żółć", POL),
    //  4. Spanish – ñ + inverted punctuation
    ("¡España & mañana!", SPA),
    //  5. Cyrillic + Han via transliteration
    ("Hellö Wörld хелло ворлд 影師", ENG),
    //  6. Already a slug
    ("already_a_clean_slug", ENG),
];

fn stage_benches_auto<S, C>(c: &mut Criterion, stage_name: &str, constructor: C)
where
    S: Stage + 'static,
    C: Fn() -> S,
{
    let mut group = c.benchmark_group(stage_name);
    let cfg = SlugConfig::new().max_length(16);

    for &(text, lang) in SAMPLES {
        let ctx = Context::new(lang, &cfg);
        let stage = constructor();
        let mut zero_copy_hits = 0usize;
        let mut total = 0usize;

        let id = format!("{} - {text}", lang.code());
        group.bench_function(BenchmarkId::new("", id), |b| {
            b.iter_batched(
                || text,
                |t| {
                    total += 1;
                    let result = if stage.needs_apply(t, &ctx) {
                        stage.apply(Cow::Borrowed(t), &ctx)
                    } else {
                        Cow::Borrowed(t)
                    };
                    if matches!(result, Cow::Borrowed(s) if s.as_ptr() == t.as_ptr() && s.len() == t.len()) {
                        zero_copy_hits += 1;
                    }
                },
                BatchSize::SmallInput,
            )
        });
        let pct = if total > 0 {
            (zero_copy_hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        println!("   ZERO-COPY {zero_copy_hits}/{total} ({pct:.2}%)");
    }

    group.finish();
}

fn stage_matrix(c: &mut Criterion) {
    stage_benches_auto(c, "TrimWhitespace", || TrimWhitespace);
    stage_benches_auto(c, "LanguageSymbols", || LanguageSymbols);
    stage_benches_auto(c, "Transliterate", || Transliterate);
    stage_benches_auto(c, "LowerCase", || LowerCase);
    stage_benches_auto(c, "NormalizeSeparators", || NormalizeSeparators);
    stage_benches_auto(c, "SmartTruncate", || SmartTruncate);
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(2))
        .warm_up_time(Duration::from_secs(2))
        .sample_size(200)
        .noise_threshold(0.015)
        .significance_level(0.05);
    targets = stage_matrix
);
criterion_main!(benches);
