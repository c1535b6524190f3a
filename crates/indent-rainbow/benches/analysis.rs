use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use indent_rainbow::{
    AnalysisOptions, IgnorePatterns, IndentSettings, IndentStyle, LineIndex, analyze_document,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn indented_text(line_count: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = String::with_capacity(line_count * 48);
    for i in 0..line_count {
        let depth = rng.gen_range(0..8);
        match rng.gen_range(0..20) {
            // A few misaligned and mixed lines so the error path is exercised too.
            0 => out.push_str("   "),
            1 => out.push_str("\t  "),
            _ => out.push_str(&"    ".repeat(depth)),
        }
        out.push_str(&format!("let value_{i} = compute({depth}); // indent-rainbow benchmark\n"));
    }
    out.pop();
    out
}

fn bench_full_pass(c: &mut Criterion) {
    let doc = LineIndex::from_text(&indented_text(20_000, 7));
    let patterns = IgnorePatterns::default();
    let options = AnalysisOptions::new(IndentSettings::new(4, IndentStyle::Spaces), 4, &patterns);

    c.bench_function("analysis/full_pass_20k_lines", |b| {
        b.iter(|| black_box(analyze_document(black_box(&doc), &options)))
    });
}

fn bench_full_pass_with_ignore_patterns(c: &mut Criterion) {
    let doc = LineIndex::from_text(&indented_text(20_000, 11));
    let (patterns, _) = IgnorePatterns::compile(["/[ \\t]+[/]{2}/g", "/^\\s*#/m"]);
    let options = AnalysisOptions::new(IndentSettings::new(4, IndentStyle::Spaces), 4, &patterns);

    c.bench_function("analysis/ignore_patterns_20k_lines", |b| {
        b.iter(|| black_box(analyze_document(black_box(&doc), &options)))
    });
}

fn bench_pass_after_edit(c: &mut Criterion) {
    let text = indented_text(20_000, 13);
    let patterns = IgnorePatterns::default();
    let options = AnalysisOptions::new(IndentSettings::new(4, IndentStyle::Spaces), 4, &patterns);

    c.bench_function("analysis/edit_then_pass", |b| {
        b.iter_batched(
            || LineIndex::from_text(&text),
            |mut doc| {
                let offset = doc.char_count() / 2;
                doc.insert(offset, "\n        let inserted = 1;");
                black_box(analyze_document(&doc, &options));
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_full_pass,
    bench_full_pass_with_ignore_patterns,
    bench_pass_after_edit
);
criterion_main!(benches);
