//! Benchmarks for Scribe composer operations
//!
//! Run with: cargo bench -p scribe-core
//!
//! These benchmarks establish performance baselines for:
//! - Markup stripping (the per-keystroke derivation path)
//! - Counter recomputation
//! - Command dispatch and typing through the engine
//! - Inline and block toggles on the buffer surface

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scribe_core::{
    count, strip_markup, BufferSurface, Collaborators, CommandId, ComposerEngine, ComposerOptions,
    DocumentSurface, InlineStyle,
};

fn markup_document(paragraphs: usize) -> String {
    let mut doc = String::new();
    for i in 0..paragraphs {
        doc.push_str(&format!(
            "<h2>Section {i}</h2>\n<strong>Bold</strong> and <em>italic</em> text with a \
             <a href=\"https://example.com/{i}\">link</a>.\n"
        ));
    }
    doc
}

// ============================================================================
// Markup Stripping Benchmarks
// ============================================================================

fn bench_strip_markup(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip_markup");

    for size in [1, 10, 100].iter() {
        let doc = markup_document(*size);
        group.throughput(Throughput::Bytes(doc.len() as u64));

        group.bench_with_input(BenchmarkId::new("paragraphs", size), &doc, |b, doc| {
            b.iter(|| black_box(strip_markup(doc)))
        });
    }

    // Tag-free text pays only the scan
    let plain = "plain text without any tags at all ".repeat(50);
    group.throughput(Throughput::Bytes(plain.len() as u64));
    group.bench_with_input(BenchmarkId::new("tag_free", 50), &plain, |b, plain| {
        b.iter(|| black_box(strip_markup(plain)))
    });

    group.finish();
}

fn bench_counters(c: &mut Criterion) {
    let mut group = c.benchmark_group("counters");

    for size in [10, 100, 1000].iter() {
        let text = "lorem ipsum dolor sit amet ".repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("words", size * 5), &text, |b, text| {
            b.iter(|| black_box(count(text)))
        });
    }

    group.finish();
}

// ============================================================================
// Surface Benchmarks
// ============================================================================

fn bench_inline_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline_toggle");

    group.bench_function("wrap_selection", |b| {
        b.iter_batched(
            || {
                let mut surface = BufferSurface::new("Hello world");
                surface.set_selection(0..5);
                surface
            },
            |mut surface| {
                surface.apply_inline_style(InlineStyle::Bold);
                black_box(surface)
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("unwrap_selection", |b| {
        b.iter_batched(
            || {
                let mut surface = BufferSurface::new("<strong>Hello</strong> world");
                surface.set_selection(8..13);
                surface
            },
            |mut surface| {
                surface.apply_inline_style(InlineStyle::Bold);
                black_box(surface)
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_undo_stack(c: &mut Criterion) {
    c.bench_function("insert_with_deep_history", |b| {
        b.iter_batched(
            || {
                let mut surface = BufferSurface::new("");
                for i in 0..100 {
                    surface.insert_text(&format!("word{i} "));
                }
                surface
            },
            |mut surface| {
                surface.insert_text("x");
                black_box(surface)
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

// ============================================================================
// Engine Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    group.bench_function("bold_toggle", |b| {
        b.iter_batched(
            || {
                let mut engine =
                    ComposerEngine::new(ComposerOptions::default(), Collaborators::new());
                engine.insert_text("Hello world");
                engine.surface_mut().set_selection(0..5);
                engine
            },
            |mut engine| {
                engine.dispatch(CommandId::Bold, None);
                black_box(engine)
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("named_lookup", |b| {
        b.iter_batched(
            || ComposerEngine::new(ComposerOptions::default(), Collaborators::new()),
            |mut engine| {
                engine.dispatch_named("unordered-list", None);
                black_box(engine)
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("typing");

    // Per-keystroke cost: insert, trigger scan, recount, emit
    group.bench_function("single_char", |b| {
        b.iter_batched(
            || {
                let mut engine =
                    ComposerEngine::new(ComposerOptions::default(), Collaborators::new());
                engine.insert_text(&"lorem ipsum ".repeat(20));
                engine
            },
            |mut engine| {
                engine.insert_text("a");
                black_box(engine)
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("100_keystrokes", |b| {
        b.iter_batched(
            || ComposerEngine::new(ComposerOptions::default(), Collaborators::new()),
            |mut engine| {
                for _ in 0..100 {
                    engine.insert_text("a");
                }
                black_box(engine)
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

// ============================================================================
// Criterion Groups
// ============================================================================

criterion_group!(derivation_benches, bench_strip_markup, bench_counters,);

criterion_group!(surface_benches, bench_inline_toggle, bench_undo_stack,);

criterion_group!(engine_benches, bench_dispatch, bench_typing,);

criterion_main!(derivation_benches, surface_benches, engine_benches,);
