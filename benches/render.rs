// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use chartmate::render::{document_to_text, render_report, PageOptions};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `render.paginate`, `render.to_text`
// - Case IDs must remain stable across refactors.
fn benches_render(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("render.paginate");

        for case in [
            fixtures::Case::Small,
            fixtures::Case::MediumChecklists,
            fixtures::Case::LargeLongLines,
        ] {
            let session = fixtures::session(case);
            let lines = session.report().line_count() as u64;
            let options = PageOptions::default();
            group.throughput(Throughput::Elements(lines));
            group.bench_function(case.id(), move |b| {
                b.iter(|| {
                    let doc = render_report(black_box(session.report()), black_box(&options));
                    black_box(doc.pages.len())
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("render.to_text");

        for case in [fixtures::Case::Small, fixtures::Case::LargeLongLines] {
            let session = fixtures::session(case);
            let doc = render_report(session.report(), &PageOptions::default());
            group.throughput(Throughput::Elements(doc.pages.len() as u64));
            group.bench_function(case.id(), move |b| {
                b.iter(|| {
                    let text = document_to_text(black_box(&doc));
                    black_box(fixtures::checksum(&text))
                })
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_render
}
criterion_main!(benches);
