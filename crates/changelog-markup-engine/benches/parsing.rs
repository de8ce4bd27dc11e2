use changelog_markup_engine::{Document, RenderMode, render::html};
use criterion::{Criterion, criterion_group, criterion_main};

/// A realistic entry: a few sections of headings, prose, lists and media.
fn generate_changelog_content(sections: usize) -> String {
    let mut s = String::new();
    for i in 0..sections {
        s.push_str(&format!("# Release 1.{i}\n"));
        s.push_str("We made **search** faster and *filters* smarter. See [docs](https://docs.example.com).\n");
        s.push('\n');
        s.push_str("- Fixed `panic` on empty input\n- Improved **bold *nested* text**\n");
        s.push_str("1. Open settings\n2. Choose a theme\n");
        s.push_str("[image][Screenshot][https://cdn.example.com/shot.png]\n");
        s.push_str("[video][Walkthrough][https://youtu.be/abc123]\n");
        s.push('\n');
    }
    s
}

fn bench_keystroke_reparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let content = generate_changelog_content(10);
    group.bench_function("parse", |b| {
        b.iter(|| std::hint::black_box(Document::parse(std::hint::black_box(&content))));
    });

    group.bench_function("parse_render_html_preview", |b| {
        b.iter(|| {
            let doc = Document::parse(std::hint::black_box(&content));
            std::hint::black_box(html::to_html(&doc.render(RenderMode::Preview), RenderMode::Preview))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_keystroke_reparse);
criterion_main!(benches);
