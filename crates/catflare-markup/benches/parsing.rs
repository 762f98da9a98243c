use catflare_markup::{ParserConfig, parse};
use criterion::{Criterion, criterion_group, criterion_main};

fn generate_chat_message(size: usize) -> String {
    let base = "Hey <userid:'1024'>, **look** at this ||spoiler|| 😀 https://catfla.re/invite/cats \
                and `code` plus https://example.com/page?x=1 <emoji:party_cat>\n-# sent from my phone\n";
    base.repeat(size)
}

fn bench_chat_messages(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let config = ParserConfig::message();
    let content = generate_chat_message(100);
    group.bench_function("chat_messages", |b| {
        b.iter(|| {
            let nodes = parse(std::hint::black_box(&content), &config);
            std::hint::black_box(nodes);
        });
    });

    group.finish();
}

fn bench_unterminated_openers(c: &mut Criterion) {
    let mut group = c.benchmark_group("adversarial");
    group.sample_size(10);

    let config = ParserConfig::message();
    for (name, content) in [
        ("mentions", "<userid:'x ".repeat(10_000)),
        ("file_embeds", "[%file%](".repeat(10_000)),
        ("stars", "*".repeat(30_000)),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let nodes = parse(std::hint::black_box(&content), &config);
                std::hint::black_box(nodes);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_chat_messages, bench_unterminated_openers);
criterion_main!(benches);
