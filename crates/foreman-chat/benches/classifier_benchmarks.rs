//! Benchmarks for intent classification and reply generation.
//!
//! Classification runs once per operator message on the submit path, so it
//! should stay well under a millisecond even for long pasted messages.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use foreman_chat::{IntentClassifier, Responder, Session};

/// Short operator messages cycling through every intent, including misses.
fn generate_message(index: usize) -> String {
    let body = match index % 6 {
        0 => "What's the status of my projects?",
        1 => "Show me the budget overview",
        2 => "Any timeline updates needed?",
        3 => "How is my team doing?",
        4 => "I hate my contractor's budget management",
        _ => "Where did I leave the site keys?",
    };
    format!("{} (ref {})", body, index)
}

/// A long message with the only keyword at the very end.
fn generate_long_message(index: usize) -> String {
    format!(
        "Walked the Malibu site this morning with the inspector. Framing on the \
         east wing is nearly done and the roofers arrive Monday. Drywall delivery \
         moved to Wednesday because the supplier is short on trucks. Neighbours \
         asked again about the noise window, I told them seven to five on \
         weekdays. Remind me to call the architect about the revised stair \
         detail. Note {}. Anyway, how does the timeline look?",
        index
    )
}

fn bench_classification(c: &mut Criterion) {
    let classifier = IntentClassifier::new();
    let short: Vec<String> = (0..1000).map(generate_message).collect();
    let long: Vec<String> = (0..1000).map(generate_long_message).collect();

    let mut group = c.benchmark_group("intent_classification");
    group.sample_size(200);
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("short_message", |b| {
        let mut idx = 0usize;
        b.iter(|| {
            let intent = classifier.classify(black_box(&short[idx % short.len()]));
            idx += 1;
            intent
        });
    });

    group.bench_function("long_message", |b| {
        let mut idx = 0usize;
        b.iter(|| {
            let intent = classifier.classify(black_box(&long[idx % long.len()]));
            idx += 1;
            intent
        });
    });

    group.finish();
}

fn bench_exchange(c: &mut Criterion) {
    let responder = Responder::default();
    let messages: Vec<String> = (0..100).map(generate_message).collect();

    let mut group = c.benchmark_group("session_exchange");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("exchange_batch_100", |b| {
        b.iter(|| {
            let mut session = Session::new();
            for message in &messages {
                let _ = session.exchange(message, &responder);
            }
            session.transcript().len()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_classification, bench_exchange);
criterion_main!(benches);
