use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use events::{DomainEvent, EventDispatcher, EventHandler, HandlerResult};

struct NoopHandler;

impl EventHandler for NoopHandler {
    fn handle(&self, _event: &DomainEvent) -> HandlerResult {
        Ok(())
    }
}

fn bench_notify(c: &mut Criterion) {
    let mut group = c.benchmark_group("events/notify");

    for handler_count in [1, 10, 100] {
        let mut dispatcher = EventDispatcher::new();
        for _ in 0..handler_count {
            dispatcher.register("BenchEvent", Arc::new(NoopHandler));
        }
        let event = DomainEvent::new("BenchEvent", serde_json::json!({"n": 1}));

        group.bench_with_input(
            BenchmarkId::from_parameter(handler_count),
            &handler_count,
            |b, _| {
                b.iter(|| dispatcher.notify(&event).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_register_unregister(c: &mut Criterion) {
    c.bench_function("events/register_unregister", |b| {
        let handler: events::SharedHandler = Arc::new(NoopHandler);
        b.iter(|| {
            let mut dispatcher = EventDispatcher::new();
            dispatcher.register("BenchEvent", Arc::clone(&handler));
            dispatcher.unregister("BenchEvent", &handler);
        });
    });
}

criterion_group!(benches, bench_notify, bench_register_unregister);
criterion_main!(benches);
