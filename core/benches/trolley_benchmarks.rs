use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use trolley::{CartIntent, CartReducer, CartStore, Product, ProductId, Rating, StoreHandle};

// --- Common Benchmark Fixtures ---
fn bench_product(id: u64) -> Product {
  Product {
    id: ProductId(id),
    title: format!("Bench product {}", id),
    price: 9.99,
    category: "bench".to_string(),
    image: String::new(),
    rating: Rating::default(),
    description: String::new(),
  }
}

/// A store already holding `lines` distinct products.
fn filled_store(lines: u64) -> CartStore {
  let mut store = CartStore::new(CartReducer::new());
  for id in 1..=lines {
    store.add_to_cart(bench_product(id)).unwrap();
  }
  store
}

// --- Benchmark Functions ---

fn bench_increment_by_cart_size(c: &mut Criterion) {
  let mut group = c.benchmark_group("IncrementByCartSize");

  for lines in [1_u64, 10, 100].iter() {
    group.throughput(Throughput::Elements(1));
    group.bench_with_input(BenchmarkId::from_parameter(lines), lines, |b, &lines| {
      let mut store = filled_store(lines);
      let target = ProductId(lines / 2 + 1);
      b.iter(|| store.dispatch(CartIntent::IncrementQuantity(target)).unwrap());
    });
  }
  group.finish();
}

fn bench_add_remove_cycle(c: &mut Criterion) {
  let mut group = c.benchmark_group("AddRemoveCycle");

  for lines in [0_u64, 10, 100].iter() {
    group.bench_with_input(BenchmarkId::from_parameter(lines), lines, |b, &lines| {
      let mut store = filled_store(lines);
      let extra = bench_product(lines + 1);
      b.iter(|| {
        store.add_to_cart(extra.clone()).unwrap();
        store.decrement_quantity(extra.id).unwrap();
      });
    });
  }
  group.finish();
}

fn bench_subscriber_fanout(c: &mut Criterion) {
  let mut group = c.benchmark_group("SubscriberFanout");

  for subscribers in [0_usize, 1, 10, 50].iter() {
    group.bench_with_input(BenchmarkId::from_parameter(subscribers), subscribers, |b, &subscribers| {
      let mut store = filled_store(10);
      for _ in 0..subscribers {
        store.subscribe(|snapshot| {
          criterion::black_box(snapshot.total_quantity());
        });
      }
      b.iter(|| store.increment_quantity(ProductId(5)).unwrap());
    });
  }
  group.finish();
}

fn bench_handle_dispatch(c: &mut Criterion) {
  let mut group = c.benchmark_group("StoreHandle");
  let handle = StoreHandle::new(filled_store(10));

  group.bench_function("increment_through_handle", |b| {
    b.iter(|| handle.increment_quantity(ProductId(3)).unwrap());
  });
  group.bench_function("snapshot_read", |b| {
    b.iter(|| criterion::black_box(handle.cart().len()));
  });
  group.finish();
}

criterion_group!(
  benches,
  bench_increment_by_cart_size,
  bench_add_remove_cycle,
  bench_subscriber_fanout,
  bench_handle_dispatch
);
criterion_main!(benches);
