use criterion::{black_box, criterion_group, criterion_main, Criterion};
use groupreg::{NamedSystems, RegistryItem};
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

#[derive(Clone)]
struct Item(u32);

impl RegistryItem for Item {
    type Owner = ();

    fn owner(&self) {}

    fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

const GROUPS: usize = 64;
const ITEMS: u32 = 2_000;

fn populated() -> (NamedSystems<Item>, Vec<String>) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(3);
    let names: Vec<String> = (0..GROUPS).map(|i| format!("Group {i}")).collect();
    let mut systems = NamedSystems::new(());

    for id in 0..ITEMS {
        for _ in 0..4 {
            let name = &names[rng.gen_range(0..GROUPS)];
            systems.add_item_to_named_system(&Item(id), name).unwrap();
        }
    }
    (systems, names)
}

fn bench_lookup(c: &mut Criterion) {
    let (systems, names) = populated();
    let mut rng = rand::rngs::StdRng::seed_from_u64(9);

    c.bench_function("is_item_in_named_system", |b| {
        b.iter(|| {
            let item = Item(rng.gen_range(0..ITEMS));
            let name = names[rng.gen_range(0..GROUPS)].to_uppercase();
            black_box(systems.is_item_in_named_system(&item, &name).unwrap())
        })
    });

    c.bench_function("named_systems_for_item", |b| {
        b.iter(|| {
            let item = Item(rng.gen_range(0..ITEMS));
            black_box(systems.named_systems_for_item(&item).unwrap())
        })
    });
}

fn bench_populate(c: &mut Criterion) {
    c.bench_function("populate_2000_items", |b| b.iter(populated));
}

criterion_group!(benches, bench_lookup, bench_populate);
criterion_main!(benches);
