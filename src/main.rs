use max_of::{max_of, try_max_of, MaxOfExt};
use std::time::Instant;

struct Item {
    name: String,
    count: u64,
    price: f64,
}

fn main() {
    env_logger::builder()
        .filter_module("max_of", log::LevelFilter::Trace)
        .parse_default_env()
        .init();

    let start = Instant::now();

    let inventory: Vec<Item> = {
        use rand::Rng;

        let mut rng = rand::thread_rng();

        (0..1_000_000)
            .map(|idx| Item {
                name: format!("item-{idx}"),
                count: rng.gen_range(0..10_000),
                price: rng.gen_range(0.5..250.0),
            })
            .collect()
    };

    log::info!("generated {} items in {:?}", inventory.len(), start.elapsed());

    for _ in 0..10 {
        let start = Instant::now();
        let max_count = max_of(&inventory, |i| i.count);
        log::info!("max count {max_count:?} in {:?}", start.elapsed());
    }

    let start = Instant::now();
    let max_price = inventory.iter().max_of(|i| i.price);
    log::info!("max price {max_price:?} in {:?}", start.elapsed());

    let start = Instant::now();
    let longest_name = try_max_of(&inventory, |i| u8::try_from(i.name.len()));
    log::info!("longest name {longest_name:?} in {:?}", start.elapsed());

    // NOTE: A single NaN poisons the whole result
    let poisoned = inventory
        .iter()
        .enumerate()
        .max_of(|(idx, i)| if idx == 500_000 { f64::NAN } else { i.price });
    log::info!("max price with NaN: {poisoned:?}");
}
