//! Assign units to named unit systems and list their memberships

use groupreg::{
    print_bitmap, NameQuery, RegistryConfig, RegistryDirectory, RegistryItem, Status,
};
use std::cmp::Ordering;

#[derive(Debug, Clone)]
struct Unit {
    system: &'static str,
    symbol: &'static str,
}

impl RegistryItem for Unit {
    type Owner = &'static str;

    fn owner(&self) -> &'static str {
        self.system
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.symbol.cmp(other.symbol)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = RegistryConfig::from_json_str(
        r#"{
            "groups": [
                { "name": "SI", "aliases": ["International System"] },
                { "name": "US", "aliases": ["US Common System"] }
            ]
        }"#,
    )?;
    let mut directory = RegistryDirectory::with_config(config)?;

    let units = [
        Unit { system: "physics", symbol: "m" },
        Unit { system: "physics", symbol: "ft" },
        Unit { system: "physics", symbol: "L" },
    ];

    directory.add_item_to_named_system(&units[0], "SI")?;
    directory.add_item_to_named_system(&units[0], "Metric")?;
    directory.add_item_to_named_system(&units[1], "US Common System")?;
    directory.add_item_to_named_system(&units[2], "metric")?;

    println!("Unit system memberships:");
    for unit in &units {
        let names = directory.named_systems_for_item(unit)?;
        println!("   {:<3} {}", unit.symbol, names.implode(", ", Some(" and ")));
    }

    let systems = directory
        .context(&"physics")
        .ok_or("physics context missing")?;
    println!("\nDefined systems: {}", systems.named_systems());
    println!(
        "All names: {}",
        systems.named_system_aliases(NameQuery::All)?
    );

    let attempt = directory
        .context_or_insert("physics")
        .map_name_to_named_system("US", "SI");
    println!("\nRebinding US to SI: {}", Status::of(&attempt));

    println!("\nRegistry bitmaps:");
    for unit in &units {
        let systems = directory.context(&"physics").ok_or("physics context missing")?;
        print!("   {:<3} ", unit.symbol);
        print_bitmap("%#06b\n", systems.items().find(unit).ok())?;
    }

    Ok(())
}
