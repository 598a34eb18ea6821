//! Demo catalog inserted into an empty products table when `DB_SEED` is set.

use crate::error::StoreError;
use crate::model::ProductFields;
use crate::service::ProductStore;

/// (name, price, stock)
pub const DEMO_PRODUCTS: &[(&str, i64, i64)] = &[
    ("Laptop", 10_000_000, 10),
    ("Mouse", 150_000, 50),
    ("Keyboard", 300_000, 30),
    ("Monitor 24 inch", 2_500_000, 25),
    ("Monitor 27 inch", 3_500_000, 20),
    ("Monitor 32 inch", 5_000_000, 15),
    ("Gaming Monitor 144Hz", 4_500_000, 18),
    ("Curved Monitor 34 inch", 7_500_000, 12),
    ("SSD 256GB", 600_000, 40),
    ("SSD 512GB", 1_000_000, 35),
    ("SSD 1TB", 1_800_000, 30),
    ("HDD 1TB", 700_000, 45),
    ("HDD 2TB", 1_100_000, 38),
    ("External HDD 1TB", 900_000, 28),
    ("Flash Drive 128GB", 200_000, 60),
    ("Headphones", 500_000, 35),
    ("Gaming Headset", 800_000, 25),
    ("Wireless Earbuds", 1_200_000, 40),
    ("Bluetooth Speaker", 600_000, 30),
    ("Soundbar", 1_500_000, 20),
    ("Microphone", 750_000, 22),
    ("Webcam 1080p", 650_000, 28),
    ("WiFi Router", 450_000, 25),
    ("WiFi 6 Router", 1_200_000, 18),
    ("Network Switch 8-port", 350_000, 20),
    ("Ethernet Cable 10m", 100_000, 50),
    ("USB WiFi Adapter", 180_000, 40),
    ("RAM 8GB DDR4", 600_000, 35),
    ("RAM 16GB DDR4", 1_100_000, 30),
    ("RAM 32GB DDR4", 2_200_000, 20),
    ("Graphics Card GTX 1650", 2_500_000, 15),
    ("Graphics Card RTX 3060", 5_500_000, 10),
    ("Power Supply 500W", 800_000, 25),
    ("Power Supply 650W", 1_100_000, 20),
    ("CPU Cooler", 450_000, 22),
    ("Mousepad Large", 150_000, 45),
    ("Gaming Mousepad RGB", 350_000, 30),
    ("USB Hub 4-port", 200_000, 40),
    ("USB Hub 7-port", 350_000, 25),
    ("HDMI Cable 2m", 80_000, 55),
    ("DisplayPort Cable", 120_000, 40),
    ("Laptop Stand", 250_000, 35),
    ("USB-C to HDMI Adapter", 250_000, 30),
    ("USB-C Hub", 450_000, 25),
    ("Charger Laptop 65W", 400_000, 28),
    ("Power Bank 20000mAh", 550_000, 32),
    ("Wireless Charger", 280_000, 38),
    ("Webcam 4K", 1_200_000, 15),
    ("Drawing Tablet", 1_800_000, 12),
    ("Desk Lamp LED", 350_000, 28),
];

/// Insert [`DEMO_PRODUCTS`] unless the store already holds products. Returns how many were inserted.
pub async fn seed_demo_products(store: &dyn ProductStore) -> Result<usize, StoreError> {
    let existing = store.count().await?;
    if existing > 0 {
        tracing::info!(existing, "products table not empty; skipping seed");
        return Ok(0);
    }
    for (name, price, stock) in DEMO_PRODUCTS {
        store
            .create(&ProductFields {
                name: (*name).to_string(),
                price: *price,
                stock: *stock,
            })
            .await?;
    }
    tracing::info!(inserted = DEMO_PRODUCTS.len(), "seeded demo products");
    Ok(DEMO_PRODUCTS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::MemoryProductStore;

    #[tokio::test]
    async fn seeds_empty_store_once() {
        let store = MemoryProductStore::new();
        assert_eq!(seed_demo_products(&store).await.unwrap(), DEMO_PRODUCTS.len());
        assert_eq!(seed_demo_products(&store).await.unwrap(), 0);
        assert_eq!(store.count().await.unwrap(), DEMO_PRODUCTS.len() as i64);

        let first = store.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(first.name, "Laptop");
        assert_eq!(first.price, 10_000_000);
    }
}
