//! Catalogue seed data for local development.

use scalehouse_core::ProductCategory;
use scalehouse_site::db::ProductRepository;
use scalehouse_site::models::NewProduct;

use super::{CommandError, connect};

struct SeedProduct {
    name: &'static str,
    category: &'static str,
    description: &'static str,
    image: &'static str,
}

// Note the "calibration" entry: categories are free text, so seed data
// exercises the non-curated path on purpose.
const SEED_PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "PC-30 price computing scale",
        category: "retail",
        description: "30 kg price computing scale with dual displays, \
                      suitable for butcheries and farm stalls.",
        image: "/static/images/seed/pc-30.png",
    },
    SeedProduct {
        name: "SP-150 bench scale",
        category: "retail",
        description: "Stainless 150 kg bench scale with rechargeable battery.",
        image: "/static/images/seed/sp-150.png",
    },
    SeedProduct {
        name: "PF-1500 pallet platform",
        category: "industrial",
        description: "1.2 x 1.2 m platform scale rated to 1500 kg, with \
                      remote indicator and ramp option.",
        image: "/static/images/seed/pf-1500.png",
    },
    SeedProduct {
        name: "WB-60 weighbridge deck",
        category: "industrial",
        description: "Modular 18 m steel deck weighbridge, 60 tonne capacity.",
        image: "/static/images/seed/wb-60.png",
    },
    SeedProduct {
        name: "LC-5T shear beam load cell",
        category: "spare-part",
        description: "5 tonne alloy steel shear beam load cell, IP67.",
        image: "/static/images/seed/lc-5t.png",
    },
    SeedProduct {
        name: "Annual calibration contract",
        category: "service",
        description: "Scheduled calibration visits with certificates, \
                      priced per site.",
        image: "/static/images/seed/calibration-contract.png",
    },
    SeedProduct {
        name: "M1 cast iron test weight, 20 kg",
        category: "calibration",
        description: "Certified M1 class test weight with adjusting cavity.",
        image: "/static/images/seed/test-weight-20kg.png",
    },
];

/// Insert the sample catalogue. Not idempotent; intended for fresh
/// development databases.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;
    let repo = ProductRepository::new(&pool);

    for seed in SEED_PRODUCTS {
        let product = repo
            .insert(&NewProduct {
                name: seed.name.to_string(),
                category: ProductCategory::parse(seed.category),
                description: seed.description.to_string(),
                image_url: seed.image.to_string(),
            })
            .await?;
        tracing::info!("Seeded product {}: {}", product.id, product.name);
    }

    tracing::info!("Seeded {} products", SEED_PRODUCTS.len());
    Ok(())
}
