//! Catalog browsing commands.

use shopwindow_client::browse::{self, SortKey};
use shopwindow_core::ProductId;

use crate::commands::Context;
use crate::error::CliError;

/// List products, optionally searched, filtered, and sorted.
pub async fn products(
    ctx: &Context,
    search: Option<&str>,
    category: Option<&str>,
    sort: &str,
) -> Result<(), CliError> {
    let sort = SortKey::parse(sort).ok_or_else(|| {
        CliError::InvalidArgument(format!(
            "unknown sort key '{sort}' (expected name-asc, name-desc, price-asc, or price-desc)"
        ))
    })?;

    let all = ctx.catalog.list_products().await?;
    let mut products = browse::filter_products(all, search, category);
    browse::sort_products(&mut products, sort);

    if products.is_empty() {
        println!("No products matched.");
        return Ok(());
    }

    let favorites = ctx.manager.favorites();
    for product in &products {
        let marker = if favorites.contains(&product.id) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} {:>3}  ${:<9} {:<22} {}",
            product.id.as_u64(),
            product.price,
            product.category,
            product.title
        );
    }
    println!("{} product(s)", products.len());
    Ok(())
}

/// Show a single product in detail.
pub async fn product(ctx: &Context, id: ProductId) -> Result<(), CliError> {
    let product = ctx.catalog.get_product(id).await?;

    println!("{}", product.title);
    println!("  id:       {}", product.id);
    println!("  price:    ${}", product.price);
    println!("  category: {}", product.category);
    println!(
        "  rating:   {:.1} ({} ratings)",
        product.rating.rate, product.rating.count
    );
    println!("  image:    {}", product.image);
    println!();
    println!("{}", product.description);
    Ok(())
}

/// List the catalog categories.
pub async fn categories(ctx: &Context) -> Result<(), CliError> {
    for category in ctx.catalog.list_categories().await? {
        println!("{category}");
    }
    Ok(())
}
