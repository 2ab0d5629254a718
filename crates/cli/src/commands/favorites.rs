//! Favorites commands.

use shopwindow_core::ProductId;

use crate::commands::Context;
use crate::error::CliError;

/// Show favorite products with full details.
pub async fn show(ctx: &Context) -> Result<(), CliError> {
    let products = ctx.manager.load_favorite_details(&ctx.catalog).await?;

    if products.is_empty() {
        println!("No favorites yet.");
        return Ok(());
    }

    for product in &products {
        println!(
            "{:>3}  ${:<9} {:<22} {}",
            product.id.as_u64(),
            product.price,
            product.category,
            product.title
        );
    }
    println!("{} favorite(s)", products.len());
    Ok(())
}

/// Toggle a product in or out of favorites.
pub async fn toggle(ctx: &mut Context, id: ProductId) -> Result<(), CliError> {
    let now_favorite = ctx.manager.toggle_favorite(id).await?;
    if now_favorite {
        println!("Added product {id} to favorites");
    } else {
        println!("Removed product {id} from favorites");
    }
    Ok(())
}
