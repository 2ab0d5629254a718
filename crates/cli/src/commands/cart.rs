//! Shopping cart commands.

use shopwindow_core::{ProductId, total_item_count, total_price};

use crate::commands::Context;
use crate::error::CliError;

/// Show cart contents and totals.
pub async fn show(ctx: &Context) -> Result<(), CliError> {
    let lines = ctx.manager.load_cart_details(&ctx.catalog).await?;

    if lines.is_empty() {
        println!("Your cart is empty.");
        return Ok(());
    }

    for line in &lines {
        println!(
            "{:>3} x{:<3} ${:<9} {}",
            line.product.id.as_u64(),
            line.quantity,
            line.line_price(),
            line.product.title
        );
    }
    println!();
    println!("{} item(s), total ${}", total_item_count(&lines), total_price(&lines));
    Ok(())
}

/// Add one unit of a product to the cart.
pub async fn add(ctx: &mut Context, id: ProductId) -> Result<(), CliError> {
    ctx.manager.add_to_cart(id).await?;
    println!("Added product {id} to cart");
    Ok(())
}

/// Remove a product from the cart entirely.
pub async fn remove(ctx: &mut Context, id: ProductId) -> Result<(), CliError> {
    ctx.manager.remove_from_cart(id).await?;
    println!("Removed product {id} from cart");
    Ok(())
}

/// Set the quantity of a product; zero removes it.
pub async fn set(ctx: &mut Context, id: ProductId, quantity: u32) -> Result<(), CliError> {
    ctx.manager.set_quantity(id, quantity).await?;
    if quantity == 0 {
        println!("Removed product {id} from cart");
    } else {
        println!("Set product {id} quantity to {quantity}");
    }
    Ok(())
}

/// Show totals only.
pub async fn total(ctx: &Context) -> Result<(), CliError> {
    let lines = ctx.manager.load_cart_details(&ctx.catalog).await?;
    println!("{} item(s), total ${}", total_item_count(&lines), total_price(&lines));
    Ok(())
}
