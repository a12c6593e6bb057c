//! Catalog browsing.

use anyhow::Result;
use clap::Args;
use console::style;
use flora_commerce::ids::CategoryId;

use crate::context::Context;

#[derive(Args)]
pub struct CatalogArgs {
    /// Filter flowers by category id
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// List accessories instead of flowers
    #[arg(long)]
    pub accessories: bool,
}

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    if args.accessories {
        ctx.output.header("Accesorios");
        for accessory in &ctx.catalog.accessories {
            ctx.output.list_item(&format!(
                "{}  {}  {}",
                style(accessory.id.as_str()).dim(),
                style(&accessory.name).bold(),
                accessory.price.display()
            ));
        }
        return Ok(());
    }

    ctx.output.header(&format!("Catálogo de {}", ctx.config.shop.name));

    for category in &ctx.catalog.categories {
        let tag = if category.accessorizable {
            " (con accesorios)"
        } else {
            ""
        };
        ctx.output.kv(category.id.as_str(), &format!("{}{}", category.name, tag));
    }
    println!();

    let filter = args.category.map(CategoryId::new);
    let flowers: Vec<_> = match &filter {
        Some(category_id) => ctx.catalog.flowers_in(category_id).collect(),
        None => ctx.catalog.flowers.iter().collect(),
    };

    if flowers.is_empty() {
        ctx.output.info("No hay flores disponibles en esta categoría");
        return Ok(());
    }

    for flower in flowers {
        let in_cart = ctx.session.cart().quantity_of(&flower.id);
        let cart_note = if in_cart > 0 {
            format!("  {}", style(format!("[x{in_cart} en el carrito]")).green())
        } else {
            String::new()
        };
        ctx.output.list_item(&format!(
            "{}  {}  {}{}",
            style(flower.id.as_str()).dim(),
            style(&flower.name).bold(),
            flower.price.display(),
            cart_note
        ));
        if !flower.description.is_empty() {
            println!("      {}", style(&flower.description).dim());
        }
    }

    Ok(())
}
