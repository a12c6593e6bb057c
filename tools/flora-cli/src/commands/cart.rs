//! Inspect and edit the cart.

use anyhow::Result;
use clap::Args;
use console::style;
use flora_commerce::ids::{AccessoryId, FlowerId, LineId};

use crate::context::Context;

#[derive(Args)]
pub struct CartArgs {
    /// Print the raw cart snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct QtyArgs {
    /// Cart line id
    pub line: String,

    /// New absolute quantity; zero removes the line
    pub quantity: i64,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Cart line id
    pub line: String,
}

#[derive(Args)]
pub struct DropArgs {
    /// Flower id whose newest line should go
    pub flower: String,
}

#[derive(Args)]
pub struct StripArgs {
    /// Flower id
    pub flower: String,

    /// Accessory id to strip from that flower's lines
    pub accessory: String,
}

/// Show the cart.
pub fn show(args: CartArgs, ctx: &Context) -> Result<()> {
    let cart = ctx.session.cart();

    if args.json {
        println!("{}", serde_json::to_string_pretty(cart)?);
        return Ok(());
    }

    ctx.output.header(&format!("Carrito · {}", ctx.config.shop.name));
    if cart.is_empty() {
        ctx.output.info("El carrito está vacío");
        return Ok(());
    }

    for (index, line) in cart.lines.iter().enumerate() {
        println!(
            "{}. {} x{}  {}",
            index + 1,
            style(&line.flower.name).bold(),
            line.quantity,
            line.line_total().display()
        );
        println!("   {}", style(line.id.as_str()).dim());
        for sel in &line.accessories {
            ctx.output.list_item(&format!(
                "{} (x{}) {}",
                sel.accessory.name,
                sel.quantity,
                sel.accessory.price.display()
            ));
        }
    }

    println!();
    ctx.output.kv("Artículos", &cart.item_count().to_string());
    ctx.output.kv("Total", &cart.total_price().display());

    Ok(())
}

/// Set a line's quantity.
pub fn set_quantity(args: QtyArgs, ctx: &mut Context) -> Result<()> {
    let line_id = LineId::new(&args.line);
    let touched = ctx.session.set_quantity(&line_id, args.quantity);

    match (touched, args.quantity) {
        (true, q) if q <= 0 => ctx.output.success("Línea eliminada"),
        (true, q) => ctx.output.success(&format!("Cantidad actualizada a {q}")),
        (false, _) => ctx.output.warn(&format!("No existe la línea '{}'", args.line)),
    }
    Ok(())
}

/// Remove a line.
pub fn remove(args: RemoveArgs, ctx: &mut Context) -> Result<()> {
    if ctx.session.remove_line(&LineId::new(&args.line)) {
        ctx.output.success("Línea eliminada");
    } else {
        ctx.output.warn(&format!("No existe la línea '{}'", args.line));
    }
    Ok(())
}

/// Remove the most recently added line of a flower.
pub fn drop_most_recent(args: DropArgs, ctx: &mut Context) -> Result<()> {
    if ctx.session.remove_most_recent_line(&FlowerId::new(&args.flower)) {
        ctx.output.success("Última línea de la flor eliminada");
    } else {
        ctx.output.warn(&format!("'{}' no está en el carrito", args.flower));
    }
    Ok(())
}

/// Strip an accessory from every line of a flower.
pub fn strip(args: StripArgs, ctx: &mut Context) -> Result<()> {
    ctx.session.remove_accessory(
        &FlowerId::new(&args.flower),
        &AccessoryId::new(&args.accessory),
    );
    ctx.output.success(&format!(
        "Accesorio '{}' retirado de las líneas de '{}'",
        args.accessory, args.flower
    ));
    Ok(())
}

/// Empty the cart.
pub fn clear(ctx: &mut Context) -> Result<()> {
    ctx.session.clear();
    ctx.output.success("Carrito vaciado");
    Ok(())
}
