//! Add a flower (with optional accessories) to the cart.

use anyhow::{Context as _, Result};
use clap::Args;
use flora_commerce::cart::{selection, AccessorySelection};
use flora_commerce::ids::{AccessoryId, FlowerId};

use crate::context::Context;

#[derive(Args)]
pub struct AddArgs {
    /// Flower id to add
    pub flower: String,

    /// Accessory selection as `<id>` or `<id>:<qty>`; repeatable
    #[arg(short = 'a', long = "accessory")]
    pub accessories: Vec<String>,
}

/// Run the add command.
pub fn run(args: AddArgs, ctx: &mut Context) -> Result<()> {
    let flower_id = FlowerId::new(&args.flower);
    let Some(flower) = ctx.catalog.flower(&flower_id).cloned() else {
        ctx.output.warn(&format!("No existe la flor '{}'", args.flower));
        return Ok(());
    };

    let mut selections: Vec<AccessorySelection> = Vec::new();
    for spec in &args.accessories {
        let (accessory_id, quantity) = parse_accessory_spec(spec)?;
        let Some(accessory) = ctx.catalog.accessory(&accessory_id) else {
            ctx.output.warn(&format!("No existe el accesorio '{accessory_id}'"));
            continue;
        };
        selections = selection::adjust(&selections, accessory, quantity);
    }

    if !selections.is_empty() && !ctx.catalog.accessorizable(&flower) {
        ctx.output.warn(&format!(
            "'{}' no lleva accesorios; se agrega sin ellos",
            flower.name
        ));
        selections.clear();
    }

    let line_id = ctx.session.add_line(&flower, &selections);
    ctx.output.success(&format!("'{}' agregado al carrito", flower.name));
    ctx.output.kv("Línea", line_id.as_str());
    ctx.output.kv(
        "En el carrito",
        &ctx.session.cart().quantity_of(&flower.id).to_string(),
    );

    Ok(())
}

fn parse_accessory_spec(spec: &str) -> Result<(AccessoryId, i64)> {
    match spec.split_once(':') {
        Some((id, qty)) => {
            let quantity: i64 = qty
                .parse()
                .with_context(|| format!("Invalid accessory quantity in '{spec}'"))?;
            Ok((AccessoryId::new(id), quantity))
        }
        None => Ok((AccessoryId::new(spec), 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accessory_spec() {
        let (id, qty) = parse_accessory_spec("lazo").unwrap();
        assert_eq!(id.as_str(), "lazo");
        assert_eq!(qty, 1);

        let (id, qty) = parse_accessory_spec("lazo:3").unwrap();
        assert_eq!(id.as_str(), "lazo");
        assert_eq!(qty, 3);

        assert!(parse_accessory_spec("lazo:tres").is_err());
    }
}
