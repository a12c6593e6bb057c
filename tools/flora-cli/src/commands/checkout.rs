//! Checkout: collect delivery details, render the order, produce the link.

use anyhow::Result;
use clap::Args;
use dialoguer::Input;
use flora_commerce::checkout::{self, CheckoutDetails};

use crate::context::Context;

#[derive(Args)]
pub struct CheckoutArgs {
    /// Customer name
    #[arg(long)]
    pub name: Option<String>,

    /// Delivery address
    #[arg(long)]
    pub address: Option<String>,

    /// 8-digit phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Print the message and link without clearing the cart
    #[arg(long)]
    pub dry_run: bool,
}

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &mut Context) -> Result<()> {
    if ctx.session.cart().is_empty() {
        ctx.output.info("El carrito está vacío; nada que enviar");
        return Ok(());
    }

    let name = match args.name {
        Some(name) => name,
        None => Input::new()
            .with_prompt("Nombre completo")
            .validate_with(|input: &String| -> Result<(), &str> {
                if checkout::sanitize_name(input).trim().is_empty() {
                    Err("El nombre es requerido (solo letras y espacios)")
                } else {
                    Ok(())
                }
            })
            .interact_text()?,
    };

    let address = match args.address {
        Some(address) => address,
        None => Input::new()
            .with_prompt("Dirección de envío")
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().is_empty() {
                    Err("La dirección es requerida")
                } else {
                    Ok(())
                }
            })
            .interact_text()?,
    };

    let phone = match args.phone {
        Some(phone) => phone,
        None => Input::new()
            .with_prompt("Teléfono (8 dígitos)")
            .validate_with(|input: &String| -> Result<(), &str> {
                if checkout::sanitize_phone(input).len() == 8 {
                    Ok(())
                } else {
                    Err("Ingresa un número de teléfono válido de 8 dígitos")
                }
            })
            .interact_text()?,
    };

    let details = CheckoutDetails::from_input(&name, &address, &phone);
    if !details.is_complete() {
        // Flag-provided values can still be incomplete after sanitizing.
        ctx.output.warn("Datos incompletos; el pedido no fue enviado");
        return Ok(());
    }

    let message = checkout::order_message(ctx.session.cart(), Some(&details));
    let link = checkout::whatsapp_link(&ctx.config.shop.whatsapp, &message);

    println!("{message}");
    println!();
    ctx.output.kv("Enlace", &link);

    if args.dry_run {
        ctx.output.info("Modo de prueba: el carrito se mantiene");
    } else {
        ctx.session.clear();
        ctx.output.success("Pedido enviado; carrito vaciado");
    }

    Ok(())
}
