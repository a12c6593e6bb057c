//! The order message handed to the dispatch channel.
//!
//! Deterministic: depends only on the cart and the checkout details. Lines
//! render in cart insertion order and the output carries exactly one TOTAL
//! line, equal to the cart's total at two decimals.

use crate::cart::Cart;
use crate::checkout::CheckoutDetails;

/// Country calling-code prefix shown before the customer's local number.
const PHONE_PREFIX: &str = "+53";

/// Render the full order summary.
pub fn order_message(cart: &Cart, details: Option<&CheckoutDetails>) -> String {
    let mut msg = String::from("\u{1f338} *Nuevo Pedido de Flores* \u{1f338}\n\n");

    if let Some(details) = details {
        msg.push_str("*Datos del Cliente:*\n");
        msg.push_str(&format!("\u{1f464} Nombre: {}\n", details.name));
        msg.push_str(&format!("\u{1f4cd} Dirección: {}\n", details.address));
        msg.push_str(&format!(
            "\u{1f4f1} Teléfono: {} {}\n\n",
            PHONE_PREFIX, details.phone
        ));
    }

    msg.push_str("*Productos:*\n\n");
    for (index, line) in cart.lines.iter().enumerate() {
        msg.push_str(&format!("{}. *{}*\n", index + 1, line.flower.name));
        msg.push_str(&format!("   Cantidad: {}\n", line.quantity));
        msg.push_str(&format!(
            "   Precio unitario: {}\n",
            line.flower.price.display()
        ));
        for sel in &line.accessories {
            msg.push_str(&format!(
                "   \u{1f380} Accesorio: {} (x{}) (+{} c/u)\n",
                sel.accessory.name,
                sel.quantity,
                sel.accessory.price.display()
            ));
        }
        msg.push_str(&format!("   Subtotal: {}\n\n", line.line_total().display()));
    }

    msg.push_str("\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\n");
    msg.push_str(&format!("*TOTAL: {}*\n\n", cart.total_price().display()));
    msg.push_str("Gracias por tu compra! \u{1f490}");

    msg
}
