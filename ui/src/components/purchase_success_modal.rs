//=============================================================================
// File: src/components/purchase_success_modal.rs
//=============================================================================
use api::amount::Amount;
use api::order::format_points;
use api::pack::PackData;
use dioxus::prelude::*;

use crate::components::amount::Price;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Dialog;

/// Shown after a purchase is confirmed. Every button hands control back to
/// the caller through one of the three callbacks.
#[component]
pub fn PurchaseSuccessModal(
    is_open: bool,
    on_close: EventHandler,
    pack: PackData,
    amount_paid: Amount,
    points_earned: u32,
    on_open_pack: EventHandler,
    on_view_inventory: EventHandler,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    let points_label = format_points(points_earned);

    rsx! {
        Dialog {
            title: "Purchase Successful!",
            id: "success-modal",
            class: "success-modal",
            on_close: move |_| on_close.call(()),

            div {
                class: "success-body",
                img {
                    class: "pack-image",
                    src: "{pack.image()}",
                    alt: "{pack.name()}",
                }
                p {
                    strong { "{pack.short_name()}" }
                    " × {pack.quantity()}"
                }
                div {
                    class: "summary-row",
                    span { class: "muted", "Amount Paid" }
                    Price { amount: amount_paid }
                }
                div {
                    class: "summary-row",
                    span { class: "muted", "Points Earned" }
                    span { class: "points", "{points_label}" }
                }
            }

            footer {
                div {
                    class: "modal-actions",
                    Button {
                        id: "view-inventory",
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| on_view_inventory.call(()),
                        "View Inventory"
                    }
                    Button {
                        id: "open-pack",
                        button_type: ButtonType::Primary,
                        on_click: move |_| on_open_pack.call(()),
                        "Open Pack"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use api::payment_currency::PaymentCurrency;

    use super::*;

    #[derive(Props, Clone, PartialEq)]
    struct HarnessProps {
        is_open: bool,
        amount_paid: Amount,
    }

    #[allow(non_snake_case)]
    fn Harness(props: HarnessProps) -> Element {
        let price = Amount::new_from_major(10, PaymentCurrency::Usdc);
        let pack = PackData::new("Booster Anamons Pack", price, 3, "/packs/booster.png")
            .expect("valid pack");
        rsx! {
            PurchaseSuccessModal {
                is_open: props.is_open,
                on_close: move |_| {},
                pack,
                amount_paid: props.amount_paid,
                points_earned: 2500,
                on_open_pack: move |_| {},
                on_view_inventory: move |_| {},
            }
        }
    }

    fn render(is_open: bool) -> String {
        let amount_paid = Amount::new_from_major(30, PaymentCurrency::Usdc);
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { is_open, amount_paid });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn shows_amount_paid_and_points() {
        let html = render(true);
        assert!(html.contains("Purchase Successful!"));
        assert!(html.contains("$30.00"));
        assert!(html.contains("+2,500"));
        assert!(html.contains("Booster Pack"));
        assert!(html.contains("Open Pack"));
        assert!(html.contains("View Inventory"));
    }

    #[test]
    fn renders_nothing_when_closed() {
        let html = render(false);
        assert!(!html.contains("Purchase Successful!"));
        assert!(!html.contains("dialog"));
    }
}
