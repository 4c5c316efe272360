//=============================================================================
// File: src/components/purchase_modal.rs
//=============================================================================
use api::config::CheckoutConfig;
use api::order::OrderSummary;
use api::pack::PackData;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::components::amount::Price;
use crate::components::pico::Button;
use crate::components::pico::Dialog;
use crate::components::purchase_success_modal::PurchaseSuccessModal;

/// The buttons offered by the success dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuccessAction {
    Dismiss,
    OpenPack,
    ViewInventory,
}

/// Dialog-local state. Lives as long as the dialog is mounted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Checkout {
    promo_code: String,
    show_success: bool,
}

impl Checkout {
    pub fn promo_code(&self) -> &str {
        &self.promo_code
    }

    /// Promo codes are free text; nothing validates or applies them yet.
    pub fn set_promo_code(&mut self, code: String) {
        self.promo_code = code;
    }

    pub fn is_success_open(&self) -> bool {
        self.show_success
    }

    /// Opens the success dialog if the wallet covers the order. No payment is made.
    pub fn confirm(&mut self, summary: &OrderSummary) -> bool {
        if !summary.has_enough_balance {
            tracing::warn!(
                "purchase confirmation ignored: {} short",
                summary.amount_needed.to_string_with_code()
            );
            return false;
        }
        tracing::info!("purchase confirmed for {}", summary.total.to_string_with_code());
        self.show_success = true;
        true
    }

    /// Hides the success dialog and hands control back through `on_close`.
    pub fn finish(&mut self, action: SuccessAction, on_close: impl FnOnce()) {
        self.show_success = false;
        match action {
            SuccessAction::Dismiss => {}
            // TODO: route to the pack opening page once navigation exists.
            SuccessAction::OpenPack => tracing::info!("open pack requested; navigation not implemented"),
            // TODO: route to the inventory page once navigation exists.
            SuccessAction::ViewInventory => tracing::info!("view inventory requested; navigation not implemented"),
        }
        on_close();
    }
}

/// The "Buy a pack" dialog: payment pane on one side, order summary on the other.
#[component]
pub fn PurchaseModal(is_open: bool, on_close: EventHandler, pack: PackData) -> Element {
    let config = try_use_context::<CheckoutConfig>().unwrap_or_default();
    let mut checkout = use_signal(Checkout::default);

    if !is_open {
        return rsx! {};
    }

    let summary = OrderSummary::for_pack(&pack, &config);
    let currency = config.currency;
    let currency_code = currency.code();
    let total_label = summary.total.to_string_with_symbol();
    let needed_label = summary.amount_needed.to_string_with_symbol();
    let points_label = summary.points_label();
    let promo_code = checkout.read().promo_code().to_owned();
    let show_success = checkout.read().is_success_open();

    rsx! {
        Dialog {
            title: "Buy a pack",
            id: "purchase-modal",
            class: "purchase-modal",
            on_close: move |_| on_close.call(()),

            div {
                class: "purchase-content",

                // Payment pane
                section {
                    class: "payment-pane",
                    div {
                        class: "pane-title",
                        span { class: "wallet-icon", "aria-hidden": "true", "👛" }
                        strong { "Pay with Solana Wallet" }
                    }

                    label { "Payment Currency" }
                    div {
                        class: "currency-option selected",
                        div {
                            class: "currency-badge",
                            span { class: "currency-icon", "{currency.symbol()}" }
                            div {
                                class: "currency-name",
                                strong { "{currency_code}" }
                                small { "{currency.network_label()}" }
                            }
                        }
                        span { class: "currency-check", "aria-hidden": "true", "✓" }
                    }

                    div {
                        class: "balance-box",
                        div {
                            class: "summary-row",
                            span { class: "muted", "Your {currency_code} Balance" }
                            Price { amount: summary.balance }
                        }
                        div {
                            class: "summary-row",
                            span { class: "muted", "Amount Required" }
                            Price { amount: summary.subtotal }
                        }
                        if summary.needs_funds() {
                            div {
                                class: "summary-row shortfall",
                                span { "Amount Needed" }
                                Price { amount: summary.amount_needed }
                            }
                        }
                    }

                    div {
                        class: "purchase-actions",
                        if summary.has_enough_balance {
                            Button {
                                id: "confirm-purchase",
                                class: "gradient wide",
                                on_click: move |_| {
                                    checkout.write().confirm(&summary);
                                },
                                "Confirm Purchase of {total_label}"
                            }
                        } else {
                            // No wallet top-up flow exists yet.
                            Button {
                                class: "gradient wide",
                                "Add Funds"
                            }
                        }
                        if summary.needs_funds() {
                            p {
                                class: "shortfall-hint",
                                "Need {needed_label} more {currency_code} to complete purchase"
                            }
                        }
                    }
                }

                // Order summary pane
                section {
                    class: "summary-pane",
                    div {
                        class: "summary-row",
                        span { class: "muted", "Order summary" }
                        small { class: "muted", "{pack.item_label()}" }
                    }

                    div {
                        class: "pack-row",
                        div {
                            class: "pack-info",
                            div {
                                class: "pack-thumb",
                                img {
                                    src: "{pack.image()}",
                                    alt: "{pack.name()}",
                                    width: "37",
                                    height: "50",
                                }
                            }
                            div {
                                class: "pack-text",
                                span { "{pack.short_name()}" }
                                small { "Quantity: {pack.quantity()}" }
                            }
                        }
                        Price { amount: summary.subtotal }
                    }

                    div {
                        class: "totals",
                        div {
                            class: "summary-row",
                            span { "Subtotal" }
                            Price { amount: summary.subtotal }
                        }
                        div {
                            class: "summary-row",
                            span { "Points" }
                            span { class: "points", "{points_label}" }
                        }
                        div {
                            class: "summary-row total",
                            strong { "Total" }
                            Price { amount: summary.total }
                        }
                    }

                    div {
                        class: "promo-row",
                        input {
                            r#type: "text",
                            value: "{promo_code}",
                            placeholder: "Enter promo code",
                            oninput: move |evt| checkout.write().set_promo_code(evt.value()),
                        }
                        // Promo codes are not validated or applied yet.
                        Button {
                            class: "gradient",
                            "Apply"
                        }
                    }
                }
            }
        }

        PurchaseSuccessModal {
            is_open: show_success,
            on_close: move |_| checkout.write().finish(SuccessAction::Dismiss, || on_close.call(())),
            pack: pack.clone(),
            amount_paid: summary.total,
            points_earned: summary.points_earned,
            on_open_pack: move |_| checkout.write().finish(SuccessAction::OpenPack, || on_close.call(())),
            on_view_inventory: move |_| {
                checkout.write().finish(SuccessAction::ViewInventory, || on_close.call(()))
            },
        }
    }
}
