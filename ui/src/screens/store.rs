//=============================================================================
// File: src/screens/store.rs
//=============================================================================
use api::catalog;
use api::pack::PackData;
use dioxus::prelude::*;

use crate::components::amount::Price;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::purchase_modal::PurchaseModal;

/// Lists the catalog packs and owns the purchase dialog's open/close state.
#[component]
pub fn StoreScreen() -> Element {
    // Parsed once per mount. The error is stringified because serde_json errors aren't Clone.
    let packs = use_hook(|| catalog::default_catalog().map_err(|e| e.to_string()));
    let mut selected = use_signal(|| None::<PackData>);
    let mut is_open = use_signal(|| false);

    let packs = match packs {
        Ok(packs) => packs,
        Err(e) => {
            return rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load packs: {e}" }
                }
            };
        }
    };

    // The dialog stays mounted for the last chosen pack, so its local state
    // survives a close and reopen of the same pack.
    let dialog = selected().map(|pack| {
        rsx! {
            PurchaseModal {
                is_open: is_open(),
                on_close: move |_| is_open.set(false),
                pack,
            }
        }
    });

    rsx! {
        Card {
            h3 { "Packs" }
            div {
                class: "pack-grid",
                {
                    packs.into_iter().map(|pack| {
                        let chosen = pack.clone();
                        rsx! {
                            article {
                                key: "{pack.name()}",
                                class: "pack-card",
                                img { src: "{pack.image()}", alt: "{pack.name()}" }
                                h4 { "{pack.name()}" }
                                p {
                                    Price { amount: pack.price() }
                                    " × {pack.quantity()}"
                                }
                                Button {
                                    class: "gradient wide",
                                    on_click: move |_| {
                                        selected.set(Some(chosen.clone()));
                                        is_open.set(true);
                                    },
                                    "Buy"
                                }
                            }
                        }
                    })
                }
            }
        }

        {dialog}
    }
}
