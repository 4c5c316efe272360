// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
mod screens;

use api::config::CheckoutConfig;
use components::pico::Container;
use screens::store::StoreScreen;

pub use components::purchase_modal::Checkout;
pub use components::purchase_modal::PurchaseModal;
pub use components::purchase_modal::SuccessAction;
pub use components::purchase_success_modal::PurchaseSuccessModal;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let checkout_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    /* --- MODAL FRAME --- */
    .modal-root {
        position: fixed;
        inset: 0;
        z-index: 50;
        display: flex;
        align-items: flex-end;
        justify-content: center;
    }
    .modal-backdrop {
        position: absolute;
        inset: 0;
        background: rgba(0, 0, 0, 0.6);
        backdrop-filter: blur(2.5px);
    }
    .modal-panel {
        position: relative;
        width: 100%;
        height: 92vh;
        overflow-y: auto;
        margin: 0;
        padding: 0;
        background: #1D1D1D;
        border: 1px solid #2A2A2A;
        border-radius: 1rem 1rem 0 0;
        box-shadow: 0 3px 10px rgba(0,0,0,0.10), 0 17px 50px rgba(0,0,0,0.15);
    }
    .modal-header {
        position: sticky;
        top: 0;
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 0 1rem;
        background: #1D1D1D;
        border-bottom: 1px solid #2A2A2A;
    }
    .modal-header h2 { margin: 1rem 0; font-size: 1.25rem; }
    .modal-close {
        width: 2rem;
        height: 2rem;
        padding: 0;
        border: none;
        background: transparent;
        color: #4A5565;
    }
    .modal-close:hover { color: white; }
    .modal-actions { display: flex; justify-content: flex-end; gap: 1rem; padding: 1rem; }

    /* --- CHECKOUT LAYOUT --- */
    .purchase-content { display: flex; flex-direction: column; gap: 1.5rem; padding: 1rem; }
    .payment-pane, .summary-pane { display: flex; flex-direction: column; gap: 1rem; }
    .summary-pane { order: -1; }
    .pane-title { display: flex; align-items: center; gap: 0.75rem; }
    .currency-option {
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 0 1rem;
        height: 4.5rem;
        border-radius: 14px;
        border: 2px solid #E04548;
        background: rgba(224, 69, 72, 0.05);
    }
    .currency-badge { display: flex; align-items: center; gap: 0.75rem; }
    .currency-icon {
        display: flex;
        align-items: center;
        justify-content: center;
        width: 2rem;
        height: 2rem;
        border-radius: 50%;
        background: #2775CA;
        font-weight: bold;
    }
    .currency-name { display: flex; flex-direction: column; }
    .currency-check { color: #E04548; }
    .balance-box { padding: 1rem; border-radius: 0.75rem; background: #252525; border: 1px solid #2A2A2A; }
    .summary-row { display: flex; justify-content: space-between; gap: 1rem; }
    .shortfall { color: #E04548; padding-top: 0.5rem; border-top: 1px solid #2A2A2A; }
    .shortfall-hint { text-align: center; color: #6A7282; font-size: 0.875rem; }
    .muted { color: #939BAA; }
    .points { color: #10B981; font-weight: 500; }
    .pack-row { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem; border: 1px solid #2A2A2A; border-radius: 0.75rem; }
    .pack-info { display: flex; align-items: center; gap: 0.75rem; }
    .pack-thumb { display: flex; align-items: center; justify-content: center; width: 3rem; height: 3rem; border-radius: 0.75rem; background: #3E474C; overflow: hidden; }
    .pack-text { display: flex; flex-direction: column; }
    .totals { display: flex; flex-direction: column; gap: 0.5rem; padding-top: 0.75rem; border-top: 1px solid #2A2A2A; }
    .total { padding-top: 0.5rem; border-top: 1px solid #2A2A2A; }
    .promo-row { display: flex; gap: 0.375rem; padding-top: 0.75rem; border-top: 1px solid #2A2A2A; }
    .promo-row input { flex: 1; min-width: 0; margin: 0; }
    .promo-row button { flex-shrink: 0; }

    /* --- BUTTONS --- */
    button.gradient { border: none; background: linear-gradient(to right, #B71959, #E04548); }
    button.gradient:hover { opacity: 0.9; }
    button.wide { width: 100%; }

    /* --- STORE --- */
    .pack-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(12rem, 1fr)); gap: 1rem; }
    .pack-card img { width: 100%; aspect-ratio: 3 / 4; object-fit: contain; }

    /* --- Larger Screens --- */
    @media (min-width: 640px) {
        .modal-root { align-items: center; padding: 1rem; }
        .modal-panel { max-width: 37.5rem; height: auto; max-height: 90vh; border-radius: 2rem; }
    }
    @media (min-width: 1024px) {
        .modal-panel { max-width: 53.5rem; }
        .purchase-content { flex-direction: row; gap: 2rem; }
        .payment-pane { flex: 1; }
        .summary-pane { width: 18.75rem; order: 1; }
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Link {
            rel: "stylesheet",
            href: "{PICO_CSS}",
        }
        style {
            "{checkout_css}"
        }
        AppBody {}
    }
}

/// Provides the checkout settings and shows the store.
#[component]
fn AppBody() -> Element {
    use_context_provider(CheckoutConfig::default);

    rsx! {
        Container {
            header {
                nav {
                    ul {
                        li { strong { "Pack Store" } }
                    }
                }
            }
            div {
                class: "content",
                StoreScreen {}
            }
        }
    }
}
