//! A component for displaying payment amounts.

use api::amount::Amount;
use dioxus::prelude::*;

/// Displays an amount as en-US currency text ("$30.00"). The tooltip always
/// carries the currency code, since "$" alone doesn't say which dollar.
#[component]
pub fn Price(amount: Amount) -> Element {
    let main_text = amount.to_string_with_symbol();
    let tooltip_text = amount.to_string_with_code();

    rsx! {
        span {
            title: "{tooltip_text}",
            "{main_text}"
        }
    }
}
