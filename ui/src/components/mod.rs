//! Shared components. The pico module holds framework-level building blocks;
//! the rest make up the checkout flow.
pub mod amount;
pub mod pico;
pub mod purchase_modal;
pub mod purchase_success_modal;
