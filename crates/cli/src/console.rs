//! Terminal implementations of the storefront presentation traits.

use sundial_storefront::{CartSurface, Notifier};

/// Notifier that prints toasts and alerts to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    #[allow(clippy::print_stdout)]
    fn notify(&self, message: &str) {
        println!("{message}");
    }

    #[allow(clippy::print_stderr)]
    fn alert(&self, message: &str) {
        eprintln!("! {message}");
    }
}

/// Presentation surface that prints the cart projection to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSurface;

impl CartSurface for ConsoleSurface {
    #[allow(clippy::print_stdout)]
    fn show_count(&mut self, count: usize) {
        println!("Items: {count}");
    }

    #[allow(clippy::print_stdout)]
    fn show_total(&mut self, total: &str) {
        println!("Total: {total}");
    }

    #[allow(clippy::print_stdout)]
    fn show_items(&mut self, items_html: &str) {
        println!("{items_html}");
    }
}
