#[cfg(all(feature = "csr", target_arch = "wasm32"))]
fn main() {
    hortas_ui::start();
}

#[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
fn main() {}
