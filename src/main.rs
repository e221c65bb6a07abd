//! Trunk binary entry point.

fn main() {
    #[cfg(feature = "csr")]
    visa_navigator::start();
}
