// DNAVault Landing Page (Leptos 0.8)
// Developed by the DNAVault Team (c)2025

fn main() {
    dnavault_landing::mount();
}
