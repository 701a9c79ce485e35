fn main() {
    // Enables `doc_auto_cfg` on nightly so the Windows backend shows its feature gate on docs.rs
    #[rustversion::nightly]
    fn set_nightly_cfg() {
        println!("cargo:rustc-cfg=nightly")
    }
    #[rustversion::not(nightly)]
    fn set_nightly_cfg() {}

    set_nightly_cfg();
    println!("cargo::rustc-check-cfg=cfg(nightly)");
}
