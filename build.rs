fn main() {
    println!("cargo:rerun-if-env-changed=FIREBASE_HOST");
    println!("cargo:rerun-if-env-changed=FIREBASE_AUTH");

    // Only the ESP-IDF build needs the toolchain environment exported.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
