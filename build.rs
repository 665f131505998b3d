fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
    println!("cargo:rerun-if-env-changed=ZT_API_BASE_URL");
    println!("cargo:rerun-if-env-changed=ZT_LOG_LEVEL");

    built::write_built_file().expect("Failed to acquire build-time information");
}
