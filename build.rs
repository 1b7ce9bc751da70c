use std::path::PathBuf;

fn main() {
    let bridges = vec!["src/bridge.rs"];
    for path in &bridges {
        println!("cargo:rerun-if-changed={path}");
    }

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    swift_bridge_build::parse_bridges(bridges)
        .write_all_concatenated(out_dir.join("swift"), env!("CARGO_PKG_NAME"));
}
