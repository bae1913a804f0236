/// Handle `tgit version`.
pub fn handle_version() {
    println!("tgit {}", env!("CARGO_PKG_VERSION"));
    println!("build date: {}", env!("TGIT_BUILD_DATE"));
}
