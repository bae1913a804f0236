fn main() {
    // Stamp the build date for `tgit version`.
    let build_date = chrono::Utc::now().format("%Y-%m-%d").to_string();
    println!("cargo:rustc-env=TGIT_BUILD_DATE={}", build_date);
}
