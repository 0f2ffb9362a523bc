fn main() {
    std::process::exit(wsp_cli::run());
}
