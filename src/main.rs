fn main() {
    hubble_installer::app::cli::run();
}
