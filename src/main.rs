fn main() {
    gto_agent::cli::run();
}
