fn main() {
    repoenv::app::cli::run();
}
