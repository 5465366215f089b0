fn main() {
    scopegen::cli::run();
}
