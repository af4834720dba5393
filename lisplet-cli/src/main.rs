fn main() {
    lisplet_cli::run()
}
