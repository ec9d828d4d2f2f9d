fn main() {
    mjcuadrado_net_sdk::app::cli::run();
}
