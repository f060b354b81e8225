fn main() {
    ecoleta_web::run();
}
