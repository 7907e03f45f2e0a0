fn main() {
    dioxus::launch(samples_web::App);
}
