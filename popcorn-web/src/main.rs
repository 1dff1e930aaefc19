fn main() {
    dioxus::launch(popcorn_web::App);
}
