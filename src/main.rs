fn main() {
    resto_menu::start();
}
