fn main() {
    go_fishing::game::run();
}
