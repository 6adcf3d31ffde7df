fn main() {
    ocean_cleanup::game::run();
}
