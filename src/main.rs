fn main() {
    consulting_site::run();
}
