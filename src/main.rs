fn main() {
    arcane_arena::game::run();
}
