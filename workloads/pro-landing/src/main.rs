fn main() {
    pro_landing::mount();
}
