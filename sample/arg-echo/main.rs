use std::env::args;

pub fn main() {
    for arg in args().skip(1) {
        println!("{}", arg);
    }
}
